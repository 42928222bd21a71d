use serde::{Deserialize, Serialize};

/// Default landing path for roles without a specific dashboard.
pub const FALLBACK_LANDING_PATH: &str = "/dashboard";

/// StudyHub user role controlling navigation and view access.
///
/// - `Student` — can browse the catalog, enroll, and see their courses.
/// - `Ta` — teaching assistant; sees assigned courses alongside their own.
/// - `Admin` — full access, including user management.
/// - `Unknown` — authenticated session with an unrecognized role string.
///   Treated as "no specific landing page", never as an error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Role {
    Admin,
    Ta,
    #[default]
    Student,
    Unknown,
}

impl Role {
    /// Parse a role string from session state. Unknown values map to
    /// `Role::Unknown` rather than failing.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "admin" => Role::Admin,
            "ta" => Role::Ta,
            "student" => Role::Student,
            _ => Role::Unknown,
        }
    }

    /// Lowercase string for session storage and DTOs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Ta => "ta",
            Role::Student => "student",
            Role::Unknown => "unknown",
        }
    }

    /// Default dashboard route for this role.
    ///
    /// `Unknown` falls back to the generic dashboard so a malformed role
    /// in storage still lands somewhere sensible.
    pub fn landing_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin/dashboard",
            Role::Ta => "/ta/dashboard",
            Role::Student => "/student/dashboard",
            Role::Unknown => FALLBACK_LANDING_PATH,
        }
    }

    /// Human-readable name for badges and headers.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Ta => "Teaching Assistant",
            Role::Student => "Student",
            Role::Unknown => "Member",
        }
    }
}

/// A user row as listed in the admin user table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub display_name: String,
    pub role: String,
    pub created_at: String,
}

/// Authenticated user info (safe to send to the client).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
    pub display_name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl AuthUser {
    /// Typed role, parsing the loosely-typed wire string.
    pub fn role(&self) -> Role {
        Role::from_str_or_default(&self.role)
    }
}

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 8, message = "Password must be at least 8 characters"))
    )]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_from_str_known_values() {
        assert_eq!(Role::from_str_or_default("admin"), Role::Admin);
        assert_eq!(Role::from_str_or_default("Admin"), Role::Admin);
        assert_eq!(Role::from_str_or_default("TA"), Role::Ta);
        assert_eq!(Role::from_str_or_default("student"), Role::Student);
    }

    #[test]
    fn role_from_str_unknown_values() {
        assert_eq!(Role::from_str_or_default(""), Role::Unknown);
        assert_eq!(Role::from_str_or_default("superuser"), Role::Unknown);
        assert_eq!(Role::from_str_or_default("professor"), Role::Unknown);
    }

    #[test]
    fn role_as_str_roundtrip() {
        for role in [Role::Admin, Role::Ta, Role::Student] {
            assert_eq!(Role::from_str_or_default(role.as_str()), role);
        }
    }

    #[test]
    fn landing_paths_match_role_table() {
        assert_eq!(Role::Admin.landing_path(), "/admin/dashboard");
        assert_eq!(Role::Ta.landing_path(), "/ta/dashboard");
        assert_eq!(Role::Student.landing_path(), "/student/dashboard");
        assert_eq!(Role::Unknown.landing_path(), FALLBACK_LANDING_PATH);
    }

    #[test]
    fn auth_user_role_parses_wire_string() {
        let user = AuthUser {
            id: 1,
            email: "amin@studyhub.edu".into(),
            display_name: "Amin".into(),
            role: "ta".into(),
            avatar_url: None,
        };
        assert_eq!(user.role(), Role::Ta);
    }

    #[test]
    fn auth_user_serialization_roundtrip() {
        let user = AuthUser {
            id: 7,
            email: "dana@studyhub.edu".into(),
            display_name: "Dana".into(),
            role: "admin".into(),
            avatar_url: Some("https://example.com/a.png".into()),
        };
        let json = serde_json::to_string(&user).unwrap();
        let parsed: AuthUser = serde_json::from_str(&json).unwrap();
        assert_eq!(user, parsed);
    }
}
