use dioxus::prelude::*;
use shared_types::{AuthUser, Role};
use std::collections::HashMap;

/// Session key holding the signed-in user's email.
pub const USER_EMAIL_KEY: &str = "userEmail";

/// Session key holding the signed-in user's role string.
pub const USER_ROLE_KEY: &str = "userRole";

/// The minimal identity the route guard operates on.
///
/// Reconstructed from the session snapshot on every read — nothing about a
/// guard decision is cached between navigations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub email: String,
    pub role: Role,
}

/// Resolve a user from raw session values.
///
/// Returns `Some` only when both keys are present and non-empty. A role
/// string that parses to nothing becomes `Role::Unknown` — still an
/// authenticated user, just one without a specific landing page.
pub fn resolve_user(values: &HashMap<String, String>) -> Option<SessionUser> {
    let email = values.get(USER_EMAIL_KEY).filter(|v| !v.is_empty())?;
    let role = values.get(USER_ROLE_KEY).filter(|v| !v.is_empty())?;
    Some(SessionUser {
        email: email.clone(),
        role: Role::from_str_or_default(role),
    })
}

/// Session-scoped key/value state, provided once at app start.
///
/// Populated from the server session on hydration and by login, cleared on
/// logout. The guard never reads this directly — it takes the resolved
/// [`SessionUser`] as a parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionStore {
    values: Signal<HashMap<String, String>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            values: Signal::new(HashMap::new()),
        }
    }

    /// The auth accessor: `Some` only when both session keys are set.
    pub fn current_user(&self) -> Option<SessionUser> {
        resolve_user(&self.values.read())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    /// Write the session keys for a signed-in user.
    pub fn set_user(&mut self, user: &AuthUser) {
        let mut values = HashMap::new();
        values.insert(USER_EMAIL_KEY.to_string(), user.email.clone());
        values.insert(USER_ROLE_KEY.to_string(), user.role.clone());
        self.values.set(values);
    }

    /// Teardown on logout: drop every session key.
    pub fn clear(&mut self) {
        self.values.set(HashMap::new());
    }
}

/// Hook to access the session store.
pub fn use_session() -> SessionStore {
    use_context::<SessionStore>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn resolves_when_both_keys_present() {
        let user = resolve_user(&values(&[
            (USER_EMAIL_KEY, "jenna@studyhub.edu"),
            (USER_ROLE_KEY, "student"),
        ]))
        .unwrap();
        assert_eq!(user.email, "jenna@studyhub.edu");
        assert_eq!(user.role, Role::Student);
    }

    #[test]
    fn missing_either_key_is_unauthenticated() {
        assert_eq!(resolve_user(&values(&[])), None);
        assert_eq!(
            resolve_user(&values(&[(USER_EMAIL_KEY, "jenna@studyhub.edu")])),
            None
        );
        assert_eq!(resolve_user(&values(&[(USER_ROLE_KEY, "student")])), None);
    }

    #[test]
    fn empty_values_are_unauthenticated() {
        assert_eq!(
            resolve_user(&values(&[
                (USER_EMAIL_KEY, ""),
                (USER_ROLE_KEY, "student"),
            ])),
            None
        );
        assert_eq!(
            resolve_user(&values(&[
                (USER_EMAIL_KEY, "jenna@studyhub.edu"),
                (USER_ROLE_KEY, ""),
            ])),
            None
        );
    }

    #[test]
    fn unrecognized_role_resolves_to_unknown() {
        let user = resolve_user(&values(&[
            (USER_EMAIL_KEY, "someone@studyhub.edu"),
            (USER_ROLE_KEY, "superuser"),
        ]))
        .unwrap();
        assert_eq!(user.role, Role::Unknown);
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        let mut map = values(&[
            (USER_EMAIL_KEY, "jenna@studyhub.edu"),
            (USER_ROLE_KEY, "ta"),
        ]);
        map.insert("theme".to_string(), "campus".to_string());
        let user = resolve_user(&map).unwrap();
        assert_eq!(user.role, Role::Ta);
    }
}
