use dioxus::prelude::*;
use shared_types::{
    AuthUser, ChatMessage, Course, DashboardStats, EnrolledCourse, Enrollment,
    TeachingAssignment, User,
};

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

#[cfg(feature = "server")]
use crate::store::store;

#[cfg(feature = "server")]
use shared_types::{AppError, Role};

/// Simulated round-trip latency for the placeholder chat assistant.
#[cfg(feature = "server")]
const CHAT_REPLY_DELAY_MS: u64 = 400;

// ── Auth helpers for server functions ──────────────────

/// Extract and validate the caller's identity from the current request.
/// Resolves the session cookie against the registry and loads the user.
/// Returns the AuthUser or an "Authentication required" error.
#[cfg(feature = "server")]
async fn require_auth() -> Result<AuthUser, ServerFnError> {
    use crate::session;

    let ctx = dioxus::fullstack::FullstackContext::current()
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())?;
    let headers = ctx.parts_mut().headers.clone();

    let token = session::extract_session_token(&headers)
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())?;

    let user_id = session::registry()
        .resolve(&token)
        .ok_or_else(|| AppError::unauthorized("Session expired").into_server_fn_error())?;

    match store().read().await.auth_user(user_id) {
        Some(user) => Ok(user),
        None => {
            // Session references a user that no longer exists.
            session::registry().revoke(&token);
            session::schedule_clear_cookie();
            tracing::warn!(user_id, "session references non-existent user, clearing");
            Err(AppError::unauthorized("Authentication required").into_server_fn_error())
        }
    }
}

/// Require the caller to be authenticated with the given role.
#[cfg(feature = "server")]
async fn require_role(required: Role) -> Result<AuthUser, ServerFnError> {
    let user = require_auth().await?;
    if user.role() != required {
        return Err(
            AppError::forbidden(format!("{} role required", required.display_name()))
                .into_server_fn_error(),
        );
    }
    Ok(user)
}

// ── Auth ───────────────────────────────────────────────

/// Login with email and password. Sets the HttpOnly session cookie on success.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn login(email: String, password: String) -> Result<AuthUser, ServerFnError> {
    use crate::session;
    use shared_types::LoginRequest;

    let req = LoginRequest {
        email: email.clone(),
        password: password.clone(),
    };
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let user = store()
        .read()
        .await
        .authenticate(&email, &password)
        .map_err(|e| e.into_server_fn_error())?;

    let ttl_hours = crate::config::config().session_ttl_hours;
    let token = session::registry().create(user.id, ttl_hours);
    session::schedule_session_cookie(&token, ttl_hours);

    tracing::info!(user_id = user.id, "login succeeded");
    Ok(user)
}

/// Log out: revoke the session and clear the cookie.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    use crate::session;

    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let headers = ctx.parts_mut().headers.clone();
        if let Some(token) = session::extract_session_token(&headers) {
            session::registry().revoke(&token);
        }
    }
    session::schedule_clear_cookie();
    Ok(())
}

/// Resolve the current session, if any. Returns None for anonymous callers
/// rather than erroring, so layouts can branch on it.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_current_user() -> Result<Option<AuthUser>, ServerFnError> {
    use crate::session;

    let Some(ctx) = dioxus::fullstack::FullstackContext::current() else {
        return Ok(None);
    };
    let headers = ctx.parts_mut().headers.clone();
    let Some(token) = session::extract_session_token(&headers) else {
        return Ok(None);
    };
    let Some(user_id) = session::registry().resolve(&token) else {
        session::schedule_clear_cookie();
        return Ok(None);
    };

    match store().read().await.auth_user(user_id) {
        Some(user) => Ok(Some(user)),
        None => {
            session::registry().revoke(&token);
            session::schedule_clear_cookie();
            Ok(None)
        }
    }
}

// ── Catalog ────────────────────────────────────────────

/// List the full course catalog. Filtering and search happen client-side.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_courses() -> Result<Vec<Course>, ServerFnError> {
    require_auth().await?;
    Ok(store().read().await.list_courses())
}

/// Get a single course by id.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_course(course_id: i64) -> Result<Course, ServerFnError> {
    require_auth().await?;
    store()
        .read()
        .await
        .get_course(course_id)
        .map_err(|e| e.into_server_fn_error())
}

// ── Enrollment ─────────────────────────────────────────

/// Enroll the caller in a course.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn enroll(course_id: i64) -> Result<Enrollment, ServerFnError> {
    let user = require_auth().await?;
    let enrollment = store()
        .write()
        .await
        .enroll(user.id, course_id)
        .map_err(|e| e.into_server_fn_error())?;
    tracing::info!(user_id = user.id, course_id, "enrolled");
    Ok(enrollment)
}

/// Drop the caller's active enrollment in a course.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn drop_course(course_id: i64) -> Result<Enrollment, ServerFnError> {
    let user = require_auth().await?;
    let enrollment = store()
        .write()
        .await
        .drop_course(user.id, course_id)
        .map_err(|e| e.into_server_fn_error())?;
    tracing::info!(user_id = user.id, course_id, "dropped");
    Ok(enrollment)
}

/// The caller's active enrollments, joined with their courses.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn my_enrollments() -> Result<Vec<EnrolledCourse>, ServerFnError> {
    let user = require_auth().await?;
    Ok(store().read().await.enrollments_for(user.id))
}

/// Courses the caller assists, with live enrollment counts.
/// Empty for users without assignments.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn teaching_assignments() -> Result<Vec<TeachingAssignment>, ServerFnError> {
    let user = require_auth().await?;
    Ok(store().read().await.teaching_assignments(user.id))
}

// ── Admin ──────────────────────────────────────────────

/// Aggregated dashboard statistics. Requires the admin role.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_dashboard_stats() -> Result<DashboardStats, ServerFnError> {
    require_role(Role::Admin).await?;
    Ok(store().read().await.stats())
}

/// List all users. Requires the admin role.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_users() -> Result<Vec<User>, ServerFnError> {
    require_role(Role::Admin).await?;
    Ok(store().read().await.list_users())
}

// ── Chat ───────────────────────────────────────────────

/// Send a message to the support chat and receive the placeholder reply.
///
/// There is no real assistant behind this endpoint: it waits a moment and
/// returns a canned response.
#[cfg_attr(feature = "server", tracing::instrument(skip(body)))]
#[server]
pub async fn send_chat_message(body: String) -> Result<ChatMessage, ServerFnError> {
    require_auth().await?;

    if body.trim().is_empty() {
        return Err(AppError::bad_request("Message cannot be empty").into_server_fn_error());
    }

    tokio::time::sleep(std::time::Duration::from_millis(CHAT_REPLY_DELAY_MS)).await;

    Ok(ChatMessage::assistant(
        "Thanks for reaching out! A member of the StudyHub team will get back to you soon.",
        chrono::Utc::now().to_rfc3339(),
    ))
}
