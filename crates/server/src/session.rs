use axum::http::{header, HeaderMap, HeaderValue};
use base64::Engine as _;
use chrono::{DateTime, Duration, Utc};
use cookie::Cookie;
use rand::RngCore;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

/// Name of the HttpOnly session cookie.
pub const SESSION_COOKIE: &str = "studyhub_session";

fn cookie_secure() -> bool {
    std::env::var("COOKIE_SECURE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false)
}

/// Generate an opaque 128-bit session token, URL-safe base64 encoded.
fn new_token() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

#[derive(Debug, Clone)]
struct SessionEntry {
    user_id: i64,
    expires_at: DateTime<Utc>,
}

/// In-memory registry of active sessions, keyed by opaque token.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: Mutex<HashMap<String, SessionEntry>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session for the user and return its token.
    pub fn create(&self, user_id: i64, ttl_hours: i64) -> String {
        let token = new_token();
        let entry = SessionEntry {
            user_id,
            expires_at: Utc::now() + Duration::hours(ttl_hours),
        };
        self.sessions
            .lock()
            .expect("session registry lock poisoned")
            .insert(token.clone(), entry);
        token
    }

    /// Resolve a token to its user id. Expired entries are removed on access.
    pub fn resolve(&self, token: &str) -> Option<i64> {
        let mut sessions = self
            .sessions
            .lock()
            .expect("session registry lock poisoned");
        match sessions.get(token) {
            Some(entry) if entry.expires_at > Utc::now() => Some(entry.user_id),
            Some(_) => {
                sessions.remove(token);
                None
            }
            None => None,
        }
    }

    /// Revoke a session. Unknown tokens are a no-op.
    pub fn revoke(&self, token: &str) {
        self.sessions
            .lock()
            .expect("session registry lock poisoned")
            .remove(token);
    }

    /// Number of live (unexpired) sessions.
    pub fn active_count(&self) -> usize {
        let now = Utc::now();
        self.sessions
            .lock()
            .expect("session registry lock poisoned")
            .values()
            .filter(|e| e.expires_at > now)
            .count()
    }
}

static REGISTRY: OnceLock<SessionRegistry> = OnceLock::new();

/// Global session registry used by server functions.
pub fn registry() -> &'static SessionRegistry {
    REGISTRY.get_or_init(SessionRegistry::new)
}

// ── Cookie handling ────────────────────────────────────

/// Build a Set-Cookie header value for the session token.
pub fn build_session_cookie(token: &str, ttl_hours: i64) -> HeaderValue {
    let cookie = Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(cookie::time::Duration::seconds(ttl_hours * 3600))
        .secure(cookie_secure())
        .build();

    HeaderValue::from_str(&cookie.to_string()).expect("cookie header value should be valid")
}

/// Build a Set-Cookie header value that clears the session cookie.
pub fn build_clear_cookie() -> HeaderValue {
    let cookie = Cookie::build((SESSION_COOKIE, ""))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(cookie::time::Duration::ZERO)
        .build();

    HeaderValue::from_str(&cookie.to_string()).expect("clear cookie should be valid")
}

/// Extract the session token from request cookies.
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    for header_value in headers.get_all(header::COOKIE) {
        if let Ok(cookie_str) = header_value.to_str() {
            for piece in cookie_str.split(';') {
                if let Ok(c) = Cookie::parse(piece.trim().to_string()) {
                    if c.name() == SESSION_COOKIE {
                        return Some(c.value().to_string());
                    }
                }
            }
        }
    }
    None
}

// ── Cookie scheduling ──────────────────────────────────

/// Pending cookie action to be applied by the session middleware.
#[derive(Clone, Debug)]
pub enum PendingCookieAction {
    Set { token: String, ttl_hours: i64 },
    Clear,
}

/// Shared slot for server functions to communicate cookie actions to the
/// middleware. Stored in request extensions as `Arc<Mutex<..>>`.
#[derive(Clone, Debug, Default)]
pub struct CookieSlot(pub Arc<Mutex<Option<PendingCookieAction>>>);

/// Schedule the session cookie to be set by the middleware.
/// Called from server functions — reads the CookieSlot from FullstackContext extensions.
pub fn schedule_session_cookie(token: &str, ttl_hours: i64) {
    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let parts = ctx.parts_mut();
        if let Some(slot) = parts.extensions.get::<CookieSlot>() {
            *slot.0.lock().expect("cookie slot lock poisoned") = Some(PendingCookieAction::Set {
                token: token.to_string(),
                ttl_hours,
            });
        }
    }
}

/// Schedule the session cookie to be cleared by the middleware.
pub fn schedule_clear_cookie() {
    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let parts = ctx.parts_mut();
        if let Some(slot) = parts.extensions.get::<CookieSlot>() {
            *slot.0.lock().expect("cookie slot lock poisoned") = Some(PendingCookieAction::Clear);
        }
    }
}
