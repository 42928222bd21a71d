use dioxus::prelude::*;
use shared_types::{AuthUser, Role};

use crate::session::use_session;

/// Global authentication state: the rich profile used for display
/// (name, avatar). Authorization decisions go through the session
/// store's [`crate::session::SessionUser`] instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<AuthUser>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn set_user(&mut self, user: AuthUser) {
        self.current_user.set(Some(user));
    }

    pub fn clear_auth(&mut self) {
        self.current_user.set(None);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// The current user's role, computed from the session snapshot.
/// `Unknown` when unauthenticated or the stored role is unrecognized.
pub fn use_user_role() -> Role {
    use_session()
        .current_user()
        .map(|u| u.role)
        .unwrap_or(Role::Unknown)
}

/// Display name for the navbar, falling back to a guest label.
pub fn use_display_name() -> Memo<String> {
    let auth = use_auth();
    use_memo(move || {
        auth.current_user
            .read()
            .as_ref()
            .map(|u| u.display_name.clone())
            .unwrap_or_else(|| "Guest".to_string())
    })
}
