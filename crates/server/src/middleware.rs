use axum::extract::Request;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use crate::session::{self, CookieSlot, PendingCookieAction};

/// Session middleware for the fullstack router.
///
/// On each request:
/// 1. Inserts a `CookieSlot` so server functions can schedule cookie changes
/// 2. After the handler runs, applies any pending cookie action to the response
///
/// Does NOT reject unauthenticated requests — server functions decide
/// authorization themselves.
pub async fn session_middleware(mut req: Request, next: Next) -> Response {
    let cookie_slot = CookieSlot::default();
    req.extensions_mut().insert(cookie_slot.clone());

    let mut response = next.run(req).await;

    let action = cookie_slot
        .0
        .lock()
        .expect("cookie slot lock poisoned")
        .take();
    match action {
        Some(PendingCookieAction::Set { token, ttl_hours }) => {
            response.headers_mut().append(
                header::SET_COOKIE,
                session::build_session_cookie(&token, ttl_hours),
            );
        }
        Some(PendingCookieAction::Clear) => {
            response
                .headers_mut()
                .append(header::SET_COOKIE, session::build_clear_cookie());
        }
        None => {}
    }

    response
}
