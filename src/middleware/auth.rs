use axum::{
    body::Body,
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_sessions::Session;

use crate::errors::AppError;

/// Session key holding the authenticated user's id.
pub const SESSION_USER_KEY: &str = "user_id";

/// Authenticated user id, attached to the request by [`require_auth`].
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(pub i64);

/// Auth guard for protected routes. A valid session binding lets the request
/// continue with the user id in its extensions; anything else short-circuits
/// with 401 and no side effects.
pub async fn require_auth(session: Session, mut req: Request<Body>, next: Next) -> Response {
    match session.get::<i64>(SESSION_USER_KEY).await {
        Ok(Some(user_id)) => {
            req.extensions_mut().insert(CurrentUser(user_id));
            next.run(req).await
        }
        _ => AppError::Unauthorized.into_response(),
    }
}
