use axum::{extract::State, Json};
use bcrypt::{hash, verify, DEFAULT_COST};
use serde_json::{json, Value};
use tower_sessions::{
    cookie::time::{Duration, OffsetDateTime},
    Expiry, Session,
};

use crate::errors::{AppError, AppResult};
use crate::middleware::SESSION_USER_KEY;
use crate::models::Credentials;
use crate::AppState;

pub async fn handle_register(
    State(state): State<AppState>,
    Json(form): Json<Credentials>,
) -> AppResult<Json<Value>> {
    let password_hash = hash(form.password.as_bytes(), DEFAULT_COST)?;
    state.store.create_user(&form.username, &password_hash).await?;
    tracing::info!("Registered user: {}", form.username);

    // No session is created here; the caller logs in separately
    Ok(Json(json!({ "message": "Success" })))
}

#[axum::debug_handler]
pub async fn handle_login(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<Credentials>,
) -> AppResult<Json<Value>> {
    tracing::debug!("Login attempt for user: {}", form.username);

    let user = state
        .store
        .find_user(&form.username)
        .await?
        .ok_or_else(|| AppError::Unauthenticated("User not found".to_string()))?;

    if !verify(&form.password, &user.password_hash)? {
        return Err(AppError::Unauthenticated("Invalid password".to_string()));
    }

    session.insert(SESSION_USER_KEY, user.id).await?;

    // Fixed expiry window: the deadline is set once here and never renewed,
    // so the session lapses TTL seconds after login regardless of activity
    session.set_expiry(Some(Expiry::AtDateTime(
        OffsetDateTime::now_utc() + Duration::seconds(state.session_ttl_secs as i64),
    )));

    Ok(Json(json!({
        "message": "Login successful",
        "userId": user.id,
        "username": user.username,
        "isPro": user.is_pro,
    })))
}

#[axum::debug_handler]
pub async fn handle_logout(session: Session) -> AppResult<Json<Value>> {
    // Idempotent: flushing an absent session is not an error
    session.flush().await?;
    Ok(Json(json!({ "message": "Logged out" })))
}

/// Read-only session probe. Never fails, even for anonymous callers;
/// a session-store error degrades to `loggedIn: false`.
pub async fn session_probe(session: Session) -> Json<Value> {
    let logged_in = session
        .get::<i64>(SESSION_USER_KEY)
        .await
        .ok()
        .flatten()
        .is_some();
    Json(json!({ "loggedIn": logged_in }))
}

/// Best-effort pro upgrade. The write only happens for callers with a valid
/// session, and a storage failure is logged rather than propagated; the
/// response reports success either way.
pub async fn handle_upgrade(State(state): State<AppState>, session: Session) -> Json<Value> {
    if let Ok(Some(user_id)) = session.get::<i64>(SESSION_USER_KEY).await {
        if let Err(err) = state.store.set_pro(user_id).await {
            tracing::error!("Pro upgrade write failed for user_id={}: {}", user_id, err);
        }
    }
    Json(json!({ "message": "Account upgraded to Pro" }))
}
