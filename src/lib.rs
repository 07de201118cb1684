pub mod config;
pub mod errors;
pub mod handlers;
pub mod jobs;
pub mod middleware;
pub mod models;
pub mod services;

use std::sync::Arc;

use axum::{
    middleware::from_fn,
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tower_sessions::{
    cookie::{time::Duration, SameSite},
    Expiry, MemoryStore, SessionManagerLayer,
};

use crate::services::Store;

// Application state shared between handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub session_ttl_secs: u64,
}

pub fn app(state: AppState) -> Router {
    // Session store setup, cookie-carried token. The layer default only
    // applies to anonymous sessions; login pins a fixed, non-renewing
    // deadline per session.
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_name("session")
        .with_expiry(Expiry::OnInactivity(Duration::seconds(
            state.session_ttl_secs as i64,
        )));

    // Routes that require a logged-in session
    let protected = Router::new()
        .route(
            "/api/expenses",
            get(handlers::list_expenses).post(handlers::create_expense),
        )
        .route(
            "/api/expenses/:id",
            put(handlers::update_expense).delete(handlers::delete_expense),
        )
        .route(
            "/api/savings",
            get(handlers::list_savings).post(handlers::create_saving),
        )
        .route(
            "/api/savings/:id",
            put(handlers::update_saving).delete(handlers::delete_saving),
        )
        .route_layer(from_fn(middleware::require_auth));

    Router::new()
        // Auth routes
        .route("/api/register", post(handlers::handle_register))
        .route("/api/login", post(handlers::handle_login))
        .route("/api/logout", post(handlers::handle_logout))
        .route("/api/user", get(handlers::session_probe))
        .route("/api/upgrade", post(handlers::handle_upgrade))
        .merge(protected)
        // Frontend files
        .fallback_service(ServeDir::new("static"))
        // Add middleware
        .layer(session_layer)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        // Add state
        .with_state(state)
}
