use std::sync::Arc;

use cents_backend::{app, config::Config, jobs, services::MySqlStore, services::Store, AppState};

#[tokio::main]
async fn main() {
    // Initialize basic tracing subscriber
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::load().expect("Failed to load configuration");

    // Connect to MySQL and bootstrap the schema
    let store: Arc<dyn Store> = Arc::new(
        MySqlStore::connect(&config.database)
            .await
            .expect("Failed to connect to MySQL"),
    );
    tracing::info!("Connected to MySQL database");

    // Periodic keep-alive ping so an idle connection is not dropped
    tokio::spawn(jobs::keep_alive_task(
        store.clone(),
        config.keepalive.interval_secs,
    ));

    let app = app(AppState {
        store,
        session_ttl_secs: config.session.ttl_secs,
    });

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.server.host, config.server.port))
            .await
            .expect("Failed to bind server");

    tracing::info!(
        "Server running on {}:{}",
        config.server.host,
        config.server.port
    );

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Failed to start server");
}
