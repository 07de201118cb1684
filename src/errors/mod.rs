// Defines a custom error type and a result type alias using the thiserror crate.
use thiserror::Error;

pub mod response;

#[derive(Error, Debug)]
pub enum AppError {
    // Bad credentials at login
    #[error("{0}")]
    Unauthenticated(String),

    // Missing or expired session on a protected route
    #[error("Unauthorized")]
    Unauthorized,

    // Duplicate username at registration
    #[error("Username taken")]
    Conflict,

    // The #[from] attribute automatically converts a sqlx::Error into an AppError::Database using the From trait.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("Password hash error: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

// Custom result type
pub type AppResult<T> = Result<T, AppError>;
