mod auth;

pub use auth::{require_auth, CurrentUser, SESSION_USER_KEY};
