use axum::{routing::get, Router};

pub mod home;
pub mod signup;
pub mod system;

/// Router for all page endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/", get(home::index))
        .route("/index", get(home::index))
        .route("/signup", get(signup::form).post(signup::submit))
}
