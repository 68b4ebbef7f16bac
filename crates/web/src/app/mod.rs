//! HTTP application wiring (Axum router + service wiring).
//!
//! This folder is structured like:
//! - `services.rs`: store selection and service construction
//! - `routes/`: HTTP routes + handlers (one file per page area)
//! - `dto.rs`: form payloads and mapping into domain requests
//! - `views.rs`: server-rendered HTML pages

use std::sync::Arc;

use axum::{routing::get, Extension, Router};

pub mod dto;
pub mod routes;
pub mod services;
pub mod views;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub async fn build_app() -> Router {
    let services = Arc::new(services::build_services().await);

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(services))
}
