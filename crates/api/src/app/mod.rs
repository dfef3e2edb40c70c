//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: infrastructure wiring (stores, token codec)
//! - `routes/`: HTTP routes + handlers (one file per domain area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(jwt_secret: &str) -> Router {
    let services = Arc::new(services::build_services(jwt_secret));
    let auth_state = middleware::AuthState {
        jwt: services.tokens.clone(),
    };

    let public = routes::public_router().layer(Extension(Arc::clone(&services)));

    // Protected routes: require a valid bearer token.
    let protected = routes::protected_router()
        .layer(Extension(services))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::auth_middleware,
        ));

    Router::new().merge(public).merge(protected)
}
