use axum::{Router, routing::get};

pub mod applications;
pub mod auth;
pub mod jobs;
pub mod profile;
pub mod system;

/// Routes reachable without a bearer token.
pub fn public_router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .merge(auth::router())
        .merge(jobs::public_router())
}

/// Routes behind the authorization gate.
pub fn protected_router() -> Router {
    jobs::protected_router()
        .merge(applications::router())
        .merge(profile::router())
}
