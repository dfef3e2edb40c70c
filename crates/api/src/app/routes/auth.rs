use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use serde_json::json;

use workboard_auth::Role;
use workboard_identities::Identity;
use workboard_store::StoreError;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
}

pub async fn signup(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::SignupRequest>,
) -> axum::response::Response {
    let (Some(email), Some(password), Some(role)) = (body.email, body.password, body.role) else {
        return errors::json_error(StatusCode::BAD_REQUEST, "missing_fields", "Missing fields");
    };
    if email.trim().is_empty() || password.is_empty() {
        return errors::json_error(StatusCode::BAD_REQUEST, "missing_fields", "Missing fields");
    }

    let role: Role = match role.parse() {
        Ok(role) => role,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let password_hash = match workboard_auth::hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => return errors::internal_error(e),
    };

    let identity = match Identity::new(&email, password_hash, body.name, role, Utc::now()) {
        Ok(identity) => identity,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let identity = match services.identities.create(identity) {
        Ok(identity) => identity,
        Err(StoreError::Conflict(_)) => {
            return errors::json_error(StatusCode::CONFLICT, "email_in_use", "Email already in use");
        }
        Err(e) => return errors::internal_error(e),
    };

    let token = match services.tokens.issue(identity.id, identity.role, Utc::now()) {
        Ok(token) => token,
        Err(e) => return errors::internal_error(e),
    };

    Json(json!({ "user": dto::user_to_json(&identity), "token": token })).into_response()
}

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::LoginRequest>,
) -> axum::response::Response {
    let (Some(email), Some(password)) = (body.email, body.password) else {
        return errors::json_error(StatusCode::BAD_REQUEST, "missing_fields", "Missing fields");
    };

    // Uniform rejection: unknown email and wrong password are
    // indistinguishable to the caller.
    let invalid_credentials =
        || errors::json_error(StatusCode::UNAUTHORIZED, "invalid_credentials", "Invalid credentials");

    let email = email.trim().to_lowercase();
    let identity = match services.identities.find_by_email(&email) {
        Ok(Some(identity)) => identity,
        Ok(None) => return invalid_credentials(),
        Err(e) => return errors::internal_error(e),
    };

    match workboard_auth::verify_password(&password, &identity.password_hash) {
        Ok(true) => {}
        Ok(false) => return invalid_credentials(),
        Err(e) => return errors::internal_error(e),
    }

    let token = match services.tokens.issue(identity.id, identity.role, Utc::now()) {
        Ok(token) => token,
        Err(e) => return errors::internal_error(e),
    };

    Json(json!({ "user": dto::user_to_json(&identity), "token": token })).into_response()
}
