use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::Utc;

use workboard_identities::ProfileUpdate;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::AuthContext;

pub fn router() -> Router {
    Router::new().route("/profile", get(get_profile).put(update_profile))
}

pub async fn get_profile(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(auth): Extension<AuthContext>,
) -> axum::response::Response {
    match services.identities.get(auth.user_id()) {
        Ok(Some(identity)) => Json(dto::profile_to_json(&identity)).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "User not found"),
        Err(e) => errors::internal_error(e),
    }
}

pub async fn update_profile(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(auth): Extension<AuthContext>,
    Json(body): Json<dto::UpdateProfileRequest>,
) -> axum::response::Response {
    let update = ProfileUpdate {
        name: body.name,
        applicant_profile: body.applicant_profile,
        company_profile: body.company_profile,
    };

    match services.identities.update_profile(auth.user_id(), update, Utc::now()) {
        Ok(Some(identity)) => Json(dto::profile_to_json(&identity)).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "User not found"),
        Err(e) => errors::internal_error(e),
    }
}
