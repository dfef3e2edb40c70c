use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;

use workboard_core::JobId;
use workboard_jobs::JobPosting;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::AuthContext;

pub fn public_router() -> Router {
    Router::new()
        .route("/jobs", get(list_jobs))
        .route("/jobs/:id/view", post(record_view))
}

pub fn protected_router() -> Router {
    Router::new().route("/jobs", post(create_job))
}

pub async fn list_jobs(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.jobs.list() {
        Ok(jobs) => {
            let items: Vec<_> = jobs.iter().map(dto::job_to_json).collect();
            Json(items).into_response()
        }
        Err(e) => errors::internal_error(e),
    }
}

/// Unauthenticated view-counter bump, once per detail-page load.
pub async fn record_view(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let job_id: JobId = match id.parse() {
        Ok(id) => id,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.jobs.record_view(job_id, Utc::now()) {
        Ok(Some(job)) => Json(dto::job_to_json(&job)).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "Job not found"),
        Err(e) => errors::internal_error(e),
    }
}

pub async fn create_job(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(auth): Extension<AuthContext>,
    Json(body): Json<dto::CreateJobRequest>,
) -> axum::response::Response {
    // `created_by` comes from the token, never from the body.
    let job = match JobPosting::new(body.into(), auth.user_id(), Utc::now()) {
        Ok(job) => job,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.jobs.create(job) {
        Ok(job) => (StatusCode::CREATED, Json(dto::job_to_json(&job))).into_response(),
        Err(e) => errors::internal_error(e),
    }
}
