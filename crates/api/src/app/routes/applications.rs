use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, patch, post},
};
use chrono::Utc;
use serde_json::json;

use workboard_applications::{Application, ApplicationStatus};
use workboard_auth::authorize_owner;
use workboard_core::{ApplicationId, DomainError, JobId};
use workboard_store::StoreError;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::AuthContext;

pub fn router() -> Router {
    Router::new()
        .route("/applications", post(apply).get(list_mine))
        .route("/applications/company", get(list_company))
        .route("/applications/:id/status", patch(set_status))
        .route("/applications/:id", delete(withdraw))
}

/// Ownership failure and non-existence are deliberately the same response,
/// so callers cannot probe which application ids exist.
fn application_not_found() -> axum::response::Response {
    errors::json_error(StatusCode::NOT_FOUND, "not_found", "Application not found")
}

/// Applicant: apply to a job.
pub async fn apply(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(auth): Extension<AuthContext>,
    Json(body): Json<dto::ApplyRequest>,
) -> axum::response::Response {
    let Some(job_id) = body.job_id else {
        return errors::json_error(StatusCode::BAD_REQUEST, "missing_fields", "Missing fields");
    };
    let job_id: JobId = match job_id.parse() {
        Ok(id) => id,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let job = match services.jobs.get(job_id) {
        Ok(Some(job)) => job,
        Ok(None) => return errors::json_error(StatusCode::NOT_FOUND, "not_found", "Job not found"),
        Err(e) => return errors::internal_error(e),
    };

    let application = Application::new(
        job_id,
        auth.user_id(),
        body.resume,
        body.cover_letter,
        Utc::now(),
    );

    // The (job, applicant) uniqueness check is atomic inside the store; the
    // loser of a double-submit gets the same 400 as a sequential duplicate.
    match services.applications.create_unique(application) {
        Ok(application) => (
            StatusCode::CREATED,
            Json(json!({
                "application": dto::application_to_json(&application, Some(&job), None)
            })),
        )
            .into_response(),
        Err(StoreError::Conflict(_)) => errors::json_error(
            StatusCode::BAD_REQUEST,
            "already_applied",
            "You have already applied to this job",
        ),
        Err(e) => errors::internal_error(e),
    }
}

/// Get the caller's own applications, job populated, newest first.
pub async fn list_mine(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(auth): Extension<AuthContext>,
) -> axum::response::Response {
    let applications = match services.applications.list_by_applicant(auth.user_id()) {
        Ok(applications) => applications,
        Err(e) => return errors::internal_error(e),
    };

    let mut items = Vec::with_capacity(applications.len());
    for application in &applications {
        let job = match services.jobs.get(application.job) {
            Ok(job) => job,
            Err(e) => return errors::internal_error(e),
        };
        items.push(dto::application_to_json(application, job.as_ref(), None));
    }

    Json(json!({ "applications": items })).into_response()
}

/// Company: applications against the caller's jobs, job + applicant
/// populated, newest first.
pub async fn list_company(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(auth): Extension<AuthContext>,
) -> axum::response::Response {
    let jobs = match services.jobs.list_by_creator(auth.user_id()) {
        Ok(jobs) => jobs,
        Err(e) => return errors::internal_error(e),
    };
    if jobs.is_empty() {
        return Json(json!({ "applications": [] })).into_response();
    }

    let job_ids: Vec<JobId> = jobs.iter().map(|j| j.id).collect();
    let applications = match services.applications.list_by_jobs(&job_ids) {
        Ok(applications) => applications,
        Err(e) => return errors::internal_error(e),
    };

    let mut items = Vec::with_capacity(applications.len());
    for application in &applications {
        let job = jobs.iter().find(|j| j.id == application.job);
        let applicant = match services.identities.get(application.applicant) {
            Ok(applicant) => applicant,
            Err(e) => return errors::internal_error(e),
        };
        items.push(dto::application_to_json(application, job, applicant.as_ref()));
    }

    Json(json!({ "applications": items })).into_response()
}

/// Company: drive the application status lifecycle.
pub async fn set_status(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<String>,
    Json(body): Json<dto::SetStatusRequest>,
) -> axum::response::Response {
    let Some(raw_status) = body.status else {
        return errors::json_error(StatusCode::BAD_REQUEST, "invalid_status", "Invalid status");
    };
    let next: ApplicationStatus = match raw_status.parse() {
        Ok(status) => status,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_status", "Invalid status");
        }
    };

    let application_id: ApplicationId = match id.parse() {
        Ok(id) => id,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let mut application = match services.applications.get(application_id) {
        Ok(Some(application)) => application,
        Ok(None) => return application_not_found(),
        Err(e) => return errors::internal_error(e),
    };

    let job = match services.jobs.get(application.job) {
        Ok(Some(job)) => job,
        Ok(None) => return application_not_found(),
        Err(e) => return errors::internal_error(e),
    };

    if authorize_owner(auth.user_id(), job.created_by).is_err() {
        return application_not_found();
    }

    match application.set_status(next, Utc::now()) {
        Ok(()) => {}
        Err(DomainError::Conflict(msg)) => {
            return errors::json_error(StatusCode::CONFLICT, "invalid_transition", msg);
        }
        Err(e) => return errors::domain_error_to_response(e),
    }

    match services.applications.update(application) {
        Ok(Some(updated)) => Json(json!({
            "application": dto::application_to_json(&updated, Some(&job), None)
        }))
        .into_response(),
        // Withdrawn between the read and the write; report it gone.
        Ok(None) => application_not_found(),
        Err(e) => errors::internal_error(e),
    }
}

/// Applicant: withdraw an application they created, regardless of status.
pub async fn withdraw(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let application_id: ApplicationId = match id.parse() {
        Ok(id) => id,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.applications.remove_owned(application_id, auth.user_id()) {
        Ok(Some(_)) => Json(json!({ "success": true })).into_response(),
        Ok(None) => application_not_found(),
        Err(e) => errors::internal_error(e),
    }
}
