use serde::Deserialize;
use serde_json::{Value, json};

use workboard_applications::Application;
use workboard_identities::Identity;
use workboard_jobs::{JobDraft, JobPosting};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateJobRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<String>,
    pub salary: Option<String>,
    pub category: Option<String>,
}

impl From<CreateJobRequest> for JobDraft {
    fn from(req: CreateJobRequest) -> Self {
        JobDraft {
            title: req.title,
            description: req.description,
            company: req.company,
            location: req.location,
            job_type: req.job_type,
            salary: req.salary,
            category: req.category,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyRequest {
    pub job_id: Option<String>,
    pub resume: Option<String>,
    pub cover_letter: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub applicant_profile: Option<Value>,
    pub company_profile: Option<Value>,
}

// -------------------------
// Response mapping (wire format is camelCase, matching the reference API)
// -------------------------

/// Public user fields, as returned by signup/login and embedded in company
/// application listings. Never includes the password hash.
pub fn user_to_json(identity: &Identity) -> Value {
    json!({
        "id": identity.id.to_string(),
        "email": identity.email,
        "name": identity.name,
        "role": identity.role.as_str(),
    })
}

pub fn profile_to_json(identity: &Identity) -> Value {
    json!({
        "id": identity.id.to_string(),
        "email": identity.email,
        "name": identity.name,
        "role": identity.role.as_str(),
        "applicantProfile": identity.applicant_profile.clone().unwrap_or(Value::Null),
        "companyProfile": identity.company_profile.clone().unwrap_or(Value::Null),
    })
}

pub fn job_to_json(job: &JobPosting) -> Value {
    json!({
        "id": job.id.to_string(),
        "title": job.title,
        "description": job.description,
        "company": job.company,
        "location": job.location,
        "type": job.job_type,
        "salary": job.salary,
        "category": job.category,
        "views": job.views,
        "createdBy": job.created_by.to_string(),
        "createdAt": job.created_at.to_rfc3339(),
        "updatedAt": job.updated_at.to_rfc3339(),
    })
}

/// Application wire shape. `job` and `applicant` are identifier strings
/// unless the caller populates them with the referenced records.
pub fn application_to_json(
    application: &Application,
    job: Option<&JobPosting>,
    applicant: Option<&Identity>,
) -> Value {
    let job_value = match job {
        Some(job) => job_to_json(job),
        None => Value::String(application.job.to_string()),
    };
    let applicant_value = match applicant {
        Some(applicant) => user_to_json(applicant),
        None => Value::String(application.applicant.to_string()),
    };

    json!({
        "id": application.id.to_string(),
        "job": job_value,
        "applicant": applicant_value,
        "resume": application.resume,
        "coverLetter": application.cover_letter,
        "status": application.status.as_str(),
        "createdAt": application.created_at.to_rfc3339(),
        "updatedAt": application.updated_at.to_rfc3339(),
    })
}
