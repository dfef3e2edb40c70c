use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use workboard_auth::Role;
use workboard_core::{DomainError, DomainResult, UserId};

/// An authenticated account, either applicant or company role.
///
/// The role is fixed at creation; profile updates never touch it. Passwords
/// are stored hashed only (see `workboard_auth::password`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: UserId,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub role: Role,
    /// Opaque profile blob; the server never inspects its shape.
    pub applicant_profile: Option<serde_json::Value>,
    /// Opaque profile blob; the server never inspects its shape.
    pub company_profile: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial profile update with `$set` semantics: absent fields keep their
/// current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub applicant_profile: Option<serde_json::Value>,
    pub company_profile: Option<serde_json::Value>,
}

impl Identity {
    /// Create a new identity at signup.
    ///
    /// The email is trimmed and lowercased; an empty email is rejected.
    /// Password strength policy is the caller's concern.
    pub fn new(
        email: &str,
        password_hash: String,
        name: Option<String>,
        role: Role,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Err(DomainError::validation("email is required"));
        }

        Ok(Self {
            id: UserId::new(),
            email,
            password_hash,
            name: name.unwrap_or_default(),
            role,
            applicant_profile: None,
            company_profile: None,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn apply_profile_update(&mut self, update: ProfileUpdate, now: DateTime<Utc>) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(profile) = update.applicant_profile {
            self.applicant_profile = Some(profile);
        }
        if let Some(profile) = update.company_profile {
            self.company_profile = Some(profile);
        }
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn identity() -> Identity {
        Identity::new(
            "Taylor@Example.com ",
            "$argon2id$stub".to_string(),
            Some("Taylor".to_string()),
            Role::Applicant,
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn email_is_trimmed_and_lowercased() {
        assert_eq!(identity().email, "taylor@example.com");
    }

    #[test]
    fn empty_email_is_rejected() {
        let err = Identity::new("  ", "h".to_string(), None, Role::Company, Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn missing_name_defaults_to_empty() {
        let id = Identity::new("a@b.c", "h".to_string(), None, Role::Company, Utc::now()).unwrap();
        assert_eq!(id.name, "");
    }

    #[test]
    fn profile_update_only_touches_provided_fields() {
        let mut id = identity();
        let before = id.created_at;

        id.apply_profile_update(
            ProfileUpdate {
                name: None,
                applicant_profile: Some(json!({"skills": ["rust"]})),
                company_profile: None,
            },
            Utc::now(),
        );

        assert_eq!(id.name, "Taylor");
        assert_eq!(id.applicant_profile, Some(json!({"skills": ["rust"]})));
        assert_eq!(id.company_profile, None);
        assert_eq!(id.created_at, before);
        assert!(id.updated_at >= before);
    }

    #[test]
    fn profile_update_can_rename() {
        let mut id = identity();
        id.apply_profile_update(
            ProfileUpdate {
                name: Some("T. Doe".to_string()),
                ..ProfileUpdate::default()
            },
            Utc::now(),
        );
        assert_eq!(id.name, "T. Doe");
    }
}
