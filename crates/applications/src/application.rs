use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use workboard_core::{ApplicationId, DomainError, DomainResult, JobId, UserId};

/// Application status lifecycle.
///
/// `Pending` and `Reviewed` are working states; `Accepted` and `Rejected`
/// are terminal. The permitted transitions are exactly:
///
/// ```text
/// pending  → reviewed | accepted | rejected
/// reviewed → accepted | rejected
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Reviewed,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Reviewed => "reviewed",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ApplicationStatus::Accepted | ApplicationStatus::Rejected)
    }

    /// Whether `self → next` is a permitted transition.
    ///
    /// Terminal states admit no transition at all, including to themselves.
    pub fn can_transition(&self, next: ApplicationStatus) -> bool {
        match self {
            ApplicationStatus::Pending => next != ApplicationStatus::Pending,
            ApplicationStatus::Reviewed => {
                matches!(next, ApplicationStatus::Accepted | ApplicationStatus::Rejected)
            }
            ApplicationStatus::Accepted | ApplicationStatus::Rejected => false,
        }
    }
}

impl core::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ApplicationStatus::Pending),
            "reviewed" => Ok(ApplicationStatus::Reviewed),
            "accepted" => Ok(ApplicationStatus::Accepted),
            "rejected" => Ok(ApplicationStatus::Rejected),
            _ => Err(DomainError::validation("Invalid status")),
        }
    }
}

/// The join record between an applicant and a job posting.
///
/// At most one per `(job, applicant)` pair; the pair uniqueness itself is
/// enforced by the store at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub job: JobId,
    pub applicant: UserId,
    /// Opaque résumé reference; never interpreted server-side.
    pub resume: Option<String>,
    pub cover_letter: Option<String>,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Application {
    /// Create a fresh application; status always starts at `pending`.
    pub fn new(
        job: JobId,
        applicant: UserId,
        resume: Option<String>,
        cover_letter: Option<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ApplicationId::new(),
            job,
            applicant,
            resume,
            cover_letter,
            status: ApplicationStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Drive the status lifecycle. Disallowed transitions (anything out of a
    /// terminal state, or not in the table) are a conflict; the caller's
    /// ownership of the referenced job must already have been checked.
    pub fn set_status(&mut self, next: ApplicationStatus, now: DateTime<Utc>) -> DomainResult<()> {
        if !self.status.can_transition(next) {
            return Err(DomainError::conflict(format!(
                "cannot transition from '{}' to '{}'",
                self.status, next
            )));
        }

        self.status = next;
        self.updated_at = now;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ApplicationStatus::*;

    fn application() -> Application {
        Application::new(JobId::new(), UserId::new(), None, Some("...".to_string()), Utc::now())
    }

    #[test]
    fn new_application_starts_pending() {
        assert_eq!(application().status, Pending);
    }

    #[test]
    fn transition_table_is_exactly_the_policy() {
        let allowed = [
            (Pending, Reviewed),
            (Pending, Accepted),
            (Pending, Rejected),
            (Reviewed, Accepted),
            (Reviewed, Rejected),
        ];

        for from in [Pending, Reviewed, Accepted, Rejected] {
            for to in [Pending, Reviewed, Accepted, Rejected] {
                assert_eq!(
                    from.can_transition(to),
                    allowed.contains(&(from, to)),
                    "{from} -> {to}"
                );
            }
        }
    }

    #[test]
    fn set_status_applies_permitted_transition() {
        let mut app = application();
        let before = app.updated_at;

        app.set_status(Reviewed, Utc::now()).unwrap();
        app.set_status(Accepted, Utc::now()).unwrap();

        assert_eq!(app.status, Accepted);
        assert!(app.updated_at >= before);
    }

    #[test]
    fn terminal_states_are_frozen() {
        let mut app = application();
        app.set_status(Rejected, Utc::now()).unwrap();

        for next in [Pending, Reviewed, Accepted, Rejected] {
            let err = app.set_status(next, Utc::now()).unwrap_err();
            assert!(matches!(err, DomainError::Conflict(_)));
        }
        assert_eq!(app.status, Rejected);
    }

    #[test]
    fn status_parses_from_wire_strings() {
        assert_eq!("reviewed".parse::<ApplicationStatus>().unwrap(), Reviewed);
        assert!(matches!(
            "archived".parse::<ApplicationStatus>(),
            Err(DomainError::Validation(_))
        ));
    }
}
