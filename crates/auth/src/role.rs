use core::str::FromStr;

use serde::{Deserialize, Serialize};

use workboard_core::DomainError;

/// Account role, fixed at signup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Applicant,
    Company,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Applicant => "applicant",
            Role::Company => "company",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "applicant" => Ok(Role::Applicant),
            "company" => Ok(Role::Company),
            _ => Err(DomainError::validation(
                "role must be 'applicant' or 'company'",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_roles() {
        assert_eq!("applicant".parse::<Role>().unwrap(), Role::Applicant);
        assert_eq!("company".parse::<Role>().unwrap(), Role::Company);
    }

    #[test]
    fn rejects_unknown_role() {
        assert!(matches!(
            "admin".parse::<Role>(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Company).unwrap(), "\"company\"");
    }
}
