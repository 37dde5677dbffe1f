//! Account roles

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::Capabilities;

/// Role attached to every user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Seeker,
    Employer,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Seeker, Role::Employer, Role::Admin];

    /// Database / wire representation
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Seeker => "seeker",
            Self::Employer => "employer",
            Self::Admin => "admin",
        }
    }

    /// Capabilities granted by this role
    pub fn capabilities(self) -> Capabilities {
        match self {
            Self::Seeker => Capabilities::SEEKER,
            Self::Employer => Capabilities::EMPLOYER,
            Self::Admin => Capabilities::ADMIN,
        }
    }

    /// Whether a caller may pick this role at registration
    #[inline]
    pub fn is_self_assignable(self) -> bool {
        !matches!(self, Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "seeker" => Ok(Self::Seeker),
            "employer" => Ok(Self::Employer),
            "admin" => Ok(Self::Admin),
            other => Err(DomainError::InvalidRole(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roles() {
        assert_eq!("seeker".parse::<Role>().unwrap(), Role::Seeker);
        assert_eq!("Employer".parse::<Role>().unwrap(), Role::Employer);
        assert_eq!(" admin ".parse::<Role>().unwrap(), Role::Admin);
        assert!("owner".parse::<Role>().is_err());
    }

    #[test]
    fn test_admin_is_not_self_assignable() {
        assert!(Role::Seeker.is_self_assignable());
        assert!(Role::Employer.is_self_assignable());
        assert!(!Role::Admin.is_self_assignable());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Employer).unwrap(), "\"employer\"");
        let role: Role = serde_json::from_str("\"seeker\"").unwrap();
        assert_eq!(role, Role::Seeker);
    }
}
