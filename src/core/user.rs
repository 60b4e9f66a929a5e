//! Minimal projection of users from the external identity collaborator
//!
//! The core never creates or deletes users; it only resolves ids to this
//! projection for notification addressing and attribution.

use crate::error::ComplaintDeskError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier for a user, owned by the identity collaborator
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Create an id from a raw value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Role membership as reported by the identity collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Agent,
    Submitter,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Admin => "admin",
            Self::Agent => "agent",
            Self::Submitter => "submitter",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Role {
    type Err = ComplaintDeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "agent" => Ok(Self::Agent),
            "submitter" => Ok(Self::Submitter),
            _ => Err(ComplaintDeskError::InvalidInput(format!(
                "Invalid role: {s}. Must be one of: admin, agent, submitter"
            ))),
        }
    }
}

/// User projection resolved from the directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRef {
    pub id: UserId,
    pub display_name: String,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl UserRef {
    /// Whether the user holds the given role
    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}
