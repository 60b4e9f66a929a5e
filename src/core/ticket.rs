//! Ticket entity and its classification enums

use super::user::UserId;
use crate::error::{ComplaintDeskError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Title length bounds, inclusive
pub const TITLE_LEN: (usize, usize) = (5, 200);
/// Description length bounds, inclusive
pub const DESCRIPTION_LEN: (usize, usize) = (10, 2000);
/// Maximum category length
pub const CATEGORY_MAX_LEN: usize = 100;

/// Unique identifier for a ticket, assigned by the persistence layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(i64);

impl TicketId {
    /// Placeholder id carried by records the store has not persisted yet
    pub const UNASSIGNED: Self = Self(0);

    /// Create an id from a raw value
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// The raw id value
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Parse an id from its string form
    pub fn parse_str(s: &str) -> Result<Self> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| ComplaintDeskError::InvalidInput(format!("Invalid ticket id: {s}")))
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ticket priority, ordered from least to most severe
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Priority {
    type Err = ComplaintDeskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(ComplaintDeskError::InvalidInput(format!(
                "Invalid priority: {s}. Must be one of: low, medium, high, critical"
            ))),
        }
    }
}

/// Ticket workflow status
///
/// The variant order is the enum's ordinal order and is what the `status`
/// sort key uses. Transitions are written unconditionally; the only status
/// with a side effect is `Closed`, which stamps `closed_at`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Opened,
    Assigned,
    Resolved,
    Closed,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Opened => "opened",
            Self::Assigned => "assigned",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Status {
    type Err = ComplaintDeskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "opened" | "open" => Ok(Self::Opened),
            "assigned" => Ok(Self::Assigned),
            "resolved" => Ok(Self::Resolved),
            "closed" => Ok(Self::Closed),
            _ => Err(ComplaintDeskError::InvalidInput(format!(
                "Invalid status: {s}. Must be one of: opened, assigned, resolved, closed"
            ))),
        }
    }
}

/// A complaint record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub priority: Priority,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub closed_at: Option<DateTime<Utc>>,
    pub submitter: UserId,
    pub assigned_agent: Option<UserId>,
    pub attachment_path: Option<String>,
}

impl Ticket {
    /// Assign the ticket to an agent
    ///
    /// Sets the agent, moves the status to `Assigned`, and touches
    /// `updated_at`. The caller is responsible for resolving the agent id
    /// against the user directory first.
    pub fn assign_to(&mut self, agent: UserId) {
        self.assigned_agent = Some(agent);
        self.status = Status::Assigned;
        self.updated_at = Some(Utc::now());
    }

    /// Write a new status unconditionally
    ///
    /// Entering `Closed` stamps `closed_at`; a later transition away from
    /// `Closed` leaves the stamp in place.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
        self.updated_at = Some(Utc::now());
        if status == Status::Closed {
            self.closed_at = Some(Utc::now());
        }
    }

    /// Apply an identity-preserving edit
    ///
    /// Only title, description, category, and priority change; submitter,
    /// status, assignment, attachment, and timestamps from the patch are
    /// ignored so the generic update path cannot bypass assign/status rules.
    pub fn apply(&mut self, patch: TicketPatch) {
        self.title = patch.title;
        self.description = patch.description;
        self.category = patch.category;
        self.priority = patch.priority;
        self.updated_at = Some(Utc::now());
    }
}

/// Input for creating a ticket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketDraft {
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub priority: Priority,
    pub submitter: UserId,
}

impl TicketDraft {
    /// Check the field constraints
    pub fn validate(&self) -> Result<()> {
        validate_content(&self.title, &self.description, self.category.as_deref())
    }
}

/// Input for the generic update path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketPatch {
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub priority: Priority,
}

impl TicketPatch {
    /// Check the field constraints
    pub fn validate(&self) -> Result<()> {
        validate_content(&self.title, &self.description, self.category.as_deref())
    }
}

fn validate_content(title: &str, description: &str, category: Option<&str>) -> Result<()> {
    let title_len = title.chars().count();
    if title_len < TITLE_LEN.0 || title_len > TITLE_LEN.1 {
        return Err(ComplaintDeskError::validation(
            "title",
            format!(
                "must be between {} and {} characters",
                TITLE_LEN.0, TITLE_LEN.1
            ),
        ));
    }

    let description_len = description.chars().count();
    if description_len < DESCRIPTION_LEN.0 || description_len > DESCRIPTION_LEN.1 {
        return Err(ComplaintDeskError::validation(
            "description",
            format!(
                "must be between {} and {} characters",
                DESCRIPTION_LEN.0, DESCRIPTION_LEN.1
            ),
        ));
    }

    if let Some(category) = category {
        if category.chars().count() > CATEGORY_MAX_LEN {
            return Err(ComplaintDeskError::validation(
                "category",
                format!("must not exceed {CATEGORY_MAX_LEN} characters"),
            ));
        }
    }

    Ok(())
}
