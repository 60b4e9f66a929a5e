//! Threaded notes attached to a ticket

use super::ticket::TicketId;
use super::user::UserId;
use crate::error::{ComplaintDeskError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Comment content length bounds, inclusive
pub const CONTENT_LEN: (usize, usize) = (1, 1000);

/// Unique identifier for a comment, assigned by the persistence layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(i64);

impl CommentId {
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
            .map_err(|_| ComplaintDeskError::InvalidInput(format!("Invalid comment id: {s}")))
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A note on a ticket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketComment {
    pub id: CommentId,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub ticket_id: TicketId,
    pub author: UserId,
}

impl TicketComment {
    /// Check the content length constraint
    pub fn validate(&self) -> Result<()> {
        let len = self.content.chars().count();
        if len < CONTENT_LEN.0 || len > CONTENT_LEN.1 {
            return Err(ComplaintDeskError::validation(
                "content",
                format!(
                    "must be between {} and {} characters",
                    CONTENT_LEN.0, CONTENT_LEN.1
                ),
            ));
        }
        Ok(())
    }
}
