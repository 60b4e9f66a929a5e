//! Test utilities for complaint-desk
//!
//! Common fixtures to reduce duplication in test code across the codebase.

#![cfg(test)]

use crate::core::{Priority, Role, Status, Ticket, TicketBuilder, TicketDraft, UserId, UserRef};
use crate::notify::LogNotifier;
use crate::service::{CommentService, TicketService};
use crate::storage::{FileStorage, TicketRepository, UploadDir};
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture wiring storage, uploads, and a logging notifier over a
/// temporary directory
pub struct TestDesk {
    pub temp_dir: TempDir,
    pub storage: FileStorage,
    pub uploads: UploadDir,
    pub notifier: LogNotifier,
}

impl TestDesk {
    /// Create an initialized desk with a default user roster
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let storage = FileStorage::new(temp_dir.path().join(".complaint-desk"));
        storage.init().expect("Failed to init storage");
        storage
            .write_users(&default_roster())
            .expect("Failed to seed users");
        let uploads = UploadDir::new(temp_dir.path().join(".complaint-desk/uploads"));

        Self {
            temp_dir,
            storage,
            uploads,
            notifier: LogNotifier,
        }
    }

    /// Ticket service over this desk's gateways
    pub fn ticket_service(&self) -> TicketService<'_, FileStorage, UploadDir, LogNotifier> {
        TicketService::new(&self.storage, &self.uploads, &self.notifier)
    }

    /// Comment service over this desk's gateway
    pub fn comment_service(&self) -> CommentService<'_, FileStorage> {
        CommentService::new(&self.storage)
    }

    /// Persist a ticket directly through the gateway
    pub fn add_ticket(&self, ticket: Ticket) -> Ticket {
        self.storage
            .add_ticket(ticket)
            .expect("Failed to add ticket")
    }

    /// Path of the uploads directory
    pub fn uploads_dir(&self) -> PathBuf {
        self.temp_dir.path().join(".complaint-desk/uploads")
    }
}

/// Roster used by every test desk: one submitter, two agents, one admin
pub fn default_roster() -> Vec<UserRef> {
    vec![
        user("alice", "Alice Anders", &[Role::Submitter]),
        user("bob", "Bob Breiner", &[Role::Agent]),
        user("carol", "Carol Chen", &[Role::Agent, Role::Admin]),
    ]
}

fn user(id: &str, name: &str, roles: &[Role]) -> UserRef {
    UserRef {
        id: UserId::new(id),
        display_name: name.to_string(),
        email: format!("{id}@example.com"),
        roles: roles.to_vec(),
    }
}

/// A valid draft submitted by alice
pub fn test_draft(title: &str) -> TicketDraft {
    TicketDraft {
        title: title.to_string(),
        description: format!("Description for {title}"),
        category: None,
        priority: Priority::Medium,
        submitter: UserId::new("alice"),
    }
}

/// Create a test ticket with default values
pub fn create_test_ticket(title: &str, priority: Priority, status: Status) -> Ticket {
    let mut builder = TicketBuilder::new()
        .title(title)
        .description(format!("Description for {title}"))
        .priority(priority)
        .status(status)
        .submitter("alice");
    if status != Status::Opened {
        builder = builder.assigned_agent("bob");
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desk_creation() {
        let desk = TestDesk::new();
        assert!(desk.storage.is_initialized());
    }

    #[test]
    fn test_roster_has_agents() {
        use crate::storage::UserDirectory;

        let desk = TestDesk::new();
        let agents = desk.storage.users_in_role(Role::Agent).unwrap();
        assert_eq!(agents.len(), 2);
    }
}
