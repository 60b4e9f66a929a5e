//! Ticket lifecycle service
//!
//! The hub of the system: owns creation, assignment, status transitions,
//! edits, and deletion of tickets, coordinating the attachment store and the
//! notification gateway around persistence. Status writes are unconditional;
//! the only transition side effect is that entering `Closed` stamps
//! `closed_at`. Read-modify-write sequences are not guarded against
//! concurrent writers (last writer wins), matching the persistence gateway's
//! record-level-only guarantees.

use crate::core::{
    Status, Ticket, TicketBuilder, TicketDraft, TicketId, TicketPatch, UserId, UserRef,
};
use crate::error::{ComplaintDeskError, Result};
use crate::notify::{Notifier, ADMIN_ADDRESS};
use crate::service::comment::CommentView;
use crate::service::dashboard::{self, DashboardStats};
use crate::service::page::{self, PageRequest, PaginatedResult};
use crate::storage::{
    AttachmentStore, CommentRepository, Repository, TicketRepository, UserDirectory,
};
use tracing::{error, info, warn};

/// An uploaded file handed to `create`
#[derive(Debug, Clone)]
pub struct Upload {
    pub bytes: Vec<u8>,
    pub filename: String,
}

/// A ticket with its related records eagerly resolved
#[derive(Debug, Clone, serde::Serialize)]
pub struct TicketDetail {
    pub ticket: Ticket,
    pub submitter: Option<UserRef>,
    pub assigned_agent: Option<UserRef>,
    pub comments: Vec<CommentView>,
}

impl TicketDetail {
    /// Number of comments on the ticket
    #[must_use]
    pub fn comments_count(&self) -> usize {
        self.comments.len()
    }
}

/// Service owning the ticket lifecycle
///
/// Constructed per request over explicitly passed gateways; holds no state of
/// its own. This service is the sole writer of ticket fields.
pub struct TicketService<'a, R, A, N> {
    repo: &'a R,
    attachments: &'a A,
    notifier: &'a N,
}

impl<'a, R, A, N> TicketService<'a, R, A, N>
where
    R: Repository,
    A: AttachmentStore,
    N: Notifier,
{
    /// Create a service over the given gateways
    pub fn new(repo: &'a R, attachments: &'a A, notifier: &'a N) -> Self {
        Self {
            repo,
            attachments,
            notifier,
        }
    }

    /// Create a ticket from a draft, optionally storing an attachment first
    ///
    /// The attachment is written before the record is persisted; if
    /// persistence then fails, the stored file is left behind. After a
    /// successful write the fixed admin address is notified.
    pub fn create(&self, draft: TicketDraft, attachment: Option<Upload>) -> Result<Ticket> {
        draft.validate()?;

        let mut builder = TicketBuilder::new()
            .title(draft.title)
            .description(draft.description)
            .priority(draft.priority)
            .submitter(draft.submitter.clone());
        if let Some(category) = draft.category {
            builder = builder.category(category);
        }

        if let Some(upload) = attachment {
            if !upload.bytes.is_empty() {
                let path = self
                    .attachments
                    .save(&upload.bytes, &upload.filename)
                    .inspect_err(|e| error!("Error storing attachment: {e}"))?;
                info!("File uploaded: {path}");
                builder = builder.attachment_path(path);
            }
        }

        let ticket = self
            .repo
            .add_ticket(builder.build())
            .inspect_err(|e| error!("Error creating ticket: {e}"))?;
        info!("Ticket created with ID: {}", ticket.id);

        let submitter_address = self.address_of(&draft.submitter);
        self.notify(
            ADMIN_ADDRESS,
            "New Ticket Created",
            &format!(
                "Ticket #{}: {} has been created by {}",
                ticket.id, ticket.title, submitter_address
            ),
        );

        Ok(ticket)
    }

    /// Load a ticket with submitter, agent, and comments eagerly resolved
    pub fn get(&self, id: TicketId) -> Result<TicketDetail> {
        let ticket = self.repo.load_ticket(id)?;

        let submitter = self.repo.find_user(&ticket.submitter)?;
        let assigned_agent = match &ticket.assigned_agent {
            Some(agent) => self.repo.find_user(agent)?,
            None => None,
        };

        let mut comments: Vec<CommentView> = self
            .repo
            .load_ticket_comments(id)?
            .into_iter()
            .map(|comment| {
                let author = self.repo.find_user(&comment.author)?;
                Ok(CommentView { comment, author })
            })
            .collect::<Result<_>>()?;
        comments.sort_by(|a, b| b.comment.created_at.cmp(&a.comment.created_at));

        Ok(TicketDetail {
            ticket,
            submitter,
            assigned_agent,
            comments,
        })
    }

    /// Assign a ticket to an agent and move it to `Assigned`
    ///
    /// The agent id is resolved against the user directory but its role is
    /// not checked; authorization is the caller's responsibility.
    pub fn assign(&self, ticket_id: TicketId, agent_id: &UserId) -> Result<Ticket> {
        let result: Result<_> = (|| {
            let mut ticket = self.repo.load_ticket(ticket_id)?;
            let agent = self
                .repo
                .find_user(agent_id)?
                .ok_or_else(|| ComplaintDeskError::UserNotFound {
                    id: agent_id.clone(),
                })?;

            ticket.assign_to(agent.id.clone());
            self.repo.update_ticket(&ticket)?;
            info!("Ticket {} assigned to agent {}", ticket_id, agent_id);

            self.notify(
                &agent.email,
                "Ticket Assigned",
                &format!(
                    "Ticket #{}: {} has been assigned to you",
                    ticket.id, ticket.title
                ),
            );
            Ok(ticket)
        })();
        result.inspect_err(|e| error!("Error assigning ticket {ticket_id}: {e}"))
    }

    /// Write a new status unconditionally
    ///
    /// Entering `Closed` stamps `closed_at`; transitions out of `Closed` are
    /// not rejected and do not clear the stamp.
    pub fn update_status(&self, ticket_id: TicketId, status: Status) -> Result<Ticket> {
        let result: Result<_> = (|| {
            let mut ticket = self.repo.load_ticket(ticket_id)?;
            ticket.set_status(status);
            self.repo.update_ticket(&ticket)?;
            info!("Ticket {} status updated to {}", ticket_id, status);

            self.notify(
                &self.address_of(&ticket.submitter),
                "Ticket Status Updated",
                &format!(
                    "Ticket #{}: {} status has been updated to {}",
                    ticket.id, ticket.title, status
                ),
            );
            Ok(ticket)
        })();
        result.inspect_err(|e| error!("Error updating ticket status for {ticket_id}: {e}"))
    }

    /// Apply an identity-preserving edit
    ///
    /// Only title, description, category, and priority change; the submitter,
    /// status, assignment, attachment, and timestamps of the stored record
    /// are kept, so this path cannot bypass assign/status rules.
    pub fn update(&self, ticket_id: TicketId, patch: TicketPatch) -> Result<Ticket> {
        let result: Result<_> = (|| {
            patch.validate()?;
            let mut ticket = self.repo.load_ticket(ticket_id)?;
            ticket.apply(patch);
            self.repo.update_ticket(&ticket)?;
            info!("Ticket {} updated", ticket_id);
            Ok(ticket)
        })();
        result.inspect_err(|e| error!("Error updating ticket {ticket_id}: {e}"))
    }

    /// Delete a ticket, its stored attachment, and (by cascade) its comments
    pub fn delete(&self, ticket_id: TicketId) -> Result<()> {
        let result: Result<_> = (|| {
            let ticket = self.repo.load_ticket(ticket_id)?;

            if let Some(path) = &ticket.attachment_path {
                self.attachments.delete(path)?;
                info!("File deleted: {path}");
            }

            self.repo.remove_ticket(ticket_id)?;
            info!("Ticket {} deleted", ticket_id);
            Ok(())
        })();
        result.inspect_err(|e| error!("Error deleting ticket {ticket_id}: {e}"))
    }

    /// One page of the listing, filtered and ordered per the request
    pub fn list(&self, request: &PageRequest) -> Result<PaginatedResult<Ticket>> {
        let tickets = self
            .repo
            .load_all_tickets()
            .inspect_err(|e| error!("Error listing tickets: {e}"))?;
        Ok(page::paginate(tickets, request))
    }

    /// Summary counts and category histogram over all tickets
    pub fn dashboard(&self) -> Result<DashboardStats> {
        let tickets = self
            .repo
            .load_all_tickets()
            .inspect_err(|e| error!("Error retrieving dashboard stats: {e}"))?;
        Ok(dashboard::aggregate(&tickets))
    }

    /// Best-effort notification: failures are logged, never propagated
    fn notify(&self, to: &str, subject: &str, body: &str) {
        if let Err(e) = self.notifier.send(to, subject, body) {
            warn!("Notification to {to} failed: {e}");
        }
    }

    /// Resolve a user id to its notification address, falling back to the id
    fn address_of(&self, id: &UserId) -> String {
        match self.repo.find_user(id) {
            Ok(Some(user)) => user.email,
            _ => id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Priority;
    use crate::notify::MockNotifier;
    use crate::test_utils::{test_draft, TestDesk};
    use mockall::predicate::eq;

    #[test]
    fn test_create_notifies_fixed_admin_address() {
        let desk = TestDesk::new();
        let mut notifier = MockNotifier::new();
        notifier
            .expect_send()
            .with(
                eq(ADMIN_ADDRESS),
                eq("New Ticket Created"),
                mockall::predicate::function(|body: &str| body.contains("alice@example.com")),
            )
            .times(1)
            .returning(|_, _, _| Ok(()));

        let service = TicketService::new(&desk.storage, &desk.uploads, &notifier);
        service.create(test_draft("Printer on fire"), None).unwrap();
    }

    #[test]
    fn test_assign_notifies_agent_address() {
        let desk = TestDesk::new();
        let mut notifier = MockNotifier::new();
        notifier.expect_send().returning(|_, _, _| Ok(()));

        let service = TicketService::new(&desk.storage, &desk.uploads, &notifier);
        let ticket = service.create(test_draft("Printer on fire"), None).unwrap();

        let mut assign_notifier = MockNotifier::new();
        assign_notifier
            .expect_send()
            .with(
                eq("bob@example.com"),
                eq("Ticket Assigned"),
                mockall::predicate::always(),
            )
            .times(1)
            .returning(|_, _, _| Ok(()));

        let service = TicketService::new(&desk.storage, &desk.uploads, &assign_notifier);
        let assigned = service.assign(ticket.id, &UserId::new("bob")).unwrap();
        assert_eq!(assigned.status, Status::Assigned);
    }

    #[test]
    fn test_update_status_notifies_submitter() {
        let desk = TestDesk::new();
        let mut notifier = MockNotifier::new();
        notifier.expect_send().returning(|_, _, _| Ok(()));
        let service = TicketService::new(&desk.storage, &desk.uploads, &notifier);
        let ticket = service.create(test_draft("Printer on fire"), None).unwrap();

        let mut status_notifier = MockNotifier::new();
        status_notifier
            .expect_send()
            .with(
                eq("alice@example.com"),
                eq("Ticket Status Updated"),
                mockall::predicate::function(|body: &str| body.contains("resolved")),
            )
            .times(1)
            .returning(|_, _, _| Ok(()));

        let service = TicketService::new(&desk.storage, &desk.uploads, &status_notifier);
        service.update_status(ticket.id, Status::Resolved).unwrap();
    }

    #[test]
    fn test_notification_failure_keeps_the_mutation() {
        let desk = TestDesk::new();
        let mut notifier = MockNotifier::new();
        notifier
            .expect_send()
            .returning(|_, _, _| Err(ComplaintDeskError::Custom("smtp down".to_string())));

        let service = TicketService::new(&desk.storage, &desk.uploads, &notifier);
        let ticket = service.create(test_draft("Printer on fire"), None).unwrap();
        assert!(desk.storage.ticket_exists(ticket.id).unwrap());

        let assigned = service.assign(ticket.id, &UserId::new("bob")).unwrap();
        assert_eq!(assigned.status, Status::Assigned);
    }

    #[test]
    fn test_create_rejects_invalid_draft() {
        let desk = TestDesk::new();
        let mut notifier = MockNotifier::new();
        notifier.expect_send().never();

        let service = TicketService::new(&desk.storage, &desk.uploads, &notifier);
        let mut draft = test_draft("Printer on fire");
        draft.description = "short".to_string();

        let err = service.create(draft, None).unwrap_err();
        assert!(matches!(err, ComplaintDeskError::Validation { field: "description", .. }));
    }

    #[test]
    fn test_assign_unknown_agent_is_not_found() {
        let desk = TestDesk::new();
        let mut notifier = MockNotifier::new();
        notifier.expect_send().returning(|_, _, _| Ok(()));

        let service = TicketService::new(&desk.storage, &desk.uploads, &notifier);
        let ticket = service.create(test_draft("Printer on fire"), None).unwrap();

        let err = service.assign(ticket.id, &UserId::new("nobody")).unwrap_err();
        assert!(matches!(err, ComplaintDeskError::UserNotFound { .. }));

        // The failed assign must not leave a partial write behind.
        let stored = desk.storage.load_ticket(ticket.id).unwrap();
        assert_eq!(stored.status, Status::Opened);
        assert!(stored.assigned_agent.is_none());
    }

    #[test]
    fn test_update_cannot_bypass_lifecycle_fields() {
        let desk = TestDesk::new();
        let mut notifier = MockNotifier::new();
        notifier.expect_send().returning(|_, _, _| Ok(()));

        let service = TicketService::new(&desk.storage, &desk.uploads, &notifier);
        let ticket = service.create(test_draft("Printer on fire"), None).unwrap();
        service.assign(ticket.id, &UserId::new("bob")).unwrap();

        let updated = service
            .update(
                ticket.id,
                TicketPatch {
                    title: "Printer still on fire".to_string(),
                    description: "The fire has spread to the scanner.".to_string(),
                    category: Some("Hardware".to_string()),
                    priority: Priority::Critical,
                },
            )
            .unwrap();

        assert_eq!(updated.title, "Printer still on fire");
        assert_eq!(updated.status, Status::Assigned);
        assert_eq!(updated.assigned_agent, Some(UserId::new("bob")));
        assert!(updated.updated_at.is_some());
    }

    #[test]
    fn test_get_resolves_related_records() {
        let desk = TestDesk::new();
        let mut notifier = MockNotifier::new();
        notifier.expect_send().returning(|_, _, _| Ok(()));

        let service = TicketService::new(&desk.storage, &desk.uploads, &notifier);
        let ticket = service.create(test_draft("Printer on fire"), None).unwrap();
        service.assign(ticket.id, &UserId::new("bob")).unwrap();

        let detail = service.get(ticket.id).unwrap();
        assert_eq!(detail.submitter.as_ref().unwrap().id, UserId::new("alice"));
        assert_eq!(detail.assigned_agent.as_ref().unwrap().id, UserId::new("bob"));
        assert_eq!(detail.comments_count(), 0);
    }
}
