use super::{CommentId, Priority, Status, Ticket, TicketComment, TicketId, UserId};
use chrono::{DateTime, Utc};

/// Builder for creating Ticket instances
#[derive(Default)]
pub struct TicketBuilder {
    id: Option<TicketId>,
    title: Option<String>,
    description: Option<String>,
    category: Option<String>,
    priority: Option<Priority>,
    status: Option<Status>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    closed_at: Option<DateTime<Utc>>,
    submitter: Option<UserId>,
    assigned_agent: Option<UserId>,
    attachment_path: Option<String>,
}

impl TicketBuilder {
    /// Create a new ticket builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ticket ID
    #[must_use]
    pub const fn id(mut self, id: TicketId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the category
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the priority
    #[must_use]
    pub const fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the status
    #[must_use]
    pub const fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Set `created_at` timestamp
    #[must_use]
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Set `updated_at` timestamp
    #[must_use]
    pub const fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    /// Set `closed_at` timestamp
    #[must_use]
    pub const fn closed_at(mut self, closed_at: DateTime<Utc>) -> Self {
        self.closed_at = Some(closed_at);
        self
    }

    /// Set the submitter
    #[must_use]
    pub fn submitter(mut self, submitter: impl Into<UserId>) -> Self {
        self.submitter = Some(submitter.into());
        self
    }

    /// Set the assigned agent
    #[must_use]
    pub fn assigned_agent(mut self, agent: impl Into<UserId>) -> Self {
        self.assigned_agent = Some(agent.into());
        self
    }

    /// Set the attachment path
    #[must_use]
    pub fn attachment_path(mut self, path: impl Into<String>) -> Self {
        self.attachment_path = Some(path.into());
        self
    }

    /// Build the ticket
    ///
    /// A ticket built without an explicit id carries `TicketId::UNASSIGNED`
    /// until the store persists it and assigns a real one.
    pub fn build(self) -> Ticket {
        Ticket {
            id: self.id.unwrap_or(TicketId::UNASSIGNED),
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            category: self.category,
            priority: self.priority.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            created_at: self.created_at.unwrap_or_else(Utc::now),
            updated_at: self.updated_at,
            closed_at: self.closed_at,
            submitter: self.submitter.unwrap_or_else(|| UserId::new("")),
            assigned_agent: self.assigned_agent,
            attachment_path: self.attachment_path,
        }
    }
}

/// Builder for creating TicketComment instances
#[derive(Default)]
pub struct CommentBuilder {
    id: Option<CommentId>,
    content: Option<String>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    ticket_id: Option<TicketId>,
    author: Option<UserId>,
}

impl CommentBuilder {
    /// Create a new comment builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the comment ID
    #[must_use]
    pub const fn id(mut self, id: CommentId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the content
    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set `created_at` timestamp
    #[must_use]
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Set `updated_at` timestamp
    #[must_use]
    pub const fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    /// Set the owning ticket
    #[must_use]
    pub const fn ticket_id(mut self, ticket_id: TicketId) -> Self {
        self.ticket_id = Some(ticket_id);
        self
    }

    /// Set the author
    #[must_use]
    pub fn author(mut self, author: impl Into<UserId>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Build the comment
    pub fn build(self) -> TicketComment {
        TicketComment {
            id: self.id.unwrap_or(CommentId::UNASSIGNED),
            content: self.content.unwrap_or_default(),
            created_at: self.created_at.unwrap_or_else(Utc::now),
            updated_at: self.updated_at,
            ticket_id: self.ticket_id.unwrap_or(TicketId::UNASSIGNED),
            author: self.author.unwrap_or_else(|| UserId::new("")),
        }
    }
}
