use crate::core::{CommentId, Role, Ticket, TicketComment, TicketId, UserId, UserRef};
use crate::error::Result;

/// Gateway contract for ticket persistence
///
/// This trait defines the interface the lifecycle service talks to, allowing
/// for different storage implementations. Implementations assign ids on add
/// and serialize individual record writes; they are not required to guard
/// read-modify-write sequences spanning multiple calls.
pub trait TicketRepository: Send + Sync {
    /// Persists a new ticket, assigning its id
    fn add_ticket(&self, ticket: Ticket) -> Result<Ticket>;

    /// Overwrites an existing ticket record
    fn update_ticket(&self, ticket: &Ticket) -> Result<()>;

    /// Removes a ticket record; its comments cascade
    fn remove_ticket(&self, id: TicketId) -> Result<()>;

    /// Loads a ticket by id
    fn load_ticket(&self, id: TicketId) -> Result<Ticket>;

    /// Loads all tickets
    fn load_all_tickets(&self) -> Result<Vec<Ticket>>;

    /// Checks whether a ticket exists
    fn ticket_exists(&self, id: TicketId) -> Result<bool> {
        match self.load_ticket(id) {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }
}

/// Gateway contract for comment persistence
pub trait CommentRepository: Send + Sync {
    /// Persists a new comment, assigning its id
    fn add_comment(&self, comment: TicketComment) -> Result<TicketComment>;

    /// Overwrites an existing comment record
    fn update_comment(&self, comment: &TicketComment) -> Result<()>;

    /// Removes a comment record
    fn remove_comment(&self, id: CommentId) -> Result<()>;

    /// Loads a comment by id
    fn load_comment(&self, id: CommentId) -> Result<TicketComment>;

    /// Loads all comments belonging to a ticket
    fn load_ticket_comments(&self, ticket_id: TicketId) -> Result<Vec<TicketComment>>;
}

/// Read-only view of the external identity collaborator
///
/// The core never creates or deletes users; the roster is maintained outside
/// this system and only resolved here.
pub trait UserDirectory: Send + Sync {
    /// Resolves a user id to its projection, if known
    fn find_user(&self, id: &UserId) -> Result<Option<UserRef>>;

    /// Lists the users holding a role (used for agent selection)
    fn users_in_role(&self, role: Role) -> Result<Vec<UserRef>>;
}

/// Combined gateway trait for callers that need the full persistence surface
pub trait Repository: TicketRepository + CommentRepository + UserDirectory {}

/// Implementation of Repository for types that implement all three traits
impl<T> Repository for T where T: TicketRepository + CommentRepository + UserDirectory {}
