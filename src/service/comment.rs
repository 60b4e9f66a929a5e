//! Comment service
//!
//! Independent CRUD over comments scoped to a ticket. This service is the
//! sole writer of comment fields; who may edit which comment is decided by
//! the caller, not here.

use crate::core::{CommentId, TicketComment, TicketId, UserRef};
use crate::error::Result;
use crate::storage::{CommentRepository, UserDirectory};
use chrono::Utc;
use tracing::{error, info};

/// A comment with its author resolved for display
#[derive(Debug, Clone, serde::Serialize)]
pub struct CommentView {
    pub comment: TicketComment,
    pub author: Option<UserRef>,
}

/// Service owning comment CRUD
pub struct CommentService<'a, R> {
    repo: &'a R,
}

impl<'a, R> CommentService<'a, R>
where
    R: CommentRepository + UserDirectory,
{
    /// Create a service over the given gateway
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    /// Comments for a ticket, newest first, with authors resolved
    pub fn list(&self, ticket_id: TicketId) -> Result<Vec<CommentView>> {
        let result: Result<_> = (|| {
            let mut views: Vec<CommentView> = self
                .repo
                .load_ticket_comments(ticket_id)?
                .into_iter()
                .map(|comment| {
                    let author = self.repo.find_user(&comment.author)?;
                    Ok(CommentView { comment, author })
                })
                .collect::<Result<_>>()?;
            views.sort_by(|a, b| b.comment.created_at.cmp(&a.comment.created_at));
            Ok(views)
        })();
        result.inspect_err(|e| error!("Error retrieving comments for ticket {ticket_id}: {e}"))
    }

    /// Persist a new comment
    ///
    /// `created_at` is whatever the comment was constructed with; it is not
    /// reset here.
    pub fn add(&self, comment: TicketComment) -> Result<TicketComment> {
        let ticket_id = comment.ticket_id;
        let result: Result<_> = (|| {
            comment.validate()?;
            let comment = self.repo.add_comment(comment)?;
            info!("Comment added to ticket {}", ticket_id);
            Ok(comment)
        })();
        result.inspect_err(|e| error!("Error adding comment to ticket {ticket_id}: {e}"))
    }

    /// Overwrite a comment's mutable fields, stamping `updated_at`
    pub fn update(&self, mut comment: TicketComment) -> Result<TicketComment> {
        let id = comment.id;
        let result: Result<_> = (|| {
            comment.validate()?;
            comment.updated_at = Some(Utc::now());
            self.repo.update_comment(&comment)?;
            info!("Comment {} updated", id);
            Ok(comment)
        })();
        result.inspect_err(|e| error!("Error updating comment {id}: {e}"))
    }

    /// Remove a comment
    pub fn delete(&self, id: CommentId) -> Result<()> {
        let result: Result<_> = (|| {
            // Load first so a missing id surfaces as not-found.
            self.repo.load_comment(id)?;
            self.repo.remove_comment(id)?;
            info!("Comment {} deleted", id);
            Ok(())
        })();
        result.inspect_err(|e| error!("Error deleting comment {id}: {e}"))
    }
}
