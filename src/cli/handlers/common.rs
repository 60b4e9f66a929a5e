//! Shared handler context
//!
//! Encapsulates the per-invocation wiring: configuration resolution, the
//! storage and attachment gateways, and the notification transport. Services
//! are constructed from it per command, keeping gateway lifetimes visible.

use crate::config::DeskConfig;
use crate::core::Ticket;
use crate::error::{ComplaintDeskError, Result};
use crate::notify::LogNotifier;
use crate::service::{CommentService, TicketService};
use crate::storage::{FileStorage, UploadDir};
use std::env;
use std::path::PathBuf;

/// Context for handler operations
pub struct HandlerContext {
    pub config: DeskConfig,
    pub storage: FileStorage,
    pub uploads: UploadDir,
    pub notifier: LogNotifier,
}

impl HandlerContext {
    /// Create a context for an initialized project
    pub fn new(project_dir: Option<&str>) -> Result<Self> {
        let context = Self::resolve(project_dir)?;
        if !context.storage.is_initialized() {
            return Err(ComplaintDeskError::StorageNotInitialized);
        }
        Ok(context)
    }

    /// Create a context without requiring initialized storage (for `init`)
    pub fn resolve(project_dir: Option<&str>) -> Result<Self> {
        let project_root = match project_dir {
            Some(dir) => PathBuf::from(dir),
            None => env::current_dir()?,
        };

        let config = DeskConfig::load(&project_root)?;
        let storage = FileStorage::new(&config.storage.root);
        let uploads = UploadDir::new(&config.storage.uploads_dir);

        Ok(Self {
            config,
            storage,
            uploads,
            notifier: LogNotifier,
        })
    }

    /// Ticket lifecycle service over this context's gateways
    pub fn ticket_service(&self) -> TicketService<'_, FileStorage, UploadDir, LogNotifier> {
        TicketService::new(&self.storage, &self.uploads, &self.notifier)
    }

    /// Comment service over this context's gateway
    pub fn comment_service(&self) -> CommentService<'_, FileStorage> {
        CommentService::new(&self.storage)
    }
}

/// One-line listing row for a ticket
#[must_use]
pub fn ticket_row(ticket: &Ticket) -> String {
    let agent = ticket
        .assigned_agent
        .as_ref()
        .map_or_else(|| "-".to_string(), ToString::to_string);
    format!(
        "#{:<4} {:<9} {:<9} {:<10} {}",
        ticket.id, ticket.status, ticket.priority, agent, ticket.title
    )
}
