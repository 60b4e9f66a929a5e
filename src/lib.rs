//! complaint-desk - A support-complaint tracking engine
//!
//! This crate tracks support complaints ("tickets") submitted by users,
//! routed to agents, and resolved through a small status workflow, with
//! threaded comments and lightweight reporting:
//! - Ticket lifecycle: create, assign, status transitions, edit, delete
//! - Attachment persistence and best-effort notification dispatch around
//!   lifecycle transitions
//! - Filtered, sorted, paginated listings and dashboard aggregates
//! - Comments scoped to a ticket, with resolved authors
//!
//! Authentication and authorization live outside this crate: callers hand in
//! already-resolved user ids, and the services consult a read-only user
//! directory for notification addressing and attribution.
//!
//! # Example
//!
//! ```rust,ignore
//! use complaint_desk::core::{Priority, TicketDraft, UserId};
//! use complaint_desk::notify::LogNotifier;
//! use complaint_desk::service::TicketService;
//! use complaint_desk::storage::{FileStorage, UploadDir};
//!
//! let storage = FileStorage::new(".complaint-desk");
//! storage.init()?;
//! let uploads = UploadDir::new(".complaint-desk/uploads");
//! let notifier = LogNotifier;
//!
//! let service = TicketService::new(&storage, &uploads, &notifier);
//! let ticket = service.create(
//!     TicketDraft {
//!         title: "Printer on fire".into(),
//!         description: "It is actually on fire.".into(),
//!         category: Some("Hardware".into()),
//!         priority: Priority::Critical,
//!         submitter: UserId::new("alice"),
//!     },
//!     None,
//! )?;
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod notify;
pub mod service;
pub mod storage;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{ComplaintDeskError, Result};
