//! Storage layer for complaint-desk
//!
//! The gateway contracts (`TicketRepository`, `CommentRepository`,
//! `UserDirectory`) are defined in `repository`; `FileStorage` is the
//! YAML-file-per-record implementation used by the CLI and tests. Attachments
//! are stored out-of-band through the `AttachmentStore` trait.

mod attachment;
mod file;
mod repository;

pub use attachment::{AttachmentStore, UploadDir};
pub use file::FileStorage;
pub use repository::{CommentRepository, Repository, TicketRepository, UserDirectory};
