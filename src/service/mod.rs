//! Service layer for complaint-desk
//!
//! `TicketService` owns the ticket lifecycle and is the sole writer of ticket
//! state; `CommentService` is the sole writer of comment state. Both are
//! cheap, stateless values constructed per request over explicitly passed
//! gateway references, so transaction boundaries stay visible at call sites.

mod comment;
mod dashboard;
mod page;
mod ticket;

pub use comment::{CommentService, CommentView};
pub use dashboard::DashboardStats;
pub use page::{PageRequest, PaginatedResult, SortKey, DEFAULT_PAGE_SIZE};
pub use ticket::{TicketDetail, TicketService, Upload};
