//! Notification dispatch
//!
//! Notifications are a best-effort tail step of ticket mutations: the
//! services log a failed send and keep the mutation. `LogNotifier` is the
//! default transport and only writes to the log, mirroring a real mail or
//! chat transport behind the same trait.

use crate::error::Result;
use tracing::info;

#[cfg(test)]
use mockall::automock;

/// Address that receives new-ticket notifications
pub const ADMIN_ADDRESS: &str = "admin@system.com";

/// Outbound notification transport
#[cfg_attr(test, automock)]
pub trait Notifier: Send + Sync {
    /// Sends a message to a recipient address
    fn send(&self, to: &str, subject: &str, body: &str) -> Result<()>;
}

/// Transport that logs instead of sending
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn send(&self, to: &str, subject: &str, body: &str) -> Result<()> {
        info!("[notification] To: {to}, Subject: {subject}, Body: {body}");
        Ok(())
    }
}
