//! Handler for the `status` command

use super::common::HandlerContext;
use crate::cli::OutputFormatter;
use crate::core::{Status, TicketId};
use crate::error::Result;

/// Move a ticket to a new status
pub fn handle_status_command(
    ticket_ref: &str,
    status: &str,
    project_dir: Option<&str>,
    output: &OutputFormatter,
) -> Result<()> {
    let context = HandlerContext::new(project_dir)?;
    let ticket = context
        .ticket_service()
        .update_status(TicketId::parse_str(ticket_ref)?, status.parse::<Status>()?)?;

    if output.is_json() {
        output.print_json(&ticket)?;
    } else {
        output.success(&format!("Ticket #{} is now {}", ticket.id, ticket.status));
    }
    Ok(())
}
