//! Handler for the `assign` command

use super::common::HandlerContext;
use crate::cli::OutputFormatter;
use crate::core::{TicketId, UserId};
use crate::error::Result;

/// Assign a ticket to an agent
pub fn handle_assign_command(
    ticket_ref: &str,
    agent: &str,
    project_dir: Option<&str>,
    output: &OutputFormatter,
) -> Result<()> {
    let context = HandlerContext::new(project_dir)?;
    let ticket = context
        .ticket_service()
        .assign(TicketId::parse_str(ticket_ref)?, &UserId::new(agent))?;

    if output.is_json() {
        output.print_json(&ticket)?;
    } else {
        output.success(&format!("Ticket #{} assigned to {agent}", ticket.id));
    }
    Ok(())
}
