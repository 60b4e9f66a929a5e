//! Handler for the `delete` command

use super::common::HandlerContext;
use crate::cli::OutputFormatter;
use crate::core::TicketId;
use crate::error::Result;

/// Delete a ticket along with its attachment and comments
pub fn handle_delete_command(
    ticket_ref: &str,
    project_dir: Option<&str>,
    output: &OutputFormatter,
) -> Result<()> {
    let context = HandlerContext::new(project_dir)?;
    let ticket_id = TicketId::parse_str(ticket_ref)?;
    context.ticket_service().delete(ticket_id)?;

    if output.is_json() {
        output.print_json(&serde_json::json!({ "deleted": ticket_id }))?;
    } else {
        output.success(&format!("Deleted ticket #{ticket_id}"));
    }
    Ok(())
}
