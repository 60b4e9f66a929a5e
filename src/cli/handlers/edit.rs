//! Handler for the `edit` command

use super::common::HandlerContext;
use crate::cli::OutputFormatter;
use crate::core::{Priority, TicketId, TicketPatch};
use crate::error::Result;
use crate::storage::TicketRepository;

/// Parameters for editing a ticket
pub struct EditParams {
    pub ticket: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub priority: Option<String>,
    pub project_dir: Option<String>,
}

/// Edit a ticket's content fields
///
/// Fields not given on the command line keep their current value; the patch
/// always carries all four content fields, matching the service's
/// full-overwrite update semantics.
pub fn handle_edit_command(params: EditParams, output: &OutputFormatter) -> Result<()> {
    let context = HandlerContext::new(params.project_dir.as_deref())?;
    let ticket_id = TicketId::parse_str(&params.ticket)?;

    let current = context.storage.load_ticket(ticket_id)?;
    let patch = TicketPatch {
        title: params.title.unwrap_or(current.title),
        description: params.description.unwrap_or(current.description),
        category: params.category.or(current.category),
        priority: match params.priority {
            Some(p) => p.parse::<Priority>()?,
            None => current.priority,
        },
    };

    let ticket = context.ticket_service().update(ticket_id, patch)?;

    if output.is_json() {
        output.print_json(&ticket)?;
    } else {
        output.success(&format!("Updated ticket #{}", ticket.id));
    }
    Ok(())
}
