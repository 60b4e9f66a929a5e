//! Handler for the `new` command

use super::common::HandlerContext;
use crate::cli::OutputFormatter;
use crate::core::{Priority, TicketDraft, UserId};
use crate::error::{ComplaintDeskError, Result};
use crate::service::Upload;
use std::fs;
use std::path::PathBuf;

/// Parameters for filing a ticket
pub struct NewParams {
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub priority: String,
    pub submitter: String,
    pub attach: Option<PathBuf>,
    pub project_dir: Option<String>,
}

/// File a new ticket, optionally attaching a file
pub fn handle_new_command(params: NewParams, output: &OutputFormatter) -> Result<()> {
    let context = HandlerContext::new(params.project_dir.as_deref())?;

    let draft = TicketDraft {
        title: params.title,
        description: params.description,
        category: params.category,
        priority: params.priority.parse::<Priority>()?,
        submitter: UserId::new(params.submitter),
    };

    let attachment = match params.attach {
        Some(path) => {
            let bytes = fs::read(&path)?;
            let filename = path
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| {
                    ComplaintDeskError::InvalidInput(format!(
                        "Invalid attachment path: {}",
                        path.display()
                    ))
                })?
                .to_string();
            Some(Upload { bytes, filename })
        },
        None => None,
    };

    let ticket = context.ticket_service().create(draft, attachment)?;

    if output.is_json() {
        output.print_json(&ticket)?;
    } else {
        output.success(&format!("Created ticket #{}: {}", ticket.id, ticket.title));
        if let Some(path) = &ticket.attachment_path {
            output.info(&format!("Attachment stored at {path}"));
        }
    }
    Ok(())
}
