//! Handler for the `show` command

use super::common::HandlerContext;
use crate::cli::OutputFormatter;
use crate::core::TicketId;
use crate::error::Result;
use crate::service::TicketDetail;

/// Show one ticket with submitter, agent, and comments resolved
pub fn handle_show_command(
    ticket_ref: &str,
    project_dir: Option<&str>,
    output: &OutputFormatter,
) -> Result<()> {
    let context = HandlerContext::new(project_dir)?;
    let detail = context.ticket_service().get(TicketId::parse_str(ticket_ref)?)?;

    if output.is_json() {
        output.print_json(&detail)?;
    } else {
        display_detail(&detail, output);
    }
    Ok(())
}

fn display_detail(detail: &TicketDetail, output: &OutputFormatter) {
    let ticket = &detail.ticket;

    output.info(&format!("Ticket #{}: {}", ticket.id, ticket.title));
    output.info(&format!("  Status:   {}", ticket.status));
    output.info(&format!("  Priority: {}", ticket.priority));
    if let Some(category) = &ticket.category {
        output.info(&format!("  Category: {category}"));
    }

    let submitter = detail
        .submitter
        .as_ref()
        .map_or_else(|| ticket.submitter.to_string(), |u| u.display_name.clone());
    output.info(&format!("  Submitter: {submitter}"));

    if let Some(agent) = &detail.assigned_agent {
        output.info(&format!("  Agent:    {}", agent.display_name));
    }

    output.info(&format!(
        "  Created:  {}",
        ticket.created_at.format("%Y-%m-%d %H:%M")
    ));
    if let Some(closed_at) = ticket.closed_at {
        output.info(&format!("  Closed:   {}", closed_at.format("%Y-%m-%d %H:%M")));
    }
    if let Some(path) = &ticket.attachment_path {
        output.info(&format!("  Attachment: {path}"));
    }

    output.info("");
    output.info(&ticket.description);

    if !detail.comments.is_empty() {
        output.info("");
        output.info(&format!("Comments ({}):", detail.comments_count()));
        for view in &detail.comments {
            let author = view
                .author
                .as_ref()
                .map_or_else(|| view.comment.author.to_string(), |u| u.display_name.clone());
            output.info(&format!(
                "  [{}] {}: {}",
                view.comment.created_at.format("%Y-%m-%d %H:%M"),
                author,
                view.comment.content
            ));
        }
    }
}
