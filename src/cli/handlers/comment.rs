//! Handler for the `comment` subcommands

use super::common::HandlerContext;
use crate::cli::{CommentCommands, OutputFormatter};
use crate::core::{CommentBuilder, CommentId, TicketId};
use crate::error::Result;
use crate::storage::CommentRepository;

/// Dispatch a comment subcommand
pub fn handle_comment_command(
    command: CommentCommands,
    project_dir: Option<&str>,
    output: &OutputFormatter,
) -> Result<()> {
    let context = HandlerContext::new(project_dir)?;
    let service = context.comment_service();

    match command {
        CommentCommands::Add {
            ticket,
            content,
            author,
        } => {
            let comment = service.add(
                CommentBuilder::new()
                    .ticket_id(TicketId::parse_str(&ticket)?)
                    .author(author.as_str())
                    .content(content)
                    .build(),
            )?;
            if output.is_json() {
                output.print_json(&comment)?;
            } else {
                output.success(&format!(
                    "Comment #{} added to ticket #{}",
                    comment.id, comment.ticket_id
                ));
            }
        },

        CommentCommands::List { ticket } => {
            let views = service.list(TicketId::parse_str(&ticket)?)?;
            if output.is_json() {
                output.print_json(&views)?;
            } else if views.is_empty() {
                output.info("No comments");
            } else {
                for view in &views {
                    let author = view
                        .author
                        .as_ref()
                        .map_or_else(|| view.comment.author.to_string(), |u| u.display_name.clone());
                    output.info(&format!(
                        "#{} [{}] {}: {}",
                        view.comment.id,
                        view.comment.created_at.format("%Y-%m-%d %H:%M"),
                        author,
                        view.comment.content
                    ));
                }
            }
        },

        CommentCommands::Edit { comment, content } => {
            let mut existing = context
                .storage
                .load_comment(CommentId::parse_str(&comment)?)?;
            existing.content = content;
            let updated = service.update(existing)?;
            if output.is_json() {
                output.print_json(&updated)?;
            } else {
                output.success(&format!("Updated comment #{}", updated.id));
            }
        },

        CommentCommands::Delete { comment } => {
            let id = CommentId::parse_str(&comment)?;
            service.delete(id)?;
            if output.is_json() {
                output.print_json(&serde_json::json!({ "deleted": id }))?;
            } else {
                output.success(&format!("Deleted comment #{id}"));
            }
        },
    }
    Ok(())
}
