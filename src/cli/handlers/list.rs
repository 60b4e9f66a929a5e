//! Handler for the `list` command

use super::common::{ticket_row, HandlerContext};
use crate::cli::OutputFormatter;
use crate::core::UserId;
use crate::error::Result;
use crate::service::{PageRequest, SortKey};

/// Parameters for listing tickets
pub struct ListParams {
    pub page: usize,
    pub page_size: Option<usize>,
    pub sort: String,
    pub owner: Option<String>,
    pub project_dir: Option<String>,
}

/// List one page of tickets
pub fn handle_list_command(params: ListParams, output: &OutputFormatter) -> Result<()> {
    let context = HandlerContext::new(params.project_dir.as_deref())?;

    let mut request = PageRequest::new(params.page)
        .page_size(params.page_size.unwrap_or(context.config.listing.page_size))
        .sort(SortKey::parse(&params.sort));
    if let Some(owner) = params.owner {
        request = request.owner(UserId::new(owner));
    }

    let result = context.ticket_service().list(&request)?;

    if output.is_json() {
        output.print_json(&result)?;
    } else {
        for ticket in &result.items {
            output.info(&ticket_row(ticket));
        }
        output.info("");
        output.info(&format!(
            "Page {}/{} ({} tickets)",
            result.page_number,
            result.total_pages().max(1),
            result.total_count
        ));
    }
    Ok(())
}
