//! Handler for the `dashboard` command

use super::common::HandlerContext;
use crate::cli::OutputFormatter;
use crate::error::Result;

/// Show summary counts and the category histogram
pub fn handle_dashboard_command(
    project_dir: Option<&str>,
    output: &OutputFormatter,
) -> Result<()> {
    let context = HandlerContext::new(project_dir)?;
    let stats = context.ticket_service().dashboard()?;

    if output.is_json() {
        output.print_json(&stats)?;
    } else {
        output.info("Dashboard:");
        output.info(&format!("  Total tickets:    {}", stats.total_tickets));
        output.info(&format!("  Open tickets:     {}", stats.open_tickets));
        output.info(&format!("  Resolved tickets: {}", stats.resolved_tickets));

        if !stats.tickets_by_category.is_empty() {
            output.info("");
            output.info("By category:");
            for (category, count) in &stats.tickets_by_category {
                output.info(&format!("  {category}: {count}"));
            }
        }
    }
    Ok(())
}
