//! Handler for the `agents` command

use super::common::HandlerContext;
use crate::cli::OutputFormatter;
use crate::core::Role;
use crate::error::Result;
use crate::storage::UserDirectory;

/// List users eligible for ticket assignment
pub fn handle_agents_command(project_dir: Option<&str>, output: &OutputFormatter) -> Result<()> {
    let context = HandlerContext::new(project_dir)?;
    let agents = context.storage.users_in_role(Role::Agent)?;

    if output.is_json() {
        output.print_json(&agents)?;
    } else if agents.is_empty() {
        output.info("No agents in the user roster");
    } else {
        for agent in &agents {
            output.info(&format!("{} <{}> ({})", agent.display_name, agent.email, agent.id));
        }
    }
    Ok(())
}
