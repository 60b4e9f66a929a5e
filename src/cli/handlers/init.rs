//! Handler for the `init` command

use super::common::HandlerContext;
use crate::cli::OutputFormatter;
use crate::error::Result;

/// Create the storage layout for a project
pub fn handle_init_command(project_dir: Option<&str>, output: &OutputFormatter) -> Result<()> {
    let context = HandlerContext::resolve(project_dir)?;
    context.storage.init()?;

    if output.is_json() {
        output.print_json(&serde_json::json!({
            "initialized": true,
            "storage_root": context.storage.root(),
        }))?;
    } else {
        output.success(&format!(
            "Initialized ticket storage at {}",
            context.storage.root().display()
        ));
    }
    Ok(())
}
