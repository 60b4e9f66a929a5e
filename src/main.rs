//! complaint-desk - Support-complaint tracking
//!
//! This is the main entry point for the complaint-desk CLI. It handles
//! command-line argument parsing and dispatches to the appropriate command
//! handlers.

use clap::Parser;
use complaint_desk::cli::handlers::{
    handle_agents_command, handle_assign_command, handle_comment_command,
    handle_dashboard_command, handle_delete_command, handle_edit_command, handle_init_command,
    handle_list_command, handle_new_command, handle_show_command, handle_status_command,
    EditParams, ListParams, NewParams,
};
use complaint_desk::cli::{Cli, Commands, OutputFormatter};
use complaint_desk::error::Result;
use std::process;

fn main() {
    let cli = Cli::parse();

    let formatter = OutputFormatter::new(cli.json, cli.no_color);

    if let Err(e) = run(cli, &formatter) {
        formatter.error(&e.to_string());
        process::exit(1);
    }
}

/// Dispatch the parsed command to its handler
fn run(cli: Cli, formatter: &OutputFormatter) -> Result<()> {
    // Set up logging if verbose mode is enabled
    if cli.verbose {
        tracing_subscriber::fmt().with_env_filter("debug").init();
    }

    let project = cli.project;

    match cli.command {
        Commands::Init => handle_init_command(project.as_deref(), formatter),
        Commands::New {
            title,
            description,
            category,
            priority,
            submitter,
            attach,
        } => handle_new_command(
            NewParams {
                title,
                description,
                category,
                priority,
                submitter,
                attach,
                project_dir: project,
            },
            formatter,
        ),
        Commands::Show { ticket } => handle_show_command(&ticket, project.as_deref(), formatter),
        Commands::List {
            page,
            page_size,
            sort,
            owner,
        } => handle_list_command(
            ListParams {
                page,
                page_size,
                sort,
                owner,
                project_dir: project,
            },
            formatter,
        ),
        Commands::Assign { ticket, agent } => {
            handle_assign_command(&ticket, &agent, project.as_deref(), formatter)
        },
        Commands::Status { ticket, status } => {
            handle_status_command(&ticket, &status, project.as_deref(), formatter)
        },
        Commands::Edit {
            ticket,
            title,
            description,
            category,
            priority,
        } => handle_edit_command(
            EditParams {
                ticket,
                title,
                description,
                category,
                priority,
                project_dir: project,
            },
            formatter,
        ),
        Commands::Delete { ticket } => {
            handle_delete_command(&ticket, project.as_deref(), formatter)
        },
        Commands::Comment { command } => {
            handle_comment_command(command, project.as_deref(), formatter)
        },
        Commands::Dashboard => handle_dashboard_command(project.as_deref(), formatter),
        Commands::Agents => handle_agents_command(project.as_deref(), formatter),
    }
}
