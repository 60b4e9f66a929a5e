//! Command-line interface for complaint-desk
//!
//! The CLI is a thin caller-facing surface over the service layer: argument
//! parsing, identity flags (who is acting), and output formatting. No domain
//! logic lives here.

pub mod handlers;
mod output;

pub use output::OutputFormatter;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Track support complaints from submission to closure
#[derive(Parser)]
#[command(name = "complaint-desk", version, about)]
pub struct Cli {
    /// Emit machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project directory (defaults to the current directory)
    #[arg(short, long, global = true)]
    pub project: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize ticket storage in the project directory
    Init,

    /// File a new ticket
    New {
        /// Ticket title (5-200 characters)
        #[arg(long)]
        title: String,

        /// Ticket description (10-2000 characters)
        #[arg(long)]
        description: String,

        /// Free-text category, e.g. Hardware or Network
        #[arg(long)]
        category: Option<String>,

        /// Priority: low, medium, high, critical
        #[arg(long, default_value = "medium")]
        priority: String,

        /// User id of the filing user
        #[arg(long)]
        submitter: String,

        /// File to attach to the ticket
        #[arg(long)]
        attach: Option<PathBuf>,
    },

    /// Show a ticket with its comments
    Show {
        /// Ticket id
        ticket: String,
    },

    /// List tickets, one page at a time
    List {
        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Tickets per page (configured default when omitted)
        #[arg(long)]
        page_size: Option<usize>,

        /// Sort key: priority, date, or status
        #[arg(long, default_value = "date")]
        sort: String,

        /// Only tickets submitted by or assigned to this user
        #[arg(long)]
        owner: Option<String>,
    },

    /// Assign a ticket to an agent
    Assign {
        /// Ticket id
        ticket: String,

        /// User id of the agent
        #[arg(long)]
        agent: String,
    },

    /// Set a ticket's status
    Status {
        /// Ticket id
        ticket: String,

        /// New status: opened, assigned, resolved, closed
        status: String,
    },

    /// Edit a ticket's title, description, category, or priority
    Edit {
        /// Ticket id
        ticket: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        priority: Option<String>,
    },

    /// Delete a ticket, its attachment, and its comments
    Delete {
        /// Ticket id
        ticket: String,
    },

    /// Work with comments on a ticket
    Comment {
        #[command(subcommand)]
        command: CommentCommands,
    },

    /// Show summary counts and the category histogram
    Dashboard,

    /// List users holding the agent role
    Agents,
}

#[derive(Subcommand)]
pub enum CommentCommands {
    /// Add a comment to a ticket
    Add {
        /// Ticket id
        ticket: String,

        /// Comment text (1-1000 characters)
        content: String,

        /// User id of the commenting user
        #[arg(long)]
        author: String,
    },

    /// List a ticket's comments, newest first
    List {
        /// Ticket id
        ticket: String,
    },

    /// Replace a comment's text
    Edit {
        /// Comment id
        comment: String,

        /// New comment text
        content: String,
    },

    /// Delete a comment
    Delete {
        /// Comment id
        comment: String,
    },
}
