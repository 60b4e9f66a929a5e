//! Command handlers
//!
//! One handler per subcommand. Handlers resolve the project context, build
//! the services over it, call exactly one service operation, and format the
//! result; they contain no workflow logic of their own.

mod agents;
mod assign;
mod comment;
mod common;
mod dashboard;
mod delete;
mod edit;
mod init;
mod list;
mod new;
mod show;
mod status;

pub use agents::handle_agents_command;
pub use assign::handle_assign_command;
pub use comment::handle_comment_command;
pub use common::HandlerContext;
pub use dashboard::handle_dashboard_command;
pub use delete::handle_delete_command;
pub use edit::{handle_edit_command, EditParams};
pub use init::handle_init_command;
pub use list::{handle_list_command, ListParams};
pub use new::{handle_new_command, NewParams};
pub use show::handle_show_command;
pub use status::handle_status_command;
