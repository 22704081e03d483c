use crate::{project_commands::ProjectCommands, request_commands::RequestCommands};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Request operations
    Request {
        #[command(subcommand)]
        action: RequestCommands,
    },

    /// Approved-project catalog
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },

    /// Summary of the user's projects and open requests
    Dashboard,

    /// Show the session user
    User,
}
