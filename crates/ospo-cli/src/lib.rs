//! ospo-cli library
//!
//! Command definitions and execution for the `ospo` binary, exported so the
//! commands can be driven from tests.

pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod project_commands;
pub mod request_commands;
pub mod session;
pub mod views;

#[cfg(test)]
mod tests;

pub use app::{App, Outcome};
pub use cli::Cli;
pub use error::{CliError, Result as CliResult};
