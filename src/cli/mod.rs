//! Command-line interface: argument definitions and one handler per subcommand.

mod commands;
pub mod handlers;

pub use commands::{Cli, Commands};
