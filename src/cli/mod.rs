//! CLI argument parsing for the Watchsac TUI.

mod args;

pub use args::{parse_args, CliConfig, VERSION};
