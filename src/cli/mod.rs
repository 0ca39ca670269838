pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::{error_message, exit_code, parse_exit_code, run};
