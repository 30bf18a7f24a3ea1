//! Command-line interface module
//!
//! Provides argument parsing, the command table and the output streams
//! handlers write to.

pub mod args;
pub mod commands;
pub mod console;

pub use args::{Args, parse_args, parse_args_from};
pub use commands::{COMMANDS, CommandSpec, Context, execute_command, run, usage};
pub use console::Console;
