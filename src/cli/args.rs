//! Command-line argument parsing
//!
//! clap only owns the global `--debug` flag. The command token and
//! everything after it are collected raw and matched by the dispatcher, so
//! `--help`, `-v` and values like `-1` reach the command table untouched.

use crate::error::{CliError, Result};
use clap::{ArgAction, Parser};
use std::ffi::OsString;

/// GatoCLI - a small collection of demonstration commands
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
#[command(name = "gatocli")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Enable debug output
    #[arg(long, action = ArgAction::SetTrue, overrides_with = "debug")]
    pub debug: bool,

    /// Command name followed by its arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<OsString>,
}

impl Args {
    /// Command tokens as strings; bytes that are not UTF-8 become U+FFFD
    pub fn command_args(&self) -> Vec<String> {
        self.command
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }
}

/// Parse command line arguments
pub fn parse_args() -> Result<Args> {
    parse_args_from(std::env::args_os())
}

/// Parse an explicit argument list, `argv[0]` included
pub fn parse_args_from<I, T>(argv: I) -> Result<Args>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Args::try_parse_from(argv).map_err(CliError::from)
}
