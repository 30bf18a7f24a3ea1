//! Runtime configuration
//!
//! Everything is derived from the command line; there are no config files.

use crate::cli::Args;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Fallback program name when `argv[0]` is unavailable
pub const DEFAULT_PROGRAM: &str = "gatocli";

/// Main configuration structure
#[derive(Debug, Clone)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Program name shown in usage and version output
    pub program: String,
    /// File read by `banner` when no path is given
    pub default_banner_path: PathBuf,
    /// Name used by `greet` when no name is given
    pub default_greet_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            program: DEFAULT_PROGRAM.to_string(),
            default_banner_path: PathBuf::from("banner.txt"),
            default_greet_name: "there".to_string(),
        }
    }
}

impl Config {
    /// Create configuration from command line arguments
    ///
    /// `arg0` is the invoked binary path; clap does not keep it.
    pub fn from_args(args: &Args, arg0: Option<&OsStr>) -> Self {
        Self {
            debug: args.debug,
            ..Self::for_program(arg0)
        }
    }

    /// Default configuration named after `arg0`
    ///
    /// Used as-is when the arguments themselves could not be parsed.
    pub fn for_program(arg0: Option<&OsStr>) -> Self {
        let program = arg0
            .and_then(|arg0| program_name(Path::new(arg0)))
            .unwrap_or_else(|| DEFAULT_PROGRAM.to_string());

        Self {
            program,
            ..Self::default()
        }
    }
}

/// File name component of the invoked binary path
fn program_name(arg0: &Path) -> Option<String> {
    arg0.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
}
