//! Startup banner and banner files

use crate::{error::Result, utils::FileSystemUtils};
use std::path::Path;

/// Printed before every command, followed by one extra newline
pub const STARTUP_BANNER: &str = concat!(
    "  ____       _         ____ _     ___ \n",
    " / ___| __ _| |_ ___  / ___| |   |_ _|\n",
    "| |  _ / _` | __/ _ \\| |   | |    | | \n",
    "| |_| | (_| | || (_) | |___| |___ | | \n",
    " \\____|\\__,_|\\__\\___/ \\____|_____|___|\n",
    "                                      \n",
);

/// Read a banner file verbatim, bytes and all
pub fn load_banner<P: AsRef<Path> + std::fmt::Debug>(path: P) -> Result<Vec<u8>> {
    FileSystemUtils::new().read_file(path)
}
