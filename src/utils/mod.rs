//! Utility modules for common functionality
//!
//! Provides argument validation and file reading shared by the commands.

pub mod fs;
pub mod numeric;

pub use fs::FileSystemUtils;
pub use numeric::{PositiveInt, PositiveIntError, parse_positive_int};
