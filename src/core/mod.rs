//! Core command logic
//!
//! Pure functions behind each command. Nothing here writes to the terminal;
//! the handlers in `cli::commands` do the printing.

pub mod arithmetic;
pub mod banner;
pub mod coin;
pub mod greeting;
pub mod text;

pub use coin::CoinFace;
