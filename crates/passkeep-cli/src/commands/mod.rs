//! Command handlers, one module per subcommand.

pub mod check;
pub mod generate;
pub mod hash;
pub mod misc;
pub mod verify;
