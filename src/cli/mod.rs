//! Command-line interface: argument parsing and command execution.

pub mod args;
pub mod commands;
pub mod enums;

pub use args::{Args, Command};
pub use enums::{CharsetArg, ModeArg};
