//! Subcommands of the `tictree` binary

pub mod dump;
pub mod play;
pub mod solve;
