//! Subcommands of the `xo` binary

pub mod compare;
pub mod play;
pub mod simulate;
pub mod suggest;
