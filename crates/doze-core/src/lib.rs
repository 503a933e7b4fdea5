//! Core behavior of the `doze` command.
//!
//! This crate holds everything observable about the program: how the
//! first command-line argument becomes a number of seconds, and the
//! blocking wait for that long. The binary in `crates/doze` is only the
//! clap surface over these functions.

mod parse;
mod wait;

pub use parse::*;
pub use wait::*;
