//! wavwalk CLI library.
//!
//! Command implementations and logging setup for the `wavwalk` binary.

pub mod commands;
pub mod logging;
