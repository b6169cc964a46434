//! CLI module for helpdesk.
//!
//! Defines command-line argument parsing and the one-shot commands.

pub mod args;
pub mod commands;

pub use args::{Cli, Command};
