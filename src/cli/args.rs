//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// IT helpdesk console: tickets, knowledge base and analytics.
#[derive(Parser, Debug)]
#[command(name = "helpdesk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of the default location.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable coloured output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default config file.
    Init(InitArgs),

    /// List tickets matching a search and filters.
    Tickets(TicketsArgs),

    /// Show ticket counts by status.
    Stats(OutputArgs),

    /// Search knowledge base articles.
    Articles(ArticlesArgs),

    /// Show the FAQ list.
    Faqs,

    /// Show the analytics dashboard.
    Analytics(OutputArgs),

    /// Start the interactive console.
    Shell(ShellArgs),
}

/// Arguments for the init command.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Only write the file if it does not exist yet.
    #[arg(long)]
    pub if_needed: bool,
}

/// Shared output switch.
#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the tickets command.
#[derive(Args, Debug)]
pub struct TicketsArgs {
    /// Case-insensitive text matched against subject and id.
    #[arg(long, short, default_value = "")]
    pub query: String,

    /// `all`, `Open`, `In Progress` or `Resolved`.
    #[arg(long, default_value = "all")]
    pub status: String,

    /// `all`, `Low`, `Medium`, `High` or `Critical`.
    #[arg(long, default_value = "all")]
    pub priority: String,

    /// Show the operator view, including requesters.
    #[arg(long)]
    pub operator: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the articles command.
#[derive(Args, Debug)]
pub struct ArticlesArgs {
    /// Text matched against title, category and tags.
    #[arg(long, short, default_value = "")]
    pub query: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the shell command.
#[derive(Args, Debug)]
pub struct ShellArgs {
    /// Sign in immediately with this email.
    #[arg(long, requires = "password")]
    pub email: Option<String>,

    /// Password for `--email`.
    #[arg(long, requires = "email")]
    pub password: Option<String>,
}
