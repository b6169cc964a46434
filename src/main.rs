//! Helpdesk CLI - IT ticketing console.

use std::io;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use helpdesk::cli::commands;
use helpdesk::cli::{Cli, Command};
use helpdesk::config::load_config;
use helpdesk::render::Painter;
use helpdesk::{shell, App};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "helpdesk=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref());
    let painter = Painter::new(config.colors && !cli.no_color);
    let mut out = io::stdout().lock();

    match cli.command {
        Command::Init(args) => commands::run_init(&args, cli.config.as_deref(), &mut out),
        Command::Tickets(args) => commands::run_tickets(&args, &painter, &mut out),
        Command::Stats(args) => commands::run_stats(&args, &mut out),
        Command::Articles(args) => commands::run_articles(&args, &mut out),
        Command::Faqs => commands::run_faqs(&mut out),
        Command::Analytics(args) => commands::run_analytics(&args, &painter, &mut out),
        Command::Shell(args) => {
            drop(out);
            let mut app = App::new(config)?;
            if let (Some(email), Some(password)) = (&args.email, &args.password) {
                // A rejected login shows up as a toast on the first screen.
                let _ = app.login(email, password, Instant::now());
            }

            tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .context("Failed to start runtime")?
                .block_on(shell::run(&mut app, painter))
        }
    }
}
