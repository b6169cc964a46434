//! One-shot command implementations.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::args::{ArticlesArgs, InitArgs, OutputArgs, TicketsArgs};
use crate::analytics::AnalyticsReport;
use crate::config::{config_path, Config};
use crate::filter::{filter_articles, filter_tickets, TicketQuery, TicketStats};
use crate::render::pages;
use crate::render::Painter;
use crate::session::Role;
use crate::store::{seeded_analytics, KnowledgeStore, TicketStore};

/// Write a default config file.
pub fn run_init(args: &InitArgs, explicit: Option<&Path>, out: &mut impl Write) -> Result<()> {
    let path = explicit
        .map(Path::to_path_buf)
        .or_else(config_path)
        .context("Cannot determine config directory")?;

    if args.if_needed && path.exists() {
        writeln!(out, "Config already present at {}", path.display())?;
        return Ok(());
    }

    Config::default().save(&path)?;
    info!(path = %path.display(), "wrote default config");
    writeln!(out, "Wrote default config to {}", path.display())?;
    Ok(())
}

pub fn run_tickets(args: &TicketsArgs, painter: &Painter, out: &mut impl Write) -> Result<()> {
    let store = TicketStore::seeded()?;
    let query = TicketQuery {
        search: args.query.clone(),
        status: args.status.parse().context("Invalid --status")?,
        priority: args.priority.parse().context("Invalid --priority")?,
    };
    let found = filter_tickets(store.all(), &query);

    if args.output.json {
        serde_json::to_writer_pretty(&mut *out, &found)?;
        writeln!(out)?;
        return Ok(());
    }

    let role = if args.operator {
        Role::Operator
    } else {
        Role::Requester
    };
    let mut text = String::new();
    pages::ticket_table(&found, role, painter, &mut text)?;
    out.write_all(text.as_bytes())?;
    Ok(())
}

pub fn run_stats(args: &OutputArgs, out: &mut impl Write) -> Result<()> {
    let store = TicketStore::seeded()?;
    let stats = TicketStats::from_tickets(store.all());

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &stats)?;
        writeln!(out)?;
    } else {
        let mut text = String::new();
        pages::stats(&stats, &mut text)?;
        out.write_all(text.as_bytes())?;
    }
    Ok(())
}

pub fn run_articles(args: &ArticlesArgs, out: &mut impl Write) -> Result<()> {
    let store = KnowledgeStore::seeded()?;
    let found = filter_articles(store.articles(), &args.query);

    if args.output.json {
        serde_json::to_writer_pretty(&mut *out, &found)?;
        writeln!(out)?;
        return Ok(());
    }

    let mut text = String::new();
    pages::article_list(&found, &mut text)?;
    out.write_all(text.as_bytes())?;
    Ok(())
}

pub fn run_faqs(out: &mut impl Write) -> Result<()> {
    let store = KnowledgeStore::seeded()?;
    let mut text = String::new();
    pages::faq_list(store.faqs(), &mut text)?;
    out.write_all(text.as_bytes())?;
    Ok(())
}

pub fn run_analytics(args: &OutputArgs, painter: &Painter, out: &mut impl Write) -> Result<()> {
    let report = AnalyticsReport::from_summary(&seeded_analytics()?);

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        let mut text = String::new();
        pages::analytics(&report, painter, &mut text)?;
        out.write_all(text.as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn tickets_args(query: &str, status: &str) -> TicketsArgs {
        TicketsArgs {
            query: query.to_string(),
            status: status.to_string(),
            priority: "all".to_string(),
            operator: false,
            output: OutputArgs { json: true },
        }
    }

    #[test]
    fn test_tickets_json() {
        let mut out = Vec::new();
        run_tickets(&tickets_args("", "Open"), &Painter::new(false), &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let ids: Vec<_> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(ids, vec!["TKT-2024-001", "TKT-2024-004"]);
    }

    #[test]
    fn test_tickets_rejects_unknown_status() {
        let mut out = Vec::new();
        let err = run_tickets(&tickets_args("", "Closed"), &Painter::new(false), &mut out)
            .unwrap_err();
        assert!(format!("{:#}", err).contains("unknown status 'Closed'"));
    }

    #[test]
    fn test_init_if_needed() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        let mut out = Vec::new();

        run_init(&InitArgs { if_needed: true }, Some(&path), &mut out).unwrap();
        assert!(path.exists());

        std::fs::write(&path, "colors: false\n").unwrap();
        run_init(&InitArgs { if_needed: true }, Some(&path), &mut out).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "colors: false\n");

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("already present"));
    }

    #[test]
    fn test_analytics_json() {
        let mut out = Vec::new();
        run_analytics(&OutputArgs { json: true }, &Painter::new(false), &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["resolution_rate"], 52);
        assert_eq!(value["trend"].as_array().unwrap().len(), 6);
    }
}
