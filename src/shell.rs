//! Interactive console.
//!
//! Reads one command per line from stdin and re-renders the current page after
//! each one. The only timer is the deferred redirect after a ticket is
//! submitted; it runs on the same task as input handling.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::app::{App, IntakeTab};
use crate::filter::Choice;
use crate::forms::TicketType;
use crate::render::{render, Painter};
use crate::router::Route;
use crate::store::models::{Priority, Status};

pub const HELP: &str = "\
Commands:
  login <email> <password>   sign in
  logout                     sign out
  role                       switch between requester and operator
  go <path>                  open a page (/dashboard, /new-ticket, /knowledge-base,
                             /analytics, /profile, /settings)
  search <text>              search tickets or articles on the current page
  status <all|Open|In Progress|Resolved>
  priority <all|Low|Medium|High|Critical>
  tab <portal|chatbot|email> switch new-ticket channel
  set <field> <value>        fill a form field on the current page
  submit                     submit the form on the current page
  chat <message>             talk to the chatbot
  open <article-id>          open a knowledge base article
  close                      close the open article
  helpful                    mark the open article helpful
  action <name>              run a self-service quick action
  rate <1-5>                 choose a feedback rating
  comment <text>             feedback comment
  feedback                   submit feedback
  toggle <switch>            flip a notification setting
  select <field> <value>     change language, timezone or theme
  soon <feature>             try an unfinished feature
  help                       show this text
  quit                       leave the console";

/// A parsed console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Login { email: String, password: String },
    Logout,
    Role,
    Go(String),
    Search(String),
    Status(String),
    Priority(String),
    Tab(IntakeTab),
    Set { field: String, value: String },
    Submit,
    Chat(String),
    Open(String),
    Close,
    Helpful,
    Action(String),
    Rate(u8),
    Comment(String),
    Feedback,
    Toggle(String),
    Select { field: String, value: String },
    Soon(String),
    Help,
    Quit,
}

/// Console input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown command '{0}', type 'help'")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        "login" => {
            let mut parts = rest.split_whitespace();
            match (parts.next(), parts.next()) {
                (Some(email), Some(password)) => ShellCommand::Login {
                    email: email.to_string(),
                    password: password.to_string(),
                },
                _ => return Err(ParseError::Usage("login <email> <password>")),
            }
        }
        "logout" => ShellCommand::Logout,
        "role" => ShellCommand::Role,
        "go" if !rest.is_empty() => ShellCommand::Go(rest.to_string()),
        "go" => return Err(ParseError::Usage("go <path>")),
        "search" => ShellCommand::Search(rest.to_string()),
        "status" => ShellCommand::Status(rest.to_string()),
        "priority" => ShellCommand::Priority(rest.to_string()),
        "tab" => match rest.to_lowercase().as_str() {
            "portal" => ShellCommand::Tab(IntakeTab::Portal),
            "chatbot" | "chat" => ShellCommand::Tab(IntakeTab::Chatbot),
            "email" => ShellCommand::Tab(IntakeTab::Email),
            _ => return Err(ParseError::Usage("tab <portal|chatbot|email>")),
        },
        "set" | "select" => {
            let (field, value) = rest
                .split_once(char::is_whitespace)
                .map(|(f, v)| (f.to_string(), v.trim().to_string()))
                .ok_or(ParseError::Usage("set|select <field> <value>"))?;
            if word == "set" {
                ShellCommand::Set { field, value }
            } else {
                ShellCommand::Select { field, value }
            }
        }
        "submit" => ShellCommand::Submit,
        "chat" => ShellCommand::Chat(rest.to_string()),
        "open" if !rest.is_empty() => ShellCommand::Open(rest.to_string()),
        "open" => return Err(ParseError::Usage("open <article-id>")),
        "close" => ShellCommand::Close,
        "helpful" => ShellCommand::Helpful,
        "action" => ShellCommand::Action(rest.to_string()),
        "rate" => rest
            .parse()
            .map(ShellCommand::Rate)
            .map_err(|_| ParseError::Usage("rate <1-5>"))?,
        "comment" => ShellCommand::Comment(rest.to_string()),
        "feedback" => ShellCommand::Feedback,
        "toggle" => ShellCommand::Toggle(rest.to_string()),
        "soon" => ShellCommand::Soon(rest.to_string()),
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => return Err(ParseError::Unknown(other.to_string())),
    };

    Ok(Some(command))
}

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Re-render the page.
    Render,
    /// Print a message without re-rendering.
    Message(String),
    Quit,
}

/// Apply one command to the application.
pub fn apply(app: &mut App, command: ShellCommand, now: Instant) -> Outcome {
    let route = app.route();

    match command {
        ShellCommand::Login { email, password } => {
            // Failure is reported through a toast.
            let _ = app.login(&email, &password, now);
        }
        ShellCommand::Logout => app.logout(),
        ShellCommand::Role => {
            app.toggle_role();
        }
        ShellCommand::Go(path) => {
            if let Err(e) = app.navigate(&path) {
                return Outcome::Message(e.to_string());
            }
        }
        ShellCommand::Search(text) => match route {
            Route::Dashboard => app.set_ticket_search(&text),
            Route::KnowledgeBase => app.set_article_search(&text),
            _ => return Outcome::Message("Nothing to search on this page".to_string()),
        },
        ShellCommand::Status(_) | ShellCommand::Priority(_) if route != Route::Dashboard => {
            return Outcome::Message("Filters are only available on the dashboard".to_string());
        }
        ShellCommand::Status(value) => match value.parse::<Choice<Status>>() {
            Ok(choice) => app.set_status_filter(choice),
            Err(e) => return Outcome::Message(e.to_string()),
        },
        ShellCommand::Priority(value) => match value.parse::<Choice<Priority>>() {
            Ok(choice) => app.set_priority_filter(choice),
            Err(e) => return Outcome::Message(e.to_string()),
        },
        ShellCommand::Tab(tab) => app.select_tab(tab),
        ShellCommand::Set { field, value } => {
            if let Err(message) = set_field(app, &field, &value) {
                return Outcome::Message(message);
            }
        }
        ShellCommand::Submit => submit(app, now),
        ShellCommand::Chat(_) if route != Route::NewTicket => {
            return Outcome::Message("Open /new-ticket to chat with the assistant".to_string());
        }
        ShellCommand::Chat(message) => {
            app.select_tab(IntakeTab::Chatbot);
            app.send_chat(&message);
        }
        ShellCommand::Open(id) => {
            if !app.open_article(&id) {
                return Outcome::Message(format!("No article '{}'", id));
            }
        }
        ShellCommand::Close => app.close_article(),
        ShellCommand::Helpful => app.mark_helpful(now),
        ShellCommand::Action(name) => app.self_service(&name, now),
        ShellCommand::Rate(stars) => app.profile.feedback.rating = stars,
        ShellCommand::Comment(text) => app.profile.feedback.comment = text,
        ShellCommand::Feedback => {
            let _ = app.submit_feedback(now);
        }
        ShellCommand::Toggle(switch) => {
            if app.settings.toggle(&switch).is_none() {
                return Outcome::Message(format!("No setting '{}'", switch));
            }
        }
        ShellCommand::Select { field, value } => {
            if !app.settings.select(&field, &value) {
                return Outcome::Message(format!("Cannot set {} to '{}'", field, value));
            }
        }
        ShellCommand::Soon(feature) => match route {
            Route::Settings => app.integration(&feature, now),
            _ => app.coming_soon(&feature, now),
        },
        ShellCommand::Help => return Outcome::Message(HELP.to_string()),
        ShellCommand::Quit => return Outcome::Quit,
    }

    Outcome::Render
}

fn set_field(app: &mut App, field: &str, value: &str) -> Result<(), String> {
    match (app.route(), app.intake.tab) {
        (Route::NewTicket, IntakeTab::Portal) => {
            let form = &mut app.intake.form;
            match field {
                "subject" => form.subject = value.to_string(),
                "description" => form.description = value.to_string(),
                "type" => {
                    form.kind = Some(value.parse::<TicketType>().map_err(|e| e.to_string())?)
                }
                "priority" => form.priority = value.parse::<Priority>().map_err(|e| e.to_string())?,
                "category" => form.category = Some(value.to_string()),
                _ => return Err(format!("No field '{}' on the portal form", field)),
            }
        }
        (Route::NewTicket, IntakeTab::Email) => {
            let email = &mut app.intake.email;
            match field {
                "subject" => email.subject = value.to_string(),
                "body" | "message" => email.body = value.to_string(),
                _ => return Err(format!("No field '{}' on the email form", field)),
            }
        }
        (Route::Profile, _) => {
            if !app.profile.form.set_field(field, value) {
                return Err(format!("Field '{}' cannot be edited", field));
            }
        }
        _ => return Err("No form on this page".to_string()),
    }
    Ok(())
}

fn submit(app: &mut App, now: Instant) {
    match (app.route(), app.intake.tab) {
        (Route::NewTicket, IntakeTab::Portal) => {
            let _ = app.submit_ticket(now);
        }
        (Route::NewTicket, IntakeTab::Email) => app.send_email(now),
        (Route::Profile, _) => app.save_profile(now),
        (Route::Settings, _) => app.save_settings(now),
        _ => debug!(route = %app.route(), "nothing to submit"),
    }
}

/// Run the console until `quit` or end of input.
pub async fn run(app: &mut App, painter: Painter) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("{}", render(app, &painter));

    loop {
        let deadline = app.next_deadline();
        let wake = deadline.unwrap_or_else(|| Instant::now() + Duration::from_secs(3600));
        let timer = tokio::time::sleep_until(tokio::time::Instant::from_std(wake));

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read input")? else {
                    break;
                };
                let now = Instant::now();
                app.tick(now);

                match parse_line(&line) {
                    Ok(None) => continue,
                    Ok(Some(command)) => match apply(app, command, now) {
                        Outcome::Render => println!("{}", render(app, &painter)),
                        Outcome::Message(message) => println!("{}", message),
                        Outcome::Quit => break,
                    },
                    Err(e) => println!("{}", e),
                }
            }
            _ = timer, if deadline.is_some() => {
                let before = app.route();
                app.tick(Instant::now());
                if app.route() != before {
                    println!("{}", render(app, &painter));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn app() -> App {
        App::new(Config::default()).unwrap()
    }

    fn run_lines(app: &mut App, lines: &[&str], now: Instant) -> Vec<Outcome> {
        lines
            .iter()
            .filter_map(|l| parse_line(l).unwrap())
            .map(|c| apply(app, c, now))
            .collect()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(
            parse_line("login a@b.com pw").unwrap(),
            Some(ShellCommand::Login {
                email: "a@b.com".to_string(),
                password: "pw".to_string()
            })
        );
        assert_eq!(
            parse_line("status In Progress").unwrap(),
            Some(ShellCommand::Status("In Progress".to_string()))
        );
        assert_eq!(
            parse_line("set description  Screen is black ").unwrap(),
            Some(ShellCommand::Set {
                field: "description".to_string(),
                value: "Screen is black".to_string()
            })
        );
        assert_eq!(parse_line("search").unwrap(), Some(ShellCommand::Search(String::new())));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_line("login only-email").unwrap_err(),
            ParseError::Usage("login <email> <password>")
        );
        assert_eq!(
            parse_line("dance").unwrap_err(),
            ParseError::Unknown("dance".to_string())
        );
        assert!(parse_line("rate lots").is_err());
    }

    #[test]
    fn test_dashboard_filters() {
        let mut app = app();
        let now = Instant::now();
        run_lines(
            &mut app,
            &["login ops@corp.example pw", "status In Progress", "priority Critical"],
            now,
        );
        assert_eq!(app.dashboard.query.status, Choice::Only(Status::InProgress));
        assert_eq!(app.dashboard.query.priority, Choice::Only(Priority::Critical));
        assert_eq!(app.visible_tickets().len(), 1);

        let outcomes = run_lines(&mut app, &["status Closed"], now);
        assert_eq!(
            outcomes,
            vec![Outcome::Message("unknown status 'Closed'".to_string())]
        );
    }

    #[test]
    fn test_portal_submission_flow() {
        let mut app = app();
        let now = Instant::now();
        run_lines(
            &mut app,
            &[
                "login a@b.com pw",
                "go /new-ticket",
                "set subject Keyboard missing keys",
                "submit",
            ],
            now,
        );
        assert!(app.pending_redirect().is_none());
        assert_eq!(app.toaster().latest().unwrap().title, "Error");

        run_lines(
            &mut app,
            &[
                "set description The E key fell off",
                "set type hardware",
                "set priority Low",
                "submit",
            ],
            now,
        );
        assert_eq!(app.toaster().latest().unwrap().title, "Success");
        assert_eq!(app.intake.form.priority, Priority::Low);

        app.tick(now + Duration::from_millis(1500));
        assert_eq!(app.route(), Route::Dashboard);
    }

    #[test]
    fn test_search_depends_on_page() {
        let mut app = app();
        let now = Instant::now();
        run_lines(&mut app, &["login a@b.com pw", "go /knowledge-base", "search vpn"], now);
        assert_eq!(app.knowledge_view.search, "vpn");
        assert!(app.dashboard.query.search.is_empty());

        let outcomes = run_lines(&mut app, &["go /analytics", "search vpn"], now);
        assert!(matches!(outcomes[1], Outcome::Message(_)));
    }

    #[test]
    fn test_unknown_page() {
        let mut app = app();
        let outcomes = run_lines(&mut app, &["go /admin"], Instant::now());
        assert_eq!(
            outcomes,
            vec![Outcome::Message("no page at '/admin'".to_string())]
        );
        assert_eq!(app.route(), Route::Login);
    }

    #[test]
    fn test_chat_switches_tab() {
        let mut app = app();
        run_lines(
            &mut app,
            &["login a@b.com pw", "go /new-ticket", "chat my VPN drops"],
            Instant::now(),
        );
        assert_eq!(app.intake.tab, IntakeTab::Chatbot);
        assert_eq!(app.intake.chat.lines().len(), 2);
    }

    #[test]
    fn test_page_bound_commands_elsewhere() {
        let mut app = app();
        let now = Instant::now();
        run_lines(&mut app, &["login a@b.com pw", "go /knowledge-base"], now);

        let outcomes = run_lines(&mut app, &["chat hello", "status Open", "priority High"], now);
        assert!(outcomes.iter().all(|o| matches!(o, Outcome::Message(_))));
        assert_eq!(app.intake.tab, IntakeTab::Portal);
        assert!(app.intake.chat.lines().is_empty());
        assert_eq!(app.dashboard.query.status, Choice::All);
        assert_eq!(app.dashboard.query.priority, Choice::All);
    }
}
