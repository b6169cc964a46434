//! Text rendering of each page.

use std::fmt::{self, Write};

use crate::analytics::{AnalyticsReport, BreakdownRow};
use crate::app::{App, IntakeTab, SELF_SERVICE_ACTIONS};
use crate::filter::TicketStats;
use crate::forms::{Speaker, TicketType, TICKET_CATEGORIES};
use crate::router::Route;
use crate::session::Role;
use crate::store::models::{FaqEntry, KnowledgeArticle, Priority, Ticket};
use crate::toast::Severity;

use super::tone::{
    category_glyph, priority_label_tone, priority_tone, status_tone, Painter, Tone,
};

const BAR_WIDTH: usize = 30;

const RECENT_ACTIVITY: [(&str, &str, &str); 4] = [
    ("Created ticket", "Password Reset Request", "2 hours ago"),
    ("Updated ticket", "VPN Access Issue", "1 day ago"),
    ("Closed ticket", "Software Installation", "3 days ago"),
    ("Submitted feedback", "5-star rating", "5 days ago"),
];

/// Render the current page with navigation and toasts.
pub fn render(app: &App, painter: &Painter) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_screen(app, painter, &mut out);
    out
}

fn write_screen(app: &App, p: &Painter, out: &mut impl Write) -> fmt::Result {
    if app.route() != Route::Login {
        header(app, p, out)?;
    }

    match app.route() {
        Route::Login => login(p, out)?,
        Route::Dashboard => dashboard(app, p, out)?,
        Route::NewTicket => new_ticket(app, p, out)?,
        Route::KnowledgeBase => knowledge_base(app, p, out)?,
        Route::Analytics => analytics(&app.analytics(), p, out)?,
        Route::Profile => profile(app, p, out)?,
        Route::Settings => settings(app, p, out)?,
    }

    toasts(app, p, out)
}

fn header(app: &App, p: &Painter, out: &mut impl Write) -> fmt::Result {
    let menu: Vec<String> = Route::NAVIGATION
        .iter()
        .map(|r| {
            if *r == app.route() {
                p.bold(&format!("*{}*", r.title()))
            } else {
                r.title().to_string()
            }
        })
        .collect();
    writeln!(out, "{}", menu.join(" | "))?;

    let user = app
        .session()
        .user()
        .map(|u| u.name.as_str())
        .unwrap_or("U");
    let initial = user.chars().next().unwrap_or('U');
    let mode = match app.session().role() {
        Role::Operator => "Admin Mode",
        Role::Requester => "Employee Mode",
    };
    writeln!(out, "({}) {}  [{}]", initial, user, mode)?;
    writeln!(out)
}

fn login(p: &Painter, out: &mut impl Write) -> fmt::Result {
    writeln!(out, "{}", p.bold("POWERGRID AI Ticketing System"))?;
    writeln!(out, "Sign in to continue: login <email> <password>")
}

fn dashboard(app: &App, p: &Painter, out: &mut impl Write) -> fmt::Result {
    let role = app.session().role();
    writeln!(out, "{}", p.bold("Ticket Dashboard"))?;
    writeln!(
        out,
        "{}",
        match role {
            Role::Operator => "Manage all support tickets",
            Role::Requester => "View your support tickets",
        }
    )?;
    writeln!(out)?;

    stats(&app.ticket_stats(), out)?;
    writeln!(out)?;
    writeln!(out, "Coming soon: {}", UPCOMING_FEATURES.join(", "))?;
    writeln!(out)?;

    let query = &app.dashboard.query;
    writeln!(
        out,
        "{} -- search: \"{}\"  status: {}  priority: {}",
        match role {
            Role::Operator => "All support tickets in the system",
            Role::Requester => "Your submitted tickets",
        },
        query.search,
        query.status,
        query.priority
    )?;
    ticket_table(&app.visible_tickets(), role, p, out)
}

/// Stat cards.
pub fn stats(stats: &TicketStats, out: &mut impl Write) -> fmt::Result {
    writeln!(
        out,
        "Total: {}  Open: {}  In Progress: {}  Resolved: {}",
        stats.total, stats.open, stats.in_progress, stats.resolved
    )
}

/// Ticket table; the requester column is shown to operators only.
pub fn ticket_table(
    tickets: &[&Ticket],
    role: Role,
    p: &Painter,
    out: &mut impl Write,
) -> fmt::Result {
    if tickets.is_empty() {
        return writeln!(out, "No tickets found");
    }

    for ticket in tickets {
        write!(
            out,
            "{:<13} {:<32} {} {} {:<10} {:<7}",
            ticket.id,
            ticket.subject,
            p.badge(ticket.status.as_str(), status_tone(ticket.status)),
            p.badge(ticket.priority.as_str(), priority_tone(ticket.priority)),
            ticket.category,
            ticket.channel,
        )?;
        if role == Role::Operator {
            write!(out, " {}", ticket.requester)?;
        }
        writeln!(
            out,
            " {} {}",
            ticket.assignee.as_deref().unwrap_or("Unassigned"),
            ticket.created_at.format("%Y-%m-%d %H:%M")
        )?;
    }
    Ok(())
}

/// Dashboard cards that only raise a coming-soon notice.
pub const UPCOMING_FEATURES: [&str; 3] = [
    "AI-powered Auto-routing",
    "Automated Classification",
    "Smart Knowledge Suggestions",
];

/// Enterprise systems listed on the settings page.
pub const INTEGRATIONS: [&str; 3] = ["GLPI", "SAP Solman", "ServiceNow"];

fn new_ticket(app: &App, p: &Painter, out: &mut impl Write) -> fmt::Result {
    writeln!(out, "{}", p.bold("Create New Ticket"))?;
    writeln!(
        out,
        "AI-powered ticket routing and smart classification coming soon!"
    )?;
    let tab = |t: IntakeTab, label: &str| {
        if app.intake.tab == t {
            p.bold(&format!("*{}*", label))
        } else {
            label.to_string()
        }
    };
    writeln!(
        out,
        "{} | {} | {}",
        tab(IntakeTab::Portal, "Portal Form"),
        tab(IntakeTab::Chatbot, "Chatbot"),
        tab(IntakeTab::Email, "Email")
    )?;
    writeln!(out)?;

    match app.intake.tab {
        IntakeTab::Portal => {
            let form = &app.intake.form;
            writeln!(out, "Subject *:     {}", form.subject)?;
            writeln!(out, "Description *: {}", form.description)?;
            writeln!(
                out,
                "Type *:        {}",
                form.kind.map(|k| k.as_str()).unwrap_or("(select type)")
            )?;
            writeln!(out, "Priority:      {}", form.priority)?;
            writeln!(
                out,
                "Category:      {}",
                form.category.as_deref().unwrap_or("(select category)")
            )?;
            let types: Vec<_> = TicketType::ALL.iter().map(|t| t.as_str()).collect();
            let priorities: Vec<_> = Priority::ALL.iter().map(|pr| pr.as_str()).collect();
            writeln!(out, "Types: {}", types.join(", "))?;
            writeln!(out, "Priorities: {}", priorities.join(", "))?;
            writeln!(out, "Categories: {}", TICKET_CATEGORIES.join(", "))?;
        }
        IntakeTab::Chatbot => {
            let lines = app.intake.chat.lines();
            if lines.is_empty() {
                writeln!(out, "Start a conversation with our AI assistant")?;
            }
            for line in lines {
                let who = match line.speaker {
                    Speaker::User => "you",
                    Speaker::Bot => "bot",
                };
                writeln!(out, "{:>4}: {}", who, line.message)?;
            }
        }
        IntakeTab::Email => {
            let email = &app.intake.email;
            writeln!(out, "To:      {}", email.to)?;
            writeln!(out, "Subject: {}", email.subject)?;
            writeln!(out, "Message: {}", email.body)?;
        }
    }
    Ok(())
}

fn knowledge_base(app: &App, p: &Painter, out: &mut impl Write) -> fmt::Result {
    writeln!(out, "{}", p.bold("Knowledge Base"))?;
    writeln!(out, "Search: \"{}\"", app.knowledge_view.search)?;
    writeln!(out, "Quick actions: {}", SELF_SERVICE_ACTIONS.join(", "))?;
    writeln!(out)?;

    article_list(&app.visible_articles(), out)?;
    writeln!(out)?;
    faq_list(app.knowledge().faqs(), out)?;
    writeln!(out)?;

    writeln!(out, "Top Articles")?;
    for (index, article) in app.knowledge().top_articles().iter().enumerate() {
        writeln!(out, "  {}. {}", index + 1, article.title)?;
    }

    if let Some(article) = app.opened_article() {
        writeln!(out)?;
        article_detail(article, p, out)?;
    }
    Ok(())
}

/// Article cards; an empty list shows a placeholder.
pub fn article_list(articles: &[&KnowledgeArticle], out: &mut impl Write) -> fmt::Result {
    if articles.is_empty() {
        return writeln!(out, "No articles found");
    }
    for article in articles {
        writeln!(
            out,
            "{} {} {} ({})",
            category_glyph(&article.category),
            article.id,
            article.title,
            article.category
        )?;
        writeln!(out, "    {}", article.content)?;
        writeln!(
            out,
            "    {} views, {}% helpful, tags: {}",
            article.views,
            article.helpful,
            article.tags.join(", ")
        )?;
    }
    Ok(())
}

/// FAQ accordion, always complete.
pub fn faq_list(faqs: &[FaqEntry], out: &mut impl Write) -> fmt::Result {
    writeln!(out, "Frequently Asked Questions")?;
    for faq in faqs {
        writeln!(out, "  Q: {}", faq.question)?;
        writeln!(out, "  A: {}", faq.answer)?;
    }
    Ok(())
}

fn article_detail(article: &KnowledgeArticle, p: &Painter, out: &mut impl Write) -> fmt::Result {
    writeln!(out, "{}", p.bold(&article.title))?;
    writeln!(
        out,
        "{} | updated {}",
        article.category,
        article.last_updated.format("%Y-%m-%d")
    )?;
    writeln!(out, "{}", article.content)?;
    writeln!(
        out,
        "{} views, {}% helpful -- type 'helpful' if this helped",
        article.views, article.helpful
    )
}

/// Analytics page.
pub fn analytics(report: &AnalyticsReport, p: &Painter, out: &mut impl Write) -> fmt::Result {
    writeln!(out, "{}", p.bold("Analytics Dashboard"))?;
    writeln!(
        out,
        "Total Tickets: {}  Avg Resolution: {}  Satisfaction: {}%  Resolution Rate: {}%",
        report.total_tickets,
        report.avg_resolution_time,
        report.satisfaction_rate,
        report.resolution_rate
    )?;
    writeln!(out)?;

    writeln!(out, "Tickets by Category")?;
    for row in &report.by_category {
        breakdown(row, Tone::Blue, p, out)?;
    }
    writeln!(out)?;

    writeln!(out, "Tickets by Priority")?;
    for row in &report.by_priority {
        breakdown(row, priority_label_tone(&row.label), p, out)?;
    }
    writeln!(out)?;

    writeln!(out, "Ticket Trend (Last 6 Months)")?;
    for bar in &report.trend {
        writeln!(
            out,
            "  {:<4} {} {}",
            bar.month,
            p.paint(&bar_of(bar.height), Tone::Blue),
            bar.count
        )?;
    }
    writeln!(out)?;

    writeln!(
        out,
        "Open: {}  In Progress: {}  Resolved: {}",
        report.open_tickets, report.in_progress_tickets, report.resolved_tickets
    )
}

fn breakdown(row: &BreakdownRow, tone: Tone, p: &Painter, out: &mut impl Write) -> fmt::Result {
    writeln!(
        out,
        "  {:<22} {:>4} ({:>5.1}%) {}",
        row.label,
        row.count,
        row.percentage,
        p.paint(&bar_of(row.percentage), tone)
    )
}

/// Horizontal bar for a 0-100 value.
pub fn bar_of(percentage: f64) -> String {
    let filled = (percentage.clamp(0.0, 100.0) / 100.0 * BAR_WIDTH as f64).round() as usize;
    "#".repeat(filled)
}

fn profile(app: &App, p: &Painter, out: &mut impl Write) -> fmt::Result {
    let form = &app.profile.form;
    writeln!(out, "{}", p.bold("My Profile"))?;
    writeln!(
        out,
        "{} <{}> [{}] [{}]",
        form.name,
        form.email,
        app.session().role().title(),
        form.department
    )?;
    writeln!(out)?;

    writeln!(out, "Personal Information")?;
    writeln!(out, "  name:       {}", form.name)?;
    writeln!(out, "  email:      {}", form.email)?;
    writeln!(out, "  phone:      {}", form.phone)?;
    writeln!(out, "  department: {}", form.department)?;
    writeln!(out, "  location:   {}", form.location)?;
    writeln!(out, "  join date:  {} (read-only)", form.join_date)?;
    writeln!(out)?;

    writeln!(out, "Ticket Statistics")?;
    writeln!(
        out,
        "  Total: 12  Resolved: 8  Pending: 4  Avg Response: 2.5 hours"
    )?;
    writeln!(out, "Recent Activity")?;
    for (action, detail, time) in RECENT_ACTIVITY {
        writeln!(out, "  {} -- {} ({})", action, detail, time)?;
    }
    writeln!(out)?;

    let rating = app.profile.feedback.rating;
    let stars: String = (1..=5u8)
        .map(|star| if star <= rating { '*' } else { '.' })
        .collect();
    writeln!(out, "Feedback: {}", stars)?;
    if rating > 0 {
        writeln!(
            out,
            "  You rated: {} star{}",
            rating,
            if rating > 1 { "s" } else { "" }
        )?;
    }
    if !app.profile.feedback.comment.is_empty() {
        writeln!(out, "  Comment: {}", app.profile.feedback.comment)?;
    }
    Ok(())
}

fn settings(app: &App, p: &Painter, out: &mut impl Write) -> fmt::Result {
    let s = &app.settings;
    let switch = |on: bool| if on { "on" } else { "off" };

    writeln!(out, "{}", p.bold("Settings"))?;
    writeln!(out, "Notifications")?;
    writeln!(out, "  email:   {}", switch(s.email_notifications))?;
    writeln!(out, "  push:    {}", switch(s.push_notifications))?;
    writeln!(out, "  updates: {}", switch(s.ticket_updates))?;
    writeln!(out, "  digest:  {}", switch(s.weekly_digest))?;
    writeln!(out, "Preferences")?;
    writeln!(out, "  language: {}", s.language.label())?;
    writeln!(out, "  timezone: {}", s.timezone.label())?;
    writeln!(out, "  theme:    {:?}", s.theme)?;
    writeln!(out, "Security")?;
    writeln!(
        out,
        "  Change Password, Two-Factor Authentication, Active Sessions"
    )?;
    writeln!(out, "Integrations (Coming Soon)")?;
    writeln!(out, "  {}", INTEGRATIONS.join(", "))
}

fn toasts(app: &App, p: &Painter, out: &mut impl Write) -> fmt::Result {
    for toast in app.toaster().visible() {
        let tone = match toast.severity {
            Severity::Default => Tone::Green,
            Severity::Destructive => Tone::Red,
        };
        writeln!(
            out,
            "{} {}",
            p.badge(&toast.title, tone),
            toast.description
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::filter::Choice;
    use crate::store::models::Status;
    use std::time::Instant;

    fn plain() -> Painter {
        Painter::new(false)
    }

    fn signed_in() -> App {
        let mut app = App::new(Config::default()).unwrap();
        app.login("kim@corp.example", "pw", Instant::now()).unwrap();
        app
    }

    #[test]
    fn test_placeholder_labels() {
        let mut app = signed_in();
        let screen = render(&app, &plain());
        assert!(screen.contains(
            "AI-powered Auto-routing, Automated Classification, Smart Knowledge Suggestions"
        ));

        app.navigate("/settings").unwrap();
        assert!(render(&app, &plain()).contains("GLPI, SAP Solman, ServiceNow"));
    }

    #[test]
    fn test_dashboard_empty_state() {
        let mut app = signed_in();
        app.set_ticket_search("nothing like this");
        let screen = render(&app, &plain());
        assert!(screen.contains("No tickets found"));
        assert!(screen.contains("Total: 5"));
    }

    #[test]
    fn test_requester_column_for_operators_only() {
        let mut app = signed_in();
        app.set_status_filter(Choice::Only(Status::Resolved));
        assert!(!render(&app, &plain()).contains("Carol White"));

        app.toggle_role();
        let screen = render(&app, &plain());
        assert!(screen.contains("Carol White"));
        assert!(screen.contains("Manage all support tickets"));
    }

    #[test]
    fn test_knowledge_page_keeps_faqs_when_nothing_matches() {
        let mut app = signed_in();
        app.navigate("/knowledge-base").unwrap();
        app.set_article_search("quantum");
        let screen = render(&app, &plain());
        assert!(screen.contains("No articles found"));
        assert!(screen.contains("Who do I contact for urgent issues?"));
    }

    #[test]
    fn test_analytics_page() {
        let mut app = signed_in();
        app.navigate("/analytics").unwrap();
        let screen = render(&app, &plain());
        assert!(screen.contains("Resolution Rate: 52%"));
        assert!(screen.contains("Nov  ##############################"));
    }

    #[test]
    fn test_login_page_has_no_menu() {
        let app = App::new(Config::default()).unwrap();
        let screen = render(&app, &plain());
        assert!(screen.contains("POWERGRID AI Ticketing System"));
        assert!(!screen.contains("Knowledge Base"));
    }

    #[test]
    fn test_bar_of_bounds() {
        assert_eq!(bar_of(0.0), "");
        assert_eq!(bar_of(100.0).len(), BAR_WIDTH);
        assert_eq!(bar_of(250.0).len(), BAR_WIDTH);
    }
}
