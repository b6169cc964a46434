//! Application state and event handlers.
//!
//! [`App`] owns the session, the stores and the per-page view state. Each
//! public method corresponds to one user action; time is passed in so that
//! deferred redirects and toast expiry are deterministic.

use std::time::Instant;

use anyhow::Result;
use tracing::{debug, info};

use crate::analytics::AnalyticsReport;
use crate::config::Config;
use crate::error::ValidationError;
use crate::filter::{filter_articles, filter_tickets, Choice, TicketQuery, TicketStats};
use crate::forms::{
    ChatTranscript, EmailDraft, FeedbackForm, NewTicketForm, ProfileForm, Settings,
};
use crate::router::{resolve, Location, Resolution, Route, UnknownPath};
use crate::session::{Role, SessionContext};
use crate::store::models::{AnalyticsSummary, KnowledgeArticle, Priority, Status, Ticket};
use crate::store::{seeded_analytics, KnowledgeStore, TicketStore};
use crate::toast::{Toast, Toaster};

/// Quick actions on the knowledge base page.
pub const SELF_SERVICE_ACTIONS: [&str; 4] = [
    "Password Reset",
    "VPN Access",
    "Software Installation",
    "IT Support",
];

/// Tab of the new-ticket page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IntakeTab {
    #[default]
    Portal,
    Chatbot,
    Email,
}

/// A navigation scheduled for later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRedirect {
    pub to: Route,
    pub due: Instant,
}

/// Dashboard filter inputs.
#[derive(Debug, Clone, Default)]
pub struct DashboardView {
    pub query: TicketQuery,
}

/// Knowledge base search box and open article.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeView {
    pub search: String,
    pub open_article: Option<String>,
}

/// New-ticket page state across its three tabs.
#[derive(Debug, Clone)]
pub struct IntakeView {
    pub tab: IntakeTab,
    pub form: NewTicketForm,
    pub chat: ChatTranscript,
    pub email: EmailDraft,
}

/// Profile page state.
#[derive(Debug, Clone)]
pub struct ProfileView {
    pub form: ProfileForm,
    pub feedback: FeedbackForm,
}

/// The whole client application.
pub struct App {
    config: Config,
    session: SessionContext,
    route: Route,
    pending: Option<PendingRedirect>,
    toaster: Toaster,
    tickets: TicketStore,
    knowledge: KnowledgeStore,
    analytics: AnalyticsSummary,
    pub dashboard: DashboardView,
    pub knowledge_view: KnowledgeView,
    pub intake: IntakeView,
    pub profile: ProfileView,
    pub settings: Settings,
}

impl App {
    /// Build the application over the compiled-in seed data.
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self::with_stores(
            config,
            TicketStore::seeded()?,
            KnowledgeStore::seeded()?,
            seeded_analytics()?,
        ))
    }

    pub fn with_stores(
        config: Config,
        tickets: TicketStore,
        knowledge: KnowledgeStore,
        analytics: AnalyticsSummary,
    ) -> Self {
        let toaster = Toaster::new(config.toast_ttl(), config.toast_limit);
        let intake = IntakeView {
            tab: IntakeTab::default(),
            form: NewTicketForm::default(),
            chat: ChatTranscript::default(),
            email: EmailDraft::new(config.support_email.clone()),
        };
        let settings = config.settings.clone();

        Self {
            config,
            session: SessionContext::new(),
            route: Route::Login,
            pending: None,
            toaster,
            tickets,
            knowledge,
            analytics,
            dashboard: DashboardView::default(),
            knowledge_view: KnowledgeView::default(),
            intake,
            profile: ProfileView {
                form: ProfileForm::for_user(None),
                feedback: FeedbackForm::default(),
            },
            settings,
        }
    }

    // ========== Accessors ==========

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn pending_redirect(&self) -> Option<PendingRedirect> {
        self.pending
    }

    pub fn toaster(&self) -> &Toaster {
        &self.toaster
    }

    pub fn tickets(&self) -> &TicketStore {
        &self.tickets
    }

    pub fn knowledge(&self) -> &KnowledgeStore {
        &self.knowledge
    }

    pub fn analytics(&self) -> AnalyticsReport {
        AnalyticsReport::from_summary(&self.analytics)
    }

    // ========== Navigation ==========

    /// Navigate to `path`, applying the authentication gate.
    ///
    /// Any pending redirect is dropped: explicit navigation wins.
    pub fn navigate(&mut self, path: &str) -> Result<Resolution, UnknownPath> {
        let location: Location = path.parse()?;
        Ok(self.go(location))
    }

    fn go(&mut self, location: Location) -> Resolution {
        if self.pending.take().is_some() {
            debug!("pending redirect superseded");
        }
        let resolution = resolve(location, self.session.require_session());
        debug!(?location, ?resolution, "navigate");
        self.route = resolution.route();
        resolution
    }

    /// Advance the clock: fire a due redirect and expire toasts.
    pub fn tick(&mut self, now: Instant) {
        if let Some(pending) = self.pending {
            if pending.due <= now {
                self.go(Location::Page(pending.to));
            }
        }
        self.toaster.expire(now);
    }

    /// Next instant at which [`tick`](Self::tick) would change something.
    pub fn next_deadline(&self) -> Option<Instant> {
        let redirect = self.pending.map(|p| p.due);
        match (redirect, self.toaster.next_expiry()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn notify(&mut self, toast: Toast, now: Instant) {
        self.toaster.push(toast, now);
    }

    fn reject(&mut self, err: &ValidationError, now: Instant) {
        debug!(error = %err, "validation failed");
        self.notify(Toast::from(err), now);
    }

    // ========== Session ==========

    pub fn login(
        &mut self,
        email: &str,
        password: &str,
        now: Instant,
    ) -> Result<(), ValidationError> {
        if let Err(err) = self.session.login(email, password) {
            self.reject(&err, now);
            return Err(err);
        }

        self.profile.form = ProfileForm::for_user(self.session.user());
        self.notify(
            Toast::info(
                "Login Successful",
                "Welcome to POWERGRID AI Ticketing System",
            ),
            now,
        );
        self.go(Location::Page(Route::Dashboard));
        Ok(())
    }

    pub fn logout(&mut self) {
        self.session.logout();
        self.go(Location::Page(Route::Login));
    }

    pub fn toggle_role(&mut self) -> Role {
        self.session.toggle_role()
    }

    // ========== Dashboard ==========

    pub fn set_ticket_search(&mut self, search: &str) {
        self.dashboard.query.search = search.to_string();
    }

    pub fn set_status_filter(&mut self, status: Choice<Status>) {
        self.dashboard.query.status = status;
    }

    pub fn set_priority_filter(&mut self, priority: Choice<Priority>) {
        self.dashboard.query.priority = priority;
    }

    /// Tickets matching the dashboard filters.
    pub fn visible_tickets(&self) -> Vec<&Ticket> {
        filter_tickets(self.tickets.all(), &self.dashboard.query)
    }

    /// Stat cards, always over the whole store.
    pub fn ticket_stats(&self) -> TicketStats {
        TicketStats::from_tickets(self.tickets.all())
    }

    /// Placeholder buttons for features not built yet.
    pub fn coming_soon(&mut self, feature: &str, now: Instant) {
        self.notify(
            Toast::coming_soon(format!(
                "{} feature will be available in the next update",
                feature
            )),
            now,
        );
    }

    // ========== New ticket ==========

    pub fn select_tab(&mut self, tab: IntakeTab) {
        self.intake.tab = tab;
    }

    /// Submit the portal form.
    ///
    /// On success a redirect to the dashboard is scheduled; the ticket store
    /// is left untouched.
    pub fn submit_ticket(&mut self, now: Instant) -> Result<(), ValidationError> {
        let toast = match self.intake.form.submit(&self.config.next_ticket_id) {
            Ok(toast) => toast,
            Err(err) => {
                self.reject(&err, now);
                return Err(err);
            }
        };

        info!(id = %self.config.next_ticket_id, "ticket submitted");
        self.notify(toast, now);
        self.pending = Some(PendingRedirect {
            to: Route::Dashboard,
            due: now + self.config.redirect_delay(),
        });
        Ok(())
    }

    pub fn send_chat(&mut self, message: &str) -> bool {
        self.intake.chat.send(message)
    }

    pub fn send_email(&mut self, now: Instant) {
        let toast = self.intake.email.send();
        self.notify(toast, now);
    }

    // ========== Knowledge base ==========

    pub fn set_article_search(&mut self, search: &str) {
        self.knowledge_view.search = search.to_string();
    }

    pub fn visible_articles(&self) -> Vec<&KnowledgeArticle> {
        filter_articles(self.knowledge.articles(), &self.knowledge_view.search)
    }

    /// Open the article dialog. Returns false for an unknown id.
    pub fn open_article(&mut self, id: &str) -> bool {
        if self.knowledge.article(id).is_none() {
            return false;
        }
        self.knowledge_view.open_article = Some(id.to_string());
        true
    }

    pub fn close_article(&mut self) {
        self.knowledge_view.open_article = None;
    }

    pub fn opened_article(&self) -> Option<&KnowledgeArticle> {
        self.knowledge_view
            .open_article
            .as_deref()
            .and_then(|id| self.knowledge.article(id))
    }

    pub fn mark_helpful(&mut self, now: Instant) {
        if self.opened_article().is_some() {
            self.notify(
                Toast::info("Thanks for your feedback", "Glad this article helped"),
                now,
            );
        }
    }

    pub fn self_service(&mut self, action: &str, now: Instant) {
        self.notify(
            Toast::info(
                "Request Processed",
                format!("Your {} request has been submitted successfully", action),
            ),
            now,
        );
    }

    // ========== Profile and settings ==========

    pub fn save_profile(&mut self, now: Instant) {
        let toast = self.profile.form.save();
        self.notify(toast, now);
    }

    pub fn submit_feedback(&mut self, now: Instant) -> Result<(), ValidationError> {
        match self.profile.feedback.submit() {
            Ok(toast) => {
                self.notify(toast, now);
                Ok(())
            }
            Err(err) => {
                self.reject(&err, now);
                Err(err)
            }
        }
    }

    pub fn save_settings(&mut self, now: Instant) {
        let toast = self.settings.save();
        self.notify(toast, now);
    }

    pub fn integration(&mut self, name: &str, now: Instant) {
        self.notify(
            Toast::coming_soon(format!(
                "{} integration will be available in the next update",
                name
            )),
            now,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::TicketType;
    use crate::toast::Severity;
    use std::time::Duration;

    fn signed_in() -> (App, Instant) {
        let now = Instant::now();
        let mut app = App::new(Config::default()).unwrap();
        app.login("sam@corp.example", "pw", now).unwrap();
        (app, now)
    }

    #[test]
    fn test_starts_signed_out_on_login() {
        let mut app = App::new(Config::default()).unwrap();
        assert_eq!(app.route(), Route::Login);
        assert_eq!(
            app.navigate("/analytics").unwrap(),
            Resolution::Redirect(Route::Login)
        );
        assert_eq!(app.route(), Route::Login);
    }

    #[test]
    fn test_login_lands_on_dashboard() {
        let (app, _) = signed_in();
        assert_eq!(app.route(), Route::Dashboard);
        assert_eq!(app.session().user().unwrap().name, "sam");
        assert_eq!(app.profile.form.email, "sam@corp.example");
        assert_eq!(app.toaster().latest().unwrap().title, "Login Successful");
    }

    #[test]
    fn test_failed_login_shows_error_and_stays() {
        let now = Instant::now();
        let mut app = App::new(Config::default()).unwrap();
        assert!(app.login("", "pw", now).is_err());
        assert_eq!(app.route(), Route::Login);
        assert_eq!(
            app.toaster().latest().unwrap().severity,
            Severity::Destructive
        );
    }

    #[test]
    fn test_logout_returns_to_login() {
        let (mut app, _) = signed_in();
        app.toggle_role();
        app.logout();
        assert_eq!(app.route(), Route::Login);
        assert_eq!(app.session().role(), Role::Requester);
        assert_eq!(
            app.navigate("/").unwrap(),
            Resolution::Redirect(Route::Login)
        );
    }

    #[test]
    fn test_stats_ignore_filters() {
        let (mut app, _) = signed_in();
        let before = app.ticket_stats();

        app.set_ticket_search("printer");
        app.set_status_filter(Choice::Only(Status::Resolved));
        assert!(app.visible_tickets().is_empty());
        assert_eq!(app.ticket_stats(), before);
    }

    #[test]
    fn test_empty_ticket_form_is_rejected() {
        let (mut app, now) = signed_in();
        app.navigate("/new-ticket").unwrap();

        let err = app.submit_ticket(now).unwrap_err();
        assert!(matches!(err, ValidationError::MissingFields(_)));
        assert!(app.pending_redirect().is_none());

        app.tick(now + Duration::from_secs(10));
        assert_eq!(app.route(), Route::NewTicket);
        assert!(app.toaster().is_empty());
    }

    #[test]
    fn test_ticket_submission_redirects_after_delay() {
        let (mut app, now) = signed_in();
        app.navigate("/new-ticket").unwrap();
        let count = app.tickets().len();

        app.intake.form.subject = "Monitor flickers".to_string();
        app.intake.form.description = "Second screen flickers every few seconds".to_string();
        app.intake.form.kind = Some(TicketType::Hardware);
        app.submit_ticket(now).unwrap();

        let toast = app.toaster().latest().unwrap();
        assert_eq!(toast.title, "Success");
        assert!(toast.description.contains("TKT-2024-006"));

        app.tick(now + Duration::from_millis(1499));
        assert_eq!(app.route(), Route::NewTicket);

        app.tick(now + Duration::from_millis(1500));
        assert_eq!(app.route(), Route::Dashboard);
        assert!(app.pending_redirect().is_none());
        assert_eq!(app.tickets().len(), count);
    }

    #[test]
    fn test_navigation_supersedes_redirect() {
        let (mut app, now) = signed_in();
        app.navigate("/new-ticket").unwrap();
        app.intake.form = NewTicketForm {
            subject: "a".to_string(),
            description: "b".to_string(),
            kind: Some(TicketType::Network),
            ..Default::default()
        };
        app.submit_ticket(now).unwrap();
        assert!(app.next_deadline().is_some());

        app.navigate("/knowledge-base").unwrap();
        app.tick(now + Duration::from_secs(2));
        assert_eq!(app.route(), Route::KnowledgeBase);
    }

    #[test]
    fn test_knowledge_search_keeps_faqs() {
        let (mut app, _) = signed_in();
        app.set_article_search("zzz");
        assert!(app.visible_articles().is_empty());
        assert_eq!(app.knowledge().faqs().len(), 4);

        app.set_article_search("VPN");
        assert_eq!(app.visible_articles().len(), 1);
    }

    #[test]
    fn test_article_dialog() {
        let (mut app, now) = signed_in();
        assert!(!app.open_article("KB-999"));
        assert!(app.open_article("KB-003"));
        assert_eq!(app.opened_article().unwrap().views, 756);

        app.mark_helpful(now);
        assert_eq!(
            app.toaster().latest().unwrap().title,
            "Thanks for your feedback"
        );
        app.close_article();
        assert!(app.opened_article().is_none());
    }

    #[test]
    fn test_feedback_without_rating() {
        let (mut app, now) = signed_in();
        assert_eq!(
            app.submit_feedback(now).unwrap_err(),
            ValidationError::MissingRating
        );
        app.profile.feedback.rating = 5;
        app.submit_feedback(now).unwrap();
        assert_eq!(app.profile.feedback.rating, 0);
    }

    #[test]
    fn test_settings_start_from_config() {
        let mut config = Config::default();
        config.settings.push_notifications = true;
        let app = App::new(config).unwrap();
        assert!(app.settings.push_notifications);
    }
}
