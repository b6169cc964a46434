//! Form state and validation.
//!
//! None of these forms write to a store. A successful submission only yields
//! the toast (and, for new tickets, the redirect) the caller should show.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::session::User;
use crate::store::models::{Priority, UnknownLabel};
use crate::toast::Toast;

/// Request types offered on the portal form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TicketType {
    AccountAccess,
    Network,
    Software,
    Hardware,
    Configuration,
}

impl TicketType {
    pub const ALL: [TicketType; 5] = [
        TicketType::AccountAccess,
        TicketType::Network,
        TicketType::Software,
        TicketType::Hardware,
        TicketType::Configuration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketType::AccountAccess => "Account Access",
            TicketType::Network => "Network",
            TicketType::Software => "Software",
            TicketType::Hardware => "Hardware",
            TicketType::Configuration => "Configuration",
        }
    }
}

impl FromStr for TicketType {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TicketType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownLabel {
                kind: "ticket type",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categories offered on the portal form.
pub const TICKET_CATEGORIES: [&str; 5] = [
    "Authentication",
    "Network Access",
    "Software Installation",
    "Hardware Issue",
    "Email Support",
];

/// Portal form for a new ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTicketForm {
    pub subject: String,
    pub description: String,
    pub kind: Option<TicketType>,
    pub priority: Priority,
    pub category: Option<String>,
}

impl Default for NewTicketForm {
    fn default() -> Self {
        Self {
            subject: String::new(),
            description: String::new(),
            kind: None,
            priority: Priority::Medium,
            category: None,
        }
    }
}

impl NewTicketForm {
    /// Check the required fields: subject, description and type.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut missing = Vec::new();
        if self.subject.is_empty() {
            missing.push("subject");
        }
        if self.description.is_empty() {
            missing.push("description");
        }
        if self.kind.is_none() {
            missing.push("type");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingFields(missing))
        }
    }

    /// Validate and build the confirmation toast for `ticket_id`.
    pub fn submit(&self, ticket_id: &str) -> Result<Toast, ValidationError> {
        self.validate()?;
        Ok(Toast::info(
            "Success",
            format!("Ticket submitted successfully! Ticket ID: {}", ticket_id),
        ))
    }
}

/// Speaker of a chat line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatLine {
    pub speaker: Speaker,
    pub message: String,
}

pub const BOT_REPLY: &str = "Thank you for your message. I will create a ticket for you. \
Can you provide more details about the issue?";

/// Chatbot intake channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatTranscript {
    lines: Vec<ChatLine>,
}

impl ChatTranscript {
    /// Append `message` and the canned reply. Blank input is ignored.
    pub fn send(&mut self, message: &str) -> bool {
        if message.trim().is_empty() {
            return false;
        }
        self.lines.push(ChatLine {
            speaker: Speaker::User,
            message: message.to_string(),
        });
        self.lines.push(ChatLine {
            speaker: Speaker::Bot,
            message: BOT_REPLY.to_string(),
        });
        true
    }

    pub fn lines(&self) -> &[ChatLine] {
        &self.lines
    }
}

/// Email intake channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailDraft {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl EmailDraft {
    pub fn new(to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: String::new(),
            body: String::new(),
        }
    }

    pub fn send(&self) -> Toast {
        Toast::info(
            "Email Ticket Submitted",
            "Your ticket has been created from email",
        )
    }
}

/// Editable profile fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub location: String,
    /// Shown but not editable.
    pub join_date: String,
}

impl ProfileForm {
    /// Prefill from the signed-in user, with placeholders for the rest.
    pub fn for_user(user: Option<&User>) -> Self {
        Self {
            name: user
                .map(|u| u.name.clone())
                .unwrap_or_else(|| "John Doe".to_string()),
            email: user
                .map(|u| u.email.clone())
                .unwrap_or_else(|| "john.doe@powergrid.com".to_string()),
            phone: "+1 (555) 123-4567".to_string(),
            department: "Information Technology".to_string(),
            location: "New York Office".to_string(),
            join_date: "January 2023".to_string(),
        }
    }

    /// Update an editable field by name. Returns false for unknown or
    /// read-only fields.
    pub fn set_field(&mut self, field: &str, value: &str) -> bool {
        let slot = match field {
            "name" => &mut self.name,
            "email" => &mut self.email,
            "phone" => &mut self.phone,
            "department" => &mut self.department,
            "location" => &mut self.location,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }

    pub fn save(&self) -> Toast {
        Toast::info(
            "Profile Updated",
            "Your profile information has been saved successfully",
        )
    }
}

/// Star rating feedback on the support experience.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackForm {
    /// 0 means no star chosen yet.
    pub rating: u8,
    pub comment: String,
}

impl FeedbackForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.rating {
            0 => Err(ValidationError::MissingRating),
            1..=5 => Ok(()),
            other => Err(ValidationError::RatingOutOfRange(other)),
        }
    }

    /// Validate, then clear the form.
    pub fn submit(&mut self) -> Result<Toast, ValidationError> {
        self.validate()?;
        *self = FeedbackForm::default();
        Ok(Toast::info("Feedback Submitted", "Thank you for your feedback!"))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    De,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timezone {
    #[default]
    Utc,
    Est,
    Pst,
    Ist,
}

impl Timezone {
    pub fn label(&self) -> &'static str {
        match self {
            Timezone::Utc => "UTC (GMT+0)",
            Timezone::Est => "EST (GMT-5)",
            Timezone::Pst => "PST (GMT-8)",
            Timezone::Ist => "IST (GMT+5:30)",
        }
    }
}

impl Language {
    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Spanish",
            Language::Fr => "French",
            Language::De => "German",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Auto,
}

/// User preferences on the settings page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub ticket_updates: bool,
    pub weekly_digest: bool,
    pub language: Language,
    pub timezone: Timezone,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            push_notifications: false,
            ticket_updates: true,
            weekly_digest: true,
            language: Language::default(),
            timezone: Timezone::default(),
            theme: Theme::default(),
        }
    }
}

impl Settings {
    /// Flip a notification switch by name, returning its new value.
    pub fn toggle(&mut self, switch: &str) -> Option<bool> {
        let slot = match switch {
            "email" | "email_notifications" => &mut self.email_notifications,
            "push" | "push_notifications" => &mut self.push_notifications,
            "updates" | "ticket_updates" => &mut self.ticket_updates,
            "digest" | "weekly_digest" => &mut self.weekly_digest,
            _ => return None,
        };
        *slot = !*slot;
        Some(*slot)
    }

    /// Change a select option by name. Values use their lowercase codes.
    pub fn select(&mut self, field: &str, value: &str) -> bool {
        let parsed = serde_yaml::Value::String(value.to_lowercase());
        match field {
            "language" => serde_yaml::from_value(parsed).map(|v| self.language = v).is_ok(),
            "timezone" => serde_yaml::from_value(parsed).map(|v| self.timezone = v).is_ok(),
            "theme" => serde_yaml::from_value(parsed).map(|v| self.theme = v).is_ok(),
            _ => false,
        }
    }

    pub fn save(&self) -> Toast {
        Toast::info(
            "Settings Saved",
            "Your preferences have been updated successfully",
        )
    }
}
