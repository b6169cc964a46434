//! Badge and chart colours.

use owo_colors::OwoColorize;

use crate::store::models::{Priority, Status};

/// Colour family of a badge or bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Blue,
    Amber,
    Green,
    Red,
    Orange,
    Yellow,
    /// Neutral fallback.
    Slate,
}

pub fn status_tone(status: Status) -> Tone {
    match status {
        Status::Open => Tone::Blue,
        Status::InProgress => Tone::Amber,
        Status::Resolved => Tone::Green,
    }
}

pub fn priority_tone(priority: Priority) -> Tone {
    match priority {
        Priority::Critical => Tone::Red,
        Priority::High => Tone::Orange,
        Priority::Medium => Tone::Yellow,
        Priority::Low => Tone::Slate,
    }
}

/// Tone for a priority given as text; unknown labels are neutral.
pub fn priority_label_tone(label: &str) -> Tone {
    label.parse().map(priority_tone).unwrap_or(Tone::Slate)
}

/// Short marker shown in front of an article, keyed by category.
pub fn category_glyph(category: &str) -> &'static str {
    match category {
        "Account Access" => "[lock]",
        "Network Access" => "[wifi]",
        "Email Support" | "Software Installation" | "Hardware Issue" => "[doc]",
        _ => "[book]",
    }
}

/// Applies tones to text, or passes it through when colours are off.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    colors: bool,
}

impl Painter {
    pub fn new(colors: bool) -> Self {
        Self { colors }
    }

    pub fn paint(&self, text: &str, tone: Tone) -> String {
        if !self.colors {
            return text.to_string();
        }
        match tone {
            Tone::Blue => text.blue().to_string(),
            Tone::Amber => text.truecolor(217, 119, 6).to_string(),
            Tone::Green => text.green().to_string(),
            Tone::Red => text.red().to_string(),
            Tone::Orange => text.truecolor(234, 88, 12).to_string(),
            Tone::Yellow => text.yellow().to_string(),
            Tone::Slate => text.bright_black().to_string(),
        }
    }

    pub fn bold(&self, text: &str) -> String {
        if self.colors {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// `[label]` badge in the given tone.
    pub fn badge(&self, label: &str, tone: Tone) -> String {
        self.paint(&format!("[{}]", label), tone)
    }
}
