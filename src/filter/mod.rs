//! Derived views over the stores.

pub mod knowledge;
pub mod tickets;

pub use knowledge::{article_matches, filter_articles};
pub use tickets::{filter_tickets, Choice, TicketQuery, TicketStats};
