//! Store module for helpdesk.
//!
//! Static in-memory collections standing in for a ticketing backend: tickets,
//! knowledge base articles, FAQ entries and an analytics snapshot.

pub mod models;
pub mod seed;
pub mod stores;

pub use models::*;
pub use stores::{seeded_analytics, KnowledgeStore, TicketStore};
