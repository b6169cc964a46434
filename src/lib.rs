//! Helpdesk library - IT ticketing console over seeded data.
//!
//! This crate provides the session gate, ticket and knowledge base filtering,
//! analytics aggregation and form handling behind the `helpdesk` console.
//! Nothing is persisted: stores are read-only and submissions only raise
//! notifications.

pub mod analytics;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod forms;
pub mod render;
pub mod router;
pub mod session;
pub mod shell;
pub mod store;
pub mod toast;

pub use app::App;
pub use config::Config;
pub use error::{StoreError, ValidationError};
