//! Read-only in-memory stores.

use std::collections::HashSet;

use anyhow::{Context, Result};
use tracing::debug;

use super::models::{AnalyticsSummary, FaqEntry, KnowledgeArticle, Ticket};
use super::seed;
use crate::error::StoreError;

/// Fixed collection of tickets.
#[derive(Debug, Clone)]
pub struct TicketStore {
    tickets: Vec<Ticket>,
}

impl TicketStore {
    /// Build a store, rejecting duplicate identifiers.
    pub fn new(tickets: Vec<Ticket>) -> Result<Self, StoreError> {
        ensure_unique("ticket", tickets.iter().map(|t| t.id.as_str()))?;
        Ok(Self { tickets })
    }

    /// Load the compiled-in demo tickets.
    pub fn seeded() -> Result<Self> {
        let tickets: Vec<Ticket> =
            serde_yaml::from_str(seed::TICKETS).context("Failed to parse ticket seed data")?;
        debug!(count = tickets.len(), "loaded ticket seed");
        Ok(Self::new(tickets)?)
    }

    pub fn all(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn get(&self, id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

/// Fixed collection of articles and FAQ entries.
#[derive(Debug, Clone)]
pub struct KnowledgeStore {
    articles: Vec<KnowledgeArticle>,
    faqs: Vec<FaqEntry>,
}

impl KnowledgeStore {
    /// Build a store, checking identifier uniqueness and helpfulness range.
    pub fn new(articles: Vec<KnowledgeArticle>, faqs: Vec<FaqEntry>) -> Result<Self, StoreError> {
        ensure_unique("article", articles.iter().map(|a| a.id.as_str()))?;
        ensure_unique("faq", faqs.iter().map(|f| f.id.as_str()))?;

        if let Some(article) = articles.iter().find(|a| a.helpful > 100) {
            return Err(StoreError::HelpfulnessOutOfRange {
                id: article.id.clone(),
                value: article.helpful,
            });
        }

        Ok(Self { articles, faqs })
    }

    /// Load the compiled-in articles and FAQs.
    pub fn seeded() -> Result<Self> {
        let articles: Vec<KnowledgeArticle> = serde_yaml::from_str(seed::ARTICLES)
            .context("Failed to parse article seed data")?;
        let faqs: Vec<FaqEntry> =
            serde_yaml::from_str(seed::FAQS).context("Failed to parse FAQ seed data")?;
        debug!(
            articles = articles.len(),
            faqs = faqs.len(),
            "loaded knowledge seed"
        );
        Ok(Self::new(articles, faqs)?)
    }

    pub fn articles(&self) -> &[KnowledgeArticle] {
        &self.articles
    }

    pub fn faqs(&self) -> &[FaqEntry] {
        &self.faqs
    }

    pub fn article(&self, id: &str) -> Option<&KnowledgeArticle> {
        self.articles.iter().find(|a| a.id == id)
    }

    /// The first three articles, shown in the "Top Articles" panel.
    pub fn top_articles(&self) -> &[KnowledgeArticle] {
        &self.articles[..self.articles.len().min(3)]
    }
}

/// Load the compiled-in analytics snapshot.
pub fn seeded_analytics() -> Result<AnalyticsSummary> {
    serde_yaml::from_str(seed::ANALYTICS).context("Failed to parse analytics seed data")
}

fn ensure_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), StoreError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(StoreError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
