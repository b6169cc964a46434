//! Knowledge base search.
//!
//! A query matches an article when it is a case-insensitive substring of the
//! title, the category, or any single tag. Tags use substring matching, so
//! `net` matches the `network` tag.

use crate::store::models::KnowledgeArticle;

/// Whether `article` should be listed for `query`.
pub fn article_matches(article: &KnowledgeArticle, query: &str) -> bool {
    let needle = query.to_lowercase();

    article.title.to_lowercase().contains(&needle)
        || article.category.to_lowercase().contains(&needle)
        || article
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
}

/// Articles matching `query`, in store order.
pub fn filter_articles<'a>(
    articles: &'a [KnowledgeArticle],
    query: &str,
) -> Vec<&'a KnowledgeArticle> {
    articles
        .iter()
        .filter(|a| article_matches(a, query))
        .collect()
}
