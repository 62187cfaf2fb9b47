//! Pure composition of view-state into a concrete fetch plan.

use crate::articles::Category;
use crate::search::SEARCH_LIMIT;

/// How the next article fetch should be issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ArticlesPlan {
    /// Plain (optionally category-scoped) list fetch.
    List { category: Option<Category> },
    /// Keyword search carrying the fixed result cap.
    Search {
        query: String,
        category: Option<Category>,
        limit: u32,
    },
}

/// A whitespace-only search box is no search at all: it composes to the same
/// request as a plain category fetch, so submitting an empty query never hits
/// the search endpoint.
pub(super) fn compose_articles_plan(
    category: Option<Category>,
    search_query: &str,
) -> ArticlesPlan {
    let query = search_query.trim();
    if query.is_empty() {
        ArticlesPlan::List { category }
    } else {
        ArticlesPlan::Search {
            query: query.to_string(),
            category,
            limit: SEARCH_LIMIT,
        }
    }
}
