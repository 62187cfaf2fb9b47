use serde::Serialize;

use crate::{
    articles::{Article, Category, wire},
    core::{BdClient, BdError, net},
};

/// Result cap sent with every search request. Fixed by the product, not
/// user-configurable from the dashboard.
pub const SEARCH_LIMIT: u32 = 20;

/// Searches articles by keyword.
///
/// # Errors
///
/// Returns `BdError` if the network request fails or the response cannot be
/// parsed.
pub async fn search(client: &BdClient, query: impl Into<String>) -> Result<Vec<Article>, BdError> {
    SearchBuilder::new(client, query).fetch().await
}

/// A builder for keyword searches over the article store.
///
/// The backend matches the query against titles, summaries, and keyword lists
/// (`POST /search`); the optional category narrows the match server-side.
#[derive(Debug)]
pub struct SearchBuilder {
    client: BdClient,
    query: String,
    category: Option<Category>,
    limit: u32,
}

#[derive(Serialize)]
struct SearchPayload<'a> {
    query: &'a str,
    // Serialized as JSON null when absent; the backend expects the field.
    category: Option<&'a str>,
    limit: u32,
}

impl SearchBuilder {
    pub fn new(client: &BdClient, query: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            query: query.into(),
            category: None,
            limit: SEARCH_LIMIT,
        }
    }

    /// Narrow the search to a single category.
    #[must_use]
    pub const fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Override the result cap (defaults to [`SEARCH_LIMIT`]).
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Executes the search request.
    ///
    /// # Errors
    ///
    /// Returns a `BdError` if the request fails, the backend answers with a
    /// non-2xx status, or the response cannot be decoded.
    pub async fn fetch(self) -> Result<Vec<Article>, BdError> {
        let url = self.client.endpoint("search")?;
        let payload = SearchPayload {
            query: &self.query,
            category: self.category.map(Category::as_str),
            limit: self.limit,
        };

        let nodes: Vec<wire::ArticleNode> =
            net::recv_json(self.client.http().post(url).json(&payload)).await?;
        wire::into_articles(nodes)
    }
}
