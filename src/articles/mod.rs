mod api;
mod model;
pub(crate) mod wire;

pub use model::{Article, Category};

use crate::core::{BdClient, BdError, RefreshOutcome};

/// A builder for fetching the article list, newest first.
pub struct ArticlesBuilder {
    client: BdClient,
    category: Option<Category>,
    limit: Option<u32>,
}

impl ArticlesBuilder {
    pub fn new(client: &BdClient) -> Self {
        Self {
            client: client.clone(),
            category: None,
            limit: None,
        }
    }

    /// Restrict the list to a single category.
    #[must_use]
    pub const fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Cap the number of returned articles. The backend clamps this to
    /// 1..=100 and defaults to 20 when unset.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Executes the request.
    ///
    /// # Errors
    ///
    /// Returns a `BdError` if the request fails, the backend answers with a
    /// non-2xx status, or the response cannot be decoded.
    pub async fn fetch(self) -> Result<Vec<Article>, BdError> {
        api::fetch_articles(&self.client, self.category, self.limit).await
    }
}

/// Fetch a single article by its backend id.
///
/// # Errors
///
/// An unknown id surfaces as `BdError::Status` with status 404.
pub async fn get(client: &BdClient, id: &str) -> Result<Article, BdError> {
    api::fetch_article(client, id).await
}

/// Fetch the category taxonomy as the backend reports it.
///
/// # Errors
///
/// Returns a `BdError` if the request fails or the response cannot be decoded.
pub async fn categories(client: &BdClient) -> Result<Vec<String>, BdError> {
    api::fetch_categories(client).await
}

/// Trigger a backend-side re-aggregation of the article store.
///
/// This only recomputes server state; follow it with a fresh
/// [`ArticlesBuilder::fetch`] to observe the result.
///
/// # Errors
///
/// Returns a `BdError` if the request fails or the backend reports a non-2xx
/// status.
pub async fn refresh(client: &BdClient) -> Result<RefreshOutcome, BdError> {
    api::refresh_articles(client).await
}
