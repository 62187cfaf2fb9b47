mod api;
mod model;
pub(crate) mod wire;

pub use model::Stock;

use crate::core::{BdClient, BdError, RefreshOutcome};

/// Sub-filter of the stocks resource. Each view is backed by a distinct
/// endpoint; switching views re-fetches the full list rather than filtering
/// client-side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StockView {
    #[default]
    All,
    Gainers,
    Losers,
}

impl StockView {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Gainers => "gainers",
            Self::Losers => "losers",
        }
    }

    pub(crate) const fn endpoint_path(self) -> &'static str {
        match self {
            Self::All => "stocks",
            Self::Gainers => "stocks/gainers",
            Self::Losers => "stocks/losers",
        }
    }
}

/// A builder for fetching the stock list for one view.
pub struct StocksBuilder {
    client: BdClient,
    view: StockView,
}

impl StocksBuilder {
    pub fn new(client: &BdClient) -> Self {
        Self {
            client: client.clone(),
            view: StockView::default(),
        }
    }

    /// Select which backend view to fetch.
    #[must_use]
    pub const fn view(mut self, view: StockView) -> Self {
        self.view = view;
        self
    }

    /// Executes the request.
    ///
    /// # Errors
    ///
    /// Returns a `BdError` if the request fails, the backend answers with a
    /// non-2xx status, or the response cannot be decoded.
    pub async fn fetch(self) -> Result<Vec<Stock>, BdError> {
        api::fetch_stocks(&self.client, self.view).await
    }
}

/// Trigger a backend-side recomputation of stock quotes.
///
/// # Errors
///
/// Returns a `BdError` if the request fails or the backend reports a non-2xx
/// status.
pub async fn refresh(client: &BdClient) -> Result<RefreshOutcome, BdError> {
    api::refresh_stocks(client).await
}
