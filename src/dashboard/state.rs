use crate::{
    articles::{Article, Category},
    status::SystemStatus,
    stocks::{Stock, StockView},
};

/// Top-level view selector: which resource set is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    News,
    Stocks,
}

/// Everything a rendering layer needs to draw the dashboard.
///
/// Owned by the [`DashboardController`](super::DashboardController); consumers
/// only ever see clones via `snapshot()`, so there is no way to mutate
/// controller state from outside the command interface.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    /// Active category filter; `None` means all categories.
    pub selected_category: Option<Category>,
    /// Current contents of the search box. Empty means no active search.
    pub search_query: String,
    pub current_tab: Tab,
    pub stock_view: StockView,

    pub articles: Vec<Article>,
    pub stocks: Vec<Stock>,
    pub status: Option<SystemStatus>,
    /// Category names as reported by the backend.
    pub categories: Vec<String>,

    /// True while any article fetch is in flight.
    pub news_loading: bool,
    /// True while any stock fetch is in flight.
    pub stocks_loading: bool,
    /// True while a combined refresh (recompute + reload + status) is running.
    pub refreshing: bool,
}

/// Per-resource request bookkeeping.
///
/// Every issued request takes the next sequence number; a response is applied
/// only if it still carries the newest issued number, so a slow stale response
/// can never overwrite the result of a newer request (request fencing). There
/// is no cancellation: superseded requests run to completion and are fenced
/// out here.
#[derive(Debug, Default)]
pub(super) struct ResourceSeq {
    issued: u64,
    settled: u64,
}

impl ResourceSeq {
    /// Register a new request; returns its fence token.
    pub(super) fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Record a settled request; true when `token` is still the newest issued.
    pub(super) fn settle(&mut self, token: u64) -> bool {
        self.settled += 1;
        token == self.issued
    }

    /// True when no request for this resource is in flight. Loading flags are
    /// derived from this, so a flag can never stick after the last in-flight
    /// request settles.
    pub(super) fn idle(&self) -> bool {
        self.settled == self.issued
    }
}
