use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::stocks::Stock;

/// Aggregate counters and freshness markers for the whole backend store.
///
/// Refreshed independently of the article/stock lists but derived from the
/// same state, so the controller reloads it alongside every refresh.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SystemStatus {
    pub total_articles: u64,
    pub total_stocks: u64,
    pub last_news_update: Option<DateTime<Utc>>,
    pub last_stock_update: Option<DateTime<Utc>>,
    /// Article counts keyed by category name.
    pub articles_by_category: HashMap<String, u64>,
    /// Top movers, ordered and length-limited by the backend for display.
    pub top_gainers: Vec<Stock>,
    pub top_losers: Vec<Stock>,
}

/// Identification payload from the API root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiInfo {
    pub message: String,
    pub version: String,
}
