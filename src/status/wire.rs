use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::model::SystemStatus;
use crate::stocks::{Stock, wire::StockNode};

#[derive(Deserialize)]
pub(crate) struct StatusNode {
    #[serde(default)]
    pub(crate) total_articles: u64,
    #[serde(default)]
    pub(crate) total_stocks: u64,
    #[serde(default)]
    pub(crate) last_news_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub(crate) last_stock_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub(crate) articles_by_category: HashMap<String, u64>,
    #[serde(default)]
    pub(crate) top_gainers: Vec<StockNode>,
    #[serde(default)]
    pub(crate) top_losers: Vec<StockNode>,
}

impl From<StatusNode> for SystemStatus {
    fn from(node: StatusNode) -> Self {
        Self {
            total_articles: node.total_articles,
            total_stocks: node.total_stocks,
            last_news_update: node.last_news_update,
            last_stock_update: node.last_stock_update,
            articles_by_category: node.articles_by_category,
            top_gainers: node.top_gainers.into_iter().map(Stock::from).collect(),
            top_losers: node.top_losers.into_iter().map(Stock::from).collect(),
        }
    }
}
