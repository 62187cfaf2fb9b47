use serde::Deserialize;

use super::model::Stock;

#[derive(Deserialize)]
pub(crate) struct StockNode {
    pub(crate) symbol: String,
    #[serde(default)]
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) current_price: f64,
    #[serde(default)]
    pub(crate) price_change: f64,
    #[serde(default)]
    pub(crate) percent_change: f64,
    #[serde(default)]
    pub(crate) volume: f64,
    #[serde(default)]
    pub(crate) market_cap: Option<f64>,
}

impl From<StockNode> for Stock {
    fn from(node: StockNode) -> Self {
        Self {
            symbol: node.symbol,
            name: node.name,
            current_price: node.current_price,
            price_change: node.price_change,
            percent_change: node.percent_change,
            volume: node.volume,
            market_cap: node.market_cap,
        }
    }
}
