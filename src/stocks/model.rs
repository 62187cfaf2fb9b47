use serde::Serialize;

/// Snapshot of a tracked equity.
///
/// Read-only on the client; each fetch replaces the displayed list wholesale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stock {
    /// Ticker symbol, unique within a list.
    pub symbol: String,
    pub name: String,
    pub current_price: f64,
    /// Absolute change since previous close.
    pub price_change: f64,
    /// Percentage change since previous close.
    pub percent_change: f64,
    pub volume: f64,
    pub market_cap: Option<f64>,
}
