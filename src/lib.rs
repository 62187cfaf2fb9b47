//! biodesk: ergonomic client and dashboard state controller for the Biodesk
//! biotech news & markets API.
//!
//! The crate has two layers:
//! - per-resource request builders ([`articles`], [`search`], [`stocks`],
//!   [`status`], [`preferences`]) that talk to the backend and return typed
//!   models;
//! - a [`dashboard::DashboardController`] that owns all view state (selected
//!   category, search box, active tab, stock view, loading flags), coordinates
//!   overlapping fetches with per-resource request fencing, and drives an
//!   optional background auto-refresh task.
//!
//! Rendering layers consume read-only [`DashboardState`] snapshots; nothing in
//! this crate draws anything.

pub mod articles;
pub mod core;
pub mod dashboard;
pub mod format;
pub mod preferences;
pub mod search;
pub mod status;
pub mod stocks;

pub use crate::core::{BdClient, BdClientBuilder, BdError, RefreshOutcome};
pub use articles::{Article, ArticlesBuilder, Category};
pub use dashboard::{
    AutoRefreshHandle, DEFAULT_AUTO_REFRESH_INTERVAL, DashboardController, DashboardState, Tab,
};
pub use preferences::UserPreferences;
pub use search::SearchBuilder;
pub use status::{ApiInfo, SystemStatus};
pub use stocks::{Stock, StockView, StocksBuilder};
