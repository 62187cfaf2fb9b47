use serde::Deserialize;

/// Outcome of a backend-side recomputation (`POST /articles/refresh`,
/// `POST /stocks/refresh`).
///
/// The backend treats both as idempotent: re-running a refresh while another
/// is in progress is harmless, which is what lets manual and scheduled
/// refreshes overlap without coordination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RefreshOutcome {
    /// Human-readable summary, e.g. `"Refreshed 6 articles"`.
    #[serde(default)]
    pub message: Option<String>,
    /// How many upstream items the backend pulled, when it reports it.
    #[serde(default)]
    pub total_fetched: Option<u64>,
}
