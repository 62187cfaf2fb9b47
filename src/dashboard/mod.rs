//! The view-state controller behind the dashboard.
//!
//! One [`DashboardController`] owns all client-side state: what is selected,
//! what is loading, and the last successfully fetched data per resource. UI
//! layers issue commands (`set_category`, `submit_search`, `refresh`, ...) and
//! read state back through [`DashboardController::snapshot`].
//!
//! Overlapping fetches of the same resource are resolved by request fencing:
//! a new request supersedes, never queues behind, an older one. Fetch
//! failures are logged and otherwise invisible; the previous data stays on
//! screen and the loading flag clears.

mod query;
mod scheduler;
mod state;

pub use scheduler::AutoRefreshHandle;
pub use state::{DashboardState, Tab};

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::{
    articles::{self, ArticlesBuilder, Category},
    core::BdClient,
    search::SearchBuilder,
    status,
    stocks::{self, StockView, StocksBuilder},
};
use query::{ArticlesPlan, compose_articles_plan};
use state::ResourceSeq;

/// Default cadence for the background auto-refresh task. The interval is a
/// parameter of [`DashboardController::start_auto_refresh`] rather than a
/// fixed constant.
pub const DEFAULT_AUTO_REFRESH_INTERVAL: Duration = Duration::from_secs(30 * 60);

#[derive(Default)]
struct ControllerState {
    view: DashboardState,
    articles_seq: ResourceSeq,
    stocks_seq: ResourceSeq,
    status_seq: ResourceSeq,
    categories_seq: ResourceSeq,
    /// Concurrent refreshes are allowed (manual + scheduled); the flag clears
    /// when the last one finishes.
    refresh_depth: u32,
}

/// Owns and coordinates all dashboard view state.
///
/// Cheap to clone; clones share the same state. Every fetch-like method is
/// total: failures are logged to the diagnostic channel and leave prior data
/// untouched.
#[derive(Clone)]
pub struct DashboardController {
    client: BdClient,
    inner: Arc<RwLock<ControllerState>>,
}

impl DashboardController {
    pub fn new(client: BdClient) -> Self {
        Self {
            client,
            inner: Arc::new(RwLock::new(ControllerState::default())),
        }
    }

    /// Read-only snapshot of the current view state.
    pub async fn snapshot(&self) -> DashboardState {
        self.inner.read().await.view.clone()
    }

    /// Fetch-on-mount: load categories, articles, stocks, and status in one
    /// concurrent burst.
    pub async fn init(&self) {
        tokio::join!(
            self.load_categories(),
            self.load_articles(),
            self.load_stocks(),
            self.load_status(),
        );
    }

    /* ---------------- commands ---------------- */

    pub async fn set_tab(&self, tab: Tab) {
        self.inner.write().await.view.current_tab = tab;
    }

    /// Select (or clear) the category filter and refetch immediately.
    ///
    /// Selecting a category abandons any active search: the query is cleared
    /// and the plain category-scoped list is fetched.
    pub async fn set_category(&self, category: Option<Category>) {
        {
            let mut st = self.inner.write().await;
            st.view.selected_category = category;
            st.view.search_query.clear();
        }
        self.load_articles().await;
    }

    /// Update the search box contents without issuing a request.
    pub async fn set_search_query(&self, query: impl Into<String>) {
        self.inner.write().await.view.search_query = query.into();
    }

    /// Submit the current search box contents. A whitespace-only query falls
    /// back to the plain category-scoped list fetch.
    pub async fn submit_search(&self) {
        self.load_articles().await;
    }

    /// Switch the stock view and re-fetch the full list for it.
    pub async fn set_stock_view(&self, view: StockView) {
        self.inner.write().await.view.stock_view = view;
        self.load_stocks().await;
    }

    /* ---------------- loads ---------------- */

    /// Fetch articles according to the current category/search selection.
    pub async fn load_articles(&self) {
        let (token, plan) = {
            let mut st = self.inner.write().await;
            let token = st.articles_seq.begin();
            st.view.news_loading = true;
            let plan = compose_articles_plan(st.view.selected_category, &st.view.search_query);
            (token, plan)
        };

        let result = match plan {
            ArticlesPlan::List { category } => {
                let mut builder = ArticlesBuilder::new(&self.client);
                if let Some(cat) = category {
                    builder = builder.category(cat);
                }
                builder.fetch().await
            }
            ArticlesPlan::Search {
                query,
                category,
                limit,
            } => {
                let mut builder = SearchBuilder::new(&self.client, query).limit(limit);
                if let Some(cat) = category {
                    builder = builder.category(cat);
                }
                builder.fetch().await
            }
        };

        let mut st = self.inner.write().await;
        if st.articles_seq.settle(token) {
            match result {
                Ok(list) => st.view.articles = list,
                Err(e) => warn!(error = %e, "article fetch failed; keeping previous list"),
            }
        } else {
            debug!(token, "discarding superseded article response");
        }
        st.view.news_loading = !st.articles_seq.idle();
    }

    /// Fetch the stock list for the current view.
    pub async fn load_stocks(&self) {
        let (token, view) = {
            let mut st = self.inner.write().await;
            let token = st.stocks_seq.begin();
            st.view.stocks_loading = true;
            (token, st.view.stock_view)
        };

        let result = StocksBuilder::new(&self.client).view(view).fetch().await;

        let mut st = self.inner.write().await;
        if st.stocks_seq.settle(token) {
            match result {
                Ok(list) => st.view.stocks = list,
                Err(e) => warn!(error = %e, "stock fetch failed; keeping previous list"),
            }
        } else {
            debug!(token, "discarding superseded stock response");
        }
        st.view.stocks_loading = !st.stocks_seq.idle();
    }

    /// Reload the aggregate system status.
    pub async fn load_status(&self) {
        let token = self.inner.write().await.status_seq.begin();

        let result = status::get(&self.client).await;

        let mut st = self.inner.write().await;
        if st.status_seq.settle(token) {
            match result {
                Ok(s) => st.view.status = Some(s),
                Err(e) => warn!(error = %e, "status fetch failed; keeping previous status"),
            }
        }
    }

    /// Reload the category taxonomy.
    pub async fn load_categories(&self) {
        let token = self.inner.write().await.categories_seq.begin();

        let result = articles::categories(&self.client).await;

        let mut st = self.inner.write().await;
        if st.categories_seq.settle(token) {
            match result {
                Ok(list) => st.view.categories = list,
                Err(e) => warn!(error = %e, "category fetch failed; keeping previous list"),
            }
        }
    }

    /* ---------------- refresh ---------------- */

    /// Trigger a backend recomputation for the active tab, then reload that
    /// tab's list and the system status as a joined pair. `refreshing` clears
    /// only after both reloads complete.
    ///
    /// Manual and scheduled refreshes may overlap; the backend recompute is
    /// idempotent, so no mutual exclusion is applied.
    pub async fn refresh(&self) {
        let tab = {
            let mut st = self.inner.write().await;
            st.refresh_depth += 1;
            st.view.refreshing = true;
            st.view.current_tab
        };

        // The recompute result only matters server-side; reload regardless so
        // the view converges on whatever state the backend ended up with.
        match tab {
            Tab::News => {
                if let Err(e) = articles::refresh(&self.client).await {
                    warn!(error = %e, "article refresh failed; reloading anyway");
                }
                tokio::join!(self.load_articles(), self.load_status());
            }
            Tab::Stocks => {
                if let Err(e) = stocks::refresh(&self.client).await {
                    warn!(error = %e, "stock refresh failed; reloading anyway");
                }
                tokio::join!(self.load_stocks(), self.load_status());
            }
        }

        let mut st = self.inner.write().await;
        st.refresh_depth -= 1;
        st.view.refreshing = st.refresh_depth > 0;
    }

    /// Start the background auto-refresh schedule.
    ///
    /// Each tick refreshes the active tab (which also reloads status). The
    /// returned handle is a scoped resource: dropping it cancels the task, and
    /// the task itself only holds a weak reference to this controller's state,
    /// so it can never keep a disposed controller alive.
    pub fn start_auto_refresh(&self, every: Duration) -> AutoRefreshHandle {
        AutoRefreshHandle::spawn(self.client.clone(), Arc::downgrade(&self.inner), every)
    }
}
