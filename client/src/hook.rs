//! Analytics hook
//!
//! Holds the dashboard's `{data, loading, error}` analytics state and proxies
//! the remaining API calls. Analytics are fetched when the hook mounts and
//! again whenever the requested period changes.
//!
//! State is published on a `watch` channel: pages [`AnalyticsHook::subscribe`]
//! and re-render on every change, including `loading` flipping on while a
//! fetch is in flight. Methods take `&mut self`, so calls on one hook never
//! overlap. Nothing is retried or cached beyond the last successful result.

use std::sync::Arc;

use pantry_tracker_shared::{
    AnalyticsMetrics, CategoryInsight, NewWasteLog, WasteLog, WasteLogFilters, WasteReduction,
};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::api::AnalyticsApi;
use crate::error::ClientError;

/// Period used when the dashboard does not pick one
pub const DEFAULT_PERIOD_DAYS: u32 = 30;

/// Render state exposed to the page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyticsState {
    pub data: Option<AnalyticsMetrics>,
    pub loading: bool,
    pub error: Option<String>,
}

impl AnalyticsState {
    /// Nothing fetched yet, first fetch pending
    pub fn pending() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }
}

/// Analytics hook bound to an API implementation
pub struct AnalyticsHook<A: AnalyticsApi + ?Sized> {
    api: Arc<A>,
    period: Option<u32>,
    state: watch::Sender<AnalyticsState>,
}

impl<A: AnalyticsApi + ?Sized> AnalyticsHook<A> {
    /// Create an unmounted hook; nothing is fetched until a period is set
    ///
    /// The state starts out loading, as the page has nothing to show yet.
    pub fn new(api: Arc<A>) -> Self {
        let (state, _) = watch::channel(AnalyticsState::pending());
        Self {
            api,
            period: None,
            state,
        }
    }

    /// Create a hook and fetch analytics for `period_days`
    pub async fn mount(api: Arc<A>, period_days: u32) -> Self {
        let mut hook = Self::new(api);
        hook.set_period(period_days).await;
        hook
    }

    /// Receiver that sees every state change
    pub fn subscribe(&self) -> watch::Receiver<AnalyticsState> {
        self.state.subscribe()
    }

    /// Current state
    pub fn snapshot(&self) -> AnalyticsState {
        self.state.borrow().clone()
    }

    pub fn data(&self) -> Option<AnalyticsMetrics> {
        self.state.borrow().data.clone()
    }

    pub fn loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    pub fn period(&self) -> Option<u32> {
        self.period
    }

    /// Switch the period, fetching only when it actually changes
    pub async fn set_period(&mut self, period_days: u32) {
        if self.period == Some(period_days) {
            return;
        }
        self.period = Some(period_days);
        self.fetch().await;
    }

    /// Fetch analytics for the current period again
    ///
    /// Does nothing before the hook is mounted.
    pub async fn refetch(&mut self) {
        if self.period.is_some() {
            self.fetch().await;
        }
    }

    async fn fetch(&mut self) {
        let Some(period) = self.period else {
            return;
        };

        self.state.send_modify(|state| state.loading = true);
        debug!(period, "Fetching analytics");

        let result = self.api.get_analytics(period).await;

        self.state.send_modify(|state| {
            match result {
                Ok(metrics) => {
                    state.data = Some(metrics);
                    state.error = None;
                }
                Err(err) => {
                    warn!(period, error = %err, "Failed to fetch analytics");
                    state.error = Some(err.to_string());
                }
            }
            state.loading = false;
        });
    }

    pub async fn get_waste_logs(
        &self,
        filters: &WasteLogFilters,
    ) -> Result<Vec<WasteLog>, ClientError> {
        self.api.get_waste_logs(filters).await
    }

    /// Create a waste log, then refresh analytics so totals include it
    pub async fn create_waste_log(&mut self, log: &NewWasteLog) -> Result<WasteLog, ClientError> {
        let created = self.api.create_waste_log(log).await?;
        self.refetch().await;
        Ok(created)
    }

    pub async fn get_waste_reduction(&self, days: u32) -> Result<WasteReduction, ClientError> {
        self.api.get_waste_reduction(days).await
    }

    pub async fn get_category_insights(&self) -> Result<Vec<CategoryInsight>, ClientError> {
        self.api.get_category_insights().await
    }
}
