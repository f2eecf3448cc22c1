//! Analytics API surface consumed by the dashboard

use async_trait::async_trait;
use pantry_tracker_shared::{
    AnalyticsMetrics, CategoryInsight, NewWasteLog, WasteLog, WasteLogFilters, WasteReduction,
};

use crate::error::ClientError;

/// Operations the analytics hook proxies to
///
/// [`crate::ApiClient`] implements this over HTTP. Tests substitute
/// in-memory implementations.
#[async_trait]
pub trait AnalyticsApi: Send + Sync {
    async fn get_analytics(&self, period_days: u32) -> Result<AnalyticsMetrics, ClientError>;

    async fn get_waste_logs(&self, filters: &WasteLogFilters) -> Result<Vec<WasteLog>, ClientError>;

    async fn create_waste_log(&self, log: &NewWasteLog) -> Result<WasteLog, ClientError>;

    async fn get_waste_reduction(&self, days: u32) -> Result<WasteReduction, ClientError>;

    async fn get_category_insights(&self) -> Result<Vec<CategoryInsight>, ClientError>;
}
