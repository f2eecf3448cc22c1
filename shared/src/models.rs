//! Data models for the Pantry Tracker application
//!
//! All of these records are owned and persisted by the hosted backend.
//! This crate only shapes them for requests and responses.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::theme::ThemeMode;

/// Unit system a user prefers for quantities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    #[default]
    Metric,
    Imperial,
}

/// Per-user notification preferences stored on the profile row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub expiration_alerts: bool,
    pub recipe_suggestions: bool,
    pub weekly_report: bool,
    pub shopping_reminders: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            expiration_alerts: true,
            recipe_suggestions: true,
            weekly_report: true,
            shopping_reminders: false,
        }
    }
}

/// Denormalized profile row written alongside a new auth account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfileRow {
    pub id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub dietary_restrictions: Vec<String>,
    pub favorite_cuisines: Vec<String>,
    pub measurement_system: MeasurementSystem,
    pub business_account: bool,
    pub theme: ThemeMode,
    pub notification_settings: NotificationSettings,
}

impl UserProfileRow {
    /// Build a profile row with the default preferences used at signup
    pub fn with_defaults(id: Uuid, email: impl Into<String>, full_name: Option<String>) -> Self {
        Self {
            id,
            email: email.into(),
            full_name,
            avatar_url: None,
            dietary_restrictions: Vec::new(),
            favorite_cuisines: Vec::new(),
            measurement_system: MeasurementSystem::default(),
            business_account: false,
            theme: ThemeMode::System,
            notification_settings: NotificationSettings::default(),
        }
    }
}

/// Why an item ended up in the bin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WasteReason {
    Expired,
    Spoiled,
    Leftover,
    Overcooked,
    Other,
}

impl WasteReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            WasteReason::Expired => "expired",
            WasteReason::Spoiled => "spoiled",
            WasteReason::Leftover => "leftover",
            WasteReason::Overcooked => "overcooked",
            WasteReason::Other => "other",
        }
    }
}

/// A logged instance of discarded food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub item_name: String,
    pub category: String,
    pub quantity: f64,
    pub unit: String,
    pub reason: WasteReason,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub logged_at: DateTime<Utc>,
}

/// Payload for creating a waste log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewWasteLog {
    #[validate(length(min = 1, max = 200, message = "must be between 1 and 200 characters"))]
    pub item_name: String,
    #[validate(length(min = 1, message = "cannot be empty"))]
    pub category: String,
    #[validate(range(exclusive_min = 0.0, message = "must be greater than zero"))]
    pub quantity: f64,
    pub unit: String,
    pub reason: WasteReason,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, message = "cannot be negative"))]
    pub estimated_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logged_at: Option<DateTime<Utc>>,
}

/// Optional filters for listing waste logs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WasteLogFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<WasteReason>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl WasteLogFilters {
    /// Query-string pairs for the filters that are set
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(reason) = self.reason {
            pairs.push(("reason", reason.as_str().to_string()));
        }
        if let Some(start) = self.start_date {
            pairs.push(("start_date", start.to_string()));
        }
        if let Some(end) = self.end_date {
            pairs.push(("end_date", end.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

/// Waste totals for a single category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub category: String,
    pub count: u64,
    pub quantity: f64,
    pub cost: f64,
}

/// Waste counts for a single reason
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasonBreakdown {
    pub reason: WasteReason,
    pub count: u64,
}

/// Dashboard analytics for a period of days
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsMetrics {
    pub period_days: u32,
    pub total_items_wasted: u64,
    pub total_quantity: f64,
    pub total_cost: f64,
    #[serde(default)]
    pub waste_by_category: Vec<CategoryBreakdown>,
    #[serde(default)]
    pub waste_by_reason: Vec<ReasonBreakdown>,
}

/// Direction of waste compared to the previous period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WasteTrend {
    Improving,
    Stable,
    Worsening,
}

/// Waste reduction report comparing two consecutive periods
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteReduction {
    pub days: u32,
    pub current_period_count: u64,
    pub previous_period_count: u64,
    pub reduction_percentage: f64,
    pub trend: WasteTrend,
}

/// Per-category insight derived by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryInsight {
    pub category: String,
    pub total_wasted: u64,
    pub percentage_of_total: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub most_common_reason: Option<WasteReason>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_row_defaults() {
        let id = Uuid::new_v4();
        let row = UserProfileRow::with_defaults(id, "cook@example.com", Some("Sam Cook".into()));

        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["id"], json!(id.to_string()));
        assert_eq!(value["full_name"], "Sam Cook");
        assert_eq!(value["avatar_url"], serde_json::Value::Null);
        assert_eq!(value["dietary_restrictions"], json!([]));
        assert_eq!(value["favorite_cuisines"], json!([]));
        assert_eq!(value["measurement_system"], "metric");
        assert_eq!(value["business_account"], false);
        assert_eq!(value["theme"], "system");
        assert_eq!(
            value["notification_settings"],
            json!({
                "expiration_alerts": true,
                "recipe_suggestions": true,
                "weekly_report": true,
                "shopping_reminders": false
            })
        );
    }

    #[test]
    fn test_filters_to_query_skips_unset() {
        let filters = WasteLogFilters {
            category: Some("dairy".into()),
            reason: Some(WasteReason::Expired),
            limit: Some(10),
            ..Default::default()
        };

        assert_eq!(
            filters.to_query(),
            vec![
                ("category", "dairy".to_string()),
                ("reason", "expired".to_string()),
                ("limit", "10".to_string()),
            ]
        );
        assert!(WasteLogFilters::default().to_query().is_empty());
    }

    #[test]
    fn test_new_waste_log_validation() {
        let mut log = NewWasteLog {
            item_name: "Milk".into(),
            category: "dairy".into(),
            quantity: 1.0,
            unit: "l".into(),
            reason: WasteReason::Spoiled,
            estimated_cost: Some(1.2),
            notes: None,
            logged_at: None,
        };
        assert!(log.validate().is_ok());

        log.quantity = 0.0;
        assert!(log.validate().is_err());

        log.quantity = 2.0;
        log.item_name = String::new();
        assert!(log.validate().is_err());

        log.item_name = "Milk".into();
        log.estimated_cost = Some(-1.0);
        assert!(log.validate().is_err());
    }

    #[test]
    fn test_analytics_tolerates_missing_breakdowns() {
        let metrics: AnalyticsMetrics = serde_json::from_value(json!({
            "period_days": 30,
            "total_items_wasted": 4,
            "total_quantity": 2.5,
            "total_cost": 7.0
        }))
        .unwrap();

        assert_eq!(metrics.period_days, 30);
        assert!(metrics.waste_by_category.is_empty());
        assert!(metrics.waste_by_reason.is_empty());
    }
}
