use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::repo::{DistanceMetric, TemperatureMetric};
use super::units::{DistanceUnit, MetricType, TemperatureUnit};

/// Body of POST /metrics/distance. The row's `type` is forced server-side, so
/// a `type` field in the body is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDistanceMetricRequest {
    pub user_id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub value: f64,
    pub unit: DistanceUnit,
}

/// Body of POST /metrics/temperature.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTemperatureMetricRequest {
    pub user_id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub value: f64,
    pub unit: TemperatureUnit,
}

/// Query string of GET /metrics. The target unit matching the requested type
/// triggers conversion on read; the other one is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetMetricsQuery {
    pub user_id: String,
    #[serde(rename = "type")]
    pub metric_type: MetricType,
    pub distance_unit: Option<DistanceUnit>,
    pub temperature_unit: Option<TemperatureUnit>,
}

/// Query string of GET /metrics/chart. `months` stays a string ("1" or "2")
/// and is validated in the service layer.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetChartDataQuery {
    pub user_id: String,
    #[serde(rename = "type")]
    pub metric_type: MetricType,
    pub months: String,
    pub distance_unit: Option<DistanceUnit>,
    pub temperature_unit: Option<TemperatureUnit>,
}

/// Both list endpoints answer with whichever row shape the requested type
/// selects; the rows carry their own `type` tag, so the enum stays untagged
/// on the wire.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum MetricsResponse {
    Distance(Vec<DistanceMetric>),
    Temperature(Vec<TemperatureMetric>),
}
