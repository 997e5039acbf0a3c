use sqlx::PgPool;
use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

use super::chart::{latest_per_day, months_back};
use super::dto::{
    CreateDistanceMetricRequest, CreateTemperatureMetricRequest, GetChartDataQuery,
    GetMetricsQuery, MetricsResponse,
};
use super::repo::{self, DistanceMetric, TemperatureMetric};
use super::units::{convert_distance, convert_temperature, DistanceUnit, MetricType, TemperatureUnit};

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("months must be \"1\" or \"2\", got \"{0}\"")]
    InvalidMonths(String),

    #[error("invalid chart window: {0}")]
    Window(#[from] time::error::ComponentRange),

    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

pub async fn create_distance_metric(
    db: &PgPool,
    req: CreateDistanceMetricRequest,
) -> Result<DistanceMetric, MetricsError> {
    let row = repo::insert_distance(db, Uuid::new_v4(), &req.user_id, req.date, req.value, req.unit)
        .await?;
    Ok(row)
}

pub async fn create_temperature_metric(
    db: &PgPool,
    req: CreateTemperatureMetricRequest,
) -> Result<TemperatureMetric, MetricsError> {
    let row =
        repo::insert_temperature(db, Uuid::new_v4(), &req.user_id, req.date, req.value, req.unit)
            .await?;
    Ok(row)
}

/// All of a user's samples for one metric type, date-descending, values
/// rescaled to the requested target unit when one is given.
pub async fn get_metrics(
    db: &PgPool,
    query: GetMetricsQuery,
) -> Result<MetricsResponse, MetricsError> {
    match query.metric_type {
        MetricType::Distance => {
            let rows = repo::list_distance_by_user(db, &query.user_id).await?;
            Ok(MetricsResponse::Distance(convert_distance_rows(
                rows,
                query.distance_unit,
            )))
        }
        MetricType::Temperature => {
            let rows = repo::list_temperature_by_user(db, &query.user_id).await?;
            Ok(MetricsResponse::Temperature(convert_temperature_rows(
                rows,
                query.temperature_unit,
            )))
        }
    }
}

/// Chart data: the user's samples from the last one or two calendar months
/// reduced to the latest entry per UTC day. Conversion runs after the
/// reduction, on the chosen representatives only.
pub async fn get_chart_data(
    db: &PgPool,
    query: GetChartDataQuery,
) -> Result<MetricsResponse, MetricsError> {
    let months = parse_months(&query.months)?;
    let end = OffsetDateTime::now_utc();
    let start = months_back(end, months)?;

    match query.metric_type {
        MetricType::Distance => {
            let rows = repo::list_distance_in_range(db, &query.user_id, start, end).await?;
            let daily = latest_per_day(rows, |m| m.date);
            Ok(MetricsResponse::Distance(convert_distance_rows(
                daily,
                query.distance_unit,
            )))
        }
        MetricType::Temperature => {
            let rows = repo::list_temperature_in_range(db, &query.user_id, start, end).await?;
            let daily = latest_per_day(rows, |m| m.date);
            Ok(MetricsResponse::Temperature(convert_temperature_rows(
                daily,
                query.temperature_unit,
            )))
        }
    }
}

/// The chart window is capped at two months; the query field stays a string
/// on the wire.
fn parse_months(raw: &str) -> Result<u32, MetricsError> {
    match raw {
        "1" => Ok(1),
        "2" => Ok(2),
        other => Err(MetricsError::InvalidMonths(other.to_string())),
    }
}

/// No target unit means stored units pass through untouched, mixed or not.
fn convert_distance_rows(
    rows: Vec<DistanceMetric>,
    target: Option<DistanceUnit>,
) -> Vec<DistanceMetric> {
    let Some(target) = target else { return rows };
    rows.into_iter()
        .map(|row| DistanceMetric {
            value: convert_distance(row.value, row.unit, target),
            unit: target,
            ..row
        })
        .collect()
}

fn convert_temperature_rows(
    rows: Vec<TemperatureMetric>,
    target: Option<TemperatureUnit>,
) -> Vec<TemperatureMetric> {
    let Some(target) = target else { return rows };
    rows.into_iter()
        .map(|row| TemperatureMetric {
            value: convert_temperature(row.value, row.unit, target),
            unit: target,
            ..row
        })
        .collect()
}
