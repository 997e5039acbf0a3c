use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use super::units::{DistanceUnit, MetricType, TemperatureUnit};

/// A stored distance measurement. Rows are append-only; nothing updates or
/// deletes them after insert.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DistanceMetric {
    pub id: Uuid,
    pub user_id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub value: f64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub metric_type: MetricType,
    pub unit: DistanceUnit,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// A stored temperature measurement.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureMetric {
    pub id: Uuid,
    pub user_id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub value: f64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub metric_type: MetricType,
    pub unit: TemperatureUnit,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

pub async fn insert_distance(
    db: &PgPool,
    id: Uuid,
    user_id: &str,
    date: OffsetDateTime,
    value: f64,
    unit: DistanceUnit,
) -> sqlx::Result<DistanceMetric> {
    sqlx::query_as::<_, DistanceMetric>(
        r#"
        INSERT INTO distance_metrics (id, user_id, date, value, type, unit)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, user_id, date, value, type, unit, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(date)
    .bind(value)
    .bind(MetricType::Distance)
    .bind(unit)
    .fetch_one(db)
    .await
}

pub async fn insert_temperature(
    db: &PgPool,
    id: Uuid,
    user_id: &str,
    date: OffsetDateTime,
    value: f64,
    unit: TemperatureUnit,
) -> sqlx::Result<TemperatureMetric> {
    sqlx::query_as::<_, TemperatureMetric>(
        r#"
        INSERT INTO temperature_metrics (id, user_id, date, value, type, unit)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, user_id, date, value, type, unit, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(date)
    .bind(value)
    .bind(MetricType::Temperature)
    .bind(unit)
    .fetch_one(db)
    .await
}

pub async fn list_distance_by_user(db: &PgPool, user_id: &str) -> sqlx::Result<Vec<DistanceMetric>> {
    sqlx::query_as::<_, DistanceMetric>(
        r#"
        SELECT id, user_id, date, value, type, unit, created_at, updated_at
        FROM distance_metrics
        WHERE user_id = $1
        ORDER BY date DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
}

pub async fn list_temperature_by_user(
    db: &PgPool,
    user_id: &str,
) -> sqlx::Result<Vec<TemperatureMetric>> {
    sqlx::query_as::<_, TemperatureMetric>(
        r#"
        SELECT id, user_id, date, value, type, unit, created_at, updated_at
        FROM temperature_metrics
        WHERE user_id = $1
        ORDER BY date DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
}

/// Window bounds are inclusive on both ends.
pub async fn list_distance_in_range(
    db: &PgPool,
    user_id: &str,
    start: OffsetDateTime,
    end: OffsetDateTime,
) -> sqlx::Result<Vec<DistanceMetric>> {
    sqlx::query_as::<_, DistanceMetric>(
        r#"
        SELECT id, user_id, date, value, type, unit, created_at, updated_at
        FROM distance_metrics
        WHERE user_id = $1 AND date >= $2 AND date <= $3
        ORDER BY date DESC
        "#,
    )
    .bind(user_id)
    .bind(start)
    .bind(end)
    .fetch_all(db)
    .await
}

pub async fn list_temperature_in_range(
    db: &PgPool,
    user_id: &str,
    start: OffsetDateTime,
    end: OffsetDateTime,
) -> sqlx::Result<Vec<TemperatureMetric>> {
    sqlx::query_as::<_, TemperatureMetric>(
        r#"
        SELECT id, user_id, date, value, type, unit, created_at, updated_at
        FROM temperature_metrics
        WHERE user_id = $1 AND date >= $2 AND date <= $3
        ORDER BY date DESC
        "#,
    )
    .bind(user_id)
    .bind(start)
    .bind(end)
    .fetch_all(db)
    .await
}
