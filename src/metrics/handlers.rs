use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use crate::state::AppState;

use super::dto::{
    CreateDistanceMetricRequest, CreateTemperatureMetricRequest, GetChartDataQuery,
    GetMetricsQuery, MetricsResponse,
};
use super::repo::{DistanceMetric, TemperatureMetric};
use super::services::{self, MetricsError};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/metrics", get(get_metrics))
        .route("/metrics/chart", get(get_chart_data))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/metrics/distance", post(create_distance_metric))
        .route("/metrics/temperature", post(create_temperature_metric))
}

#[instrument(skip(state, body))]
pub async fn create_distance_metric(
    State(state): State<AppState>,
    Json(body): Json<CreateDistanceMetricRequest>,
) -> Result<(StatusCode, Json<DistanceMetric>), (StatusCode, String)> {
    require_user_id(&body.user_id)?;
    let row = services::create_distance_metric(&state.db, body)
        .await
        .map_err(error_response)?;
    info!(id = %row.id, user_id = %row.user_id, "distance metric created");
    Ok((StatusCode::CREATED, Json(row)))
}

#[instrument(skip(state, body))]
pub async fn create_temperature_metric(
    State(state): State<AppState>,
    Json(body): Json<CreateTemperatureMetricRequest>,
) -> Result<(StatusCode, Json<TemperatureMetric>), (StatusCode, String)> {
    require_user_id(&body.user_id)?;
    let row = services::create_temperature_metric(&state.db, body)
        .await
        .map_err(error_response)?;
    info!(id = %row.id, user_id = %row.user_id, "temperature metric created");
    Ok((StatusCode::CREATED, Json(row)))
}

#[instrument(skip(state))]
pub async fn get_metrics(
    State(state): State<AppState>,
    Query(query): Query<GetMetricsQuery>,
) -> Result<Json<MetricsResponse>, (StatusCode, String)> {
    require_user_id(&query.user_id)?;
    let response = services::get_metrics(&state.db, query)
        .await
        .map_err(error_response)?;
    Ok(Json(response))
}

#[instrument(skip(state))]
pub async fn get_chart_data(
    State(state): State<AppState>,
    Query(query): Query<GetChartDataQuery>,
) -> Result<Json<MetricsResponse>, (StatusCode, String)> {
    require_user_id(&query.user_id)?;
    let response = services::get_chart_data(&state.db, query)
        .await
        .map_err(error_response)?;
    Ok(Json(response))
}

fn require_user_id(user_id: &str) -> Result<(), (StatusCode, String)> {
    if user_id.trim().is_empty() {
        warn!("blank userId");
        return Err((StatusCode::BAD_REQUEST, "userId must not be empty".into()));
    }
    Ok(())
}

fn error_response(e: MetricsError) -> (StatusCode, String) {
    match e {
        MetricsError::InvalidMonths(_) => (StatusCode::BAD_REQUEST, e.to_string()),
        _ => {
            error!(error = %e, "metrics request failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
