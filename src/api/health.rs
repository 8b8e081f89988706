//! Health check endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Current status of the service
    pub status: String,
    /// Version of the service
    pub version: String,
    /// Number of listings currently held by the store
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment_count: Option<usize>,
    /// Whether the sample catalog was loaded at startup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_data: Option<bool>,
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        equipment_count: None,
        sample_data: None,
    })
}

/// Readiness check endpoint (reads the store)
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Service is ready", body = HealthResponse)
    )
)]
pub async fn readiness_check(State(state): State<crate::AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ready".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        equipment_count: Some(state.services.equipment.count()),
        sample_data: Some(state.config.store.seed_sample_data),
    })
}
