//! Inquiry API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::inquiry::{CreateInquiry, Inquiry},
};

use super::AppJson;

/// List all inquiries
#[utoipa::path(
    get,
    path = "/inquiries",
    tag = "inquiries",
    responses(
        (status = 200, description = "Inquiry list", body = Vec<Inquiry>)
    )
)]
pub async fn list_inquiries(State(state): State<crate::AppState>) -> Json<Vec<Inquiry>> {
    Json(state.services.inquiries.list())
}

/// Get inquiry by ID
#[utoipa::path(
    get,
    path = "/inquiries/{id}",
    tag = "inquiries",
    params(("id" = String, Path, description = "Inquiry ID")),
    responses(
        (status = 200, description = "Inquiry details", body = Inquiry),
        (status = 404, description = "Inquiry not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_inquiry(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Inquiry>> {
    let inquiry = state.services.inquiries.get_by_id(&id)?;
    Ok(Json(inquiry))
}

/// List inquiries sent about one equipment listing
#[utoipa::path(
    get,
    path = "/equipment/{id}/inquiries",
    tag = "inquiries",
    params(("id" = String, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Inquiries for the equipment", body = Vec<Inquiry>)
    )
)]
pub async fn list_equipment_inquiries(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> Json<Vec<Inquiry>> {
    Json(state.services.inquiries.list_for_equipment(&id))
}

/// Send a rental inquiry
#[utoipa::path(
    post,
    path = "/inquiries",
    tag = "inquiries",
    request_body = CreateInquiry,
    responses(
        (status = 201, description = "Inquiry created", body = Inquiry),
        (status = 400, description = "Missing field or wrong type", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_inquiry(
    State(state): State<crate::AppState>,
    AppJson(data): AppJson<CreateInquiry>,
) -> (StatusCode, Json<Inquiry>) {
    let inquiry = state.services.inquiries.create(data);
    (StatusCode::CREATED, Json(inquiry))
}
