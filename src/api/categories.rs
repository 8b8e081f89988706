//! Category listing endpoint

use axum::Json;

use crate::models::Category;

/// List the equipment categories accepted by the catalog
#[utoipa::path(
    get,
    path = "/categories",
    tag = "equipment",
    responses(
        (status = 200, description = "Equipment categories", body = Vec<Category>)
    )
)]
pub async fn list_categories() -> Json<Vec<Category>> {
    Json(Category::ALL.to_vec())
}
