//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{categories, equipment, health, inquiries};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Farm Equipment Rental API",
        version = "1.0.0",
        description = "Agricultural equipment rental marketplace REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Categories
        categories::list_categories,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        // Inquiries
        inquiries::list_inquiries,
        inquiries::get_inquiry,
        inquiries::list_equipment_inquiries,
        inquiries::create_inquiry,
    ),
    components(
        schemas(
            // Equipment
            crate::models::enums::Category,
            crate::models::enums::EquipmentSort,
            crate::models::equipment::Equipment,
            crate::models::equipment::CreateEquipment,
            crate::models::equipment::UpdateEquipment,
            // Inquiries
            crate::models::inquiry::Inquiry,
            crate::models::inquiry::CreateInquiry,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "equipment", description = "Equipment listings"),
        (name = "inquiries", description = "Rental inquiries")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
