//! Equipment model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use super::enums::{Category, EquipmentSort};
use crate::error::{AppError, AppResult};

/// Rentable equipment listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Equipment {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub description: String,
    /// Picture of the equipment (URI)
    pub image_url: String,
    /// Daily rental price
    pub price_per_day: i32,
    /// Hourly rental price, `0` or absent when not rented by the hour
    pub price_per_hour: Option<i32>,
    pub location: String,
    pub owner_name: String,
    pub owner_contact: String,
    /// Free text, the listing form offers Excellent / Good / Fair
    pub condition: String,
    pub year: Option<i32>,
    pub brand: Option<String>,
    /// Newline-separated list of specifications
    pub specifications: Option<String>,
    /// "true" or "false"
    pub is_available: String,
    pub rating: i32,
    pub review_count: i32,
    pub created_at: DateTime<Utc>,
}

impl Equipment {
    /// Overlay a patch: absent fields keep their current value.
    /// `id`, `rating`, `review_count` and `created_at` are never touched.
    pub fn apply(&mut self, patch: EquipmentPatch) {
        macro_rules! overlay {
            ($($field:ident),* $(,)?) => {
                $(
                    if let Some(value) = patch.$field {
                        self.$field = value;
                    }
                )*
            };
        }

        overlay!(
            name,
            category,
            description,
            image_url,
            price_per_day,
            price_per_hour,
            location,
            owner_name,
            owner_contact,
            condition,
            year,
            brand,
            specifications,
            is_available,
        );
    }
}

/// Store-level input for a new listing. Field shape is checked by the
/// service before one of these is built.
#[derive(Debug, Clone)]
pub struct NewEquipment {
    pub name: String,
    pub category: Category,
    pub description: String,
    pub image_url: String,
    pub price_per_day: i32,
    pub price_per_hour: Option<i32>,
    pub location: String,
    pub owner_name: String,
    pub owner_contact: String,
    pub condition: String,
    pub year: Option<i32>,
    pub brand: Option<String>,
    pub specifications: Option<String>,
    pub is_available: String,
}

/// Store-level partial update. `None` means unchanged; for nullable
/// attributes `Some(None)` clears the value.
#[derive(Debug, Clone, Default)]
pub struct EquipmentPatch {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub price_per_day: Option<i32>,
    pub price_per_hour: Option<Option<i32>>,
    pub location: Option<String>,
    pub owner_name: Option<String>,
    pub owner_contact: Option<String>,
    pub condition: Option<String>,
    pub year: Option<Option<i32>>,
    pub brand: Option<Option<String>>,
    pub specifications: Option<Option<String>>,
    pub is_available: Option<String>,
}

fn default_availability() -> String {
    "true".to_string()
}

pub(crate) fn validate_category(value: &str) -> Result<(), ValidationError> {
    value.parse::<Category>().map(|_| ()).map_err(|_| {
        let mut err = ValidationError::new("category");
        err.message = Some(
            format!(
                "Category must be one of: {}",
                Category::ALL.map(|c| c.as_str()).join(", ")
            )
            .into(),
        );
        err
    })
}

fn validate_availability(value: &str) -> Result<(), ValidationError> {
    match value {
        "true" | "false" => Ok(()),
        _ => {
            let mut err = ValidationError::new("availability");
            err.message = Some("Availability must be \"true\" or \"false\"".into());
            Err(err)
        }
    }
}

fn parse_category(value: &str) -> AppResult<Category> {
    value
        .parse::<Category>()
        .map_err(|e| AppError::Validation(format!("category: {}", e)))
}

/// Create equipment request. Presence and JSON types are enforced by
/// deserialization; only the category and availability flag are checked
/// beyond that.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateEquipment {
    pub name: String,
    #[validate(custom(function = "validate_category"))]
    #[schema(value_type = Category)]
    pub category: String,
    pub description: String,
    pub image_url: String,
    pub price_per_day: i32,
    pub price_per_hour: Option<i32>,
    pub location: String,
    pub owner_name: String,
    pub owner_contact: String,
    pub condition: String,
    pub year: Option<i32>,
    pub brand: Option<String>,
    pub specifications: Option<String>,
    #[serde(default = "default_availability")]
    #[validate(custom(function = "validate_availability"))]
    pub is_available: String,
}

impl CreateEquipment {
    /// Convert a validated request into store input
    pub fn into_new_equipment(self) -> AppResult<NewEquipment> {
        Ok(NewEquipment {
            category: parse_category(&self.category)?,
            name: self.name,
            description: self.description,
            image_url: self.image_url,
            price_per_day: self.price_per_day,
            price_per_hour: self.price_per_hour,
            location: self.location,
            owner_name: self.owner_name,
            owner_contact: self.owner_contact,
            condition: self.condition,
            year: self.year,
            brand: self.brand,
            specifications: self.specifications,
            is_available: self.is_available,
        })
    }
}

/// Update equipment request. Omitted fields are left unchanged; `null`
/// clears the optional attributes.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateEquipment {
    pub name: Option<String>,
    #[validate(custom(function = "validate_category"))]
    #[schema(value_type = Option<Category>)]
    pub category: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub price_per_day: Option<i32>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<i32>)]
    pub price_per_hour: Option<Option<i32>>,
    pub location: Option<String>,
    pub owner_name: Option<String>,
    pub owner_contact: Option<String>,
    pub condition: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<i32>)]
    pub year: Option<Option<i32>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub brand: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub specifications: Option<Option<String>>,
    #[validate(custom(function = "validate_availability"))]
    pub is_available: Option<String>,
}

impl UpdateEquipment {
    /// Convert a validated request into a store patch
    pub fn into_patch(self) -> AppResult<EquipmentPatch> {
        let category = self.category.as_deref().map(parse_category).transpose()?;

        Ok(EquipmentPatch {
            name: self.name,
            category,
            description: self.description,
            image_url: self.image_url,
            price_per_day: self.price_per_day,
            price_per_hour: self.price_per_hour,
            location: self.location,
            owner_name: self.owner_name,
            owner_contact: self.owner_contact,
            condition: self.condition,
            year: self.year,
            brand: self.brand,
            specifications: self.specifications,
            is_available: self.is_available,
        })
    }
}

/// Equipment search query parameters
#[derive(Debug, Default, Deserialize, Validate, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct EquipmentQuery {
    /// Case-insensitive match on name, description or location
    pub q: Option<String>,
    #[validate(custom(function = "validate_category"))]
    #[param(value_type = Option<Category>)]
    #[schema(value_type = Option<Category>)]
    pub category: Option<String>,
    pub sort: Option<EquipmentSort>,
}

impl EquipmentQuery {
    pub fn category(&self) -> AppResult<Option<Category>> {
        self.category.as_deref().map(parse_category).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request() -> CreateEquipment {
        CreateEquipment {
            name: "Test Tiller".to_string(),
            category: "Tillers".to_string(),
            description: "d".to_string(),
            image_url: "http://x/y.jpg".to_string(),
            price_per_day: 500,
            price_per_hour: None,
            location: "Pune".to_string(),
            owner_name: "A".to_string(),
            owner_contact: "123".to_string(),
            condition: "Good".to_string(),
            year: None,
            brand: None,
            specifications: None,
            is_available: "true".to_string(),
        }
    }

    #[test]
    fn test_create_request_valid() {
        assert!(create_request().validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_unknown_category() {
        let mut req = create_request();
        req.category = "Drones".to_string();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("category"));
    }

    #[test]
    fn test_create_request_accepts_free_text() {
        let mut req = create_request();
        req.description = String::new();
        req.image_url = "/uploads/tiller.jpg".to_string();
        req.owner_contact = String::new();
        req.price_per_day = -1;
        req.price_per_hour = Some(-5);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_bad_availability() {
        let mut req = create_request();
        req.is_available = "yes".to_string();
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("is_available"));
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn test_create_request_defaults_availability() {
        let req: CreateEquipment = serde_json::from_value(serde_json::json!({
            "name": "Mini Power Tiller",
            "category": "Tillers",
            "description": "Compact power tiller",
            "image_url": "https://example.com/tiller.jpg",
            "price_per_day": 800,
            "location": "Kolkata, West Bengal",
            "owner_name": "Debashis Sen",
            "owner_contact": "+91 91098 76543",
            "condition": "Excellent",
            "rating": 1
        }))
        .unwrap();
        assert_eq!(req.is_available, "true");

        let new = req.into_new_equipment().unwrap();
        assert_eq!(new.category, Category::Tillers);
    }

    #[test]
    fn test_update_request_distinguishes_null_from_absent() {
        let req: UpdateEquipment =
            serde_json::from_value(serde_json::json!({ "brand": null, "price_per_day": 999 }))
                .unwrap();
        assert_eq!(req.brand, Some(None));
        assert_eq!(req.year, None);
        assert_eq!(req.price_per_day, Some(999));
    }

    #[test]
    fn test_update_request_rejects_unknown_category() {
        let req = UpdateEquipment {
            category: Some("Boats".to_string()),
            ..Default::default()
        };
        assert!(req.validate().unwrap_err().field_errors().contains_key("category"));
    }

    #[test]
    fn test_patch_clears_nullable_fields() {
        let new = create_request().into_new_equipment().unwrap();
        let mut equipment = Equipment {
            id: "1".to_string(),
            name: new.name,
            category: new.category,
            description: new.description,
            image_url: new.image_url,
            price_per_day: new.price_per_day,
            price_per_hour: Some(120),
            location: new.location,
            owner_name: new.owner_name,
            owner_contact: new.owner_contact,
            condition: new.condition,
            year: Some(2022),
            brand: None,
            specifications: Some("5.5 HP Engine\nReverse Gear".to_string()),
            is_available: new.is_available,
            rating: 5,
            review_count: 0,
            created_at: Utc::now(),
        };

        equipment.apply(EquipmentPatch {
            specifications: Some(None),
            price_per_hour: Some(Some(0)),
            ..Default::default()
        });
        assert_eq!(equipment.specifications, None);
        assert_eq!(equipment.price_per_hour, Some(0));
        assert_eq!(equipment.year, Some(2022));
    }
}
