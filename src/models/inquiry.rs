//! Rental inquiry model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Rental request sent to the owner of a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Inquiry {
    pub id: String,
    /// Listing the inquiry is about. Not checked against existing equipment.
    pub equipment_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    /// Requested start date, free text
    pub start_date: Option<String>,
    /// Requested end date, free text
    pub end_date: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Create inquiry request. Contact fields are free text.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateInquiry {
    pub equipment_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}
