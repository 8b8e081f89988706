//! Rental inquiry service

use crate::{
    error::{AppError, AppResult},
    models::inquiry::{CreateInquiry, Inquiry},
    repository::Repository,
};

#[derive(Clone)]
pub struct InquiriesService {
    repository: Repository,
}

impl InquiriesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub fn list(&self) -> Vec<Inquiry> {
        self.repository.inquiries_list()
    }

    pub fn get_by_id(&self, id: &str) -> AppResult<Inquiry> {
        self.repository
            .inquiries_get(id)
            .ok_or_else(|| AppError::NotFound(format!("Inquiry {} not found", id)))
    }

    /// Inquiries about one listing. Unknown listings simply have none.
    pub fn list_for_equipment(&self, equipment_id: &str) -> Vec<Inquiry> {
        self.repository.inquiries_for_equipment(equipment_id)
    }

    /// Record an inquiry. The referenced listing is not required to exist
    /// and contact details are stored as given.
    pub fn create(&self, data: CreateInquiry) -> Inquiry {
        let inquiry = self.repository.inquiries_create(data);
        tracing::info!(
            "Inquiry received: id={} equipment_id={}",
            inquiry.id,
            inquiry.equipment_id
        );
        inquiry
    }
}
