//! Business logic services

pub mod equipment;
pub mod inquiries;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub equipment: equipment::EquipmentService,
    pub inquiries: inquiries::InquiriesService,
}

impl Services {
    /// Create all services on top of the given store
    pub fn new(repository: Repository) -> Self {
        Self {
            equipment: equipment::EquipmentService::new(repository.clone()),
            inquiries: inquiries::InquiriesService::new(repository),
        }
    }
}
