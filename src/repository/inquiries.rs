//! Inquiry domain methods on Repository

use chrono::Utc;

use super::{new_id, newest_first, Repository};
use crate::models::inquiry::{CreateInquiry, Inquiry};

impl Repository {
    /// List all inquiries, most recently created first
    pub fn inquiries_list(&self) -> Vec<Inquiry> {
        let state = self.read();
        newest_first(state.inquiries.values(), |i: &Inquiry| i.created_at)
    }

    /// Get inquiry by ID
    pub fn inquiries_get(&self, id: &str) -> Option<Inquiry> {
        self.read().inquiries.get(id).cloned()
    }

    /// Inquiries referencing the given equipment ID, most recent first.
    /// The equipment itself does not have to exist.
    pub fn inquiries_for_equipment(&self, equipment_id: &str) -> Vec<Inquiry> {
        let state = self.read();
        newest_first(
            state
                .inquiries
                .values()
                .filter(|i| i.equipment_id == equipment_id),
            |i: &Inquiry| i.created_at,
        )
    }

    /// Create an inquiry
    pub fn inquiries_create(&self, data: CreateInquiry) -> Inquiry {
        let inquiry = Inquiry {
            id: new_id(),
            equipment_id: data.equipment_id,
            name: data.name,
            email: data.email,
            phone: data.phone,
            message: data.message,
            start_date: data.start_date,
            end_date: data.end_date,
            created_at: Utc::now(),
        };

        self.write()
            .inquiries
            .insert(inquiry.id.clone(), inquiry.clone());
        tracing::debug!(
            "Created inquiry {} for equipment {}",
            inquiry.id,
            inquiry.equipment_id
        );
        inquiry
    }
}
