//! Equipment domain methods on Repository

use chrono::Utc;

use super::{new_id, newest_first, Repository};
use crate::models::equipment::{Equipment, EquipmentPatch, NewEquipment};

impl Repository {
    /// List all equipment, most recently created first
    pub fn equipment_list(&self) -> Vec<Equipment> {
        let state = self.read();
        newest_first(state.equipment.values(), |e: &Equipment| e.created_at)
    }

    /// Get equipment by ID
    pub fn equipment_get(&self, id: &str) -> Option<Equipment> {
        self.read().equipment.get(id).cloned()
    }

    /// Create equipment. Rating starts at 5 with no reviews.
    pub fn equipment_create(&self, data: NewEquipment) -> Equipment {
        let equipment = Equipment {
            id: new_id(),
            name: data.name,
            category: data.category,
            description: data.description,
            image_url: data.image_url,
            price_per_day: data.price_per_day,
            price_per_hour: data.price_per_hour,
            location: data.location,
            owner_name: data.owner_name,
            owner_contact: data.owner_contact,
            condition: data.condition,
            year: data.year,
            brand: data.brand,
            specifications: data.specifications,
            is_available: data.is_available,
            rating: 5,
            review_count: 0,
            created_at: Utc::now(),
        };

        self.write()
            .equipment
            .insert(equipment.id.clone(), equipment.clone());
        tracing::debug!("Created equipment {} ({})", equipment.id, equipment.name);
        equipment
    }

    /// Update equipment, returns None when the ID is unknown
    pub fn equipment_update(&self, id: &str, patch: EquipmentPatch) -> Option<Equipment> {
        let mut state = self.write();
        let equipment = state.equipment.get_mut(id)?;
        equipment.apply(patch);
        tracing::debug!("Updated equipment {}", id);
        Some(equipment.clone())
    }

    /// Delete equipment, returns whether a record was removed.
    /// Inquiries referencing it are kept.
    pub fn equipment_delete(&self, id: &str) -> bool {
        let removed = self.write().equipment.shift_remove(id).is_some();
        if removed {
            tracing::debug!("Deleted equipment {}", id);
        }
        removed
    }

    pub fn equipment_count(&self) -> usize {
        self.read().equipment.len()
    }

    /// Insert a fully-formed record, used for seeding
    pub(crate) fn equipment_insert(&self, equipment: Equipment) {
        self.write()
            .equipment
            .insert(equipment.id.clone(), equipment);
    }
}
