//! Equipment service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::EquipmentSort,
        equipment::{CreateEquipment, Equipment, EquipmentQuery, UpdateEquipment},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
}

impl EquipmentService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub fn list(&self) -> Vec<Equipment> {
        self.repository.equipment_list()
    }

    pub fn count(&self) -> usize {
        self.repository.equipment_count()
    }

    /// Filter the catalog by free text and category, then order it
    pub fn search(&self, query: &EquipmentQuery) -> AppResult<Vec<Equipment>> {
        query.validate()?;
        let category = query.category()?;
        let needle = query
            .q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);

        let mut rows: Vec<Equipment> = self
            .repository
            .equipment_list()
            .into_iter()
            .filter(|e| category.map_or(true, |c| e.category == c))
            .filter(|e| {
                needle.as_deref().map_or(true, |n| {
                    e.name.to_lowercase().contains(n)
                        || e.description.to_lowercase().contains(n)
                        || e.location.to_lowercase().contains(n)
                })
            })
            .collect();

        match query.sort.unwrap_or_default() {
            // Store order is already newest first
            EquipmentSort::Relevance | EquipmentSort::Newest => {}
            EquipmentSort::PriceLow => rows.sort_by_key(|e| e.price_per_day),
            EquipmentSort::PriceHigh => rows.sort_by(|a, b| b.price_per_day.cmp(&a.price_per_day)),
            EquipmentSort::Rating => rows.sort_by(|a, b| b.rating.cmp(&a.rating)),
        }

        Ok(rows)
    }

    pub fn get_by_id(&self, id: &str) -> AppResult<Equipment> {
        self.repository
            .equipment_get(id)
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    pub fn create(&self, data: CreateEquipment) -> AppResult<Equipment> {
        data.validate()?;
        let equipment = self.repository.equipment_create(data.into_new_equipment()?);
        tracing::info!(
            "Equipment listed: id={} name={:?} category={}",
            equipment.id,
            equipment.name,
            equipment.category
        );
        Ok(equipment)
    }

    pub fn update(&self, id: &str, data: UpdateEquipment) -> AppResult<Equipment> {
        data.validate()?;
        let patch = data.into_patch()?;
        self.repository
            .equipment_update(id, patch)
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Returns false when nothing was deleted
    pub fn delete(&self, id: &str) -> bool {
        let removed = self.repository.equipment_delete(id);
        if removed {
            tracing::info!("Equipment removed: id={}", id);
        }
        removed
    }
}
