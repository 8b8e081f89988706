//! Data models for the rental marketplace

pub mod enums;
pub mod equipment;
pub mod inquiry;

// Re-export commonly used types
pub use enums::{Category, EquipmentSort};
pub use equipment::{CreateEquipment, Equipment, EquipmentPatch, NewEquipment, UpdateEquipment};
pub use inquiry::{CreateInquiry, Inquiry};
