//! Shared domain enums

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Equipment category. The wire labels are part of the public API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Category {
    Tractors,
    Harvesters,
    #[serde(rename = "Irrigation Systems")]
    IrrigationSystems,
    Tillers,
    Seeders,
    #[serde(rename = "Hand Tools")]
    HandTools,
    #[serde(rename = "Storage Equipment")]
    StorageEquipment,
    Transport,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Tractors,
        Category::Harvesters,
        Category::IrrigationSystems,
        Category::Tillers,
        Category::Seeders,
        Category::HandTools,
        Category::StorageEquipment,
        Category::Transport,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Tractors => "Tractors",
            Category::Harvesters => "Harvesters",
            Category::IrrigationSystems => "Irrigation Systems",
            Category::Tillers => "Tillers",
            Category::Seeders => "Seeders",
            Category::HandTools => "Hand Tools",
            Category::StorageEquipment => "Storage Equipment",
            Category::Transport => "Transport",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EquipmentSort
// ---------------------------------------------------------------------------

/// Ordering applied to equipment search results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentSort {
    /// Store order (newest first)
    #[default]
    Relevance,
    PriceLow,
    PriceHigh,
    Newest,
    Rating,
}
