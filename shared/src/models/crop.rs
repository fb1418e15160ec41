//! Crop reference models and the records derived from them

use serde::{Deserialize, Serialize};

use crate::types::WaterRequirement;

/// Agronomic reference record for a single crop
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropInfo {
    pub id: String,
    /// Name in Nepali
    pub name: String,
    pub name_en: String,
    pub varieties: Vec<String>,
    /// Calendar months (1-12) in which the crop is sown or transplanted
    pub planting_months: Vec<u32>,
    /// Calendar months (1-12) in which the crop is harvested
    pub harvest_months: Vec<u32>,
    pub growth_duration_days: u32,
    pub water_requirement: WaterRequirement,
    pub soil_type: String,
    pub fertilizer: FertilizerSpec,
    pub spacing: SpacingSpec,
    pub description: String,
    pub tips: Vec<String>,
    pub common_diseases: Vec<String>,
}

impl CropInfo {
    pub fn is_plantable_in(&self, month: u32) -> bool {
        self.planting_months.contains(&month)
    }

    pub fn is_harvestable_in(&self, month: u32) -> bool {
        self.harvest_months.contains(&month)
    }

    /// Lightweight projection used by schedules and lists
    pub fn summary(&self) -> CropSummary {
        CropSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            name_en: self.name_en.clone(),
        }
    }
}

/// Recommended fertilizer doses, free text per nutrient
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FertilizerSpec {
    pub nitrogen: String,
    pub phosphorus: String,
    pub potassium: String,
    pub organic: String,
}

/// Planting distances in centimetres
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpacingSpec {
    pub row_cm: u32,
    pub plant_cm: u32,
}

/// Identifying fields of a crop
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CropSummary {
    pub id: String,
    pub name: String,
    pub name_en: String,
}

/// Crops to sow and to harvest in one calendar month
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthSchedule {
    pub month: u32,
    pub month_name: String,
    pub month_name_en: String,
    pub planting_crops: Vec<CropSummary>,
    pub harvesting_crops: Vec<CropSummary>,
}

/// A crop ranked for a region and month
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropRecommendation {
    pub crop: CropInfo,
    /// Suitability in [0, 1]
    pub score: f64,
    pub reason: String,
}
