//! Read-only queries over the crop and pest reference tables
//!
//! Everything here is pure and synchronous so it can run unchanged inside the
//! WASM module as well as behind the async client services.

use std::cmp::Ordering;

use crate::models::{CropInfo, CropRecommendation, MonthSchedule, PestInfo};
use crate::reference::{CROPS, PESTS};
use crate::types::{month_name, Language, WaterRequirement};

/// Score every plantable crop starts from
pub const BASE_SCORE: f64 = 0.8;

/// Bonus for a crop matching the region's agro-climatic zone
pub const REGION_BONUS: f64 = 0.2;

/// Reason used when no regional rule applies
pub const GENERIC_REASON: &str = "Suitable for planting this month";

const TERAI_REASON: &str = "Well suited to the warm Terai plains";
const HILL_REASON: &str = "Thrives in the cooler mid-hill climate";

/// Query interface over a pair of crop and pest tables
#[derive(Debug, Clone, Copy)]
pub struct CropCatalog<'a> {
    crops: &'a [CropInfo],
    pests: &'a [PestInfo],
}

impl CropCatalog<'static> {
    /// Catalog over the built-in reference tables
    pub fn builtin() -> Self {
        Self {
            crops: CROPS.as_slice(),
            pests: PESTS.as_slice(),
        }
    }
}

impl Default for CropCatalog<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> CropCatalog<'a> {
    pub fn from_tables(crops: &'a [CropInfo], pests: &'a [PestInfo]) -> Self {
        Self { crops, pests }
    }

    /// All crops in declaration order
    pub fn get_all_crops(&self) -> &'a [CropInfo] {
        self.crops
    }

    pub fn get_crop_by_id(&self, id: &str) -> Option<&'a CropInfo> {
        self.crops.iter().find(|crop| crop.id == id)
    }

    /// Crops that can be planted in `month`. Months outside 1-12 match nothing.
    pub fn get_crops_for_month(&self, month: u32) -> Vec<&'a CropInfo> {
        self.crops
            .iter()
            .filter(|crop| crop.is_plantable_in(month))
            .collect()
    }

    /// Crops harvested in `month`
    pub fn get_harvestable_crops(&self, month: u32) -> Vec<&'a CropInfo> {
        self.crops
            .iter()
            .filter(|crop| crop.is_harvestable_in(month))
            .collect()
    }

    /// Twelve entries, January to December
    pub fn get_planting_schedule(&self) -> Vec<MonthSchedule> {
        (1..=12)
            .map(|month| MonthSchedule {
                month,
                month_name: month_name(month, Language::Nepali)
                    .unwrap_or_default()
                    .to_string(),
                month_name_en: month_name(month, Language::English)
                    .unwrap_or_default()
                    .to_string(),
                planting_crops: self
                    .get_crops_for_month(month)
                    .into_iter()
                    .map(CropInfo::summary)
                    .collect(),
                harvesting_crops: self
                    .get_harvestable_crops(month)
                    .into_iter()
                    .map(CropInfo::summary)
                    .collect(),
            })
            .collect()
    }

    pub fn get_all_pests(&self) -> &'a [PestInfo] {
        self.pests
    }

    /// Pests whose affected-crop list mentions `crop_name`, ignoring case
    pub fn get_pests_for_crop(&self, crop_name: &str) -> Vec<&'a PestInfo> {
        self.pests
            .iter()
            .filter(|pest| pest.affects(crop_name))
            .collect()
    }

    /// Crops matching `query` against id or either name, ignoring case
    pub fn search_crops(&self, query: &str) -> Vec<&'a CropInfo> {
        let needle = query.trim().to_lowercase();
        self.crops
            .iter()
            .filter(|crop| {
                crop.id.to_lowercase().contains(&needle)
                    || crop.name_en.to_lowercase().contains(&needle)
                    || crop.name.contains(query.trim())
            })
            .collect()
    }

    pub fn get_crops_by_water_requirement(&self, level: WaterRequirement) -> Vec<&'a CropInfo> {
        self.crops
            .iter()
            .filter(|crop| crop.water_requirement == level)
            .collect()
    }

    /// Rank the crops plantable in `month` for `region`, best first.
    ///
    /// Every candidate starts at [`BASE_SCORE`]; Rice and Wheat gain
    /// [`REGION_BONUS`] in the Terai, Maize and Potato in the hills. Ties keep
    /// table order.
    pub fn get_crop_recommendations(&self, region: &str, month: u32) -> Vec<CropRecommendation> {
        let region = region.to_lowercase();
        let is_terai = region.contains("terai");
        let is_hill = region.contains("hill");

        let mut recommendations: Vec<CropRecommendation> = self
            .get_crops_for_month(month)
            .into_iter()
            .map(|crop| {
                let mut score = BASE_SCORE;
                let mut reasons = Vec::new();

                if is_terai && is_named(crop, &["Rice", "Wheat"]) {
                    score += REGION_BONUS;
                    reasons.push(TERAI_REASON);
                }
                if is_hill && is_named(crop, &["Maize", "Potato"]) {
                    score += REGION_BONUS;
                    reasons.push(HILL_REASON);
                }

                let reason = if reasons.is_empty() {
                    GENERIC_REASON.to_string()
                } else {
                    reasons.join("; ")
                };

                CropRecommendation {
                    crop: crop.clone(),
                    score: score.min(1.0),
                    reason,
                }
            })
            .collect();

        // sort_by is stable
        recommendations.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        recommendations
    }
}

fn is_named(crop: &CropInfo, names: &[&str]) -> bool {
    names
        .iter()
        .any(|name| crop.name_en.eq_ignore_ascii_case(name))
}
