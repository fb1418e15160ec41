//! Pest reference models

use serde::{Deserialize, Serialize};

/// Reference record for a pest or disease
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PestInfo {
    pub id: String,
    /// Name in Nepali
    pub name: String,
    pub name_en: String,
    /// English crop names, matched case-insensitively against `CropInfo::name_en`
    pub affected_crops: Vec<String>,
    pub symptoms: Vec<String>,
    pub prevention: Vec<String>,
    pub treatment: Vec<String>,
    pub organic_solutions: Vec<String>,
}

impl PestInfo {
    /// Whether any affected crop contains `crop_name`, ignoring case
    pub fn affects(&self, crop_name: &str) -> bool {
        let needle = crop_name.to_lowercase();
        self.affected_crops
            .iter()
            .any(|crop| crop.to_lowercase().contains(&needle))
    }
}
