//! Crop query service
//!
//! Pass-through reads over the static crop catalog, plus the user's chosen
//! crops kept in durable storage. Storage failures never reach the caller:
//! they are logged and the UI gets an empty list instead.

use std::sync::Arc;

use crate::config::StorageConfig;
use crate::error::AppResult;
use crate::storage::KeyValueStorage;
use shared::catalog::CropCatalog;
use shared::models::{CropInfo, CropRecommendation, MonthSchedule, PestInfo};
use shared::types::WaterRequirement;

/// Crop query service
#[derive(Clone)]
pub struct CropService {
    catalog: CropCatalog<'static>,
    storage: Arc<dyn KeyValueStorage>,
    user_crops_key: String,
}

impl CropService {
    pub fn new(storage: Arc<dyn KeyValueStorage>, config: &StorageConfig) -> Self {
        Self {
            catalog: CropCatalog::builtin(),
            storage,
            user_crops_key: config.user_crops_key.clone(),
        }
    }

    pub fn catalog(&self) -> CropCatalog<'static> {
        self.catalog
    }

    pub fn get_all_crops(&self) -> &'static [CropInfo] {
        self.catalog.get_all_crops()
    }

    pub fn get_crop_by_id(&self, id: &str) -> Option<&'static CropInfo> {
        self.catalog.get_crop_by_id(id)
    }

    pub fn get_crops_for_month(&self, month: u32) -> Vec<&'static CropInfo> {
        self.catalog.get_crops_for_month(month)
    }

    pub fn get_harvestable_crops(&self, month: u32) -> Vec<&'static CropInfo> {
        self.catalog.get_harvestable_crops(month)
    }

    pub fn get_planting_schedule(&self) -> Vec<MonthSchedule> {
        self.catalog.get_planting_schedule()
    }

    pub fn get_all_pests(&self) -> &'static [PestInfo] {
        self.catalog.get_all_pests()
    }

    pub fn get_pests_for_crop(&self, crop_name: &str) -> Vec<&'static PestInfo> {
        self.catalog.get_pests_for_crop(crop_name)
    }

    pub fn search_crops(&self, query: &str) -> Vec<&'static CropInfo> {
        self.catalog.search_crops(query)
    }

    pub fn get_crops_by_water_requirement(&self, level: WaterRequirement) -> Vec<&'static CropInfo> {
        self.catalog.get_crops_by_water_requirement(level)
    }

    pub fn get_crop_recommendations(&self, region: &str, month: u32) -> Vec<CropRecommendation> {
        let recommendations = self.catalog.get_crop_recommendations(region, month);
        tracing::debug!(region, month, count = recommendations.len(), "Computed crop recommendations");
        recommendations
    }

    /// Persist the user's crop list. Best effort.
    pub async fn save_user_crops(&self, crops: &[String]) {
        if let Err(e) = self.write_user_crops(crops).await {
            tracing::error!(error = %e, "Error saving user crops");
        }
    }

    /// The user's crop list, or empty when nothing usable is stored
    pub async fn get_user_crops(&self) -> Vec<String> {
        match self.read_user_crops().await {
            Ok(crops) => crops,
            Err(e) => {
                tracing::error!(error = %e, "Error getting user crops");
                Vec::new()
            }
        }
    }

    async fn write_user_crops(&self, crops: &[String]) -> AppResult<()> {
        let json = serde_json::to_string(crops)?;
        self.storage.set(&self.user_crops_key, &json).await
    }

    async fn read_user_crops(&self) -> AppResult<Vec<String>> {
        match self.storage.get(&self.user_crops_key).await? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }
}
