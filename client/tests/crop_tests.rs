//! Crop query service tests
//!
//! Tests for the reference catalog as seen through the service:
//! - Month filters and the planting schedule
//! - Pest lookup by crop name
//! - Regional recommendations
//! - Durable user crop list

use std::sync::Arc;

use krishi_client::config::StorageConfig;
use krishi_client::storage::{FileStorage, KeyValueStorage, MemoryStorage};
use krishi_client::CropService;
use proptest::prelude::*;
use shared::types::WaterRequirement;

fn service() -> CropService {
    CropService::new(Arc::new(MemoryStorage::new()), &StorageConfig::default())
}

fn names<'a>(crops: impl IntoIterator<Item = &'a shared::models::CropInfo>) -> Vec<&'a str> {
    crops.into_iter().map(|c| c.name_en.as_str()).collect()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_catalog_contents() {
        let crops = service();
        assert_eq!(names(crops.get_all_crops()), vec!["Rice", "Wheat", "Maize", "Potato"]);
        assert_eq!(crops.get_all_pests().len(), 4);
        assert_eq!(crops.get_crop_by_id("maize").map(|c| c.name_en.as_str()), Some("Maize"));
        assert!(crops.get_crop_by_id("Maize").is_none());
        assert!(crops.get_crop_by_id("barley").is_none());
    }

    #[test]
    fn test_crops_for_month() {
        let crops = service();
        assert_eq!(names(crops.get_crops_for_month(6)), vec!["Rice", "Maize"]);
        assert_eq!(names(crops.get_crops_for_month(11)), vec!["Wheat", "Potato"]);
        assert!(crops.get_crops_for_month(1).is_empty());
        assert!(crops.get_crops_for_month(0).is_empty());
        assert!(crops.get_crops_for_month(13).is_empty());
    }

    #[test]
    fn test_harvestable_crops() {
        let crops = service();
        assert_eq!(names(crops.get_harvestable_crops(3)), vec!["Wheat", "Potato"]);
        assert_eq!(names(crops.get_harvestable_crops(10)), vec!["Rice"]);
    }

    #[test]
    fn test_planting_schedule() {
        let schedule = service().get_planting_schedule();
        assert_eq!(schedule.len(), 12);
        assert_eq!(schedule[0].month, 1);
        assert_eq!(schedule[0].month_name_en, "January");
        assert!(schedule[0].planting_crops.is_empty());
        assert_eq!(schedule[0].harvesting_crops.len(), 1);

        let june = &schedule[5];
        let ids: Vec<&str> = june.planting_crops.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["rice", "maize"]);
    }

    #[test]
    fn test_pests_for_crop() {
        let crops = service();
        let potato: Vec<&str> = crops
            .get_pests_for_crop("potato")
            .iter()
            .map(|p| p.name_en.as_str())
            .collect();
        assert_eq!(potato, vec!["Late Blight"]);

        let rice = crops.get_pests_for_crop("rice");
        assert_eq!(rice.len(), 1);
        assert_eq!(rice[0].name_en, "Rice Stem Borer");

        let tomato = crops.get_pests_for_crop("TOMATO");
        assert_eq!(tomato.len(), 1);
        assert!(crops.get_pests_for_crop("Coffee").is_empty());
    }

    #[test]
    fn test_search_and_water_requirement() {
        let crops = service();
        assert_eq!(names(crops.search_crops("whe")), vec!["Wheat"]);
        assert_eq!(names(crops.search_crops("धान")), vec!["Rice"]);
        assert_eq!(names(crops.get_crops_by_water_requirement(WaterRequirement::High)), vec!["Rice"]);
        assert!(crops.get_crops_by_water_requirement(WaterRequirement::Low).is_empty());
    }

    #[test]
    fn test_recommendations_terai_june() {
        let recs = service().get_crop_recommendations("Terai", 6);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].crop.name_en, "Rice");
        assert!((recs[0].score - 1.0).abs() < f64::EPSILON);
        assert_eq!(recs[1].crop.name_en, "Maize");
        assert!((recs[1].score - 0.8).abs() < f64::EPSILON);
        assert_eq!(recs[1].reason, "Suitable for planting this month");
    }

    #[test]
    fn test_recommendations_hills_prefer_maize() {
        let recs = service().get_crop_recommendations("Mid Hills", 6);
        assert_eq!(recs[0].crop.name_en, "Maize");
        assert_eq!(recs[1].crop.name_en, "Rice");
    }

    #[test]
    fn test_recommendations_empty_month() {
        assert!(service().get_crop_recommendations("Terai", 1).is_empty());
    }

    #[tokio::test]
    async fn test_user_crops_round_trip() {
        let crops = service();
        assert!(crops.get_user_crops().await.is_empty());

        let chosen = vec!["Rice".to_string(), "Maize".to_string()];
        crops.save_user_crops(&chosen).await;
        assert_eq!(crops.get_user_crops().await, chosen);

        crops.save_user_crops(&[]).await;
        assert!(crops.get_user_crops().await.is_empty());
    }

    #[tokio::test]
    async fn test_user_crops_survive_restart_on_file_storage() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorageConfig::default();
        let chosen = vec!["wheat".to_string()];

        {
            let storage: Arc<dyn KeyValueStorage> =
                Arc::new(FileStorage::open(dir.path().to_path_buf()).unwrap());
            CropService::new(storage, &config).save_user_crops(&chosen).await;
        }

        let storage: Arc<dyn KeyValueStorage> =
            Arc::new(FileStorage::open(dir.path().to_path_buf()).unwrap());
        let crops = CropService::new(storage, &config);
        assert_eq!(crops.get_user_crops().await, chosen);
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #[test]
    fn month_filters_agree_with_tables(month in 0u32..=14) {
        let crops = service();
        for crop in crops.get_crops_for_month(month) {
            prop_assert!(crop.planting_months.contains(&month));
        }
        for crop in crops.get_harvestable_crops(month) {
            prop_assert!(crop.harvest_months.contains(&month));
        }
    }

    #[test]
    fn recommendations_sorted_and_bounded(region in "[A-Za-z ]{0,20}", month in 1u32..=12) {
        let crops = service();
        let recs = crops.get_crop_recommendations(&region, month);
        prop_assert_eq!(recs.len(), crops.get_crops_for_month(month).len());
        for rec in &recs {
            prop_assert!(rec.score >= 0.8 && rec.score <= 1.0);
        }
        for pair in recs.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn schedule_matches_month_filters(month in 1u32..=12) {
        let crops = service();
        let entry = &crops.get_planting_schedule()[(month - 1) as usize];
        prop_assert_eq!(entry.month, month);
        prop_assert_eq!(entry.planting_crops.len(), crops.get_crops_for_month(month).len());
        prop_assert_eq!(entry.harvesting_crops.len(), crops.get_harvestable_crops(month).len());
    }
}
