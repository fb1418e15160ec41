use once_cell::sync::Lazy;

use crate::models::{CropInfo, FertilizerSpec, SpacingSpec};
use crate::types::WaterRequirement;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Crop table in declaration order
pub static CROPS: Lazy<Vec<CropInfo>> = Lazy::new(|| {
    vec![
        CropInfo {
            id: "rice".to_string(),
            name: "धान".to_string(),
            name_en: "Rice".to_string(),
            varieties: strings(&["Sabitri", "Radha-4", "Hardinath-1", "Ramdhan"]),
            planting_months: vec![6, 7],
            harvest_months: vec![10, 11],
            growth_duration_days: 120,
            water_requirement: WaterRequirement::High,
            soil_type: "Clay loam with good water retention".to_string(),
            fertilizer: FertilizerSpec {
                nitrogen: "100 kg/ha in three splits".to_string(),
                phosphorus: "30 kg/ha at transplanting".to_string(),
                potassium: "30 kg/ha at transplanting".to_string(),
                organic: "6 t/ha farmyard manure before puddling".to_string(),
            },
            spacing: SpacingSpec {
                row_cm: 20,
                plant_cm: 15,
            },
            description: "Staple monsoon crop of the Terai and river valleys, transplanted into puddled fields."
                .to_string(),
            tips: strings(&[
                "Transplant 21-25 day old seedlings",
                "Keep 2-5 cm standing water until flowering",
                "Drain the field 10 days before harvest",
            ]),
            common_diseases: strings(&["Blast", "Bacterial leaf blight", "Sheath blight"]),
        },
        CropInfo {
            id: "wheat".to_string(),
            name: "गहुँ".to_string(),
            name_en: "Wheat".to_string(),
            varieties: strings(&["Vijay", "Gautam", "Aditya", "Tilottama"]),
            planting_months: vec![11, 12],
            harvest_months: vec![3, 4],
            growth_duration_days: 130,
            water_requirement: WaterRequirement::Medium,
            soil_type: "Well-drained loam".to_string(),
            fertilizer: FertilizerSpec {
                nitrogen: "100 kg/ha, half at sowing".to_string(),
                phosphorus: "50 kg/ha at sowing".to_string(),
                potassium: "25 kg/ha at sowing".to_string(),
                organic: "6 t/ha compost".to_string(),
            },
            spacing: SpacingSpec {
                row_cm: 20,
                plant_cm: 5,
            },
            description: "Main winter cereal sown after the rice harvest on residual moisture."
                .to_string(),
            tips: strings(&[
                "Sow by the end of November for best yield",
                "Irrigate at crown root initiation, about 21 days after sowing",
                "Harvest when grains are hard and straw turns golden",
            ]),
            common_diseases: strings(&["Yellow rust", "Leaf blight", "Loose smut"]),
        },
        CropInfo {
            id: "maize".to_string(),
            name: "मकै".to_string(),
            name_en: "Maize".to_string(),
            varieties: strings(&["Arun-2", "Manakamana-3", "Deuti", "Rampur Composite"]),
            planting_months: vec![4, 5, 6],
            harvest_months: vec![8, 9],
            growth_duration_days: 110,
            water_requirement: WaterRequirement::Medium,
            soil_type: "Fertile, well-drained sandy loam".to_string(),
            fertilizer: FertilizerSpec {
                nitrogen: "120 kg/ha in two splits".to_string(),
                phosphorus: "60 kg/ha at sowing".to_string(),
                potassium: "40 kg/ha at sowing".to_string(),
                organic: "10 t/ha farmyard manure".to_string(),
            },
            spacing: SpacingSpec {
                row_cm: 75,
                plant_cm: 25,
            },
            description: "Principal food crop of the mid-hills, sown with the first pre-monsoon rains."
                .to_string(),
            tips: strings(&[
                "Earth up plants at knee height",
                "Weed twice within the first 45 days",
                "Scout whorls weekly for armyworm",
            ]),
            common_diseases: strings(&["Northern leaf blight", "Grey leaf spot", "Stalk rot"]),
        },
        CropInfo {
            id: "potato".to_string(),
            name: "आलु".to_string(),
            name_en: "Potato".to_string(),
            varieties: strings(&["Cardinal", "Desiree", "Janakdev", "Khumal Seto-1"]),
            planting_months: vec![9, 10, 11],
            harvest_months: vec![1, 2, 3],
            growth_duration_days: 100,
            water_requirement: WaterRequirement::Medium,
            soil_type: "Loose, well-drained sandy loam rich in organic matter".to_string(),
            fertilizer: FertilizerSpec {
                nitrogen: "100 kg/ha, half at planting".to_string(),
                phosphorus: "100 kg/ha at planting".to_string(),
                potassium: "60 kg/ha at planting".to_string(),
                organic: "20 t/ha well-rotted manure".to_string(),
            },
            spacing: SpacingSpec {
                row_cm: 60,
                plant_cm: 25,
            },
            description: "Cash and food crop grown across hills and Terai from certified seed tubers."
                .to_string(),
            tips: strings(&[
                "Use sprouted seed tubers of 30-40 g",
                "Ridge soil over the rows 30 days after planting",
                "Stop irrigation two weeks before harvest",
            ]),
            common_diseases: strings(&["Late blight", "Early blight", "Bacterial wilt"]),
        },
    ]
});
