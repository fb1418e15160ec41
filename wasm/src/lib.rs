//! WebAssembly module for Krishi Mitra
//!
//! Exposes the crop and pest reference catalog to the UI so screens can
//! query it without a round trip through the async services:
//! - Crop lookup, month filters and the planting schedule
//! - Pest lookup by crop
//! - Regional crop recommendations
//! - Sign-up and farm form validation
//!
//! Structured results cross the boundary as JSON strings.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;
use shared::catalog::CropCatalog;
use shared::types::{Language, WaterRequirement};
use shared::validation;
use wasm_bindgen::prelude::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::debug_1(&JsValue::from_str("krishi-wasm loaded"));
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| js_sys::Error::new(&format!("Serialization failed: {}", e)).into())
}

fn catalog() -> CropCatalog<'static> {
    CropCatalog::builtin()
}

/// All crops, in table order
#[wasm_bindgen(js_name = getAllCrops)]
pub fn get_all_crops() -> Result<String, JsValue> {
    to_json(catalog().get_all_crops())
}

/// One crop by id, or `null`
#[wasm_bindgen(js_name = getCropById)]
pub fn get_crop_by_id(id: &str) -> Result<String, JsValue> {
    to_json(&catalog().get_crop_by_id(id))
}

#[wasm_bindgen(js_name = getCropsForMonth)]
pub fn get_crops_for_month(month: u32) -> Result<String, JsValue> {
    to_json(&catalog().get_crops_for_month(month))
}

#[wasm_bindgen(js_name = getHarvestableCrops)]
pub fn get_harvestable_crops(month: u32) -> Result<String, JsValue> {
    to_json(&catalog().get_harvestable_crops(month))
}

#[wasm_bindgen(js_name = getPlantingSchedule)]
pub fn get_planting_schedule() -> Result<String, JsValue> {
    to_json(&catalog().get_planting_schedule())
}

#[wasm_bindgen(js_name = getAllPests)]
pub fn get_all_pests() -> Result<String, JsValue> {
    to_json(catalog().get_all_pests())
}

#[wasm_bindgen(js_name = getPestsForCrop)]
pub fn get_pests_for_crop(crop_name: &str) -> Result<String, JsValue> {
    to_json(&catalog().get_pests_for_crop(crop_name))
}

/// Ranked recommendations for a region and month
#[wasm_bindgen(js_name = getCropRecommendations)]
pub fn get_crop_recommendations(region: &str, month: u32) -> Result<String, JsValue> {
    to_json(&catalog().get_crop_recommendations(region, month))
}

#[wasm_bindgen(js_name = searchCrops)]
pub fn search_crops(query: &str) -> Result<String, JsValue> {
    to_json(&catalog().search_crops(query))
}

/// `level` is one of `low`, `medium`, `high`
#[wasm_bindgen(js_name = getCropsByWaterRequirement)]
pub fn get_crops_by_water_requirement(level: &str) -> Result<String, JsValue> {
    let level = WaterRequirement::from_str(level)
        .map_err(|e| JsValue::from(js_sys::Error::new(&e.to_string())))?;
    to_json(&catalog().get_crops_by_water_requirement(level))
}

/// Month name in the given language code (`ne` or `en`)
#[wasm_bindgen(js_name = monthName)]
pub fn month_name(month: u32, language: &str) -> Option<String> {
    let language = Language::from_str(language).unwrap_or_default();
    shared::types::month_name(month, language).map(str::to_string)
}

#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email(email: &str) -> bool {
    validation::validate_email(email).is_ok()
}

#[wasm_bindgen(js_name = isValidNepalPhone)]
pub fn is_valid_nepal_phone(phone: &str) -> bool {
    validation::validate_nepal_phone(phone).is_ok()
}

#[wasm_bindgen(js_name = isValidPassword)]
pub fn is_valid_password(password: &str) -> bool {
    validation::validate_password(password).is_ok()
}

#[wasm_bindgen(js_name = isValidMonth)]
pub fn is_valid_month(month: u32) -> bool {
    validation::validate_month(month).is_ok()
}

/// Farm area in ropani. Non-finite input is invalid.
#[wasm_bindgen(js_name = isValidFarmArea)]
pub fn is_valid_farm_area(area: f64) -> bool {
    Decimal::try_from(area)
        .map(|area| validation::validate_farm_area(area).is_ok())
        .unwrap_or(false)
}

/// Accepts English or Nepali province names
#[wasm_bindgen(js_name = isValidNepalProvince)]
pub fn is_valid_nepal_province(province: &str) -> bool {
    validation::validate_nepal_province(province).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn parse(json: Result<String, JsValue>) -> Value {
        serde_json::from_str(&json.unwrap()).unwrap()
    }

    #[test]
    fn test_crop_exports() {
        assert_eq!(parse(get_all_crops()).as_array().unwrap().len(), 4);
        assert_eq!(parse(get_crop_by_id("rice"))["name_en"], "Rice");
        assert_eq!(parse(get_crop_by_id("tea")), Value::Null);
        assert_eq!(parse(get_crops_for_month(13)), Value::Array(vec![]));
        assert_eq!(parse(search_crops("pot"))[0]["id"], "potato");
        assert_eq!(parse(get_crops_by_water_requirement("high"))[0]["id"], "rice");
    }

    #[test]
    fn test_schedule_and_pests() {
        let schedule = parse(get_planting_schedule());
        assert_eq!(schedule.as_array().unwrap().len(), 12);
        assert_eq!(schedule[10]["month"], 11);

        assert_eq!(parse(get_all_pests()).as_array().unwrap().len(), 4);
        assert_eq!(parse(get_pests_for_crop("wheat"))[0]["name_en"], "Wheat Aphid");
        assert_eq!(parse(get_harvestable_crops(8))[0]["id"], "maize");
    }

    #[test]
    fn test_recommendations() {
        let recs = parse(get_crop_recommendations("Terai", 11));
        assert_eq!(recs[0]["crop"]["id"], "wheat");
        assert_eq!(recs[0]["score"], 1.0);
    }

    #[test]
    fn test_month_name_and_validation() {
        assert_eq!(month_name(1, "en").as_deref(), Some("January"));
        assert_eq!(month_name(0, "en"), None);
        assert!(is_valid_email("farmer@example.com"));
        assert!(!is_valid_email("farmer"));
        assert!(is_valid_nepal_phone("9841234567"));
        assert!(!is_valid_nepal_phone("12345"));
    }

    #[test]
    fn test_form_validators() {
        assert!(is_valid_password("secret99"));
        assert!(!is_valid_password("12345"));
        assert!(is_valid_month(12));
        assert!(!is_valid_month(0));
        assert!(!is_valid_month(13));
        assert!(is_valid_farm_area(12.5));
        assert!(!is_valid_farm_area(0.0));
        assert!(!is_valid_farm_area(-3.0));
        assert!(!is_valid_farm_area(f64::NAN));
        assert!(is_valid_nepal_province("Gandaki"));
        assert!(is_valid_nepal_province("बागमती"));
        assert!(!is_valid_nepal_province("Chiang Mai"));
    }
}
