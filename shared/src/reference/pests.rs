use once_cell::sync::Lazy;

use crate::models::PestInfo;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Pest table in declaration order
pub static PESTS: Lazy<Vec<PestInfo>> = Lazy::new(|| {
    vec![
        PestInfo {
            id: "rice-stem-borer".to_string(),
            name: "धानको गबारो".to_string(),
            name_en: "Rice Stem Borer".to_string(),
            affected_crops: strings(&["Rice"]),
            symptoms: strings(&[
                "Dead hearts in young tillers",
                "White empty panicles at heading",
                "Small holes near the stem base",
            ]),
            prevention: strings(&[
                "Plough stubble under after harvest",
                "Avoid excess nitrogen",
                "Clip seedling tips before transplanting",
            ]),
            treatment: strings(&["Apply Cartap hydrochloride granules in standing water"]),
            organic_solutions: strings(&[
                "Release Trichogramma egg parasitoids",
                "Install light traps to catch adult moths",
            ]),
        },
        PestInfo {
            id: "fall-armyworm".to_string(),
            name: "फल आर्मीवर्म".to_string(),
            name_en: "Fall Armyworm".to_string(),
            affected_crops: strings(&["Maize"]),
            symptoms: strings(&[
                "Ragged holes in whorl leaves",
                "Sawdust-like frass in the whorl",
            ]),
            prevention: strings(&[
                "Sow early and at the same time as neighbours",
                "Intercrop with legumes",
            ]),
            treatment: strings(&["Spray Emamectin benzoate into the whorl"]),
            organic_solutions: strings(&[
                "Apply neem seed kernel extract",
                "Put a pinch of sand and ash into the whorl",
            ]),
        },
        PestInfo {
            id: "late-blight".to_string(),
            name: "डढुवा रोग".to_string(),
            name_en: "Late Blight".to_string(),
            affected_crops: strings(&["Potato", "Tomato"]),
            symptoms: strings(&[
                "Water-soaked dark patches on leaves",
                "White mould on leaf undersides in humid weather",
                "Brown rot in tubers",
            ]),
            prevention: strings(&[
                "Plant resistant varieties",
                "Use certified disease-free seed",
                "Avoid overhead irrigation",
            ]),
            treatment: strings(&["Spray Mancozeb at the first sign of disease"]),
            organic_solutions: strings(&[
                "Spray Bordeaux mixture",
                "Remove and burn infected plants",
            ]),
        },
        PestInfo {
            id: "wheat-aphid".to_string(),
            name: "लाही किरा".to_string(),
            name_en: "Wheat Aphid".to_string(),
            affected_crops: strings(&["Wheat", "Barley"]),
            symptoms: strings(&[
                "Colonies on leaves and ears",
                "Sticky honeydew and sooty mould",
                "Yellowing and curling of leaves",
            ]),
            prevention: strings(&[
                "Avoid late sowing",
                "Conserve ladybird beetles",
            ]),
            treatment: strings(&["Spray Imidacloprid when colonies exceed threshold"]),
            organic_solutions: strings(&[
                "Spray soap water solution",
                "Spray tobacco leaf extract",
            ]),
        },
    ]
});
