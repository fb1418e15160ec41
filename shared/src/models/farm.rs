//! Farm plot models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::GpsCoordinates;

/// A farm registered by the user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Farm {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    /// Area in ropani (1 ropani = 508.72 m²)
    pub area: Decimal,
    /// English names of the crops grown on the farm
    pub crops: Vec<String>,
    pub coordinates: Option<GpsCoordinates>,
}

impl Farm {
    pub fn new(name: impl Into<String>, location: impl Into<String>, area: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            location: location.into(),
            area,
            crops: Vec::new(),
            coordinates: None,
        }
    }
}
