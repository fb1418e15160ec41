//! Weather models shown on the home and weather screens

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{GpsCoordinates, Language};

/// Minimum temperature at or below which a night counts as frost risk
pub const FROST_THRESHOLD_CELSIUS: Decimal = Decimal::TWO;

/// Current conditions at the farmer's location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSnapshot {
    pub timestamp: DateTime<Utc>,
    pub location: GpsCoordinates,
    pub temperature_celsius: Decimal,
    pub humidity_percent: i32,
    pub precipitation_mm: Decimal,
    pub conditions: String,
}

/// One day of the forecast strip
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub high_celsius: Decimal,
    pub low_celsius: Decimal,
    pub precipitation_probability: i32,
    pub precipitation_mm: Decimal,
    pub humidity_percent: i32,
    pub conditions: String,
}

impl DailyForecast {
    pub fn is_frost_risk(&self) -> bool {
        self.low_celsius <= FROST_THRESHOLD_CELSIUS
    }
}

/// Bilingual warning raised for a forecast day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherAlert {
    pub alert_type: WeatherAlertType,
    pub message: String,
    pub message_ne: String,
    pub forecast_date: NaiveDate,
}

impl WeatherAlert {
    pub fn message_in(&self, language: Language) -> &str {
        match language {
            Language::Nepali => &self.message_ne,
            Language::English => &self.message,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeatherAlertType {
    HeavyRain,
    Frost,
    Heatwave,
    Drought,
}
