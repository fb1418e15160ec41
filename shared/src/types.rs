//! Common types used across the application

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// GPS coordinates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl GpsCoordinates {
    pub fn new(latitude: Decimal, longitude: Decimal) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Supported languages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Nepali,
    English,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Nepali => "ne",
            Language::English => "en",
        }
    }
}

impl FromStr for Language {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ne" | "nepali" => Ok(Language::Nepali),
            "en" | "english" => Ok(Language::English),
            other => Err(ParseError::Language(other.to_string())),
        }
    }
}

/// Errors raised when parsing loosely typed input coming from the UI layer
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown language code: {0}")]
    Language(String),

    #[error("Unknown water requirement: {0}")]
    WaterRequirement(String),
}

/// Month names in Devanagari, January first
pub const MONTH_NAMES_NE: [&str; 12] = [
    "जनवरी",
    "फेब्रुअरी",
    "मार्च",
    "अप्रिल",
    "मे",
    "जुन",
    "जुलाई",
    "अगस्ट",
    "सेप्टेम्बर",
    "अक्टोबर",
    "नोभेम्बर",
    "डिसेम्बर",
];

/// Month names in English, January first
pub const MONTH_NAMES_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Name of a calendar month (1-12). Returns `None` outside that range.
pub fn month_name(month: u32, language: Language) -> Option<&'static str> {
    let index = month.checked_sub(1)? as usize;
    let names = match language {
        Language::Nepali => &MONTH_NAMES_NE,
        Language::English => &MONTH_NAMES_EN,
    };
    names.get(index).copied()
}

/// Qualitative water requirement of a crop
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WaterRequirement {
    Low,
    Medium,
    High,
}

impl fmt::Display for WaterRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaterRequirement::Low => write!(f, "Low"),
            WaterRequirement::Medium => write!(f, "Medium"),
            WaterRequirement::High => write!(f, "High"),
        }
    }
}

impl FromStr for WaterRequirement {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(WaterRequirement::Low),
            "medium" => Ok(WaterRequirement::Medium),
            "high" => Ok(WaterRequirement::High),
            other => Err(ParseError::WaterRequirement(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(1, Language::English), Some("January"));
        assert_eq!(month_name(12, Language::Nepali), Some("डिसेम्बर"));
        assert_eq!(month_name(0, Language::English), None);
        assert_eq!(month_name(13, Language::Nepali), None);
    }

    #[test]
    fn test_parse_water_requirement() {
        assert_eq!("HIGH".parse::<WaterRequirement>(), Ok(WaterRequirement::High));
        assert!("soggy".parse::<WaterRequirement>().is_err());
    }

    #[test]
    fn test_parse_language() {
        assert_eq!("en".parse::<Language>(), Ok(Language::English));
        assert_eq!("Nepali".parse::<Language>(), Ok(Language::Nepali));
        assert_eq!(Language::Nepali.code(), "ne");
    }
}
