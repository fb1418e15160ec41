//! Validation utilities for the Krishi Mitra app
//!
//! Includes Nepal-specific checks used by the sign-up and farm forms.

use rust_decimal::Decimal;

// ============================================================================
// General Validations
// ============================================================================

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

/// Validate password length
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 6 {
        return Err("Password must be at least 6 characters");
    }
    Ok(())
}

/// Validate a calendar month number
pub fn validate_month(month: u32) -> Result<(), &'static str> {
    if !(1..=12).contains(&month) {
        return Err("Month must be between 1 and 12");
    }
    Ok(())
}

/// Validate farm area in ropani
pub fn validate_farm_area(area: Decimal) -> Result<(), &'static str> {
    if area <= Decimal::ZERO {
        return Err("Farm area must be greater than zero");
    }
    Ok(())
}

// ============================================================================
// Nepal-Specific Validations
// ============================================================================

/// Validate Nepali mobile number
/// Accepts: 9841234567, 984-1234567, +977 9841234567, 9779841234567
pub fn validate_nepal_phone(phone: &str) -> Result<(), &'static str> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    let local = match digits.len() {
        10 => digits.as_str(),
        13 if digits.starts_with("977") => &digits[3..],
        _ => return Err("Invalid Nepali phone number format"),
    };

    // NTC and Ncell mobile ranges start with 97 or 98
    if local.starts_with("97") || local.starts_with("98") {
        Ok(())
    } else {
        Err("Invalid Nepali phone number format")
    }
}

/// Provinces of Nepal (English names)
pub const NEPAL_PROVINCES: &[&str] = &[
    "Koshi",
    "Madhesh",
    "Bagmati",
    "Gandaki",
    "Lumbini",
    "Karnali",
    "Sudurpashchim",
];

/// Provinces of Nepal (Nepali names)
pub const NEPAL_PROVINCES_NE: &[&str] = &[
    "कोशी",
    "मधेश",
    "बागमती",
    "गण्डकी",
    "लुम्बिनी",
    "कर्णाली",
    "सुदूरपश्चिम",
];

/// Validate province is one of Nepal's seven provinces
pub fn validate_nepal_province(province: &str) -> Result<(), &'static str> {
    let trimmed = province.trim();
    let lower = trimmed.to_lowercase();

    if NEPAL_PROVINCES.iter().any(|p| p.to_lowercase() == lower)
        || NEPAL_PROVINCES_NE.iter().any(|p| *p == trimmed)
    {
        return Ok(());
    }

    Err("Province is not a recognized province of Nepal")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("farmer@example.com").is_ok());
        assert!(validate_email("farmer").is_err());
        assert!(validate_email("a@b").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("password123").is_ok());
        assert!(validate_password("12345").is_err());
    }

    #[test]
    fn test_validate_month() {
        assert!(validate_month(1).is_ok());
        assert!(validate_month(12).is_ok());
        assert!(validate_month(0).is_err());
        assert!(validate_month(13).is_err());
    }

    #[test]
    fn test_validate_farm_area() {
        assert!(validate_farm_area(Decimal::new(5, 1)).is_ok());
        assert!(validate_farm_area(Decimal::ZERO).is_err());
        assert!(validate_farm_area(Decimal::new(-3, 0)).is_err());
    }

    #[test]
    fn test_validate_nepal_phone_valid() {
        assert!(validate_nepal_phone("9841234567").is_ok());
        assert!(validate_nepal_phone("984-1234567").is_ok());
        assert!(validate_nepal_phone("+977 9801234567").is_ok());
        assert!(validate_nepal_phone("9779741234567").is_ok());
    }

    #[test]
    fn test_validate_nepal_phone_invalid() {
        assert!(validate_nepal_phone("01-4412345").is_err());
        assert!(validate_nepal_phone("9641234567").is_err());
        assert!(validate_nepal_phone("98412345").is_err());
    }

    #[test]
    fn test_validate_nepal_province() {
        assert!(validate_nepal_province("Gandaki").is_ok());
        assert!(validate_nepal_province(" lumbini ").is_ok());
        assert!(validate_nepal_province("बागमती").is_ok());
        assert!(validate_nepal_province("Chiang Mai").is_err());
    }

    proptest! {
        #[test]
        fn prop_mobile_numbers_accepted(rest in "[0-9]{8}", prefix in prop_oneof![Just("97"), Just("98")]) {
            let phone = format!("{}{}", prefix, rest);
            prop_assert!(validate_nepal_phone(&phone).is_ok());
            let international = format!("+977{}", phone);
            prop_assert!(validate_nepal_phone(&international).is_ok());
        }

        #[test]
        fn prop_month_range(month in 0u32..40) {
            prop_assert_eq!(validate_month(month).is_ok(), (1..=12).contains(&month));
        }
    }
}
