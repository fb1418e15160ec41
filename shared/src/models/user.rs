//! User account models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Email of the account every fresh user database is seeded with
pub const DEMO_EMAIL: &str = "demo@example.com";

/// Password of the seeded demo account
pub const DEMO_PASSWORD: &str = "password123";

/// Fixed id of the seeded demo account
pub const DEMO_USER_ID: Uuid = Uuid::from_u128(0x6b72_6973_6869_0000_0000_0000_0000_0001);

/// A farmer using the app
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub location: String,
    pub phone: String,
    pub farm_count: u32,
    /// Total cultivated area in ropani
    pub total_area: Decimal,
}

impl User {
    /// The seeded demo farmer
    pub fn demo() -> Self {
        Self {
            id: DEMO_USER_ID,
            name: "Ram Bahadur Thapa".to_string(),
            email: DEMO_EMAIL.to_string(),
            location: "Chitwan, Nepal".to_string(),
            phone: "9841234567".to_string(),
            farm_count: 2,
            total_area: Decimal::new(125, 1),
        }
    }

    /// Apply the fields present in `update`
    pub fn apply(&mut self, update: &UserProfileUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(location) = &update.location {
            self.location = location.clone();
        }
        if let Some(phone) = &update.phone {
            self.phone = phone.clone();
        }
        if let Some(farm_count) = update.farm_count {
            self.farm_count = farm_count;
        }
        if let Some(total_area) = update.total_area {
            self.total_area = total_area;
        }
    }
}

/// Partial profile edit coming from the profile screen
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserProfileUpdate {
    pub name: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub farm_count: Option<u32>,
    pub total_area: Option<Decimal>,
}

/// Email and password as typed on the login screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl LoginCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Sign-up form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterInput {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    pub location: String,
    pub phone: String,
}

/// Token and profile returned by a successful login or registration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}
