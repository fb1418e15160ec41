//! Services called directly by the UI layer

pub mod auth;
pub mod crop;
pub mod user_db;

pub use auth::AuthService;
pub use crop::CropService;
pub use user_db::{MockUserDatabase, UserRecord};
