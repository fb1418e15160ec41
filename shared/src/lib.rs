//! Shared types and models for the Krishi Mitra farmer app
//!
//! This crate contains the reference data and types shared between the client
//! data layer, the UI host (via WASM), and tests.

pub mod catalog;
pub mod models;
pub mod reference;
pub mod types;
pub mod validation;

pub use catalog::*;
pub use models::*;
pub use types::*;
pub use validation::*;
