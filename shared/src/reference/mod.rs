//! Static agronomic reference tables
//!
//! Built once per process on first access and never mutated afterwards.

mod crops;
mod pests;

pub use crops::CROPS;
pub use pests::PESTS;
