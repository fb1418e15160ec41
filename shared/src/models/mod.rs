//! Domain models for the Krishi Mitra farmer app

mod community;
mod crop;
mod farm;
mod notification;
mod pest;
mod sync;
mod user;
mod weather;

pub use community::*;
pub use crop::*;
pub use farm::*;
pub use notification::*;
pub use pest::*;
pub use sync::*;
pub use user::*;
pub use weather::*;
