//! Kid profile entity.

pub mod model;

pub use model::{CreateKid, Kid, UpdateKid};
