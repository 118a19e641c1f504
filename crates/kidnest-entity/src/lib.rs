//! # kidnest-entity
//!
//! Domain entity models for KidNest: user identities (parent and kid roles)
//! and parent-managed kid profiles.

pub mod kid;
pub mod user;

pub use kid::Kid;
pub use user::{User, UserRole};
