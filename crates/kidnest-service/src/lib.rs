//! # kidnest-service
//!
//! Business logic for KidNest.
//!
//! ## Modules
//!
//! - `family` — unique family-code allocation and parent↔kid linkage
//! - `auth` — signup, login, and session introspection flows
//! - `kid` — parent-scoped kid profile CRUD

pub mod auth;
pub mod family;
pub mod kid;

pub use auth::AuthService;
pub use family::FamilyLinkage;
pub use kid::KidService;
