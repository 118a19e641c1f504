//! Parent-scoped kid profile CRUD.

pub mod service;

pub use service::{CreateKidInput, KidService};
