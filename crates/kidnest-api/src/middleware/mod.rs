//! Request middleware: bearer-token authentication, role guarding, CORS.

pub mod auth;
pub mod cors;
pub mod role;

pub use auth::{CurrentUser, authenticate};
pub use cors::build_cors_layer;
pub use role::{PARENT_ONLY, require_role};
