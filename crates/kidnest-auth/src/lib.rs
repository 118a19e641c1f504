//! # kidnest-auth
//!
//! Credential handling for KidNest.
//!
//! ## Modules
//!
//! - `jwt` — stateless bearer token issuance and verification
//! - `password` — Argon2id password hashing and verification

pub mod jwt;
pub mod password;

pub use jwt::{Claims, TokenDecoder, TokenEncoder};
pub use password::PasswordHasher;
