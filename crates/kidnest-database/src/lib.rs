//! # kidnest-database
//!
//! PostgreSQL connection pool management, embedded migrations, and
//! repository implementations for KidNest.

pub mod connection;
pub mod migration;
pub mod repositories;
