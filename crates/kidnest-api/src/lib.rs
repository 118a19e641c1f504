//! # kidnest-api
//!
//! HTTP API layer for KidNest built on Axum: router, application state,
//! access-guard middleware, handlers, and wire DTOs.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use state::AppState;
