//! Signup, login, and session introspection flows.

pub mod service;

pub use service::{AuthService, LoginOutcome, SignupInput, SignupOutcome};
