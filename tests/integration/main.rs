//! Integration test entry point.

mod helpers;

mod auth_flow_test;
mod guard_test;
mod kid_crud_test;
mod validation_test;
