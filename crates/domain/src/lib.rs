//! Domain layer for the store manager backend.
//!
//! This crate contains:
//! - Domain models (Product, User, audit log entries)
//! - Entity validators shared by the HTML and JSON surfaces

pub mod models;
pub mod validate;
