//! Shared utilities for the store manager backend.
//!
//! This crate contains:
//! - Password hashing (argon2)
//! - Text and money normalization helpers

pub mod normalize;
pub mod password;
