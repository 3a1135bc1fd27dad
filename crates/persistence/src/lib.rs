//! Persistence layer for the store manager backend.
//!
//! This crate contains:
//! - Database connection pool management
//! - Entity definitions (database row mappings)
//! - Repositories for products, users, and the append-only audit log

pub mod db;
pub mod entities;
pub mod repositories;
