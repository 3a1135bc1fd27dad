//! Repositories: parameterized-statement access to the database.
//!
//! Reads go through a pool-holding repository struct. Mutations are free
//! functions over an open connection, so a CRUD service can run the row
//! change and its audit entry inside one transaction.

pub mod audit_log;
pub mod product;
pub mod user;

pub use product::ProductRepository;
pub use user::UserRepository;
