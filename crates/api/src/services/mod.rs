//! CRUD services.
//!
//! Each service owns the full lifecycle of a mutation: validate the input,
//! normalize it, apply the row change and write the audit entry in one
//! transaction, and report the outcome through [`crate::error::ApiError`].
//! Both the HTML and JSON surfaces call the same service methods.

pub mod products;
pub mod users;

pub use products::ProductService;
pub use users::UserService;
