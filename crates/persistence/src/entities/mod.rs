//! Database entity types (row mappings).

pub mod product;
pub mod user;

pub use product::ProductEntity;
pub use user::UserEntity;
