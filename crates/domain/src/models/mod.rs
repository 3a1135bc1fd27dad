//! Domain model types.

pub mod audit_log;
pub mod product;
pub mod user;

pub use audit_log::{AuditKind, AuditTable, NewAuditEntry, RequestContext, Snapshot};
pub use product::{NewProduct, Product, ProductInput};
pub use user::{NewUser, User, UserInput, UserUpdate};
