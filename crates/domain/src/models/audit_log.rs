//! Audit log domain models.
//!
//! One entry is written per successful mutation, inside the transaction that
//! performed it. Entries are append-only: the application never updates,
//! deletes, or reads them back.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Field-name -> value mapping captured before/after a mutation.
pub type Snapshot = serde_json::Map<String, serde_json::Value>;

/// Kind of mutation an audit entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuditKind {
    Create,
    Update,
    Delete,
}

impl fmt::Display for AuditKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditKind::Create => write!(f, "CREATE"),
            AuditKind::Update => write!(f, "UPDATE"),
            AuditKind::Delete => write!(f, "DELETE"),
        }
    }
}

impl FromStr for AuditKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CREATE" => Ok(AuditKind::Create),
            "UPDATE" => Ok(AuditKind::Update),
            "DELETE" => Ok(AuditKind::Delete),
            _ => Err(format!("Unknown audit kind: {}", s)),
        }
    }
}

/// Tables whose mutations are audited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditTable {
    Products,
    Users,
}

impl fmt::Display for AuditTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditTable::Products => write!(f, "products"),
            AuditTable::Users => write!(f, "users"),
        }
    }
}

impl FromStr for AuditTable {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "products" => Ok(AuditTable::Products),
            "users" => Ok(AuditTable::Users),
            _ => Err(format!("Unknown audit table: {}", s)),
        }
    }
}

/// Request context recorded with every audit entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestContext {
    pub request_id: Option<String>,
    pub client_ip: Option<String>,
    pub user_agent: Option<String>,
}

/// A pending audit entry, built by a CRUD service and written by the
/// audit recorder within the mutation's transaction.
#[derive(Debug, Clone)]
pub struct NewAuditEntry {
    pub kind: AuditKind,
    pub table: AuditTable,
    pub record_id: i64,
    /// State before the mutation; absent for CREATE.
    pub prior: Option<Snapshot>,
    /// State after the mutation; absent for DELETE.
    pub new: Option<Snapshot>,
    pub context: RequestContext,
}

impl NewAuditEntry {
    pub fn create(table: AuditTable, record_id: i64, new: Snapshot, context: RequestContext) -> Self {
        Self {
            kind: AuditKind::Create,
            table,
            record_id,
            prior: None,
            new: Some(new),
            context,
        }
    }

    pub fn update(
        table: AuditTable,
        record_id: i64,
        prior: Snapshot,
        new: Snapshot,
        context: RequestContext,
    ) -> Self {
        Self {
            kind: AuditKind::Update,
            table,
            record_id,
            prior: Some(prior),
            new: Some(new),
            context,
        }
    }

    pub fn delete(table: AuditTable, record_id: i64, prior: Snapshot, context: RequestContext) -> Self {
        Self {
            kind: AuditKind::Delete,
            table,
            record_id,
            prior: Some(prior),
            new: None,
            context,
        }
    }
}
