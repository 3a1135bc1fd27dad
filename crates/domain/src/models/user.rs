//! User domain models.
//!
//! The password travels only as far as the service that hashes it; stored
//! state and audit snapshots carry the hash presence, never its value.

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::Snapshot;

/// A stored user row, without the password hash.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
}

/// User fields as submitted by a client, before validation.
///
/// `password` is optional: absent or blank on an edit means "keep the
/// current password".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserInput {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "senha", default)]
    pub password: Option<String>,
}

impl UserInput {
    /// True when the input carries a password to set (non-blank).
    pub fn wants_password_change(&self) -> bool {
        self.password
            .as_deref()
            .map(|p| !p.trim().is_empty())
            .unwrap_or(false)
    }
}

/// Validated, normalized fields for inserting a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    /// Audit snapshot. Only the presence of a password is recorded.
    pub fn snapshot(&self) -> Snapshot {
        let mut map = Snapshot::new();
        map.insert("nome".into(), json!(self.name));
        map.insert("email".into(), json!(self.email));
        map.insert("password_set".into(), json!(true));
        map
    }
}

/// Fixed update descriptor for a user row.
///
/// The column set is structural: an update always writes `name` and `email`,
/// and writes `password_hash` only when a new password was supplied. Nothing
/// here is derived from client-supplied keys.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
    pub password_hash: Option<String>,
}

impl UserUpdate {
    /// Audit snapshot of the state being written. `password_set` reflects
    /// whether this update changes the password.
    pub fn snapshot(&self) -> Snapshot {
        let mut map = Snapshot::new();
        map.insert("nome".into(), json!(self.name));
        map.insert("email".into(), json!(self.email));
        map.insert("password_set".into(), json!(self.password_hash.is_some()));
        map
    }
}

impl User {
    /// Snapshot of the stored state, used as the prior-state of an audit
    /// entry. Stored users always have a password hash.
    pub fn snapshot(&self) -> Snapshot {
        let mut map = Snapshot::new();
        map.insert("nome".into(), json!(self.name));
        map.insert("email".into(), json!(self.email));
        map.insert("password_set".into(), json!(true));
        map
    }
}
