//! Product domain models.
//!
//! Wire field names keep the original Portuguese form/JSON contract
//! (`nome`, `descricao`, `preco`, `estoque`).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use shared::normalize::{round_price, title_case};

use super::Snapshot;

/// A stored product row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "preco")]
    pub price: Decimal,
    #[serde(rename = "estoque")]
    pub stock: i32,
    #[serde(rename = "criado_em")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "atualizado_em")]
    pub updated_at: DateTime<Utc>,
}

/// Product fields as submitted by a client, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductInput {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(rename = "preco")]
    pub price: Decimal,
    #[serde(rename = "estoque")]
    pub stock: i32,
}

impl ProductInput {
    /// Applies the storage normalization rules: trimmed, title-cased name,
    /// price rounded to 2 decimal places, blank description dropped.
    pub fn normalize(&self) -> NewProduct {
        NewProduct {
            name: title_case(self.name.trim()),
            description: self
                .description
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(String::from),
            price: round_price(self.price),
            stock: self.stock,
        }
    }
}

/// Validated, normalized product fields ready for persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
}

impl NewProduct {
    /// Field snapshot recorded alongside a mutation in the audit log.
    pub fn snapshot(&self) -> Snapshot {
        let mut map = Snapshot::new();
        map.insert("nome".into(), json!(self.name));
        map.insert("descricao".into(), json!(self.description));
        map.insert("preco".into(), json!(self.price));
        map.insert("estoque".into(), json!(self.stock));
        map
    }
}

impl Product {
    /// Snapshot of the stored state, used as the prior-state of an audit entry.
    pub fn snapshot(&self) -> Snapshot {
        let mut map = Snapshot::new();
        map.insert("nome".into(), json!(self.name));
        map.insert("descricao".into(), json!(self.description));
        map.insert("preco".into(), json!(self.price));
        map.insert("estoque".into(), json!(self.stock));
        map
    }
}
