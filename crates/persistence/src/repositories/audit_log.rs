//! Audit recorder: append-only writes to the `audit_log` table.
//!
//! `record` runs on the caller's open transaction. If the write fails the
//! error propagates and aborts the whole transaction, so a mutation and its
//! audit entry are committed atomically or not at all. The application never
//! updates, deletes, or reads these rows.

use domain::models::NewAuditEntry;
use serde_json::{json, Value};
use sqlx::PgConnection;

/// Writes one immutable audit entry describing a mutation.
pub async fn record(conn: &mut PgConnection, entry: &NewAuditEntry) -> Result<(), sqlx::Error> {
    let prior = entry.prior.clone().map(Value::Object);
    let new = entry.new.clone().map(Value::Object);
    let context = json!({
        "request_id": entry.context.request_id,
        "client_ip": entry.context.client_ip,
        "user_agent": entry.context.user_agent,
    });

    sqlx::query(
        r#"
        INSERT INTO audit_log (operation, table_name, record_id, prior_state, new_state, context)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(entry.kind.to_string())
    .bind(entry.table.to_string())
    .bind(entry.record_id)
    .bind(prior)
    .bind(new)
    .bind(context)
    .execute(conn)
    .await?;

    Ok(())
}
