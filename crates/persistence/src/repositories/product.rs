//! Product repository for database operations.

use domain::models::NewProduct;
use sqlx::{PgConnection, PgPool};

use crate::entities::ProductEntity;

const PRODUCT_COLUMNS: &str = "id, name, description, price, stock, created_at, updated_at";

/// Pooled read access to the `products` table.
#[derive(Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All products, newest first.
    pub async fn list(&self) -> Result<Vec<ProductEntity>, sqlx::Error> {
        sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {} FROM products ORDER BY created_at DESC",
            PRODUCT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<ProductEntity>, sqlx::Error> {
        sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {} FROM products WHERE id = $1",
            PRODUCT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }
}

/// Fetches a product on the caller's open transaction, so the snapshot a
/// mutation audits against is the row the mutation saw.
pub async fn fetch(conn: &mut PgConnection, id: i64) -> Result<Option<ProductEntity>, sqlx::Error> {
    sqlx::query_as::<_, ProductEntity>(&format!(
        "SELECT {} FROM products WHERE id = $1",
        PRODUCT_COLUMNS
    ))
    .bind(id)
    .fetch_optional(conn)
    .await
}

/// Inserts a product, returning the generated id (None when the insert had
/// no effect).
pub async fn insert(conn: &mut PgConnection, product: &NewProduct) -> Result<Option<i64>, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO products (name, description, price, stock)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(&product.name)
    .bind(&product.description)
    .bind(product.price)
    .bind(product.stock)
    .fetch_optional(conn)
    .await
}

/// Updates every product column from the normalized input. Returns the
/// number of rows affected.
pub async fn update(
    conn: &mut PgConnection,
    id: i64,
    product: &NewProduct,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE products
        SET name = $1, description = $2, price = $3, stock = $4, updated_at = NOW()
        WHERE id = $5
        "#,
    )
    .bind(&product.name)
    .bind(&product.description)
    .bind(product.price)
    .bind(product.stock)
    .bind(id)
    .execute(conn)
    .await?;

    Ok(result.rows_affected())
}

/// Deletes a product. Returns the number of rows affected (0 when the row
/// was already gone).
pub async fn delete(conn: &mut PgConnection, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(conn)
        .await?;

    Ok(result.rows_affected())
}
