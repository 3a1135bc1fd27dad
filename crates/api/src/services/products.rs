//! Product CRUD service.

use domain::models::{AuditTable, NewAuditEntry, Product, ProductInput, RequestContext};
use domain::validate::validate_product;
use persistence::repositories::{audit_log, product, ProductRepository};
use sqlx::PgPool;

use crate::error::ApiError;

#[derive(Clone)]
pub struct ProductService {
    pool: PgPool,
    repo: ProductRepository,
}

impl ProductService {
    pub fn new(pool: PgPool) -> Self {
        let repo = ProductRepository::new(pool.clone());
        Self { pool, repo }
    }

    /// All products, newest first.
    pub async fn list(&self) -> Result<Vec<Product>, ApiError> {
        let entities = self.repo.list().await?;
        Ok(entities.into_iter().map(Product::from).collect())
    }

    pub async fn get(&self, id: i64) -> Result<Product, ApiError> {
        self.repo
            .find_by_id(id)
            .await?
            .map(Product::from)
            .ok_or_else(|| ApiError::NotFound("Produto não encontrado".into()))
    }

    /// Validates, normalizes, inserts, and audits a new product. The insert
    /// and its audit entry commit in the same transaction.
    pub async fn create(
        &self,
        input: &ProductInput,
        context: RequestContext,
    ) -> Result<i64, ApiError> {
        let violations = validate_product(input);
        if !violations.is_empty() {
            return Err(ApiError::Validation(violations));
        }

        let product = input.normalize();

        let mut tx = self.pool.begin().await?;

        let id = product::insert(&mut *tx, &product)
            .await?
            .ok_or_else(|| ApiError::Internal("Não foi possível criar o produto".into()))?;

        let entry = NewAuditEntry::create(AuditTable::Products, id, product.snapshot(), context);
        audit_log::record(&mut *tx, &entry).await?;

        tx.commit().await?;

        tracing::info!(product_id = id, "Product created");
        Ok(id)
    }

    /// Validates and applies an edit. The prior-state snapshot is read on
    /// the same transaction as the update, so the audit entry records the
    /// row the mutation actually replaced.
    pub async fn update(
        &self,
        id: i64,
        input: &ProductInput,
        context: RequestContext,
    ) -> Result<(), ApiError> {
        let violations = validate_product(input);
        if !violations.is_empty() {
            return Err(ApiError::Validation(violations));
        }

        let product = input.normalize();

        let mut tx = self.pool.begin().await?;

        let current: Product = product::fetch(&mut *tx, id)
            .await?
            .map(Product::from)
            .ok_or_else(|| ApiError::NotFound("Produto não encontrado".into()))?;

        let rows = product::update(&mut *tx, id, &product).await?;
        if rows == 0 {
            return Err(ApiError::Internal("Nenhum produto foi atualizado".into()));
        }

        let entry = NewAuditEntry::update(
            AuditTable::Products,
            id,
            current.snapshot(),
            product.snapshot(),
            context,
        );
        audit_log::record(&mut *tx, &entry).await?;

        tx.commit().await?;

        tracing::info!(product_id = id, "Product updated");
        Ok(())
    }

    /// Deletes a product. A concurrent delete racing past the fetch shows
    /// up as zero rows affected and is reported as not found, not as an
    /// internal failure.
    pub async fn delete(&self, id: i64, context: RequestContext) -> Result<(), ApiError> {
        let mut tx = self.pool.begin().await?;

        let current: Product = product::fetch(&mut *tx, id)
            .await?
            .map(Product::from)
            .ok_or_else(|| ApiError::NotFound("Produto não encontrado".into()))?;

        let rows = product::delete(&mut *tx, id).await?;
        if rows == 0 {
            return Err(ApiError::NotFound("Produto não encontrado".into()));
        }

        let entry = NewAuditEntry::delete(AuditTable::Products, id, current.snapshot(), context);
        audit_log::record(&mut *tx, &entry).await?;

        tx.commit().await?;

        tracing::info!(product_id = id, "Product deleted");
        Ok(())
    }
}
