//! Product entity (row mapping for the `products` table).

use chrono::{DateTime, Utc};
use domain::models::Product;
use rust_decimal::Decimal;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProductEntity> for Product {
    fn from(entity: ProductEntity) -> Self {
        Product {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            price: entity.price,
            stock: entity.stock,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
