use async_trait::async_trait;
use catalog_errors::{AppError, AppResult};
use sqlx::SqlitePool;
use tracing::debug;

use crate::domain::entities::{Product, ProductDraft};
use crate::domain::repositories::ProductRepository;

pub struct SqliteProductRepository {
    pool: SqlitePool,
}

#[derive(sqlx::FromRow)]
pub struct ProductRow {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    pub category: String,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            price: row.price,
            quantity: row.quantity,
            category: row.category,
        }
    }
}

impl SqliteProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn list_all(&self) -> AppResult<Vec<Product>> {
        debug!("Listing all products");

        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, price, quantity, category
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list products: {}", e)))?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Product>> {
        debug!("Finding product by id: {}", id);

        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, price, quantity, category
            FROM products
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to find product: {}", e)))?;

        Ok(row.map(|r| r.into()))
    }

    async fn insert(&self, draft: ProductDraft) -> AppResult<Product> {
        debug!("Inserting product: {}", draft.name);

        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO products (name, price, quantity, category)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, price, quantity, category
            "#,
        )
        .bind(&draft.name)
        .bind(draft.price)
        .bind(draft.quantity)
        .bind(&draft.category)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to insert product: {}", e)))?;

        Ok(row.into())
    }

    async fn update_in_place(&self, id: i64, draft: ProductDraft) -> AppResult<Option<Product>> {
        debug!("Updating product: {}", id);

        // 记录不存在时 UPDATE 不命中任何行，RETURNING 为空，不产生写入
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            UPDATE products
            SET name = ?, price = ?, quantity = ?, category = ?
            WHERE id = ?
            RETURNING id, name, price, quantity, category
            "#,
        )
        .bind(&draft.name)
        .bind(draft.price)
        .bind(draft.quantity)
        .bind(&draft.category)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to update product: {}", e)))?;

        Ok(row.map(|r| r.into()))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        debug!("Deleting product: {}", id);

        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete product: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}
