//! 启动时建表

use catalog_errors::{AppError, AppResult};
use sqlx::SqlitePool;
use tracing::info;

/// 幂等地创建 products 表
///
/// 每次进程启动都会执行，表已存在时不做任何事。
pub async fn init_schema(pool: &SqlitePool) -> AppResult<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id       INTEGER PRIMARY KEY,
            name     TEXT    NOT NULL,
            price    REAL    NOT NULL,
            quantity INTEGER NOT NULL,
            category TEXT    NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| AppError::database(format!("Failed to create schema: {}", e)))?;

    info!("Database schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SqliteConfig, check_connection, create_pool};

    async fn memory_pool() -> SqlitePool {
        let config = SqliteConfig::new("sqlite::memory:").with_max_connections(1);
        create_pool(&config).await.expect("pool created")
    }

    /// 建表后连接可用
    #[tokio::test]
    async fn test_init_schema_and_check() {
        let pool = memory_pool().await;
        init_schema(&pool).await.expect("schema created");
        check_connection(&pool).await.expect("connection healthy");
    }

    /// 重复建表不报错
    #[tokio::test]
    async fn test_init_schema_is_idempotent() {
        let pool = memory_pool().await;
        init_schema(&pool).await.expect("first run");
        init_schema(&pool).await.expect("second run");
    }

    /// 建表后可以直接写入
    #[tokio::test]
    async fn test_schema_accepts_rows() {
        let pool = memory_pool().await;
        init_schema(&pool).await.expect("schema created");

        sqlx::query("INSERT INTO products (name, price, quantity, category) VALUES (?, ?, ?, ?)")
            .bind("Sourdough")
            .bind(5.5_f64)
            .bind(10_i64)
            .bind("Bread")
            .execute(&pool)
            .await
            .expect("insert works");
    }
}
