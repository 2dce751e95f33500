//! product-catalog Service - 商品目录 GraphQL 服务

use std::sync::Arc;

use catalog_bootstrap::{Infrastructure, run_server};
use tracing::info;

use product_catalog::api::{app_router, build_schema};
use product_catalog::domain::repositories::ProductRepository;
use product_catalog::infrastructure::persistence::SqliteProductRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run_server("config", |infra: Infrastructure| async move {
        info!("Initializing product-catalog service...");

        let pool = infra.pool();
        let repo: Arc<dyn ProductRepository> =
            Arc::new(SqliteProductRepository::new(pool.clone()));
        info!("Repository initialized");

        let schema = build_schema(repo);

        Ok(app_router(schema, pool))
    })
    .await
}
