//! 基础设施资源管理

use catalog_adapter_sqlite::{SqliteConfig, create_pool, init_schema};
use catalog_config::AppConfig;
use catalog_errors::AppResult;
use secrecy::ExposeSecret;
use sqlx::SqlitePool;
use tracing::info;

/// 基础设施资源容器
///
/// 由 bootstrap 统一初始化，服务只从这里取连接池。
pub struct Infrastructure {
    /// 应用配置
    config: AppConfig,
    /// SQLite 连接池
    pool: SqlitePool,
}

impl Infrastructure {
    /// 从配置创建基础设施资源
    ///
    /// 建池之后立即幂等建表，保证服务启动时表一定存在。
    pub async fn from_config(config: AppConfig) -> AppResult<Self> {
        let db_config = SqliteConfig::new(config.database.url.expose_secret())
            .with_max_connections(config.database.max_connections);
        let pool = create_pool(&db_config).await?;
        info!(
            "SQLite connection pool created (max_connections: {})",
            config.database.max_connections
        );

        init_schema(&pool).await?;

        Ok(Self { config, pool })
    }

    /// 获取连接池（克隆是廉价的句柄复制）
    pub fn pool(&self) -> SqlitePool {
        self.pool.clone()
    }

    /// 获取应用配置
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
