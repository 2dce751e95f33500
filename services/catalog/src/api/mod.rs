//! GraphQL API 层
//!
//! 单一端点 `/graphql`：POST 执行查询/变更，GET 返回 GraphiQL 控制台。
//! 解析器直接读写仓储，不持有请求之外的状态。

pub mod mutation;
pub mod query;
pub mod routes;
pub mod types;

use std::sync::Arc;

use async_graphql::{EmptySubscription, Schema};

use crate::domain::repositories::ProductRepository;

use self::mutation::MutationRoot;
use self::query::QueryRoot;

pub use self::routes::app_router;

/// 完整的 GraphQL schema 类型
pub type CatalogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// 构建 GraphQL schema，注入仓储作为共享状态
pub fn build_schema(repo: Arc<dyn ProductRepository>) -> CatalogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(repo)
        .finish()
}
