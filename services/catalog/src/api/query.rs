//! 查询解析器

use std::sync::Arc;

use async_graphql::{Context, Object, Result};

use crate::domain::repositories::ProductRepository;

use super::types::Product;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// 返回全部商品，表为空时返回空列表
    async fn products(&self, ctx: &Context<'_>) -> Result<Vec<Product>> {
        let repo = ctx.data_unchecked::<Arc<dyn ProductRepository>>();
        let products = repo.list_all().await?;
        Ok(products.into_iter().map(|p| p.into()).collect())
    }
}
