//! 变更解析器
//!
//! update/delete 对未命中的 id 采用静默空操作契约：调用方通过结果里的
//! product 是否为 null、ok 是否为 false 来判断未命中，而不是收到错误。

use std::sync::Arc;

use async_graphql::{Context, Object, Result};

use crate::domain::repositories::ProductRepository;

use super::types::{CreateProduct, DeleteProduct, ProductInput, UpdateProduct};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// 创建商品，返回带系统分配 id 的完整记录
    async fn create_product(
        &self,
        ctx: &Context<'_>,
        product_data: ProductInput,
    ) -> Result<CreateProduct> {
        let repo = ctx.data_unchecked::<Arc<dyn ProductRepository>>();
        let product = repo.insert(product_data.into()).await?;
        Ok(CreateProduct {
            product: product.into(),
        })
    }

    /// 整体覆盖更新，id 未命中时返回 null 且不写任何数据
    async fn update_product(
        &self,
        ctx: &Context<'_>,
        id: i64,
        product_data: ProductInput,
    ) -> Result<UpdateProduct> {
        let repo = ctx.data_unchecked::<Arc<dyn ProductRepository>>();
        let product = repo.update_in_place(id, product_data.into()).await?;
        Ok(UpdateProduct {
            product: product.map(|p| p.into()),
        })
    }

    /// 删除商品，id 未命中时返回 ok: false 而不是错误
    async fn delete_product(&self, ctx: &Context<'_>, id: i64) -> Result<DeleteProduct> {
        let repo = ctx.data_unchecked::<Arc<dyn ProductRepository>>();
        let ok = repo.delete(id).await?;
        Ok(DeleteProduct { ok })
    }
}
