//! 商品仓储接口

use async_trait::async_trait;
use catalog_errors::AppResult;

use crate::domain::entities::{Product, ProductDraft};

/// 商品仓储接口
///
/// 每个操作独立提交，存储故障直接上抛，不做重试。
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 返回全部商品，按主键排序
    async fn list_all(&self) -> AppResult<Vec<Product>>;

    /// 根据 ID 查找商品，不存在返回 None 而不是错误
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Product>>;

    /// 插入新商品，返回带系统分配 id 的完整记录
    async fn insert(&self, draft: ProductDraft) -> AppResult<Product>;

    /// 整体覆盖更新四个业务字段
    ///
    /// 记录不存在时返回 None 且不写任何数据。
    async fn update_in_place(&self, id: i64, draft: ProductDraft) -> AppResult<Option<Product>>;

    /// 删除商品，返回是否确实删除了记录
    async fn delete(&self, id: i64) -> AppResult<bool>;
}
