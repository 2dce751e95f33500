//! GraphQL 类型定义

use async_graphql::{InputObject, SimpleObject};

use crate::domain::entities::{Product as DomainProduct, ProductDraft};

/// 商品
#[derive(Debug, Clone, SimpleObject)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    pub category: String,
}

impl From<DomainProduct> for Product {
    fn from(product: DomainProduct) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            quantity: product.quantity,
            category: product.category,
        }
    }
}

/// 变更输入，四个字段全部必填
#[derive(Debug, Clone, InputObject)]
pub struct ProductInput {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    pub category: String,
}

impl From<ProductInput> for ProductDraft {
    fn from(input: ProductInput) -> Self {
        Self {
            name: input.name,
            price: input.price,
            quantity: input.quantity,
            category: input.category,
        }
    }
}

/// createProduct 的结果，product 永不为空
#[derive(Debug, SimpleObject)]
pub struct CreateProduct {
    pub product: Product,
}

/// updateProduct 的结果
///
/// id 未命中时 product 为 null，静默空操作而不是错误。
#[derive(Debug, SimpleObject)]
pub struct UpdateProduct {
    pub product: Option<Product>,
}

/// deleteProduct 的结果，ok 表示是否确实删除了记录
#[derive(Debug, SimpleObject)]
pub struct DeleteProduct {
    pub ok: bool,
}
