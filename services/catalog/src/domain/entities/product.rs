//! 商品实体

/// 商品记录
///
/// `id` 由存储层在插入时分配，之后不再变化。
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    pub category: String,
}

/// 商品业务字段
///
/// 插入和整体覆盖更新的输入，四个字段全部必填，没有默认值。
/// 逐字段显式映射，不做动态属性绑定。
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    pub category: String,
}

impl Product {
    /// 由已分配的 id 和业务字段组装完整记录
    pub fn from_draft(id: i64, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            price: draft.price,
            quantity: draft.quantity,
            category: draft.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_draft_keeps_all_fields() {
        let draft = ProductDraft {
            name: "Sourdough".to_string(),
            price: 5.5,
            quantity: 10,
            category: "Bread".to_string(),
        };

        let product = Product::from_draft(1, draft.clone());
        assert_eq!(product.id, 1);
        assert_eq!(product.name, draft.name);
        assert_eq!(product.price, draft.price);
        assert_eq!(product.quantity, draft.quantity);
        assert_eq!(product.category, draft.category);
    }
}
