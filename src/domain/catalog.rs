// ==========================================
// 店铺种子数据工具 - 商品目录领域模型
// ==========================================
// 分类 → 子分类 → 商品
// ==========================================

use crate::domain::types::RecordId;
use serde::{Deserialize, Serialize};

// ==========================================
// NewCategory - 待创建分类
// ==========================================
// 分类名称全局唯一，作为子分类/商品的命名引用键
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub is_active: bool,
    pub display_order: i32,
}

// ==========================================
// NewSubcategory - 待创建子分类
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSubcategory {
    pub name: String,
    pub category_id: RecordId, // 必填，已解析的分类标识
    pub description: Option<String>,
    pub is_active: bool,
    pub display_order: i32,
}

// ==========================================
// MerchandisingFlags - 商品营销标志
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MerchandisingFlags {
    pub is_clearance: bool, // 清仓
    pub is_upcoming: bool,  // 即将上架
    pub is_new: bool,       // 新品
    pub is_featured: bool,  // 推荐
    pub is_on_sale: bool,   // 促销
}

// ==========================================
// NewProduct - 待创建商品
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub price: f64,
    pub pro_price: Option<f64>,
    pub sale_price: Option<f64>,
    pub stock: i64,
    pub images: Vec<String>,

    // ===== 引用 =====
    pub owner_id: RecordId,               // 默认归属账户
    pub category_id: Option<RecordId>,    // 未登记的分类名 → None
    pub subcategory_id: Option<RecordId>, // 未登记的子分类名 → None

    pub flags: MerchandisingFlags,
}
