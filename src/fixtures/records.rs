// ==========================================
// 店铺种子数据工具 - 夹具记录定义
// ==========================================
// 夹具中的跨实体引用保持未解析状态:
// - 命名引用: 分类/子分类名称 (category / subcategory)
// - 位置引用: 目标夹具列表中的 0 起下标 (*Index 字段)
// 字段命名: camelCase (与夹具 JSON 一致)
// ==========================================

use crate::domain::{
    AccessRequestStatus, ContactStatus, MerchandisingFlags, NewAccount, NewCategory, NewProspect,
    PaymentStatus, Priority, ProStatus, ProcessingStatus, ShippingAddress,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

fn default_quantity() -> u32 {
    1
}

/// 字段必须出现, 但允许显式 null
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

// ==========================================
// 账户夹具
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountFixture {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company_name: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub is_pro: bool,
    pub pro_status: Option<ProStatus>,
}

impl From<AccountFixture> for NewAccount {
    fn from(f: AccountFixture) -> Self {
        NewAccount {
            name: f.name,
            email: f.email,
            phone: f.phone,
            company_name: f.company_name,
            is_admin: f.is_admin,
            is_pro: f.is_pro,
            pro_status: f.pro_status,
        }
    }
}

// ==========================================
// 分类 / 子分类夹具
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryFixture {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub display_order: i32,
}

impl From<CategoryFixture> for NewCategory {
    fn from(f: CategoryFixture) -> Self {
        NewCategory {
            name: f.name,
            description: f.description,
            image: f.image,
            is_active: f.is_active,
            display_order: f.display_order,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubcategoryFixture {
    pub name: String,
    pub category: String, // 所属分类名称 (命名引用, 必填)
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub display_order: i32,
}

// ==========================================
// 商品夹具
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFixture {
    pub name: String,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub price: f64,
    pub pro_price: Option<f64>,
    pub sale_price: Option<f64>,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub images: Vec<String>,
    pub category: Option<String>,    // 命名引用, 可选
    pub subcategory: Option<String>, // 命名引用, 可选
    #[serde(flatten)]
    pub flags: MerchandisingFlags,
}

// ==========================================
// 普通订单夹具
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineFixture {
    pub product_index: usize,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    pub unit_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFixture {
    pub user_index: usize,
    #[serde(default)]
    pub items: Vec<OrderLineFixture>,
    pub shipping_address: Option<ShippingAddress>,
    pub payment_method: Option<String>,
    pub total_price: Option<f64>, // 缺省时按订单行汇总
    #[serde(default)]
    pub is_paid: bool,
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_delivered: bool,
    pub delivered_at: Option<DateTime<Utc>>,
}

// ==========================================
// 潜在客户夹具 (无引用, 原样创建)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProspectFixture {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub source: Option<String>,
    pub notes: Option<String>,
}

impl From<ProspectFixture> for NewProspect {
    fn from(f: ProspectFixture) -> Self {
        NewProspect {
            name: f.name,
            email: f.email,
            phone: f.phone,
            company: f.company,
            source: f.source,
            notes: f.notes,
        }
    }
}

// ==========================================
// 联系留言夹具
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponseFixture {
    pub message: String,
    pub responded_by_index: Option<usize>, // 出现时才解析
    pub responded_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessageFixture {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub status: ContactStatus,
    pub response: Option<ContactResponseFixture>,
}

// ==========================================
// 专业账户申请夹具
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProAccessRequestFixture {
    #[serde(deserialize_with = "nullable")]
    pub user_index: Option<usize>, // 必须出现; null 表示显式无申请人
    pub company_name: String,
    pub business_id: Option<String>,
    pub message: Option<String>,
    #[serde(default)]
    pub status: AccessRequestStatus,
    pub processed_by_index: Option<usize>,
    pub processed_at: Option<DateTime<Utc>>,
}

// ==========================================
// 专业订单 / 补货申请夹具
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestLineFixture {
    pub product_index: usize,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    pub unit_price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProOrderFixture {
    pub user_index: usize,
    pub processed_by_index: Option<usize>,
    #[serde(default)]
    pub items: Vec<RequestLineFixture>,
    #[serde(default)]
    pub status: ProcessingStatus,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplenishmentFixture {
    pub user_index: usize,
    pub processed_by_index: Option<usize>,
    #[serde(default)]
    pub items: Vec<RequestLineFixture>,
    #[serde(default)]
    pub status: ProcessingStatus,
    #[serde(default)]
    pub priority: Priority,
    pub notes: Option<String>,
}
