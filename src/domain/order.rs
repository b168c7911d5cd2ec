// ==========================================
// 店铺种子数据工具 - 订单领域模型
// ==========================================

use crate::domain::types::RecordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// ShippingAddress - 收货地址 (内嵌)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

// ==========================================
// NewOrderLine - 待创建订单行
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrderLine {
    pub product_id: RecordId,
    pub quantity: u32,
    pub unit_price: f64,
}

impl NewOrderLine {
    pub fn subtotal(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

// ==========================================
// NewOrder - 待创建普通订单
// ==========================================
// 订单行按夹具顺序保存 (line_no 从 0 开始)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    pub user_id: RecordId,
    pub lines: Vec<NewOrderLine>,
    pub shipping_address: Option<ShippingAddress>,
    pub payment_method: Option<String>,
    pub total_price: f64,

    // ===== 支付/配送状态 =====
    pub is_paid: bool,
    pub paid_at: Option<DateTime<Utc>>,
    pub is_delivered: bool,
    pub delivered_at: Option<DateTime<Utc>>,
}

impl NewOrder {
    /// 按订单行汇总金额
    pub fn lines_total(&self) -> f64 {
        self.lines.iter().map(NewOrderLine::subtotal).sum()
    }
}
