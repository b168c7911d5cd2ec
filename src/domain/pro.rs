// ==========================================
// 店铺种子数据工具 - 专业客户业务领域模型
// ==========================================
// 专业账户申请 / 专业订单 / 补货申请
// 专业订单与补货申请带派生序号，只能单条创建
// ==========================================

use crate::domain::types::{
    AccessRequestStatus, PaymentStatus, Priority, ProcessingStatus, RecordId,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// RequestLine - 申请明细行 (内嵌)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestLine {
    pub product_id: RecordId,
    pub quantity: u32,
    pub unit_price: Option<f64>,
}

// ==========================================
// NewProAccessRequest - 待创建专业账户申请
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProAccessRequest {
    pub user_id: Option<RecordId>,      // 夹具显式置空时为 None
    pub company_name: String,
    pub business_id: Option<String>,
    pub message: Option<String>,
    pub status: AccessRequestStatus,
    pub processed_by: Option<RecordId>, // 未处理时为 None
    pub processed_at: Option<DateTime<Utc>>,
}

// ==========================================
// NewProOrder - 待创建专业订单
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProOrder {
    pub user_id: RecordId,
    pub processed_by: Option<RecordId>,
    pub lines: Vec<RequestLine>,
    pub status: ProcessingStatus,
    pub payment_status: PaymentStatus,
    pub notes: Option<String>,
}

// ==========================================
// NewReplenishmentRequest - 待创建补货申请
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReplenishmentRequest {
    pub user_id: RecordId,
    pub processed_by: Option<RecordId>,
    pub lines: Vec<RequestLine>,
    pub status: ProcessingStatus,
    pub priority: Priority,
    pub notes: Option<String>,
}
