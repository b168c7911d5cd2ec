// ==========================================
// 店铺种子数据工具 - 潜在客户 / 联系留言
// ==========================================
// 二者均为独立实体，除留言回复人外无跨实体引用
// ==========================================

use crate::domain::types::{ContactStatus, RecordId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// NewProspect - 待创建潜在客户
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProspect {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub source: Option<String>,
    pub notes: Option<String>,
}

// ==========================================
// ContactResponse - 留言回复 (内嵌子记录)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub message: String,
    pub responded_by: Option<RecordId>, // 夹具未给出回复人时保持缺省
    pub responded_at: Option<DateTime<Utc>>,
}

// ==========================================
// NewContactMessage - 待创建联系留言
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub is_read: bool,
    pub status: ContactStatus,
    pub response: Option<ContactResponse>,
}
