// ==========================================
// 店铺种子数据工具 - 领域类型定义
// ==========================================
// 职责: 实体种类、记录标识、各实体的状态枚举
// 序列化格式: SCREAMING_SNAKE_CASE (夹具与数据库一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ==========================================
// 实体种类 (Entity Kind)
// ==========================================
// 顺序即装载顺序 (引用图的拓扑序)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityKind {
    Account,              // 账户
    Category,             // 一级分类
    Subcategory,          // 二级分类
    Product,              // 商品
    Order,                // 普通订单
    OrderLine,            // 订单行
    Prospect,             // 潜在客户
    ContactMessage,       // 联系留言
    ProAccessRequest,     // 专业账户申请
    ProOrder,             // 专业订单
    ReplenishmentRequest, // 补货申请
}

impl EntityKind {
    /// 全部实体种类 (按装载顺序)
    pub const ALL: [EntityKind; 11] = [
        EntityKind::Account,
        EntityKind::Category,
        EntityKind::Subcategory,
        EntityKind::Product,
        EntityKind::Order,
        EntityKind::OrderLine,
        EntityKind::Prospect,
        EntityKind::ContactMessage,
        EntityKind::ProAccessRequest,
        EntityKind::ProOrder,
        EntityKind::ReplenishmentRequest,
    ];

    /// 对应的数据表名
    pub fn table_name(&self) -> &'static str {
        match self {
            EntityKind::Account => "account",
            EntityKind::Category => "category",
            EntityKind::Subcategory => "subcategory",
            EntityKind::Product => "product",
            EntityKind::Order => "customer_order",
            EntityKind::OrderLine => "order_line",
            EntityKind::Prospect => "prospect",
            EntityKind::ContactMessage => "contact_message",
            EntityKind::ProAccessRequest => "pro_access_request",
            EntityKind::ProOrder => "pro_order",
            EntityKind::ReplenishmentRequest => "replenishment_request",
        }
    }

    /// 报告中显示的中文名称
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Account => "账户",
            EntityKind::Category => "分类",
            EntityKind::Subcategory => "子分类",
            EntityKind::Product => "商品",
            EntityKind::Order => "订单",
            EntityKind::OrderLine => "订单行",
            EntityKind::Prospect => "潜在客户",
            EntityKind::ContactMessage => "联系留言",
            EntityKind::ProAccessRequest => "专业账户申请",
            EntityKind::ProOrder => "专业订单",
            EntityKind::ReplenishmentRequest => "补货申请",
        }
    }

    /// 派生序号前缀 (仅单条创建时生成序号的实体才有)
    pub fn sequence_prefix(&self) -> Option<&'static str> {
        match self {
            EntityKind::ProOrder => Some("PRO"),
            EntityKind::ReplenishmentRequest => Some("REP"),
            _ => None,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.table_name())
    }
}

// ==========================================
// 记录标识 (Record Id)
// ==========================================
// 由存储在创建时生成 (UUID v4)，调用方不自行构造
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// 生成新的标识
    pub fn generate() -> Self {
        RecordId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        RecordId(value)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ==========================================
// 专业账户状态 (Pro Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProStatus {
    Pending,   // 待审核
    Active,    // 已开通
    Suspended, // 已暂停
}

impl fmt::Display for ProStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProStatus::Pending => write!(f, "PENDING"),
            ProStatus::Active => write!(f, "ACTIVE"),
            ProStatus::Suspended => write!(f, "SUSPENDED"),
        }
    }
}

// ==========================================
// 联系留言状态 (Contact Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContactStatus {
    #[default]
    Pending,  // 待处理
    Answered, // 已回复
    Closed,   // 已关闭
}

impl fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactStatus::Pending => write!(f, "PENDING"),
            ContactStatus::Answered => write!(f, "ANSWERED"),
            ContactStatus::Closed => write!(f, "CLOSED"),
        }
    }
}

// ==========================================
// 申请审批状态 (Access Request Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessRequestStatus {
    #[default]
    Pending,  // 待审批
    Approved, // 已批准
    Rejected, // 已拒绝
}

impl fmt::Display for AccessRequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessRequestStatus::Pending => write!(f, "PENDING"),
            AccessRequestStatus::Approved => write!(f, "APPROVED"),
            AccessRequestStatus::Rejected => write!(f, "REJECTED"),
        }
    }
}

// ==========================================
// 处理进度 (Processing Status)
// ==========================================
// 专业订单与补货申请共用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessingStatus {
    #[default]
    Pending,    // 待处理
    InProgress, // 处理中
    Completed,  // 已完成
    Cancelled,  // 已取消
}

impl fmt::Display for ProcessingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingStatus::Pending => write!(f, "PENDING"),
            ProcessingStatus::InProgress => write!(f, "IN_PROGRESS"),
            ProcessingStatus::Completed => write!(f, "COMPLETED"),
            ProcessingStatus::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

// ==========================================
// 付款状态 (Payment Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    Paid,
    Refunded,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Unpaid => write!(f, "UNPAID"),
            PaymentStatus::Paid => write!(f, "PAID"),
            PaymentStatus::Refunded => write!(f, "REFUNDED"),
        }
    }
}

// ==========================================
// 补货优先级 (Priority)
// ==========================================
// 顺序: Low < Normal < High < Urgent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "LOW"),
            Priority::Normal => write!(f, "NORMAL"),
            Priority::High => write!(f, "HIGH"),
            Priority::Urgent => write!(f, "URGENT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_kind_tables_are_distinct() {
        let mut tables: Vec<&str> = EntityKind::ALL.iter().map(|k| k.table_name()).collect();
        tables.sort();
        tables.dedup();
        assert_eq!(tables.len(), 11);
    }

    #[test]
    fn test_sequence_prefix_only_for_individually_created_kinds() {
        let with_prefix: Vec<EntityKind> = EntityKind::ALL
            .iter()
            .copied()
            .filter(|k| k.sequence_prefix().is_some())
            .collect();
        assert_eq!(
            with_prefix,
            vec![EntityKind::ProOrder, EntityKind::ReplenishmentRequest]
        );
    }

    #[test]
    fn test_status_serde_format() {
        let json = serde_json::to_string(&ProcessingStatus::InProgress).unwrap();
        assert_eq!(json, "\"IN_PROGRESS\"");
        let parsed: Priority = serde_json::from_str("\"URGENT\"").unwrap();
        assert_eq!(parsed, Priority::Urgent);
    }
}
