// ==========================================
// 店铺种子数据工具 - 领域模型层
// ==========================================
// 职责: 定义实体种类、状态类型、待创建记录
// 红线: 不含数据访问逻辑, 不含引用解析逻辑
// ==========================================

pub mod account;
pub mod catalog;
pub mod contact;
pub mod order;
pub mod pro;
pub mod types;

// 重导出核心类型
pub use account::NewAccount;
pub use catalog::{MerchandisingFlags, NewCategory, NewProduct, NewSubcategory};
pub use contact::{ContactResponse, NewContactMessage, NewProspect};
pub use order::{NewOrder, NewOrderLine, ShippingAddress};
pub use pro::{NewProAccessRequest, NewProOrder, NewReplenishmentRequest, RequestLine};
pub use types::{
    AccessRequestStatus, ContactStatus, EntityKind, PaymentStatus, Priority, ProStatus,
    ProcessingStatus, RecordId,
};
