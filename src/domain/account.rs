// ==========================================
// 店铺种子数据工具 - 账户领域模型
// ==========================================

use crate::domain::types::ProStatus;
use serde::{Deserialize, Serialize};

// ==========================================
// NewAccount - 待创建账户
// ==========================================
// 第一个创建的账户作为默认归属人 (商品 owner)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company_name: Option<String>,

    // ===== 角色标志 =====
    pub is_admin: bool,
    pub is_pro: bool,
    pub pro_status: Option<ProStatus>, // 非专业账户为 None
}

impl NewAccount {
    /// 已开通的专业账户
    pub fn is_active_pro(&self) -> bool {
        self.is_pro && self.pro_status == Some(ProStatus::Active)
    }

    /// 专业资质待审核
    pub fn is_pending_pro(&self) -> bool {
        self.pro_status == Some(ProStatus::Pending)
    }

    /// 专业资质已暂停
    pub fn is_suspended_pro(&self) -> bool {
        self.pro_status == Some(ProStatus::Suspended)
    }
}
