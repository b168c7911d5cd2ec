// ==========================================
// 店铺种子数据工具 - 夹具层
// ==========================================
// 职责: 读取手工编写的夹具集合 (每个实体一个有序列表)
// 来源: 夹具目录下的 JSON 文件, 或内置演示数据
// 红线: 夹具只读, 不做引用解析
// ==========================================

pub mod records;

pub use records::{
    AccountFixture, CategoryFixture, ContactMessageFixture, ContactResponseFixture,
    OrderFixture, OrderLineFixture, ProAccessRequestFixture, ProOrderFixture, ProductFixture,
    ProspectFixture, ReplenishmentFixture, RequestLineFixture, SubcategoryFixture,
};

use serde::de::DeserializeOwned;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

// ==========================================
// 夹具文件名
// ==========================================
pub mod files {
    pub const ACCOUNTS: &str = "accounts.json";
    pub const CATEGORIES: &str = "categories.json";
    pub const SUBCATEGORIES: &str = "subcategories.json";
    pub const PRODUCTS: &str = "products.json";
    pub const ORDERS: &str = "orders.json";
    pub const PROSPECTS: &str = "prospects.json";
    pub const CONTACT_MESSAGES: &str = "contact_messages.json";
    pub const PRO_ACCESS_REQUESTS: &str = "pro_access_requests.json";
    pub const PRO_ORDERS: &str = "pro_orders.json";
    pub const REPLENISHMENT_REQUESTS: &str = "replenishment_requests.json";
}

/// 夹具读取错误
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("夹具文件读取失败 ({file}): {source}")]
    Read {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("夹具文件解析失败 ({file}): {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result 类型别名
pub type FixtureResult<T> = Result<T, FixtureError>;

// ==========================================
// FixtureSet - 夹具集合
// ==========================================
// 每个列表保持源顺序, 位置引用即该顺序下的下标
#[derive(Debug, Clone, Default)]
pub struct FixtureSet {
    pub accounts: Vec<AccountFixture>,
    pub categories: Vec<CategoryFixture>,
    pub subcategories: Vec<SubcategoryFixture>,
    pub products: Vec<ProductFixture>,
    pub orders: Vec<OrderFixture>,
    pub prospects: Vec<ProspectFixture>,
    pub contact_messages: Vec<ContactMessageFixture>,
    pub pro_access_requests: Vec<ProAccessRequestFixture>,
    pub pro_orders: Vec<ProOrderFixture>,
    pub replenishment_requests: Vec<ReplenishmentFixture>,
}

impl FixtureSet {
    /// 从夹具目录读取
    ///
    /// # 说明
    /// - 文件不存在视为空列表
    /// - 文件存在但格式错误则整体失败 (错误中带文件名)
    pub fn from_dir(dir: &Path) -> FixtureResult<Self> {
        info!(dir = %dir.display(), "从目录读取夹具");

        let set = Self {
            accounts: read_list(dir, files::ACCOUNTS)?,
            categories: read_list(dir, files::CATEGORIES)?,
            subcategories: read_list(dir, files::SUBCATEGORIES)?,
            products: read_list(dir, files::PRODUCTS)?,
            orders: read_list(dir, files::ORDERS)?,
            prospects: read_list(dir, files::PROSPECTS)?,
            contact_messages: read_list(dir, files::CONTACT_MESSAGES)?,
            pro_access_requests: read_list(dir, files::PRO_ACCESS_REQUESTS)?,
            pro_orders: read_list(dir, files::PRO_ORDERS)?,
            replenishment_requests: read_list(dir, files::REPLENISHMENT_REQUESTS)?,
        };

        info!(total = set.total_records(), "夹具读取完成");
        Ok(set)
    }

    /// 内置演示夹具 (编译期嵌入)
    pub fn builtin() -> FixtureResult<Self> {
        Ok(Self {
            accounts: parse_list(files::ACCOUNTS, include_str!("../../seed_data/accounts.json"))?,
            categories: parse_list(
                files::CATEGORIES,
                include_str!("../../seed_data/categories.json"),
            )?,
            subcategories: parse_list(
                files::SUBCATEGORIES,
                include_str!("../../seed_data/subcategories.json"),
            )?,
            products: parse_list(files::PRODUCTS, include_str!("../../seed_data/products.json"))?,
            orders: parse_list(files::ORDERS, include_str!("../../seed_data/orders.json"))?,
            prospects: parse_list(
                files::PROSPECTS,
                include_str!("../../seed_data/prospects.json"),
            )?,
            contact_messages: parse_list(
                files::CONTACT_MESSAGES,
                include_str!("../../seed_data/contact_messages.json"),
            )?,
            pro_access_requests: parse_list(
                files::PRO_ACCESS_REQUESTS,
                include_str!("../../seed_data/pro_access_requests.json"),
            )?,
            pro_orders: parse_list(
                files::PRO_ORDERS,
                include_str!("../../seed_data/pro_orders.json"),
            )?,
            replenishment_requests: parse_list(
                files::REPLENISHMENT_REQUESTS,
                include_str!("../../seed_data/replenishment_requests.json"),
            )?,
        })
    }

    /// 夹具记录总数 (不含内嵌的订单行)
    pub fn total_records(&self) -> usize {
        self.accounts.len()
            + self.categories.len()
            + self.subcategories.len()
            + self.products.len()
            + self.orders.len()
            + self.prospects.len()
            + self.contact_messages.len()
            + self.pro_access_requests.len()
            + self.pro_orders.len()
            + self.replenishment_requests.len()
    }
}

fn read_list<T: DeserializeOwned>(dir: &Path, file: &str) -> FixtureResult<Vec<T>> {
    let path = dir.join(file);
    if !path.exists() {
        debug!(file = file, "夹具文件不存在, 按空列表处理");
        return Ok(Vec::new());
    }

    let raw = std::fs::read_to_string(&path).map_err(|source| FixtureError::Read {
        file: path.display().to_string(),
        source,
    })?;
    parse_list(&path.display().to_string(), &raw)
}

fn parse_list<T: DeserializeOwned>(file: &str, raw: &str) -> FixtureResult<Vec<T>> {
    serde_json::from_str(raw).map_err(|source| FixtureError::Parse {
        file: file.to_string(),
        source,
    })
}
