// ==========================================
// 店铺种子数据工具 - 种子存储 Trait
// ==========================================
// 职责: 定义流水线所需的最小存储契约 (不包含实现)
// - create_one: 单条创建, 会触发逐条派生钩子 (序号生成)
// - create_many: 批量创建, 绝不触发逐条派生钩子
// - delete_all: 按集合整体删除
// 红线: 批量/单条的不对称性是契约的一部分, 实现不得抹平
// ==========================================

use crate::domain::{
    EntityKind, NewAccount, NewCategory, NewContactMessage, NewOrder, NewProAccessRequest,
    NewProOrder, NewProduct, NewProspect, NewReplenishmentRequest, NewSubcategory, RecordId,
};
use crate::repository::error::RepositoryResult;
use async_trait::async_trait;

// ==========================================
// SeedRecord - 可写入的记录类型
// ==========================================
pub trait SeedRecord: Send + Sync + 'static {
    /// 记录所属集合
    const KIND: EntityKind;

    /// 单条创建时是否生成派生序号
    ///
    /// 为 true 的记录只能走 create_one, 批量路径会跳过序号生成
    const DERIVES_SEQUENCE: bool = false;
}

impl SeedRecord for NewAccount {
    const KIND: EntityKind = EntityKind::Account;
}

impl SeedRecord for NewCategory {
    const KIND: EntityKind = EntityKind::Category;
}

impl SeedRecord for NewSubcategory {
    const KIND: EntityKind = EntityKind::Subcategory;
}

impl SeedRecord for NewProduct {
    const KIND: EntityKind = EntityKind::Product;
}

impl SeedRecord for NewOrder {
    const KIND: EntityKind = EntityKind::Order;
}

impl SeedRecord for NewProspect {
    const KIND: EntityKind = EntityKind::Prospect;
}

impl SeedRecord for NewContactMessage {
    const KIND: EntityKind = EntityKind::ContactMessage;
}

impl SeedRecord for NewProAccessRequest {
    const KIND: EntityKind = EntityKind::ProAccessRequest;
}

impl SeedRecord for NewProOrder {
    const KIND: EntityKind = EntityKind::ProOrder;
    const DERIVES_SEQUENCE: bool = true;
}

impl SeedRecord for NewReplenishmentRequest {
    const KIND: EntityKind = EntityKind::ReplenishmentRequest;
    const DERIVES_SEQUENCE: bool = true;
}

// ==========================================
// SeedRepository Trait
// ==========================================
// 用途: 按记录类型创建
// 实现者: SqliteSeedStore（使用 rusqlite）
#[async_trait]
pub trait SeedRepository<R: SeedRecord>: Send + Sync {
    /// 单条创建
    ///
    /// # 返回
    /// - Ok(RecordId): 存储生成的标识
    /// - Err: 存储拒绝 (约束违反等)
    async fn create_one(&self, record: R) -> RepositoryResult<RecordId>;

    /// 批量创建（事务化）
    ///
    /// # 返回
    /// - Ok(Vec<RecordId>): 与输入顺序一一对应的标识
    /// - Err: 数据库错误（整批回滚）
    async fn create_many(&self, records: Vec<R>) -> RepositoryResult<Vec<RecordId>>;
}

// ==========================================
// CollectionAdmin Trait
// ==========================================
// 用途: 集合级管理 (整体删除 / 计数)
#[async_trait]
pub trait CollectionAdmin: Send + Sync {
    /// 删除集合内全部记录, 集合已为空时返回 0
    async fn delete_all(&self, kind: EntityKind) -> RepositoryResult<usize>;

    /// 集合记录数
    async fn count(&self, kind: EntityKind) -> RepositoryResult<usize>;
}

// ==========================================
// SeedStore - 流水线依赖的完整存储契约
// ==========================================
pub trait SeedStore:
    SeedRepository<NewAccount>
    + SeedRepository<NewCategory>
    + SeedRepository<NewSubcategory>
    + SeedRepository<NewProduct>
    + SeedRepository<NewOrder>
    + SeedRepository<NewProspect>
    + SeedRepository<NewContactMessage>
    + SeedRepository<NewProAccessRequest>
    + SeedRepository<NewProOrder>
    + SeedRepository<NewReplenishmentRequest>
    + CollectionAdmin
{
}

impl<T> SeedStore for T where
    T: SeedRepository<NewAccount>
        + SeedRepository<NewCategory>
        + SeedRepository<NewSubcategory>
        + SeedRepository<NewProduct>
        + SeedRepository<NewOrder>
        + SeedRepository<NewProspect>
        + SeedRepository<NewContactMessage>
        + SeedRepository<NewProAccessRequest>
        + SeedRepository<NewProOrder>
        + SeedRepository<NewReplenishmentRequest>
        + CollectionAdmin
{
}
