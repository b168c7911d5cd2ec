// ==========================================
// 店铺种子数据工具 - 装载流水线错误类型
// ==========================================
// 工具: thiserror 派生宏
// 分类:
// - ReferenceOutOfRange: 位置引用越界, 致命, 整个运行中止
// - UnresolvedNamedReference: 命名引用未登记, 只跳过当前记录 (作为告警)
// - Store: 存储拒绝写入/删除, 致命
// ==========================================

use crate::domain::EntityKind;
use crate::fixtures::FixtureError;
use crate::repository::RepositoryError;
use thiserror::Error;

/// 装载流水线错误类型
#[derive(Error, Debug)]
pub enum SeedError {
    // ===== 引用解析错误 =====
    #[error(
        "位置引用越界: {entity}[{record}].{field} = {index}, 但 {target} 只有 {len} 条记录"
    )]
    ReferenceOutOfRange {
        entity: EntityKind,
        record: usize,
        field: &'static str,
        index: usize,
        target: EntityKind,
        len: usize,
    },

    #[error("命名引用未解析: {entity} \"{record}\" 引用的 {target} \"{name}\" 不存在")]
    UnresolvedNamedReference {
        entity: EntityKind,
        record: String,
        target: EntityKind,
        name: String,
    },

    // ===== 存储错误 =====
    #[error("存储操作失败 ({kind}): {source}")]
    Store {
        kind: EntityKind,
        #[source]
        source: RepositoryError,
    },

    #[error("{kind} 需要逐条生成派生序号, 不允许批量创建")]
    BulkInsertForbidden { kind: EntityKind },

    #[error("目标库非空: {kind} 已有 {count} 条记录, 请先执行清空")]
    TargetNotEmpty { kind: EntityKind, count: usize },

    #[error("清空未完成: {kind} 仍有 {remaining} 条记录")]
    PurgeIncomplete { kind: EntityKind, remaining: usize },

    // ===== 输入错误 =====
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    #[error("配置错误: {0}")]
    Config(String),
}

impl SeedError {
    /// 为存储错误附加集合信息
    pub fn store(kind: EntityKind) -> impl FnOnce(RepositoryError) -> SeedError {
        move |source| SeedError::Store { kind, source }
    }

    /// 是否只影响单条记录 (可跳过继续)
    pub fn is_record_level(&self) -> bool {
        matches!(self, SeedError::UnresolvedNamedReference { .. })
    }
}

/// Result 类型别名
pub type SeedResult<T> = Result<T, SeedError>;
