// ==========================================
// 店铺种子数据工具 - 数据仓储层
// ==========================================
// 红线: Repository 不含引用解析, 不含装载顺序
// ==========================================
// 职责: 提供存储契约与 SQLite 实现, 屏蔽数据库细节
// 约束: 所有写入使用参数化, 表名只来自 EntityKind
// ==========================================

pub mod error;
pub mod seed_store;
pub mod sqlite_seed_store;

// 重导出核心仓储
pub use error::{RepositoryError, RepositoryResult};
pub use seed_store::{CollectionAdmin, SeedRecord, SeedRepository, SeedStore};
pub use sqlite_seed_store::{
    AccountRefs, OrderLineRow, ProductLink, SqliteSeedStore, SubcategoryLink,
};
