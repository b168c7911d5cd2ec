// ==========================================
// 店铺种子数据工具 - 核心库
// ==========================================
// 职责: 把夹具文件中的关联种子数据按依赖顺序导入存储, 或整体清空
// 技术栈: Rust + SQLite (rusqlite) + tokio
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体种类与待创建记录
pub mod domain;

// 夹具层 - 种子数据文件
pub mod fixtures;

// 数据仓储层 - 存储契约与 SQLite 实现
pub mod repository;

// 装载层 - 引用解析与阶段编排
pub mod loader;

// 运行报告
pub mod report;

// 配置层 - 命令行与环境变量
pub mod config;

// 应用层 - 单次运行
pub mod app;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// 性能埋点
pub mod perf;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{EntityKind, RecordId};
pub use fixtures::FixtureSet;
pub use loader::{purge_all, SeedError, SeedLoader, SeedResult};
pub use report::{PurgeReport, RunReport};
pub use repository::{CollectionAdmin, SeedRepository, SeedStore, SqliteSeedStore};

// ==========================================
// 版本信息
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "店铺种子数据工具";
