// ==========================================
// 店铺种子数据工具 - 应用层
// ==========================================
// 职责: 连接配置、存储与流水线, 完成一次运行
// ==========================================

pub mod runner;

// 重导出
pub use runner::{run, run_with_store, RunOutcome};
