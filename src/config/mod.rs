// ==========================================
// 店铺种子数据工具 - 配置层
// ==========================================
// 职责: 解析命令行与环境变量, 得到单次运行配置
// ==========================================

pub mod seed_config;

pub use seed_config::{env_keys, get_default_db_path, RunMode, SeedConfig, USAGE};
