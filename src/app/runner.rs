// ==========================================
// 店铺种子数据工具 - 单次运行
// ==========================================
// 流程:
//   1. 打开数据库并建表 (版本不一致时告警)
//   2. 导入模式: 读取夹具 → 检查目标库为空 → 逐阶段装载
//      清空模式: 删除全部集合 → 复核计数
// ==========================================

use crate::config::{RunMode, SeedConfig};
use crate::loader::{purge_all, SeedLoader};
use crate::report::{PurgeReport, RunReport};
use crate::repository::{SeedStore, SqliteSeedStore};
use anyhow::Context;
use tracing::info;

/// 运行结果
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Loaded(RunReport),
    Purged(PurgeReport),
}

/// 按配置执行一次运行
pub async fn run(config: &SeedConfig) -> anyhow::Result<RunOutcome> {
    info!(db_path = %config.db_path, mode = %config.mode, "打开目标数据库");

    let store = SqliteSeedStore::new(&config.db_path)
        .with_context(|| format!("无法打开数据库: {}", config.db_path))?;
    store.ensure_schema().context("初始化数据库表结构失败")?;

    run_with_store(&store, config).await
}

/// 在给定存储上执行 (存储已完成建表)
pub async fn run_with_store<S>(store: &S, config: &SeedConfig) -> anyhow::Result<RunOutcome>
where
    S: SeedStore + ?Sized,
{
    match config.mode {
        RunMode::Load => {
            let fixtures = config.load_fixtures().context("读取夹具失败")?;
            let report = SeedLoader::new(store)
                .load(&fixtures)
                .await
                .context("导入种子数据失败")?;
            Ok(RunOutcome::Loaded(report))
        }
        RunMode::Purge => {
            let report = purge_all(store).await.context("清空种子数据失败")?;
            Ok(RunOutcome::Purged(report))
        }
    }
}
