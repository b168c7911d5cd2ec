// ==========================================
// 店铺种子数据工具 - 清空流程
// ==========================================
// 对全部集合执行整体删除, 集合之间没有顺序要求 (外键为 CASCADE / SET NULL)
// 删除全部结束后逐集合复核计数, 非零即失败
// 报告的移除数取删除前的计数: 级联删除会让下游集合的 DELETE 返回 0
// ==========================================

use crate::domain::EntityKind;
use crate::loader::error::{SeedError, SeedResult};
use crate::perf::PerfGuard;
use crate::report::PurgeReport;
use crate::repository::CollectionAdmin;
use futures::future::try_join_all;
use tracing::{debug, info, instrument};

/// 清空全部集合
///
/// 任一集合删除失败即返回错误; 空集合删除成功并计 0
#[instrument(skip(store))]
pub async fn purge_all<S>(store: &S) -> SeedResult<PurgeReport>
where
    S: CollectionAdmin + ?Sized,
{
    let _perf = PerfGuard::new("purge_all");
    info!("开始清空种子数据");

    let deleted = try_join_all(EntityKind::ALL.iter().map(|&kind| async move {
        let n = store.count(kind).await.map_err(SeedError::store(kind))?;
        Ok::<_, SeedError>((kind, n))
    }))
    .await?;

    try_join_all(EntityKind::ALL.iter().map(|&kind| async move {
        let n = store
            .delete_all(kind)
            .await
            .map_err(SeedError::store(kind))?;
        debug!(kind = %kind, direct = n, "集合已删除");
        Ok::<_, SeedError>(())
    }))
    .await?;

    verify_empty(store).await?;

    let report = PurgeReport { deleted };
    info!(total = report.total_deleted(), "清空完成");
    Ok(report)
}

/// 复核全部集合为空
pub async fn verify_empty<S>(store: &S) -> SeedResult<()>
where
    S: CollectionAdmin + ?Sized,
{
    for kind in EntityKind::ALL {
        let remaining = store.count(kind).await.map_err(SeedError::store(kind))?;
        if remaining > 0 {
            return Err(SeedError::PurgeIncomplete { kind, remaining });
        }
    }
    Ok(())
}
