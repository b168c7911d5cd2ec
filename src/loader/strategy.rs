// ==========================================
// 店铺种子数据工具 - 写入策略
// ==========================================
// 批量 (create_many) 不触发逐条派生钩子, 单条 (create_one) 会触发
// 记录类型声明 DERIVES_SEQUENCE 时只能单条写入
// ==========================================

use crate::domain::RecordId;
use crate::loader::error::{SeedError, SeedResult};
use crate::repository::{SeedRecord, SeedRepository};
use serde::Serialize;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InsertStrategy {
    Bulk,       // 一次 create_many
    Individual, // 按源顺序逐条 create_one
}

impl InsertStrategy {
    /// 记录类型的默认策略
    pub fn for_record<R: SeedRecord>() -> Self {
        if R::DERIVES_SEQUENCE {
            InsertStrategy::Individual
        } else {
            InsertStrategy::Bulk
        }
    }
}

impl fmt::Display for InsertStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsertStrategy::Bulk => write!(f, "BULK"),
            InsertStrategy::Individual => write!(f, "INDIVIDUAL"),
        }
    }
}

/// 按策略写入一组记录, 返回与输入顺序一致的标识
///
/// 单条写入严格串行, 前一条提交后才写下一条 (序号单调)
pub async fn insert_records<R, S>(
    store: &S,
    records: Vec<R>,
    strategy: InsertStrategy,
) -> SeedResult<Vec<RecordId>>
where
    R: SeedRecord,
    S: SeedRepository<R> + ?Sized,
{
    if R::DERIVES_SEQUENCE && strategy == InsertStrategy::Bulk {
        return Err(SeedError::BulkInsertForbidden { kind: R::KIND });
    }

    debug!(kind = %R::KIND, count = records.len(), strategy = %strategy, "写入记录");

    match strategy {
        InsertStrategy::Bulk => store
            .create_many(records)
            .await
            .map_err(SeedError::store(R::KIND)),
        InsertStrategy::Individual => {
            let mut ids = Vec::with_capacity(records.len());
            for record in records {
                let id = store
                    .create_one(record)
                    .await
                    .map_err(SeedError::store(R::KIND))?;
                ids.push(id);
            }
            Ok(ids)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        NewAccount, NewCategory, NewOrder, NewProOrder, NewReplenishmentRequest,
    };

    #[test]
    fn test_sequence_records_default_to_individual() {
        assert_eq!(
            InsertStrategy::for_record::<NewProOrder>(),
            InsertStrategy::Individual
        );
        assert_eq!(
            InsertStrategy::for_record::<NewReplenishmentRequest>(),
            InsertStrategy::Individual
        );
    }

    #[test]
    fn test_plain_records_default_to_bulk() {
        assert_eq!(InsertStrategy::for_record::<NewAccount>(), InsertStrategy::Bulk);
        assert_eq!(InsertStrategy::for_record::<NewCategory>(), InsertStrategy::Bulk);
        assert_eq!(InsertStrategy::for_record::<NewOrder>(), InsertStrategy::Bulk);
    }
}
