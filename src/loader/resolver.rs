// ==========================================
// 店铺种子数据工具 - 引用解析器
// ==========================================
// 两类解析器, 键空间互不共享:
// - NameResolver: 自然名称 → 生成标识 (分类 / 子分类各一份)
// - PositionResolver: 夹具下标 → 生成标识 (账户 / 商品各一份)
// 解析器只在单次运行内有效, 由阶段按值传给后续阶段
// ==========================================

use crate::domain::{EntityKind, RecordId};
use crate::loader::error::{SeedError, SeedResult};
use std::collections::HashMap;
use tracing::warn;

// ==========================================
// RefSite - 引用出现的位置 (用于错误信息)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefSite {
    pub entity: EntityKind,
    pub record: usize,
    pub field: &'static str,
}

impl RefSite {
    pub fn new(entity: EntityKind, record: usize, field: &'static str) -> Self {
        Self {
            entity,
            record,
            field,
        }
    }
}

// ==========================================
// NameResolver - 命名引用解析
// ==========================================
#[derive(Debug, Clone)]
pub struct NameResolver {
    target: EntityKind,
    ids: HashMap<String, RecordId>,
}

impl NameResolver {
    pub fn new(target: EntityKind) -> Self {
        Self {
            target,
            ids: HashMap::new(),
        }
    }

    pub fn target(&self) -> EntityKind {
        self.target
    }

    /// 登记名称 → 标识
    ///
    /// 名称重复时后登记者覆盖, 并输出告警
    pub fn register(&mut self, name: impl Into<String>, id: RecordId) {
        let name = name.into();
        if let Some(previous) = self.ids.insert(name.clone(), id) {
            warn!(
                target_kind = %self.target,
                name = %name,
                previous = %previous,
                "名称重复登记, 后者覆盖前者"
            );
        }
    }

    /// 解析名称, 未登记返回 None
    pub fn resolve(&self, name: &str) -> Option<&RecordId> {
        self.ids.get(name)
    }

    /// 可选命名引用: 缺省或未登记都返回 None
    pub fn resolve_optional(&self, name: Option<&str>) -> Option<RecordId> {
        name.and_then(|n| self.resolve(n)).cloned()
    }

    /// 必填命名引用: 未登记时返回 UnresolvedNamedReference (由调用方决定跳过)
    pub fn resolve_required(
        &self,
        entity: EntityKind,
        record: &str,
        name: &str,
    ) -> SeedResult<RecordId> {
        self.resolve(name)
            .cloned()
            .ok_or_else(|| SeedError::UnresolvedNamedReference {
                entity,
                record: record.to_string(),
                target: self.target,
                name: name.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

// ==========================================
// PositionResolver - 位置引用解析
// ==========================================
// ids[i] 即源夹具第 i 条记录创建后得到的标识
#[derive(Debug, Clone)]
pub struct PositionResolver {
    target: EntityKind,
    ids: Vec<RecordId>,
}

impl PositionResolver {
    /// 由按源顺序创建得到的标识列表构造
    pub fn from_ids(target: EntityKind, ids: Vec<RecordId>) -> Self {
        Self { target, ids }
    }

    pub fn target(&self) -> EntityKind {
        self.target
    }

    /// 必填位置引用, 越界即致命错误
    pub fn resolve(&self, site: RefSite, index: usize) -> SeedResult<RecordId> {
        self.ids
            .get(index)
            .cloned()
            .ok_or(SeedError::ReferenceOutOfRange {
                entity: site.entity,
                record: site.record,
                field: site.field,
                index,
                target: self.target,
                len: self.ids.len(),
            })
    }

    /// 可选位置引用: 缺省保持缺省; 出现则必须在范围内
    pub fn resolve_optional(
        &self,
        site: RefSite,
        index: Option<usize>,
    ) -> SeedResult<Option<RecordId>> {
        index.map(|i| self.resolve(site, i)).transpose()
    }

    pub fn ids(&self) -> &[RecordId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> RecordId {
        RecordId::from(s.to_string())
    }

    #[test]
    fn test_name_resolver_unregistered_is_absent() {
        let mut r = NameResolver::new(EntityKind::Category);
        r.register("A", id("cat-a"));

        assert_eq!(r.resolve("A"), Some(&id("cat-a")));
        assert_eq!(r.resolve("B"), None);
        assert_eq!(r.resolve_optional(None), None);
        assert_eq!(r.resolve_optional(Some("B")), None);
        assert_eq!(r.resolve_optional(Some("A")), Some(id("cat-a")));
    }

    #[test]
    fn test_name_resolver_required_reports_name() {
        let r = NameResolver::new(EntityKind::Category);
        let err = r
            .resolve_required(EntityKind::Subcategory, "Pans", "Missing")
            .unwrap_err();
        assert!(err.is_record_level());
        match err {
            SeedError::UnresolvedNamedReference { name, record, .. } => {
                assert_eq!(name, "Missing");
                assert_eq!(record, "Pans");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_name_resolver_later_registration_wins() {
        let mut r = NameResolver::new(EntityKind::Subcategory);
        r.register("X", id("first"));
        r.register("X", id("second"));
        assert_eq!(r.len(), 1);
        assert_eq!(r.resolve("X"), Some(&id("second")));
    }

    #[test]
    fn test_position_resolver_in_range() {
        let r = PositionResolver::from_ids(EntityKind::Account, vec![id("u0"), id("u1")]);
        let site = RefSite::new(EntityKind::Order, 0, "userIndex");
        assert_eq!(r.resolve(site, 1).unwrap(), id("u1"));
    }

    #[test]
    fn test_position_resolver_out_of_range_is_fatal() {
        let r = PositionResolver::from_ids(EntityKind::Account, vec![id("u0"), id("u1"), id("u2")]);
        let site = RefSite::new(EntityKind::Order, 4, "userIndex");
        let err = r.resolve(site, 5).unwrap_err();
        assert!(!err.is_record_level());
        match err {
            SeedError::ReferenceOutOfRange {
                entity,
                record,
                index,
                len,
                target,
                ..
            } => {
                assert_eq!(entity, EntityKind::Order);
                assert_eq!(record, 4);
                assert_eq!(index, 5);
                assert_eq!(len, 3);
                assert_eq!(target, EntityKind::Account);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_position_resolver_optional() {
        let r = PositionResolver::from_ids(EntityKind::Account, vec![id("u0")]);
        let site = RefSite::new(EntityKind::ProOrder, 0, "processedByIndex");
        assert_eq!(r.resolve_optional(site, None).unwrap(), None);
        assert_eq!(r.resolve_optional(site, Some(0)).unwrap(), Some(id("u0")));
        assert!(r.resolve_optional(site, Some(1)).is_err());
    }
}
