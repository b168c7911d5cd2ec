// ==========================================
// 店铺种子数据工具 - 运行报告
// ==========================================
// 职责: 汇总每个阶段的创建数量、跳过记录与分类统计
// 统计函数只读取本次运行刚创建的记录, 空输入返回全零
// ==========================================

use crate::domain::{
    AccessRequestStatus, ContactStatus, EntityKind, NewAccount, NewCategory, NewContactMessage,
    NewOrder, NewProAccessRequest, NewProOrder, NewProduct, NewReplenishmentRequest,
    NewSubcategory, Priority, ProcessingStatus,
};
use crate::loader::InsertStrategy;
use crate::perf::StageTiming;
use serde::Serialize;
use std::fmt;
use tracing::info;

// ==========================================
// StatLine - 单项统计
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatLine {
    pub label: &'static str,
    pub count: usize,
}

impl StatLine {
    fn new(label: &'static str, count: usize) -> Self {
        Self { label, count }
    }
}

fn count_where<T>(records: &[T], pred: impl Fn(&T) -> bool) -> usize {
    records.iter().filter(|r| pred(*r)).count()
}

// ==========================================
// 各阶段统计
// ==========================================

pub fn account_stats(accounts: &[NewAccount]) -> Vec<StatLine> {
    vec![
        StatLine::new("管理员", count_where(accounts, |a| a.is_admin)),
        StatLine::new("专业账户(已开通)", count_where(accounts, NewAccount::is_active_pro)),
        StatLine::new("专业账户(待审核)", count_where(accounts, NewAccount::is_pending_pro)),
        StatLine::new("专业账户(已暂停)", count_where(accounts, NewAccount::is_suspended_pro)),
    ]
}

pub fn category_stats(categories: &[NewCategory]) -> Vec<StatLine> {
    vec![StatLine::new("启用", count_where(categories, |c| c.is_active))]
}

pub fn subcategory_stats(subcategories: &[NewSubcategory]) -> Vec<StatLine> {
    vec![StatLine::new("启用", count_where(subcategories, |s| s.is_active))]
}

pub fn product_stats(products: &[NewProduct]) -> Vec<StatLine> {
    vec![
        StatLine::new("清仓", count_where(products, |p| p.flags.is_clearance)),
        StatLine::new("即将上架", count_where(products, |p| p.flags.is_upcoming)),
        StatLine::new("新品", count_where(products, |p| p.flags.is_new)),
        StatLine::new("推荐", count_where(products, |p| p.flags.is_featured)),
        StatLine::new("促销", count_where(products, |p| p.flags.is_on_sale)),
    ]
}

pub fn order_stats(orders: &[NewOrder]) -> Vec<StatLine> {
    vec![
        StatLine::new("已付款", count_where(orders, |o| o.is_paid)),
        StatLine::new("已配送", count_where(orders, |o| o.is_delivered)),
    ]
}

pub fn contact_message_stats(messages: &[NewContactMessage]) -> Vec<StatLine> {
    vec![
        StatLine::new("未读", count_where(messages, |m| !m.is_read)),
        StatLine::new(
            "待处理",
            count_where(messages, |m| m.status == ContactStatus::Pending),
        ),
    ]
}

pub fn access_request_stats(requests: &[NewProAccessRequest]) -> Vec<StatLine> {
    vec![
        StatLine::new(
            "待审批",
            count_where(requests, |r| r.status == AccessRequestStatus::Pending),
        ),
        StatLine::new(
            "已批准",
            count_where(requests, |r| r.status == AccessRequestStatus::Approved),
        ),
        StatLine::new(
            "已拒绝",
            count_where(requests, |r| r.status == AccessRequestStatus::Rejected),
        ),
    ]
}

pub fn pro_order_stats(orders: &[NewProOrder]) -> Vec<StatLine> {
    vec![
        StatLine::new(
            "已完成",
            count_where(orders, |o| o.status == ProcessingStatus::Completed),
        ),
        StatLine::new(
            "处理中",
            count_where(orders, |o| o.status == ProcessingStatus::InProgress),
        ),
    ]
}

pub fn replenishment_stats(requests: &[NewReplenishmentRequest]) -> Vec<StatLine> {
    vec![
        StatLine::new(
            "待处理",
            count_where(requests, |r| r.status == ProcessingStatus::Pending),
        ),
        StatLine::new(
            "紧急",
            count_where(requests, |r| r.priority == Priority::Urgent),
        ),
    ]
}

// ==========================================
// StageReport - 单阶段结果
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct StageReport {
    pub kind: EntityKind,
    pub strategy: InsertStrategy,
    pub created: usize,
    pub skipped: Vec<String>, // 被跳过记录的告警文本
    pub stats: Vec<StatLine>,
    pub timing: StageTiming,
}

impl StageReport {
    pub fn new(kind: EntityKind, strategy: InsertStrategy, created: usize) -> Self {
        Self {
            kind,
            strategy,
            created,
            skipped: Vec::new(),
            stats: Vec::new(),
            timing: StageTiming::default(),
        }
    }

    pub fn with_timing(mut self, timing: StageTiming) -> Self {
        self.timing = timing;
        self
    }

    pub fn with_stats(mut self, stats: Vec<StatLine>) -> Self {
        self.stats = stats;
        self
    }

    pub fn with_skipped(mut self, skipped: Vec<String>) -> Self {
        self.skipped = skipped;
        self
    }

    pub fn stat(&self, label: &str) -> Option<usize> {
        self.stats.iter().find(|s| s.label == label).map(|s| s.count)
    }
}

// ==========================================
// RunReport - 一次装载运行的汇总
// ==========================================
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub stages: Vec<StageReport>,
}

impl RunReport {
    pub fn push(&mut self, stage: StageReport) {
        info!(
            kind = %stage.kind,
            strategy = %stage.strategy,
            created = stage.created,
            skipped = stage.skipped.len(),
            elapsed_ms = stage.timing.elapsed_ms,
            sql_count = stage.timing.sql_count,
            "阶段完成"
        );
        self.stages.push(stage);
    }

    pub fn stage(&self, kind: EntityKind) -> Option<&StageReport> {
        self.stages.iter().find(|s| s.kind == kind)
    }

    pub fn created(&self, kind: EntityKind) -> usize {
        self.stage(kind).map_or(0, |s| s.created)
    }

    pub fn total_created(&self) -> usize {
        self.stages.iter().map(|s| s.created).sum()
    }

    pub fn total_skipped(&self) -> usize {
        self.stages.iter().map(|s| s.skipped.len()).sum()
    }

    pub fn total_elapsed_ms(&self) -> u64 {
        self.stages.iter().map(|s| s.timing.elapsed_ms).sum()
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "种子数据导入完成:")?;
        for stage in &self.stages {
            writeln!(
                f,
                "  {:<28} {:>6}  [{}]  {}ms / {} sql",
                stage.kind.table_name(),
                stage.created,
                stage.strategy,
                stage.timing.elapsed_ms,
                stage.timing.sql_count
            )?;
            for stat in &stage.stats {
                writeln!(f, "      - {:<20} {}", stat.label, stat.count)?;
            }
            for notice in &stage.skipped {
                writeln!(f, "      ! 跳过: {}", notice)?;
            }
        }
        write!(
            f,
            "  {:<28} {:>6}  (跳过 {}, {}ms)",
            "total",
            self.total_created(),
            self.total_skipped(),
            self.total_elapsed_ms()
        )
    }
}

// ==========================================
// PurgeReport - 清空运行的汇总
// ==========================================
#[derive(Debug, Clone, Default, Serialize)]
pub struct PurgeReport {
    pub deleted: Vec<(EntityKind, usize)>,
}

impl PurgeReport {
    pub fn deleted(&self, kind: EntityKind) -> usize {
        self.deleted
            .iter()
            .find(|(k, _)| *k == kind)
            .map_or(0, |(_, n)| *n)
    }

    pub fn total_deleted(&self) -> usize {
        self.deleted.iter().map(|(_, n)| n).sum()
    }
}

impl fmt::Display for PurgeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "种子数据已清空:")?;
        for (kind, n) in &self.deleted {
            writeln!(f, "  {:<28} {:>6}", kind.table_name(), n)?;
        }
        write!(f, "  {:<28} {:>6}", "total", self.total_deleted())
    }
}
