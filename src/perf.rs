// ==========================================
// 店铺种子数据工具 - 阶段计时与 SQL 计数
// ==========================================
// 每个装载阶段持有一个 PerfGuard, 结束时把耗时与语句数写入阶段报告
// SQL 计数来自 SQLite profile 回调, 计数器为线程局部 (单线程运行时)
// 环境变量:
// - STOREFRONT_SEED_PERF_SQL: 开关 (Debug 默认开, Release 默认关)
// - STOREFRONT_SEED_SLOW_SQL_MS: 慢语句阈值 (毫秒)
// ==========================================

use rusqlite::Connection;
use serde::Serialize;
use std::cell::Cell;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

pub mod env_keys {
    pub const PERF_SQL: &str = "STOREFRONT_SEED_PERF_SQL";
    pub const SLOW_SQL_MS: &str = "STOREFRONT_SEED_SLOW_SQL_MS";
}

// 0 = 未开启统计
static SLOW_SQL_THRESHOLD_MS: AtomicU64 = AtomicU64::new(0);

thread_local! {
    static OPEN_GUARDS: Cell<u32> = const { Cell::new(0) };
    static STATEMENTS: Cell<u64> = const { Cell::new(0) };
    static SLOW_STATEMENTS: Cell<u64> = const { Cell::new(0) };
}

// ==========================================
// SqlTraceConfig - SQL 统计配置
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SqlTraceConfig {
    pub enabled: bool,
    pub slow_ms: u64,
}

impl SqlTraceConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(env: impl Fn(&str) -> Option<String>) -> Self {
        let enabled = env(env_keys::PERF_SQL)
            .map(|v| {
                matches!(
                    v.trim().to_ascii_lowercase().as_str(),
                    "1" | "true" | "yes" | "on"
                )
            })
            .unwrap_or(cfg!(debug_assertions));
        let slow_ms = env(env_keys::SLOW_SQL_MS)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(if cfg!(debug_assertions) { 50 } else { 200 });
        Self { enabled, slow_ms }
    }
}

/// 按环境变量在连接上安装 SQL 统计
pub fn install_sqlite_tracing(conn: &mut Connection) {
    install_sqlite_tracing_with(conn, SqlTraceConfig::from_env());
}

pub fn install_sqlite_tracing_with(conn: &mut Connection, config: SqlTraceConfig) {
    if config.enabled {
        SLOW_SQL_THRESHOLD_MS.store(config.slow_ms, Ordering::Relaxed);
        conn.profile(Some(on_statement_done));
    } else {
        conn.profile(None);
    }
}

// 只统计 PerfGuard 存活期间执行的语句
fn on_statement_done(sql: &str, duration: Duration) {
    if OPEN_GUARDS.with(|g| g.get()) == 0 {
        return;
    }
    STATEMENTS.with(|c| c.set(c.get() + 1));

    let threshold = SLOW_SQL_THRESHOLD_MS.load(Ordering::Relaxed);
    let ms = duration.as_millis() as u64;
    if threshold > 0 && ms >= threshold {
        SLOW_STATEMENTS.with(|c| c.set(c.get() + 1));
        let sql: String = sql.split_whitespace().collect::<Vec<_>>().join(" ");
        let sql: String = sql.chars().take(200).collect();
        warn!(target: "slow_sql", duration_ms = ms, sql = %sql, "慢 SQL");
    }
}

// ==========================================
// StageTiming - 阶段计时结果
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StageTiming {
    pub elapsed_ms: u64,
    pub sql_count: u64,
    pub slow_sql_count: u64,
}

/// 阶段计时守卫
///
/// `finish()` 取回本阶段的计时写入报告; 提前返回 (错误路径) 时只记日志
pub struct PerfGuard {
    op: &'static str,
    start: Instant,
    statements_at_start: u64,
    slow_at_start: u64,
}

impl PerfGuard {
    pub fn new(op: &'static str) -> Self {
        OPEN_GUARDS.with(|g| g.set(g.get() + 1));
        Self {
            op,
            start: Instant::now(),
            statements_at_start: STATEMENTS.with(|c| c.get()),
            slow_at_start: SLOW_STATEMENTS.with(|c| c.get()),
        }
    }

    pub fn timing(&self) -> StageTiming {
        StageTiming {
            elapsed_ms: self.start.elapsed().as_millis() as u64,
            sql_count: STATEMENTS.with(|c| c.get()) - self.statements_at_start,
            slow_sql_count: SLOW_STATEMENTS.with(|c| c.get()) - self.slow_at_start,
        }
    }

    pub fn finish(self) -> StageTiming {
        self.timing()
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        let t = self.timing();
        debug!(
            target: "perf",
            op = self.op,
            elapsed_ms = t.elapsed_ms,
            sql_count = t.sql_count,
            slow_sql_count = t.slow_sql_count,
            "阶段结束"
        );
        OPEN_GUARDS.with(|g| g.set(g.get().saturating_sub(1)));
    }
}
