// ==========================================
// 店铺种子数据工具 - 运行配置
// ==========================================
// 来源优先级: 命令行参数 > 环境变量 > 默认值
// 命令行:
//   -d / --destroy / --purge   清空模式 (默认为导入模式)
//   --db <path>                 目标数据库文件
//   --fixtures <dir>            夹具目录 (缺省使用内置夹具)
// ==========================================

use crate::fixtures::FixtureSet;
use crate::loader::{SeedError, SeedResult};
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

/// 环境变量键
pub mod env_keys {
    pub const DB_PATH: &str = "STOREFRONT_SEED_DB_PATH";
    pub const FIXTURES_DIR: &str = "STOREFRONT_SEED_FIXTURES_DIR";
}

pub const USAGE: &str = "用法: storefront-seed [-d|--destroy|--purge] [--db <path>] [--fixtures <dir>]";

// ==========================================
// RunMode - 运行模式
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    #[default]
    Load, // 导入种子数据
    Purge, // 清空全部集合
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunMode::Load => write!(f, "LOAD"),
            RunMode::Purge => write!(f, "PURGE"),
        }
    }
}

// ==========================================
// SeedConfig - 单次运行配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    pub db_path: String,
    pub fixtures_dir: Option<PathBuf>,
    pub mode: RunMode,
}

impl SeedConfig {
    /// 使用当前进程的参数与环境变量构造
    pub fn from_env_args() -> SeedResult<Self> {
        Self::from_args_with_env(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    /// 解析命令行参数 (不含程序名), 环境变量来自当前进程
    pub fn from_args<I>(args: I) -> SeedResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        Self::from_args_with_env(args, |key| std::env::var(key).ok())
    }

    /// 解析命令行参数, 环境变量通过 env 查询
    pub fn from_args_with_env<I, E>(args: I, env: E) -> SeedResult<Self>
    where
        I: IntoIterator<Item = String>,
        E: Fn(&str) -> Option<String>,
    {
        let mut mode = RunMode::Load;
        let mut db_path: Option<String> = None;
        let mut fixtures_dir: Option<PathBuf> = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-d" | "--destroy" | "--purge" => mode = RunMode::Purge,
                "--db" => db_path = Some(required_value(&arg, args.next())?),
                "--fixtures" => fixtures_dir = Some(PathBuf::from(required_value(&arg, args.next())?)),
                other => {
                    return Err(SeedError::Config(format!("未知参数: {}\n{}", other, USAGE)));
                }
            }
        }

        let db_path = db_path
            .or_else(|| non_empty(env(env_keys::DB_PATH)))
            .unwrap_or_else(get_default_db_path);
        let fixtures_dir = fixtures_dir.or_else(|| non_empty(env(env_keys::FIXTURES_DIR)).map(PathBuf::from));

        let config = SeedConfig {
            db_path,
            fixtures_dir,
            mode,
        };
        debug!(?config, "运行配置");
        Ok(config)
    }

    /// 读取夹具: 指定目录时从目录读取, 否则使用内置夹具
    pub fn load_fixtures(&self) -> SeedResult<FixtureSet> {
        let fixtures = match &self.fixtures_dir {
            Some(dir) => FixtureSet::from_dir(dir)?,
            None => FixtureSet::builtin()?,
        };
        Ok(fixtures)
    }
}

fn required_value(flag: &str, value: Option<String>) -> SeedResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() && !v.starts_with('-') => Ok(v.trim().to_string()),
        _ => Err(SeedError::Config(format!("参数 {} 缺少取值\n{}", flag, USAGE))),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// 默认数据库路径
///
/// 优先使用用户数据目录, 开发构建使用独立目录; 拿不到数据目录时回退到当前目录
pub fn get_default_db_path() -> String {
    let mut path = PathBuf::from("./storefront.db");

    if let Some(data_dir) = dirs::data_dir() {
        #[cfg(debug_assertions)]
        let dir = data_dir.join("storefront-seed-dev");

        #[cfg(not(debug_assertions))]
        let dir = data_dir.join("storefront-seed");

        // 目录创建失败时沿用回退路径
        if std::fs::create_dir_all(&dir).is_ok() {
            path = dir.join("storefront.db");
        }
    }

    path.to_string_lossy().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_mode_is_load() {
        let config = SeedConfig::from_args_with_env(args(&["--db", "/tmp/a.db"]), no_env).unwrap();
        assert_eq!(config.mode, RunMode::Load);
        assert_eq!(config.db_path, "/tmp/a.db");
        assert_eq!(config.fixtures_dir, None);
    }

    #[test]
    fn test_destroy_flags_select_purge() {
        for flag in ["-d", "--destroy", "--purge"] {
            let config =
                SeedConfig::from_args_with_env(args(&[flag, "--db", "x.db"]), no_env).unwrap();
            assert_eq!(config.mode, RunMode::Purge, "{flag}");
        }
    }

    #[test]
    fn test_env_fallback() {
        let env = |key: &str| match key {
            env_keys::DB_PATH => Some("/data/env.db".to_string()),
            env_keys::FIXTURES_DIR => Some("/data/fixtures".to_string()),
            _ => None,
        };
        let config = SeedConfig::from_args_with_env(args(&[]), env).unwrap();
        assert_eq!(config.db_path, "/data/env.db");
        assert_eq!(config.fixtures_dir, Some(PathBuf::from("/data/fixtures")));

        // 命令行优先
        let config = SeedConfig::from_args_with_env(args(&["--db", "cli.db"]), env).unwrap();
        assert_eq!(config.db_path, "cli.db");
    }

    #[test]
    fn test_unknown_flag_is_config_error() {
        let err = SeedConfig::from_args_with_env(args(&["--bogus"]), no_env).unwrap_err();
        assert!(matches!(err, SeedError::Config(_)));
    }

    #[test]
    fn test_missing_value_is_config_error() {
        let err = SeedConfig::from_args_with_env(args(&["--db"]), no_env).unwrap_err();
        assert!(matches!(err, SeedError::Config(_)));
        let err = SeedConfig::from_args_with_env(args(&["--fixtures", "-d"]), no_env).unwrap_err();
        assert!(matches!(err, SeedError::Config(_)));
    }

    #[test]
    fn test_builtin_fixtures_when_no_dir() {
        let config = SeedConfig::from_args_with_env(args(&["--db", "x.db"]), no_env).unwrap();
        let fixtures = config.load_fixtures().unwrap();
        assert!(!fixtures.accounts.is_empty());
    }
}
