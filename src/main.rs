// ==========================================
// 店铺种子数据工具 - 命令行入口
// ==========================================
// 退出码: 0 成功 / 1 失败
// 运行摘要写 stdout, 日志写 stderr
// ==========================================

use std::process::ExitCode;
use storefront_seed::app::{self, RunOutcome};
use storefront_seed::config::SeedConfig;
use storefront_seed::logging;
use tracing::{error, info};

// 性能计数器是线程局部的, 使用单线程运行时
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logging::init();

    info!("==================================================");
    info!("店铺种子数据工具 v{}", storefront_seed::VERSION);
    info!("==================================================");

    let config = match SeedConfig::from_env_args() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match app::run(&config).await {
        Ok(RunOutcome::Loaded(report)) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::Purged(report)) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %format!("{:#}", e), "运行失败");
            eprintln!("运行失败: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
