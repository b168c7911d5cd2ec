// ==========================================
// 命令行退出码测试
// ==========================================
// 测试目标: 运行失败时进程以非零状态退出, 成功时为 0
// ==========================================

mod test_helpers;

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn seed_binary() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_storefront-seed"));
    cmd.env_remove("STOREFRONT_SEED_LOG_FORMAT")
        .env_remove("STOREFRONT_SEED_DB_PATH")
        .env_remove("STOREFRONT_SEED_FIXTURES_DIR")
        .env("RUST_LOG", "warn");
    cmd
}

#[test]
fn test_out_of_range_user_index_exits_non_zero() {
    println!("\n=== 测试：位置引用越界时退出码非零 ===");

    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("accounts.json"),
        r#"[
            { "name": "A", "email": "a@example.test" },
            { "name": "B", "email": "b@example.test" },
            { "name": "C", "email": "c@example.test" }
        ]"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("orders.json"),
        r#"[{ "userIndex": 5, "items": [] }]"#,
    )
    .unwrap();

    let (_temp_file, db_path) = test_helpers::create_test_db().unwrap();
    let output = seed_binary()
        .args(["--db", db_path.as_str(), "--fixtures"])
        .arg(dir.path())
        .output()
        .expect("failed to spawn seed binary");

    assert!(!output.status.success());
    assert_ne!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("位置引用越界"), "stderr: {stderr}");
    println!("✓ 退出码: {:?}", output.status.code());
}

#[test]
fn test_unknown_flag_exits_non_zero() {
    let output = seed_binary()
        .arg("--bogus")
        .output()
        .expect("failed to spawn seed binary");
    assert!(!output.status.success());
}

#[test]
fn test_load_then_purge_exit_zero() {
    let (_temp_file, db_path) = test_helpers::create_test_db().unwrap();

    let load = seed_binary()
        .args(["--db", db_path.as_str()])
        .output()
        .expect("failed to spawn seed binary");
    assert!(load.status.success(), "{}", String::from_utf8_lossy(&load.stderr));
    assert!(String::from_utf8_lossy(&load.stdout).contains("种子数据导入完成"));

    let purge = seed_binary()
        .args(["-d", "--db", db_path.as_str()])
        .output()
        .expect("failed to spawn seed binary");
    assert!(purge.status.success(), "{}", String::from_utf8_lossy(&purge.stderr));
    assert!(String::from_utf8_lossy(&purge.stdout).contains("种子数据已清空"));
}
