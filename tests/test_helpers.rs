// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供临时数据库、已建表的存储实例、夹具记录构造
// ==========================================

#![allow(dead_code)]

use serde_json::{json, Value};
use std::error::Error;
use storefront_seed::fixtures::records::{
    AccountFixture, CategoryFixture, OrderFixture, ProOrderFixture, ProductFixture,
    ProspectFixture, ReplenishmentFixture, SubcategoryFixture,
};
use storefront_seed::FixtureSet;
use storefront_seed::SqliteSeedStore;
use tempfile::NamedTempFile;

/// 创建临时测试数据库路径
///
/// # 返回
/// - NamedTempFile: 临时数据库文件（需要保持存活）
/// - String: 数据库文件路径
pub fn create_test_db() -> Result<(NamedTempFile, String), Box<dyn Error>> {
    let temp_file = NamedTempFile::new()?;
    let db_path = temp_file
        .path()
        .to_str()
        .ok_or("临时文件路径不是 UTF-8")?
        .to_string();
    Ok((temp_file, db_path))
}

/// 创建已建表的存储实例
pub fn create_test_store() -> Result<(NamedTempFile, SqliteSeedStore), Box<dyn Error>> {
    let (temp_file, db_path) = create_test_db()?;
    let store = SqliteSeedStore::new(&db_path)?;
    store.ensure_schema()?;
    Ok((temp_file, store))
}

fn from_json<T: serde::de::DeserializeOwned>(value: Value) -> T {
    serde_json::from_value(value).expect("夹具 JSON 无法解析")
}

// ==========================================
// 夹具记录构造
// ==========================================

pub fn account(n: usize) -> AccountFixture {
    from_json(json!({
        "name": format!("User {n}"),
        "email": format!("user{n}@example.test"),
    }))
}

pub fn accounts(count: usize) -> Vec<AccountFixture> {
    (0..count).map(account).collect()
}

pub fn category(name: &str) -> CategoryFixture {
    from_json(json!({ "name": name }))
}

pub fn subcategory(name: &str, category: &str) -> SubcategoryFixture {
    from_json(json!({ "name": name, "category": category }))
}

pub fn product(name: &str, category: Option<&str>, subcategory: Option<&str>) -> ProductFixture {
    from_json(json!({
        "name": name,
        "price": 10.0,
        "stock": 5,
        "category": category,
        "subcategory": subcategory,
    }))
}

pub fn order(user_index: usize, product_indices: &[usize]) -> OrderFixture {
    let items: Vec<Value> = product_indices
        .iter()
        .map(|i| json!({ "productIndex": i, "quantity": 1, "unitPrice": 10.0 }))
        .collect();
    from_json(json!({ "userIndex": user_index, "items": items }))
}

pub fn prospect(n: usize) -> ProspectFixture {
    from_json(json!({
        "name": format!("Prospect {n}"),
        "email": format!("prospect{n}@example.test"),
    }))
}

pub fn pro_order(user_index: usize, product_indices: &[usize]) -> ProOrderFixture {
    let items: Vec<Value> = product_indices
        .iter()
        .map(|i| json!({ "productIndex": i, "quantity": 2 }))
        .collect();
    from_json(json!({ "userIndex": user_index, "items": items }))
}

pub fn replenishment(user_index: usize, product_indices: &[usize]) -> ReplenishmentFixture {
    let items: Vec<Value> = product_indices
        .iter()
        .map(|i| json!({ "productIndex": i, "quantity": 3 }))
        .collect();
    from_json(json!({ "userIndex": user_index, "items": items, "priority": "URGENT" }))
}

/// 最小完整夹具: 账户 + 分类 + 商品 + 各类订单
pub fn small_fixture_set() -> FixtureSet {
    FixtureSet {
        accounts: accounts(3),
        categories: vec![category("A"), category("B")],
        subcategories: vec![subcategory("A1", "A")],
        products: vec![
            product("P0", Some("A"), Some("A1")),
            product("P1", None, None),
            product("P2", Some("B"), None),
        ],
        orders: vec![order(0, &[1]), order(2, &[0, 2])],
        prospects: vec![prospect(0)],
        pro_orders: vec![pro_order(1, &[0]), pro_order(1, &[1, 2])],
        replenishment_requests: vec![replenishment(2, &[2])],
        ..Default::default()
    }
}
