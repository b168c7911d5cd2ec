// ==========================================
// 清空流程集成测试
// ==========================================
// 测试目标: 装载 → 清空 往返后全部集合为空, 且与新建库等价
// ==========================================

mod test_helpers;

use storefront_seed::logging;
use storefront_seed::loader::verify_empty;
use storefront_seed::{purge_all, CollectionAdmin, EntityKind, FixtureSet, SeedLoader};
use test_helpers::*;

#[tokio::test]
async fn test_load_then_purge_round_trip() {
    logging::init_test();

    println!("\n=== 测试：装载 → 清空 往返 ===");

    let (_temp_file, store) = create_test_store().expect("Failed to create test store");
    let fixtures = small_fixture_set();

    // 步骤 1: 装载
    let report = SeedLoader::new(&store).load(&fixtures).await.unwrap();
    assert!(report.total_created() > 0);
    println!("✓ 步骤 1: 装载 {} 条", report.total_created());

    // 步骤 2: 清空
    let purge = purge_all(&store).await.unwrap();
    println!("✓ 步骤 2: 清空 {} 条", purge.total_deleted());

    // 步骤 3: 全部集合为空
    for kind in EntityKind::ALL {
        assert_eq!(store.count(kind).await.unwrap(), 0, "{kind} not empty");
    }
    verify_empty(&store).await.unwrap();
    assert_eq!(purge.deleted.len(), EntityKind::ALL.len());

    // 步骤 4: 每个集合的移除数与装载数一致 (含被级联删除的下游集合)
    for kind in EntityKind::ALL {
        assert_eq!(
            purge.deleted(kind),
            report.created(kind),
            "{kind} removed count"
        );
    }
    assert_eq!(purge.total_deleted(), report.total_created());
}

#[tokio::test]
async fn test_purge_on_empty_store_succeeds() {
    logging::init_test();

    let (_temp_file, store) = create_test_store().unwrap();
    let purge = purge_all(&store).await.unwrap();
    assert_eq!(purge.total_deleted(), 0);
}

#[tokio::test]
async fn test_purged_store_behaves_like_fresh_store() {
    logging::init_test();

    let (_temp_file, store) = create_test_store().unwrap();
    let fixtures = small_fixture_set();

    SeedLoader::new(&store).load(&fixtures).await.unwrap();
    purge_all(&store).await.unwrap();

    // 再次装载: 空库前置条件满足, 序号从 1 重新开始
    SeedLoader::new(&store).load(&fixtures).await.unwrap();
    let seqs = store.list_sequence_numbers(EntityKind::ProOrder).unwrap();
    assert_eq!(seqs.len(), fixtures.pro_orders.len());
    assert!(seqs[0].as_deref().unwrap().ends_with("-00001"));
}

#[tokio::test]
async fn test_purge_partially_loaded_store() {
    logging::init_test();

    // 装载中途失败留下的部分数据也能被清空
    let mut fixtures = small_fixture_set();
    fixtures.orders = vec![order(9, &[0])];

    let (_temp_file, store) = create_test_store().unwrap();
    assert!(SeedLoader::new(&store).load(&fixtures).await.is_err());
    assert!(store.count(EntityKind::Account).await.unwrap() > 0);

    let purge = purge_all(&store).await.unwrap();
    assert_eq!(purge.deleted(EntityKind::Account), 3);
    verify_empty(&store).await.unwrap();

    // 空夹具装载在清空后同样可行
    SeedLoader::new(&store)
        .load(&FixtureSet::default())
        .await
        .unwrap();
}
