// ==========================================
// 店铺种子数据工具 - 装载流水线
// ==========================================
// 职责: 按依赖顺序逐阶段创建记录, 并把生成标识传给后续阶段
// 阶段顺序 (固定):
//   账户 → 分类 → 子分类 → 商品 → 订单 → 潜在客户
//   → 联系留言 → 专业账户申请 → 专业订单 → 补货申请
// 失败语义:
// - 位置引用越界 / 存储拒绝: 立即中止, 后续阶段不执行, 已提交阶段不回滚
// - 子分类的分类名未登记: 跳过该条并告警, 继续
// ==========================================

pub mod error;
pub mod purge;
pub mod resolver;
pub mod stages;
pub mod strategy;

pub use error::{SeedError, SeedResult};
pub use purge::{purge_all, verify_empty};
pub use resolver::{NameResolver, PositionResolver, RefSite};
pub use strategy::{insert_records, InsertStrategy};

use crate::domain::{
    EntityKind, NewAccount, NewCategory, NewContactMessage, NewOrder, NewProAccessRequest,
    NewProOrder, NewProduct, NewProspect, NewReplenishmentRequest, NewSubcategory,
};
use crate::fixtures::records::{
    AccountFixture, CategoryFixture, ContactMessageFixture, OrderFixture, ProAccessRequestFixture,
    ProOrderFixture, ProductFixture, ProspectFixture, ReplenishmentFixture, SubcategoryFixture,
};
use crate::fixtures::FixtureSet;
use crate::perf::PerfGuard;
use crate::report::{
    access_request_stats, account_stats, category_stats, contact_message_stats, order_stats,
    pro_order_stats, product_stats, replenishment_stats, subcategory_stats, RunReport,
    StageReport, StatLine,
};
use crate::repository::SeedStore;
use tracing::{info, instrument, warn};

// ==========================================
// SeedLoader - 装载编排器
// ==========================================
pub struct SeedLoader<'a, S: SeedStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: SeedStore + ?Sized> SeedLoader<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// 执行完整装载
    ///
    /// # 前置条件
    /// 目标库全部集合为空, 否则返回 TargetNotEmpty
    ///
    /// # 返回
    /// - Ok(RunReport): 各阶段创建数量与统计
    /// - Err(SeedError): 第一个致命错误 (之前阶段的数据保留)
    #[instrument(skip(self, fixtures), fields(records = fixtures.total_records()))]
    pub async fn load(&self, fixtures: &FixtureSet) -> SeedResult<RunReport> {
        let _perf = PerfGuard::new("seed_load");
        info!("开始导入种子数据");

        self.ensure_empty_target().await?;

        let mut report = RunReport::default();

        // 步骤 1: 账户 (后续阶段按下标引用)
        let accounts = self.load_accounts(&fixtures.accounts, &mut report).await?;

        // 步骤 2-3: 分类 / 子分类 (按名称引用)
        let categories = self
            .load_categories(&fixtures.categories, &mut report)
            .await?;
        let subcategories = self
            .load_subcategories(&fixtures.subcategories, &categories, &mut report)
            .await?;

        // 步骤 4: 商品
        let products = self
            .load_products(
                &fixtures.products,
                &accounts,
                &categories,
                &subcategories,
                &mut report,
            )
            .await?;

        // 步骤 5: 普通订单
        self.load_orders(&fixtures.orders, &accounts, &products, &mut report)
            .await?;

        // 步骤 6-8: 无引用 / 仅引用账户的集合
        self.load_prospects(&fixtures.prospects, &mut report).await?;
        self.load_contact_messages(&fixtures.contact_messages, &accounts, &mut report)
            .await?;
        self.load_access_requests(&fixtures.pro_access_requests, &accounts, &mut report)
            .await?;

        // 步骤 9-10: 需要派生序号的集合 (逐条创建)
        self.load_pro_orders(&fixtures.pro_orders, &accounts, &products, &mut report)
            .await?;
        self.load_replenishment_requests(
            &fixtures.replenishment_requests,
            &accounts,
            &products,
            &mut report,
        )
        .await?;

        info!(
            total = report.total_created(),
            skipped = report.total_skipped(),
            "种子数据导入完成"
        );
        Ok(report)
    }

    /// 检查目标库为空
    pub async fn ensure_empty_target(&self) -> SeedResult<()> {
        for kind in EntityKind::ALL {
            let count = self
                .store
                .count(kind)
                .await
                .map_err(SeedError::store(kind))?;
            if count > 0 {
                return Err(SeedError::TargetNotEmpty { kind, count });
            }
        }
        Ok(())
    }

    // ==========================================
    // 各阶段
    // ==========================================

    async fn load_accounts(
        &self,
        fixtures: &[AccountFixture],
        report: &mut RunReport,
    ) -> SeedResult<PositionResolver> {
        let perf = PerfGuard::new("stage_accounts");

        let records: Vec<NewAccount> = fixtures.iter().cloned().map(NewAccount::from).collect();
        let stats = account_stats(&records);
        let strategy = InsertStrategy::for_record::<NewAccount>();
        let ids = insert_records(self.store, records, strategy).await?;

        report.push(
            StageReport::new(EntityKind::Account, strategy, ids.len())
                .with_stats(stats)
                .with_timing(perf.finish()),
        );
        Ok(PositionResolver::from_ids(EntityKind::Account, ids))
    }

    async fn load_categories(
        &self,
        fixtures: &[CategoryFixture],
        report: &mut RunReport,
    ) -> SeedResult<NameResolver> {
        let perf = PerfGuard::new("stage_categories");

        let records: Vec<NewCategory> = fixtures.iter().cloned().map(NewCategory::from).collect();
        let stats = category_stats(&records);
        let names: Vec<String> = records.iter().map(|c| c.name.clone()).collect();

        // 分类逐条创建, 每条创建后立即登记名称
        let strategy = InsertStrategy::Individual;
        let ids = insert_records(self.store, records, strategy).await?;

        let mut resolver = NameResolver::new(EntityKind::Category);
        for (name, id) in names.into_iter().zip(ids.iter().cloned()) {
            resolver.register(name, id);
        }

        report.push(
            StageReport::new(EntityKind::Category, strategy, ids.len())
                .with_stats(stats)
                .with_timing(perf.finish()),
        );
        Ok(resolver)
    }

    async fn load_subcategories(
        &self,
        fixtures: &[SubcategoryFixture],
        categories: &NameResolver,
        report: &mut RunReport,
    ) -> SeedResult<NameResolver> {
        let perf = PerfGuard::new("stage_subcategories");

        let mut records: Vec<NewSubcategory> = Vec::with_capacity(fixtures.len());
        let mut skipped = Vec::new();
        for fixture in fixtures {
            match stages::resolve_subcategory(fixture, categories) {
                Ok(record) => records.push(record),
                Err(e) if e.is_record_level() => {
                    warn!(
                        subcategory = %fixture.name,
                        category = %fixture.category,
                        "所属分类不存在, 跳过子分类"
                    );
                    skipped.push(e.to_string());
                }
                Err(e) => return Err(e),
            }
        }

        let stats = subcategory_stats(&records);
        let names: Vec<String> = records.iter().map(|s| s.name.clone()).collect();
        let strategy = InsertStrategy::Individual;
        let ids = insert_records(self.store, records, strategy).await?;

        let mut resolver = NameResolver::new(EntityKind::Subcategory);
        for (name, id) in names.into_iter().zip(ids.iter().cloned()) {
            resolver.register(name, id);
        }

        report.push(
            StageReport::new(EntityKind::Subcategory, strategy, ids.len())
                .with_stats(stats)
                .with_skipped(skipped)
                .with_timing(perf.finish()),
        );
        Ok(resolver)
    }

    async fn load_products(
        &self,
        fixtures: &[ProductFixture],
        accounts: &PositionResolver,
        categories: &NameResolver,
        subcategories: &NameResolver,
        report: &mut RunReport,
    ) -> SeedResult<PositionResolver> {
        let perf = PerfGuard::new("stage_products");

        let records: Vec<NewProduct> = if fixtures.is_empty() {
            Vec::new()
        } else {
            // 商品统一归属第一个账户
            let owner = accounts.resolve(RefSite::new(EntityKind::Product, 0, "owner"), 0)?;
            fixtures
                .iter()
                .map(|f| stages::resolve_product(f, &owner, categories, subcategories))
                .collect()
        };

        let stats = product_stats(&records);
        let strategy = InsertStrategy::for_record::<NewProduct>();
        let ids = insert_records(self.store, records, strategy).await?;

        report.push(
            StageReport::new(EntityKind::Product, strategy, ids.len())
                .with_stats(stats)
                .with_timing(perf.finish()),
        );
        Ok(PositionResolver::from_ids(EntityKind::Product, ids))
    }

    async fn load_orders(
        &self,
        fixtures: &[OrderFixture],
        accounts: &PositionResolver,
        products: &PositionResolver,
        report: &mut RunReport,
    ) -> SeedResult<()> {
        let perf = PerfGuard::new("stage_orders");

        let records = fixtures
            .iter()
            .enumerate()
            .map(|(i, f)| stages::resolve_order(i, f, accounts, products))
            .collect::<SeedResult<Vec<NewOrder>>>()?;

        let stats = order_stats(&records);
        let line_count: usize = records.iter().map(|o| o.lines.len()).sum();
        let strategy = InsertStrategy::for_record::<NewOrder>();
        let ids = insert_records(self.store, records, strategy).await?;

        report.push(
            StageReport::new(EntityKind::Order, strategy, ids.len())
                .with_stats(stats)
                .with_timing(perf.finish()),
        );
        // 订单行随订单一起写入, 耗时计入订单阶段
        report.push(StageReport::new(EntityKind::OrderLine, strategy, line_count));
        Ok(())
    }

    async fn load_prospects(
        &self,
        fixtures: &[ProspectFixture],
        report: &mut RunReport,
    ) -> SeedResult<()> {
        let perf = PerfGuard::new("stage_prospects");

        let records: Vec<NewProspect> = fixtures.iter().cloned().map(NewProspect::from).collect();
        let strategy = InsertStrategy::for_record::<NewProspect>();
        let ids = insert_records(self.store, records, strategy).await?;

        report.push(
            StageReport::new(EntityKind::Prospect, strategy, ids.len()).with_timing(perf.finish()),
        );
        Ok(())
    }

    async fn load_contact_messages(
        &self,
        fixtures: &[ContactMessageFixture],
        accounts: &PositionResolver,
        report: &mut RunReport,
    ) -> SeedResult<()> {
        let perf = PerfGuard::new("stage_contact_messages");

        let records = fixtures
            .iter()
            .enumerate()
            .map(|(i, f)| stages::resolve_contact_message(i, f, accounts))
            .collect::<SeedResult<Vec<NewContactMessage>>>()?;

        let stats = contact_message_stats(&records);
        let strategy = InsertStrategy::for_record::<NewContactMessage>();
        let ids = insert_records(self.store, records, strategy).await?;

        report.push(
            StageReport::new(EntityKind::ContactMessage, strategy, ids.len())
                .with_stats(stats)
                .with_timing(perf.finish()),
        );
        Ok(())
    }

    async fn load_access_requests(
        &self,
        fixtures: &[ProAccessRequestFixture],
        accounts: &PositionResolver,
        report: &mut RunReport,
    ) -> SeedResult<()> {
        let perf = PerfGuard::new("stage_access_requests");

        let records = fixtures
            .iter()
            .enumerate()
            .map(|(i, f)| stages::resolve_access_request(i, f, accounts))
            .collect::<SeedResult<Vec<NewProAccessRequest>>>()?;

        let stats = access_request_stats(&records);
        let strategy = InsertStrategy::for_record::<NewProAccessRequest>();
        let ids = insert_records(self.store, records, strategy).await?;

        report.push(
            StageReport::new(EntityKind::ProAccessRequest, strategy, ids.len())
                .with_stats(stats)
                .with_timing(perf.finish()),
        );
        Ok(())
    }

    async fn load_pro_orders(
        &self,
        fixtures: &[ProOrderFixture],
        accounts: &PositionResolver,
        products: &PositionResolver,
        report: &mut RunReport,
    ) -> SeedResult<()> {
        let perf = PerfGuard::new("stage_pro_orders");

        let records = fixtures
            .iter()
            .enumerate()
            .map(|(i, f)| stages::resolve_pro_order(i, f, accounts, products))
            .collect::<SeedResult<Vec<NewProOrder>>>()?;

        let stats = with_line_total(
            pro_order_stats(&records),
            records.iter().map(|r| r.lines.len()).sum(),
        );
        let strategy = InsertStrategy::for_record::<NewProOrder>();
        let ids = insert_records(self.store, records, strategy).await?;

        report.push(
            StageReport::new(EntityKind::ProOrder, strategy, ids.len())
                .with_stats(stats)
                .with_timing(perf.finish()),
        );
        Ok(())
    }

    async fn load_replenishment_requests(
        &self,
        fixtures: &[ReplenishmentFixture],
        accounts: &PositionResolver,
        products: &PositionResolver,
        report: &mut RunReport,
    ) -> SeedResult<()> {
        let perf = PerfGuard::new("stage_replenishment_requests");

        let records = fixtures
            .iter()
            .enumerate()
            .map(|(i, f)| stages::resolve_replenishment(i, f, accounts, products))
            .collect::<SeedResult<Vec<NewReplenishmentRequest>>>()?;

        let stats = with_line_total(
            replenishment_stats(&records),
            records.iter().map(|r| r.lines.len()).sum(),
        );
        let strategy = InsertStrategy::for_record::<NewReplenishmentRequest>();
        let ids = insert_records(self.store, records, strategy).await?;

        report.push(
            StageReport::new(EntityKind::ReplenishmentRequest, strategy, ids.len())
                .with_stats(stats)
                .with_timing(perf.finish()),
        );
        Ok(())
    }
}

fn with_line_total(mut stats: Vec<StatLine>, lines: usize) -> Vec<StatLine> {
    stats.push(StatLine {
        label: "明细行",
        count: lines,
    });
    stats
}
