// ==========================================
// 店铺种子数据工具 - 种子存储 SQLite 实现
// ==========================================
// 职责: 实现 SeedRepository / CollectionAdmin（使用 rusqlite）
// 红线: Repository 不含引用解析, 只做数据写入/删除
// ==========================================
// 派生序号:
// - create_one 在同一事务内递增 sequence_counter 并写入 sequence_no
// - create_many 不碰计数器, sequence_no 保持 NULL
// ==========================================

use crate::db::{ensure_schema, open_sqlite_connection};
use crate::domain::{
    EntityKind, NewAccount, NewCategory, NewContactMessage, NewOrder, NewProAccessRequest,
    NewProOrder, NewProduct, NewProspect, NewReplenishmentRequest, NewSubcategory, RecordId,
};
use crate::perf::install_sqlite_tracing;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::seed_store::{CollectionAdmin, SeedRecord, SeedRepository};
use async_trait::async_trait;
use chrono::{Datelike, Utc};
use rusqlite::{params, Connection, Result as SqliteResult};
use serde::Serialize;
use std::sync::{Arc, Mutex};
use tracing::debug;

// ==========================================
// 读侧行结构 (用于核对装载结果)
// ==========================================

/// 子分类 → 分类 链接
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubcategoryLink {
    pub id: RecordId,
    pub name: String,
    pub category_id: RecordId,
}

/// 商品引用链接
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductLink {
    pub id: RecordId,
    pub name: String,
    pub owner_id: RecordId,
    pub category_id: Option<RecordId>,
    pub subcategory_id: Option<RecordId>,
}

/// 订单行
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLineRow {
    pub order_id: RecordId,
    pub line_no: i64,
    pub product_id: RecordId,
    pub quantity: i64,
}

/// 账户引用对 (申请人/处理人、回复人等)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRefs {
    pub id: RecordId,
    pub user_id: Option<RecordId>,
    pub processed_by: Option<RecordId>,
}

// ==========================================
// 写入上下文
// ==========================================
pub struct WriteContext {
    pub created_at: String,
    pub sequence_no: Option<String>, // 仅单条创建且 DERIVES_SEQUENCE 时为 Some
}

// ==========================================
// RowWriter - 记录到数据行的映射
// ==========================================
pub trait RowWriter: SeedRecord {
    fn write_row(
        conn: &Connection,
        id: &RecordId,
        record: &Self,
        ctx: &WriteContext,
    ) -> RepositoryResult<()>;
}

fn to_json<T: Serialize + ?Sized>(field: &str, value: &T) -> RepositoryResult<String> {
    serde_json::to_string(value).map_err(|e| RepositoryError::SerializationError {
        field: field.to_string(),
        message: e.to_string(),
    })
}

fn opt_id(id: &Option<RecordId>) -> Option<&str> {
    id.as_ref().map(|v| v.as_str())
}

impl RowWriter for NewAccount {
    fn write_row(
        conn: &Connection,
        id: &RecordId,
        r: &Self,
        ctx: &WriteContext,
    ) -> RepositoryResult<()> {
        conn.execute(
            r#"
            INSERT INTO account (
                id, name, email, phone, company_name,
                is_admin, is_pro, pro_status, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
            params![
                id.as_str(),
                r.name,
                r.email,
                r.phone,
                r.company_name,
                r.is_admin,
                r.is_pro,
                r.pro_status.map(|s| s.to_string()),
                ctx.created_at,
            ],
        )?;
        Ok(())
    }
}

impl RowWriter for NewCategory {
    fn write_row(
        conn: &Connection,
        id: &RecordId,
        r: &Self,
        ctx: &WriteContext,
    ) -> RepositoryResult<()> {
        conn.execute(
            r#"
            INSERT INTO category (
                id, name, description, image, is_active, display_order, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                id.as_str(),
                r.name,
                r.description,
                r.image,
                r.is_active,
                r.display_order,
                ctx.created_at,
            ],
        )?;
        Ok(())
    }
}

impl RowWriter for NewSubcategory {
    fn write_row(
        conn: &Connection,
        id: &RecordId,
        r: &Self,
        ctx: &WriteContext,
    ) -> RepositoryResult<()> {
        conn.execute(
            r#"
            INSERT INTO subcategory (
                id, name, category_id, description, is_active, display_order, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                id.as_str(),
                r.name,
                r.category_id.as_str(),
                r.description,
                r.is_active,
                r.display_order,
                ctx.created_at,
            ],
        )?;
        Ok(())
    }
}

impl RowWriter for NewProduct {
    fn write_row(
        conn: &Connection,
        id: &RecordId,
        r: &Self,
        ctx: &WriteContext,
    ) -> RepositoryResult<()> {
        let images_json = to_json("images_json", &r.images)?;
        conn.execute(
            r#"
            INSERT INTO product (
                id, name, description, brand,
                price, pro_price, sale_price, stock, images_json,
                owner_id, category_id, subcategory_id,
                is_clearance, is_upcoming, is_new, is_featured, is_on_sale,
                created_at
            ) VALUES (
                ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18
            )
            "#,
            params![
                id.as_str(),
                r.name,
                r.description,
                r.brand,
                r.price,
                r.pro_price,
                r.sale_price,
                r.stock,
                images_json,
                r.owner_id.as_str(),
                opt_id(&r.category_id),
                opt_id(&r.subcategory_id),
                r.flags.is_clearance,
                r.flags.is_upcoming,
                r.flags.is_new,
                r.flags.is_featured,
                r.flags.is_on_sale,
                ctx.created_at,
            ],
        )?;
        Ok(())
    }
}

impl RowWriter for NewOrder {
    fn write_row(
        conn: &Connection,
        id: &RecordId,
        r: &Self,
        ctx: &WriteContext,
    ) -> RepositoryResult<()> {
        let address_json = match &r.shipping_address {
            Some(addr) => Some(to_json("shipping_address_json", addr)?),
            None => None,
        };
        conn.execute(
            r#"
            INSERT INTO customer_order (
                id, user_id, shipping_address_json, payment_method, total_price,
                is_paid, paid_at, is_delivered, delivered_at, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
            params![
                id.as_str(),
                r.user_id.as_str(),
                address_json,
                r.payment_method,
                r.total_price,
                r.is_paid,
                r.paid_at.map(|d| d.to_rfc3339()),
                r.is_delivered,
                r.delivered_at.map(|d| d.to_rfc3339()),
                ctx.created_at,
            ],
        )?;

        // 订单行随订单一起写入 (同一事务)
        let mut stmt = conn.prepare(
            r#"
            INSERT INTO order_line (id, order_id, line_no, product_id, quantity, unit_price)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )?;
        for (line_no, line) in r.lines.iter().enumerate() {
            stmt.execute(params![
                RecordId::generate().as_str(),
                id.as_str(),
                line_no as i64,
                line.product_id.as_str(),
                line.quantity,
                line.unit_price,
            ])?;
        }
        Ok(())
    }
}

impl RowWriter for NewProspect {
    fn write_row(
        conn: &Connection,
        id: &RecordId,
        r: &Self,
        ctx: &WriteContext,
    ) -> RepositoryResult<()> {
        conn.execute(
            r#"
            INSERT INTO prospect (id, name, email, phone, company, source, notes, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            params![
                id.as_str(),
                r.name,
                r.email,
                r.phone,
                r.company,
                r.source,
                r.notes,
                ctx.created_at,
            ],
        )?;
        Ok(())
    }
}

impl RowWriter for NewContactMessage {
    fn write_row(
        conn: &Connection,
        id: &RecordId,
        r: &Self,
        ctx: &WriteContext,
    ) -> RepositoryResult<()> {
        let response = r.response.as_ref();
        conn.execute(
            r#"
            INSERT INTO contact_message (
                id, name, email, subject, message, is_read, status,
                response_message, responded_by, responded_at, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            "#,
            params![
                id.as_str(),
                r.name,
                r.email,
                r.subject,
                r.message,
                r.is_read,
                r.status.to_string(),
                response.map(|resp| resp.message.as_str()),
                response.and_then(|resp| opt_id(&resp.responded_by)),
                response.and_then(|resp| resp.responded_at.map(|d| d.to_rfc3339())),
                ctx.created_at,
            ],
        )?;
        Ok(())
    }
}

impl RowWriter for NewProAccessRequest {
    fn write_row(
        conn: &Connection,
        id: &RecordId,
        r: &Self,
        ctx: &WriteContext,
    ) -> RepositoryResult<()> {
        conn.execute(
            r#"
            INSERT INTO pro_access_request (
                id, user_id, company_name, business_id, message,
                status, processed_by, processed_at, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
            params![
                id.as_str(),
                opt_id(&r.user_id),
                r.company_name,
                r.business_id,
                r.message,
                r.status.to_string(),
                opt_id(&r.processed_by),
                r.processed_at.map(|d| d.to_rfc3339()),
                ctx.created_at,
            ],
        )?;
        Ok(())
    }
}

impl RowWriter for NewProOrder {
    fn write_row(
        conn: &Connection,
        id: &RecordId,
        r: &Self,
        ctx: &WriteContext,
    ) -> RepositoryResult<()> {
        let lines_json = to_json("lines_json", &r.lines)?;
        conn.execute(
            r#"
            INSERT INTO pro_order (
                id, sequence_no, user_id, processed_by, lines_json,
                status, payment_status, notes, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
            params![
                id.as_str(),
                ctx.sequence_no,
                r.user_id.as_str(),
                opt_id(&r.processed_by),
                lines_json,
                r.status.to_string(),
                r.payment_status.to_string(),
                r.notes,
                ctx.created_at,
            ],
        )?;
        Ok(())
    }
}

impl RowWriter for NewReplenishmentRequest {
    fn write_row(
        conn: &Connection,
        id: &RecordId,
        r: &Self,
        ctx: &WriteContext,
    ) -> RepositoryResult<()> {
        let lines_json = to_json("lines_json", &r.lines)?;
        conn.execute(
            r#"
            INSERT INTO replenishment_request (
                id, sequence_no, user_id, processed_by, lines_json,
                status, priority, notes, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
            params![
                id.as_str(),
                ctx.sequence_no,
                r.user_id.as_str(),
                opt_id(&r.processed_by),
                lines_json,
                r.status.to_string(),
                r.priority.to_string(),
                r.notes,
                ctx.created_at,
            ],
        )?;
        Ok(())
    }
}

/// 递增计数器并生成序号: `<PREFIX>-<YYYY>-<NNNNN>`
fn next_sequence_no(conn: &Connection, kind: EntityKind) -> RepositoryResult<String> {
    let prefix = kind.sequence_prefix().ok_or_else(|| {
        RepositoryError::InternalError(format!("{} 不生成派生序号", kind))
    })?;

    conn.execute(
        r#"
        INSERT INTO sequence_counter (name, value) VALUES (?1, 1)
        ON CONFLICT(name) DO UPDATE SET value = value + 1
        "#,
        params![kind.table_name()],
    )?;
    let value: i64 = conn.query_row(
        "SELECT value FROM sequence_counter WHERE name = ?1",
        params![kind.table_name()],
        |row| row.get(0),
    )?;

    Ok(format!("{}-{}-{:05}", prefix, Utc::now().year(), value))
}

fn now_string() -> String {
    Utc::now().to_rfc3339()
}

// ==========================================
// SqliteSeedStore
// ==========================================
pub struct SqliteSeedStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteSeedStore {
    /// 打开数据库 (统一 PRAGMA + SQL 统计)
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let mut conn = open_sqlite_connection(db_path)?;
        install_sqlite_tracing(&mut conn);
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建仓储实例
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// 获取数据库连接
    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 建表（幂等）
    pub fn ensure_schema(&self) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        ensure_schema(&conn)?;
        crate::db::warn_on_schema_mismatch(&conn)?;
        Ok(())
    }

    // ===== 读侧核对 =====

    /// 按创建顺序列出子分类链接
    pub fn list_subcategory_links(&self) -> RepositoryResult<Vec<SubcategoryLink>> {
        let conn = self.get_conn()?;
        let mut stmt =
            conn.prepare("SELECT id, name, category_id FROM subcategory ORDER BY rowid ASC")?;
        let rows = stmt
            .query_map([], |row| {
                Ok(SubcategoryLink {
                    id: RecordId::from(row.get::<_, String>(0)?),
                    name: row.get(1)?,
                    category_id: RecordId::from(row.get::<_, String>(2)?),
                })
            })?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(rows)
    }

    /// 按创建顺序列出商品链接
    pub fn list_product_links(&self) -> RepositoryResult<Vec<ProductLink>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, name, owner_id, category_id, subcategory_id
            FROM product
            ORDER BY rowid ASC
            "#,
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(ProductLink {
                    id: RecordId::from(row.get::<_, String>(0)?),
                    name: row.get(1)?,
                    owner_id: RecordId::from(row.get::<_, String>(2)?),
                    category_id: row.get::<_, Option<String>>(3)?.map(RecordId::from),
                    subcategory_id: row.get::<_, Option<String>>(4)?.map(RecordId::from),
                })
            })?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(rows)
    }

    /// 列出订单行 (按订单创建顺序 + 行号)
    pub fn list_order_lines(&self) -> RepositoryResult<Vec<OrderLineRow>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT l.order_id, l.line_no, l.product_id, l.quantity
            FROM order_line l
            JOIN customer_order o ON o.id = l.order_id
            ORDER BY o.rowid ASC, l.line_no ASC
            "#,
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(OrderLineRow {
                    order_id: RecordId::from(row.get::<_, String>(0)?),
                    line_no: row.get(1)?,
                    product_id: RecordId::from(row.get::<_, String>(2)?),
                    quantity: row.get(3)?,
                })
            })?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(rows)
    }

    /// 按创建顺序列出派生序号 (批量创建的记录为 None)
    pub fn list_sequence_numbers(&self, kind: EntityKind) -> RepositoryResult<Vec<Option<String>>> {
        if kind.sequence_prefix().is_none() {
            return Err(RepositoryError::InternalError(format!(
                "{} 不生成派生序号",
                kind
            )));
        }
        let conn = self.get_conn()?;
        let sql = format!(
            "SELECT sequence_no FROM {} ORDER BY rowid ASC",
            kind.table_name()
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map([], |row| row.get::<_, Option<String>>(0))?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(rows)
    }

    /// 按创建顺序列出专业账户申请的账户引用
    pub fn list_access_request_refs(&self) -> RepositoryResult<Vec<AccountRefs>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, user_id, processed_by FROM pro_access_request ORDER BY rowid ASC",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(AccountRefs {
                    id: RecordId::from(row.get::<_, String>(0)?),
                    user_id: row.get::<_, Option<String>>(1)?.map(RecordId::from),
                    processed_by: row.get::<_, Option<String>>(2)?.map(RecordId::from),
                })
            })?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(rows)
    }

    /// 按创建顺序列出联系留言的回复人
    pub fn list_contact_responders(&self) -> RepositoryResult<Vec<Option<RecordId>>> {
        let conn = self.get_conn()?;
        let mut stmt =
            conn.prepare("SELECT responded_by FROM contact_message ORDER BY rowid ASC")?;
        let rows = stmt
            .query_map([], |row| {
                Ok(row.get::<_, Option<String>>(0)?.map(RecordId::from))
            })?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(rows)
    }
}

#[async_trait]
impl<R: RowWriter> SeedRepository<R> for SqliteSeedStore {
    async fn create_one(&self, record: R) -> RepositoryResult<RecordId> {
        let mut conn = self.get_conn()?;
        let tx = conn
            .transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        let sequence_no = if R::DERIVES_SEQUENCE {
            Some(next_sequence_no(&tx, R::KIND)?)
        } else {
            None
        };

        let id = RecordId::generate();
        let ctx = WriteContext {
            created_at: now_string(),
            sequence_no,
        };
        R::write_row(&tx, &id, &record, &ctx)?;

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        debug!(kind = %R::KIND, id = %id, sequence_no = ?ctx.sequence_no, "单条创建完成");
        Ok(id)
    }

    async fn create_many(&self, records: Vec<R>) -> RepositoryResult<Vec<RecordId>> {
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.get_conn()?;
        let tx = conn
            .transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        let ctx = WriteContext {
            created_at: now_string(),
            sequence_no: None,
        };
        let mut ids = Vec::with_capacity(records.len());
        for record in &records {
            let id = RecordId::generate();
            R::write_row(&tx, &id, record, &ctx)?;
            ids.push(id);
        }

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        debug!(kind = %R::KIND, count = ids.len(), "批量创建完成");
        Ok(ids)
    }
}

#[async_trait]
impl CollectionAdmin for SqliteSeedStore {
    async fn delete_all(&self, kind: EntityKind) -> RepositoryResult<usize> {
        let mut conn = self.get_conn()?;
        let tx = conn
            .transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        let sql = format!("DELETE FROM {}", kind.table_name());
        let deleted = tx.execute(&sql, [])?;

        // 带序号的集合清空后计数器归零, 与新建库一致
        if kind.sequence_prefix().is_some() {
            tx.execute(
                "DELETE FROM sequence_counter WHERE name = ?1",
                params![kind.table_name()],
            )?;
        }

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;
        Ok(deleted)
    }

    async fn count(&self, kind: EntityKind) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let sql = format!("SELECT COUNT(*) FROM {}", kind.table_name());
        let c: i64 = conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(c as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AccessRequestStatus, Priority, ProcessingStatus, RequestLine};

    fn memory_store() -> SqliteSeedStore {
        let conn = Connection::open_in_memory().unwrap();
        crate::db::configure_sqlite_connection(&conn).unwrap();
        let store = SqliteSeedStore::from_connection(Arc::new(Mutex::new(conn)));
        store.ensure_schema().unwrap();
        store
    }

    fn account(email: &str) -> NewAccount {
        NewAccount {
            name: "A".to_string(),
            email: email.to_string(),
            phone: None,
            company_name: None,
            is_admin: false,
            is_pro: false,
            pro_status: None,
        }
    }

    fn replenishment(user_id: &RecordId) -> NewReplenishmentRequest {
        NewReplenishmentRequest {
            user_id: user_id.clone(),
            processed_by: None,
            lines: Vec::<RequestLine>::new(),
            status: ProcessingStatus::Pending,
            priority: Priority::Normal,
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_create_many_preserves_input_order() {
        let store = memory_store();
        let ids = SeedRepository::<NewAccount>::create_many(
            &store,
            vec![account("a@x.test"), account("b@x.test")],
        )
        .await
        .unwrap();
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
        assert_eq!(store.count(EntityKind::Account).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_create_many_rolls_back_whole_batch() {
        let store = memory_store();
        let result = SeedRepository::<NewAccount>::create_many(
            &store,
            vec![account("dup@x.test"), account("dup@x.test")],
        )
        .await;
        assert!(matches!(
            result,
            Err(RepositoryError::UniqueConstraintViolation(_))
        ));
        assert_eq!(store.count(EntityKind::Account).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_sequence_only_generated_on_create_one() {
        let store = memory_store();
        let user = SeedRepository::<NewAccount>::create_one(&store, account("u@x.test"))
            .await
            .unwrap();

        SeedRepository::<NewReplenishmentRequest>::create_one(&store, replenishment(&user))
            .await
            .unwrap();
        SeedRepository::<NewReplenishmentRequest>::create_many(
            &store,
            vec![replenishment(&user)],
        )
        .await
        .unwrap();
        SeedRepository::<NewReplenishmentRequest>::create_one(&store, replenishment(&user))
            .await
            .unwrap();

        let seqs = store
            .list_sequence_numbers(EntityKind::ReplenishmentRequest)
            .unwrap();
        assert_eq!(seqs.len(), 3);
        assert!(seqs[0].as_deref().unwrap().ends_with("-00001"));
        assert_eq!(seqs[1], None);
        assert!(seqs[2].as_deref().unwrap().ends_with("-00002"));
        assert!(seqs[0].as_deref().unwrap().starts_with("REP-"));
    }

    #[tokio::test]
    async fn test_delete_all_resets_sequence_counter() {
        let store = memory_store();
        let user = SeedRepository::<NewAccount>::create_one(&store, account("u@x.test"))
            .await
            .unwrap();
        SeedRepository::<NewReplenishmentRequest>::create_one(&store, replenishment(&user))
            .await
            .unwrap();

        let deleted = store
            .delete_all(EntityKind::ReplenishmentRequest)
            .await
            .unwrap();
        assert_eq!(deleted, 1);

        SeedRepository::<NewReplenishmentRequest>::create_one(&store, replenishment(&user))
            .await
            .unwrap();
        let seqs = store
            .list_sequence_numbers(EntityKind::ReplenishmentRequest)
            .unwrap();
        assert!(seqs[0].as_deref().unwrap().ends_with("-00001"));
    }

    #[tokio::test]
    async fn test_delete_all_in_any_order_cascades() {
        let store = memory_store();
        let user = SeedRepository::<NewAccount>::create_one(&store, account("u@x.test"))
            .await
            .unwrap();
        SeedRepository::<NewReplenishmentRequest>::create_one(&store, replenishment(&user))
            .await
            .unwrap();

        // 先删被引用方
        store.delete_all(EntityKind::Account).await.unwrap();
        assert_eq!(
            store.count(EntityKind::ReplenishmentRequest).await.unwrap(),
            0
        );
        assert_eq!(
            store
                .delete_all(EntityKind::ReplenishmentRequest)
                .await
                .unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn test_deleting_accounts_keeps_access_requests_with_null_requester() {
        let store = memory_store();
        let user = SeedRepository::<NewAccount>::create_one(&store, account("u@x.test"))
            .await
            .unwrap();
        SeedRepository::<NewProAccessRequest>::create_one(
            &store,
            NewProAccessRequest {
                user_id: Some(user.clone()),
                company_name: "Roux SARL".to_string(),
                business_id: None,
                message: None,
                status: AccessRequestStatus::Approved,
                processed_by: Some(user),
                processed_at: None,
            },
        )
        .await
        .unwrap();

        // 申请人是可选引用: 删除账户只置空, 申请保留
        store.delete_all(EntityKind::Account).await.unwrap();
        assert_eq!(store.count(EntityKind::ProAccessRequest).await.unwrap(), 1);

        let refs = store.list_access_request_refs().unwrap();
        assert_eq!(refs[0].user_id, None);
        assert_eq!(refs[0].processed_by, None);
    }
}
