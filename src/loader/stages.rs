// ==========================================
// 店铺种子数据工具 - 阶段记录解析
// ==========================================
// 职责: 把夹具记录中的引用替换为生成标识, 得到可写入的 New* 记录
// 约束: 纯函数, 不触碰存储; 同一阶段先全部解析再写入
// ==========================================

use crate::domain::{
    ContactResponse, EntityKind, NewContactMessage, NewOrder, NewOrderLine, NewProAccessRequest,
    NewProOrder, NewProduct, NewReplenishmentRequest, NewSubcategory, RecordId, RequestLine,
};
use crate::fixtures::records::{
    ContactMessageFixture, OrderFixture, ProAccessRequestFixture, ProOrderFixture,
    ProductFixture, ReplenishmentFixture, RequestLineFixture, SubcategoryFixture,
};
use crate::loader::error::SeedResult;
use crate::loader::resolver::{NameResolver, PositionResolver, RefSite};

/// 子分类: 所属分类必须已登记, 否则返回可跳过的 UnresolvedNamedReference
pub fn resolve_subcategory(
    fixture: &SubcategoryFixture,
    categories: &NameResolver,
) -> SeedResult<NewSubcategory> {
    let category_id =
        categories.resolve_required(EntityKind::Subcategory, &fixture.name, &fixture.category)?;

    Ok(NewSubcategory {
        name: fixture.name.clone(),
        category_id,
        description: fixture.description.clone(),
        is_active: fixture.is_active,
        display_order: fixture.display_order,
    })
}

/// 商品: 分类/子分类名未登记时保持缺省, 不报错
pub fn resolve_product(
    fixture: &ProductFixture,
    owner_id: &RecordId,
    categories: &NameResolver,
    subcategories: &NameResolver,
) -> NewProduct {
    NewProduct {
        name: fixture.name.clone(),
        description: fixture.description.clone(),
        brand: fixture.brand.clone(),
        price: fixture.price,
        pro_price: fixture.pro_price,
        sale_price: fixture.sale_price,
        stock: fixture.stock,
        images: fixture.images.clone(),
        owner_id: owner_id.clone(),
        category_id: categories.resolve_optional(fixture.category.as_deref()),
        subcategory_id: subcategories.resolve_optional(fixture.subcategory.as_deref()),
        flags: fixture.flags,
    }
}

/// 普通订单: 下单账户与每一行商品都必须在范围内
pub fn resolve_order(
    record: usize,
    fixture: &OrderFixture,
    accounts: &PositionResolver,
    products: &PositionResolver,
) -> SeedResult<NewOrder> {
    let user_id = accounts.resolve(
        RefSite::new(EntityKind::Order, record, "userIndex"),
        fixture.user_index,
    )?;

    let lines = fixture
        .items
        .iter()
        .map(|item| {
            let product_id = products.resolve(
                RefSite::new(EntityKind::Order, record, "items.productIndex"),
                item.product_index,
            )?;
            Ok(NewOrderLine {
                product_id,
                quantity: item.quantity,
                unit_price: item.unit_price,
            })
        })
        .collect::<SeedResult<Vec<_>>>()?;

    let total_price = fixture
        .total_price
        .unwrap_or_else(|| lines.iter().map(NewOrderLine::subtotal).sum());

    Ok(NewOrder {
        user_id,
        lines,
        shipping_address: fixture.shipping_address.clone(),
        payment_method: fixture.payment_method.clone(),
        total_price,
        is_paid: fixture.is_paid,
        paid_at: fixture.paid_at,
        is_delivered: fixture.is_delivered,
        delivered_at: fixture.delivered_at,
    })
}

/// 联系留言: 回复人只在夹具给出时解析
pub fn resolve_contact_message(
    record: usize,
    fixture: &ContactMessageFixture,
    accounts: &PositionResolver,
) -> SeedResult<NewContactMessage> {
    let response = match &fixture.response {
        Some(r) => Some(ContactResponse {
            message: r.message.clone(),
            responded_by: accounts.resolve_optional(
                RefSite::new(EntityKind::ContactMessage, record, "response.respondedByIndex"),
                r.responded_by_index,
            )?,
            responded_at: r.responded_at,
        }),
        None => None,
    };

    Ok(NewContactMessage {
        name: fixture.name.clone(),
        email: fixture.email.clone(),
        subject: fixture.subject.clone(),
        message: fixture.message.clone(),
        is_read: fixture.is_read,
        status: fixture.status,
        response,
    })
}

/// 专业账户申请: 申请人与处理人都是可选引用
pub fn resolve_access_request(
    record: usize,
    fixture: &ProAccessRequestFixture,
    accounts: &PositionResolver,
) -> SeedResult<NewProAccessRequest> {
    let user_id = accounts.resolve_optional(
        RefSite::new(EntityKind::ProAccessRequest, record, "userIndex"),
        fixture.user_index,
    )?;
    let processed_by = accounts.resolve_optional(
        RefSite::new(EntityKind::ProAccessRequest, record, "processedByIndex"),
        fixture.processed_by_index,
    )?;

    Ok(NewProAccessRequest {
        user_id,
        company_name: fixture.company_name.clone(),
        business_id: fixture.business_id.clone(),
        message: fixture.message.clone(),
        status: fixture.status,
        processed_by,
        processed_at: fixture.processed_at,
    })
}

/// 专业订单与补货申请共用的行解析
pub fn resolve_request_lines(
    entity: EntityKind,
    record: usize,
    items: &[RequestLineFixture],
    products: &PositionResolver,
) -> SeedResult<Vec<RequestLine>> {
    items
        .iter()
        .map(|item| {
            Ok(RequestLine {
                product_id: products.resolve(
                    RefSite::new(entity, record, "items.productIndex"),
                    item.product_index,
                )?,
                quantity: item.quantity,
                unit_price: item.unit_price,
            })
        })
        .collect()
}

pub fn resolve_pro_order(
    record: usize,
    fixture: &ProOrderFixture,
    accounts: &PositionResolver,
    products: &PositionResolver,
) -> SeedResult<NewProOrder> {
    let entity = EntityKind::ProOrder;
    Ok(NewProOrder {
        user_id: accounts.resolve(RefSite::new(entity, record, "userIndex"), fixture.user_index)?,
        processed_by: accounts.resolve_optional(
            RefSite::new(entity, record, "processedByIndex"),
            fixture.processed_by_index,
        )?,
        lines: resolve_request_lines(entity, record, &fixture.items, products)?,
        status: fixture.status,
        payment_status: fixture.payment_status,
        notes: fixture.notes.clone(),
    })
}

pub fn resolve_replenishment(
    record: usize,
    fixture: &ReplenishmentFixture,
    accounts: &PositionResolver,
    products: &PositionResolver,
) -> SeedResult<NewReplenishmentRequest> {
    let entity = EntityKind::ReplenishmentRequest;
    Ok(NewReplenishmentRequest {
        user_id: accounts.resolve(RefSite::new(entity, record, "userIndex"), fixture.user_index)?,
        processed_by: accounts.resolve_optional(
            RefSite::new(entity, record, "processedByIndex"),
            fixture.processed_by_index,
        )?,
        lines: resolve_request_lines(entity, record, &fixture.items, products)?,
        status: fixture.status,
        priority: fixture.priority,
        notes: fixture.notes.clone(),
    })
}
