//! 주문 생성 워크플로
//!
//! 1. 주문 ID 생성
//! 2. 상세 행의 수량/금액 합계 계산
//! 3. 헤더와 상세를 한 트랜잭션으로 저장 (상세는 각자 ID, 상태 `new`)
//!
//! 멱등성은 없습니다. 같은 요청을 두 번 보내면 주문이 두 건 생성됩니다.

use chrono::Utc;
use sea_orm::ActiveValue::Set;
use uuid::Uuid;

use crate::core::AppState;
use crate::domain::dto::orders::{CreateOrderRequest, OrderItemRequest, OrderResponse};
use crate::domain::entities::{order, order_detail};
use crate::domain::models::status::OrderStatus;
use crate::errors::{AppError, AppResult};
use crate::repositories::orders::OrderRepository;

/// (총 수량, 총 금액) = (Σ quantity, Σ quantity × price)
///
/// i64 범위를 넘으면 400으로 거부합니다.
pub fn aggregate(items: &[OrderItemRequest]) -> AppResult<(i64, i64)> {
    items.iter().try_fold((0i64, 0i64), |(quantity, total), item| {
        let subtotal = item.quantity.checked_mul(item.price);
        match (quantity.checked_add(item.quantity), subtotal.and_then(|s| total.checked_add(s))) {
            (Some(quantity), Some(total)) => Ok((quantity, total)),
            _ => Err(AppError::BadRequest("order total is out of range".to_string())),
        }
    })
}

pub struct OrderService<'a> {
    state: &'a AppState,
}

impl<'a> OrderService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    pub async fn create(&self, request: CreateOrderRequest) -> AppResult<OrderResponse> {
        let order_id = Uuid::new_v4().to_string();
        let now = Utc::now();
        let (quantity, total_price) = aggregate(&request.order_details)?;

        let header = order::ActiveModel {
            id: Set(order_id.clone()),
            user_id: Set(request.user_id.clone()),
            quantity: Set(quantity),
            total_price: Set(total_price),
            order_status: Set(request.status_or_default()),
            remarks: Set(request.remarks.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let details = request
            .order_details
            .into_iter()
            .map(|item| order_detail::ActiveModel {
                id: Set(Uuid::new_v4().to_string()),
                order_id: Set(order_id.clone()),
                product_id: Set(item.product_id),
                quantity: Set(item.quantity),
                price: Set(item.price),
                order_detail_status: Set(OrderStatus::New.as_str().to_string()),
            })
            .collect();

        let created = OrderRepository::new(self.state.db())
            .insert_with_details(header, details)
            .await?;

        log::info!(
            "✅ 주문 생성: {} (수량 {}, 합계 {})",
            created.order.id,
            quantity,
            total_price
        );
        Ok(created)
    }
}
