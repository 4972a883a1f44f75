use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Pagination;
use crate::domain::entities::{order, order_detail};
use crate::domain::models::status::OrderStatus;
use crate::errors::validation;
use crate::repositories::query_spec::{int, text, QuerySpec};

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct SearchOrderParams {
    #[validate(custom(function = "validation::uuid4"))]
    pub user_id: String,
    #[validate(custom(function = "validation::numeric"))]
    pub quantity: String,
    #[validate(custom(function = "validation::numeric"))]
    pub total_price: String,
    #[validate(custom(function = "validation::order_status"))]
    pub order_status: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub page: Pagination,
}

impl SearchOrderParams {
    /// 주문 목록만 생성일시 내림차순으로 정렬합니다.
    pub fn to_spec(&self) -> QuerySpec<order::Entity> {
        QuerySpec::new()
            .eq(order::Column::UserId, text(&self.user_id))
            .eq(order::Column::Quantity, int(&self.quantity))
            .eq(order::Column::TotalPrice, int(&self.total_price))
            .eq(order::Column::OrderStatus, text(&self.order_status))
            .order_by_desc(order::Column::CreatedAt)
            .paginate(&self.page.offset, &self.page.limit)
    }
}

/// 주문 생성 요청의 한 줄 (상품 1건)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct OrderItemRequest {
    #[validate(custom(function = "validation::required"), length(equal = 36))]
    pub product_id: String,
    #[validate(range(min = 1))]
    pub quantity: i64,
    #[validate(range(min = 1))]
    pub price: i64,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreateOrderRequest {
    #[validate(custom(function = "validation::required"), length(max = 64))]
    pub user_id: String,
    /// 비어 있으면 `new`
    #[validate(custom(function = "validation::order_status"))]
    pub order_status: String,
    #[validate(length(max = 255))]
    pub remarks: String,
    #[validate(length(min = 1), nested)]
    pub order_details: Vec<OrderItemRequest>,
}

impl CreateOrderRequest {
    pub fn status_or_default(&self) -> String {
        if self.order_status.is_empty() {
            OrderStatus::New.as_str().to_string()
        } else {
            self.order_status.clone()
        }
    }
}

/// 주문 헤더 수정 (상세 행은 `/orderDetails`에서 수정)
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateOrderRequest {
    #[validate(custom(function = "validation::required"), length(max = 64))]
    pub user_id: String,
    #[validate(range(min = 1))]
    pub quantity: i64,
    #[validate(range(min = 0))]
    pub total_price: i64,
    #[validate(custom(function = "validation::required_order_status"))]
    pub order_status: String,
    #[validate(length(max = 255))]
    pub remarks: String,
}

impl UpdateOrderRequest {
    pub fn apply_to(self, model: &mut order::ActiveModel, now: DateTime<Utc>) {
        model.user_id = Set(self.user_id);
        model.quantity = Set(self.quantity);
        model.total_price = Set(self.total_price);
        model.order_status = Set(self.order_status);
        model.remarks = Set(self.remarks);
        model.updated_at = Set(now);
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct OrderDetailRequest {
    #[validate(custom(function = "validation::required"), length(equal = 36))]
    pub order_id: String,
    #[validate(custom(function = "validation::required"), length(equal = 36))]
    pub product_id: String,
    #[validate(range(min = 1))]
    pub quantity: i64,
    #[validate(range(min = 1))]
    pub price: i64,
    /// 비어 있으면 `new`
    #[validate(custom(function = "validation::order_detail_status"))]
    pub order_detail_status: String,
}

impl OrderDetailRequest {
    fn status_or_default(&self) -> String {
        if self.order_detail_status.is_empty() {
            OrderStatus::New.as_str().to_string()
        } else {
            self.order_detail_status.clone()
        }
    }

    pub fn into_active_model(self, id: String) -> order_detail::ActiveModel {
        let status = self.status_or_default();
        order_detail::ActiveModel {
            id: Set(id),
            order_id: Set(self.order_id),
            product_id: Set(self.product_id),
            quantity: Set(self.quantity),
            price: Set(self.price),
            order_detail_status: Set(status),
        }
    }

    pub fn apply_to(self, model: &mut order_detail::ActiveModel) {
        let status = self.status_or_default();
        model.order_id = Set(self.order_id);
        model.product_id = Set(self.product_id);
        model.quantity = Set(self.quantity);
        model.price = Set(self.price);
        model.order_detail_status = Set(status);
    }
}

/// 상세 행을 포함한 주문 응답
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    #[serde(flatten)]
    pub order: order::Model,
    pub order_details: Vec<order_detail::Model>,
}
