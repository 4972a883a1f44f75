//! # 주문 리포지토리
//!
//! 주문 헤더(`orders`)와 상세(`order_details`)를 함께 다루는 연산을 모았습니다.
//! 헤더와 상세를 동시에 변경하는 연산은 모두 하나의 트랜잭션 안에서 실행됩니다.

use std::collections::HashMap;

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QuerySelect,
    TransactionTrait,
};

use crate::domain::dto::orders::OrderResponse;
use crate::domain::entities::{order, order_detail};
use crate::domain::models::status::OrderStatus;
use crate::errors::AppResult;
use crate::repositories::crud;
use crate::repositories::query_spec::QuerySpec;

/// 취소 배치 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CancelSummary {
    pub orders: u64,
    pub details: u64,
}

pub struct OrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// 주문 헤더와 상세를 하나의 트랜잭션으로 저장합니다.
    ///
    /// 어느 한 행이라도 실패하면 `txn`이 커밋 없이 drop되어 전체가 롤백됩니다.
    pub async fn insert_with_details(
        &self,
        order: order::ActiveModel,
        details: Vec<order_detail::ActiveModel>,
    ) -> AppResult<OrderResponse> {
        let txn = self.db.begin().await?;

        let order = order.insert(&txn).await?;
        let mut order_details = Vec::with_capacity(details.len());
        for detail in details {
            order_details.push(detail.insert(&txn).await?);
        }

        txn.commit().await?;
        Ok(OrderResponse { order, order_details })
    }

    pub async fn find_with_details(&self, id: &str) -> AppResult<OrderResponse> {
        let order = crud::find_by_id::<order::Entity, _>(self.db, id, "order").await?;
        let order_details = order_detail::Entity::find()
            .filter(order_detail::Column::OrderId.eq(order.id.as_str()))
            .all(self.db)
            .await?;

        Ok(OrderResponse { order, order_details })
    }

    /// 목록 조회 후 상세를 `IN` 쿼리 한 번으로 불러와 주문별로 묶습니다.
    pub async fn list_with_details(&self, spec: QuerySpec<order::Entity>) -> AppResult<Vec<OrderResponse>> {
        let orders = crud::find_all(self.db, spec).await?;
        if orders.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<String> = orders.iter().map(|o| o.id.clone()).collect();
        let mut grouped: HashMap<String, Vec<order_detail::Model>> = HashMap::new();
        for detail in order_detail::Entity::find()
            .filter(order_detail::Column::OrderId.is_in(ids))
            .all(self.db)
            .await?
        {
            grouped.entry(detail.order_id.clone()).or_default().push(detail);
        }

        Ok(orders
            .into_iter()
            .map(|order| {
                let order_details = grouped.remove(&order.id).unwrap_or_default();
                OrderResponse { order, order_details }
            })
            .collect())
    }

    /// 상세 행을 먼저 지운 뒤 헤더를 삭제합니다.
    pub async fn delete_with_details(&self, id: &str) -> AppResult<()> {
        let txn = self.db.begin().await?;

        order_detail::Entity::delete_many()
            .filter(order_detail::Column::OrderId.eq(id))
            .exec(&txn)
            .await?;
        crud::delete_by_id::<order::Entity, _>(&txn, id, "order").await?;

        txn.commit().await?;
        Ok(())
    }

    /// `new` 상태의 주문과 그 상세를 모두 `canceled`로 바꿉니다.
    pub async fn cancel_new_orders(&self) -> AppResult<CancelSummary> {
        let txn = self.db.begin().await?;

        let ids: Vec<String> = order::Entity::find()
            .select_only()
            .column(order::Column::Id)
            .filter(order::Column::OrderStatus.eq(OrderStatus::New.as_str()))
            .into_tuple()
            .all(&txn)
            .await?;

        if ids.is_empty() {
            txn.commit().await?;
            return Ok(CancelSummary::default());
        }

        let orders = order::Entity::update_many()
            .col_expr(order::Column::OrderStatus, Expr::value(OrderStatus::Canceled.as_str()))
            .col_expr(order::Column::UpdatedAt, Expr::value(chrono::Utc::now()))
            .filter(order::Column::Id.is_in(ids.clone()))
            .exec(&txn)
            .await?
            .rows_affected;

        let details = order_detail::Entity::update_many()
            .col_expr(
                order_detail::Column::OrderDetailStatus,
                Expr::value(OrderStatus::Canceled.as_str()),
            )
            .filter(order_detail::Column::OrderId.is_in(ids))
            .exec(&txn)
            .await?
            .rows_affected;

        txn.commit().await?;
        Ok(CancelSummary { orders, details })
    }
}
