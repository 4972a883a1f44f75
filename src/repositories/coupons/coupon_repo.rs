//! 쿠폰 획득 (coupon, user) 쌍 관리

use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, TransactionTrait};

use crate::domain::entities::{coupon, coupon_user, user};
use crate::errors::{AppError, AppResult};
use crate::repositories::crud;

pub struct CouponRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CouponRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// 쿠폰과 사용자가 존재하고 아직 획득 이력이 없으면 `use_count = 0`으로 등록합니다.
    ///
    /// 동시 요청으로 존재 확인을 통과하더라도 복합 기본 키가 중복 행을 막고,
    /// 이 경우 ConflictError(409)가 됩니다.
    pub async fn acquire(&self, coupon_id: &str, user_id: &str) -> AppResult<coupon_user::Model> {
        let txn = self.db.begin().await?;

        crud::find_by_id::<coupon::Entity, _>(&txn, coupon_id, "coupon").await?;
        crud::find_by_id::<user::Entity, _>(&txn, user_id, "user").await?;

        let existing = coupon_user::Entity::find_by_id((coupon_id.to_string(), user_id.to_string()))
            .one(&txn)
            .await?;
        if existing.is_some() {
            return Err(AppError::BadRequest("coupon already acquired".to_string()));
        }

        let acquired = coupon_user::ActiveModel {
            coupon_id: Set(coupon_id.to_string()),
            user_id: Set(user_id.to_string()),
            use_count: Set(0),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        log::info!("✅ 쿠폰 획득: coupon={} user={}", coupon_id, user_id);
        Ok(acquired)
    }
}
