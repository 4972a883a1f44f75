use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use serde::Deserialize;
use validator::Validate;

use super::Pagination;
use crate::domain::entities::coupon;
use crate::errors::validation;
use crate::repositories::query_spec::{datetime, flag, int, QuerySpec};

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct SearchCouponParams {
    #[validate(length(max = 64))]
    pub title: String,
    #[validate(custom(function = "validation::numeric"))]
    pub discount_amount: String,
    #[validate(custom(function = "validation::numeric"))]
    pub discount_rate: String,
    #[validate(custom(function = "validation::numeric"))]
    pub max_discount_amount: String,
    #[validate(custom(function = "validation::datetime"))]
    pub use_start_at_from: String,
    #[validate(custom(function = "validation::datetime"))]
    pub use_start_at_to: String,
    #[validate(custom(function = "validation::datetime"))]
    pub use_end_at_from: String,
    #[validate(custom(function = "validation::datetime"))]
    pub use_end_at_to: String,
    #[validate(custom(function = "validation::datetime"))]
    pub public_start_at_from: String,
    #[validate(custom(function = "validation::datetime"))]
    pub public_start_at_to: String,
    #[validate(custom(function = "validation::datetime"))]
    pub public_end_at_from: String,
    #[validate(custom(function = "validation::datetime"))]
    pub public_end_at_to: String,
    #[validate(custom(function = "validation::boolean"))]
    pub is_public: String,
    #[validate(custom(function = "validation::boolean"))]
    pub is_premium: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub page: Pagination,
}

impl SearchCouponParams {
    pub fn to_spec(&self) -> QuerySpec<coupon::Entity> {
        use coupon::Column;

        QuerySpec::new()
            .like(Column::Title, &self.title)
            .eq(Column::DiscountAmount, int(&self.discount_amount))
            .eq(Column::DiscountRate, int(&self.discount_rate))
            .eq(Column::MaxDiscountAmount, int(&self.max_discount_amount))
            .gt(Column::UseStartAt, datetime(&self.use_start_at_from))
            .lt(Column::UseStartAt, datetime(&self.use_start_at_to))
            .gt(Column::UseEndAt, datetime(&self.use_end_at_from))
            .lt(Column::UseEndAt, datetime(&self.use_end_at_to))
            .gt(Column::PublicStartAt, datetime(&self.public_start_at_from))
            .lt(Column::PublicStartAt, datetime(&self.public_start_at_to))
            .gt(Column::PublicEndAt, datetime(&self.public_end_at_from))
            .lt(Column::PublicEndAt, datetime(&self.public_end_at_to))
            .eq(Column::IsPublic, flag(&self.is_public))
            .eq(Column::IsPremium, flag(&self.is_premium))
            .paginate(&self.page.offset, &self.page.limit)
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CouponRequest {
    #[validate(custom(function = "validation::required"), length(max = 64))]
    pub title: String,
    #[validate(length(max = 255))]
    pub remarks: String,
    #[validate(range(min = 0))]
    pub discount_amount: i64,
    #[validate(range(min = 0, max = 100))]
    pub discount_rate: i32,
    #[validate(range(min = 0))]
    pub max_discount_amount: i64,
    #[validate(required)]
    pub use_start_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub use_end_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub public_start_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub public_end_at: Option<DateTime<Utc>>,
    pub is_public: bool,
    pub is_premium: bool,
}

impl CouponRequest {
    /// 검증을 통과한 요청에 대해서만 호출합니다. (기간 필드가 모두 채워져 있어야 함)
    pub fn into_active_model(self, id: String, now: DateTime<Utc>) -> coupon::ActiveModel {
        let mut model = coupon::ActiveModel {
            id: Set(id),
            created_at: Set(now),
            ..Default::default()
        };
        self.apply_to(&mut model, now);
        model
    }

    pub fn apply_to(self, model: &mut coupon::ActiveModel, now: DateTime<Utc>) {
        model.title = Set(self.title);
        model.remarks = Set(self.remarks);
        model.discount_amount = Set(self.discount_amount);
        model.discount_rate = Set(self.discount_rate);
        model.max_discount_amount = Set(self.max_discount_amount);
        model.use_start_at = Set(self.use_start_at.unwrap_or(now));
        model.use_end_at = Set(self.use_end_at.unwrap_or(now));
        model.public_start_at = Set(self.public_start_at.unwrap_or(now));
        model.public_end_at = Set(self.public_end_at.unwrap_or(now));
        model.is_public = Set(self.is_public);
        model.is_premium = Set(self.is_premium);
        model.updated_at = Set(now);
    }
}
