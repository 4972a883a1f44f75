use sea_orm::entity::prelude::*;
use serde::Serialize;

/// 쿠폰 획득 기록. (coupon_id, user_id) 복합 키로 중복 획득을 막습니다.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "coupon_user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub coupon_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    pub use_count: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
