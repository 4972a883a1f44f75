use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "coupons")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    pub remarks: String,
    pub discount_amount: i64,
    pub discount_rate: i32,
    pub max_discount_amount: i64,
    pub use_start_at: DateTimeUtc,
    pub use_end_at: DateTimeUtc,
    pub public_start_at: DateTimeUtc,
    pub public_end_at: DateTimeUtc,
    pub is_public: bool,
    pub is_premium: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
