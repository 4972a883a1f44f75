use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use serde::Deserialize;
use validator::Validate;

use super::Pagination;
use crate::domain::entities::product;
use crate::errors::validation;
use crate::repositories::query_spec::{int, QuerySpec};

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct SearchProductParams {
    #[validate(length(max = 64))]
    pub product_name: String,
    #[validate(custom(function = "validation::numeric"))]
    pub price_from: String,
    #[validate(custom(function = "validation::numeric"))]
    pub price_to: String,
    #[validate(length(max = 255))]
    pub remarks: String,
    #[validate(custom(function = "validation::numeric"))]
    pub quantity: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub page: Pagination,
}

impl SearchProductParams {
    pub fn to_spec(&self) -> QuerySpec<product::Entity> {
        QuerySpec::new()
            .like(product::Column::ProductName, &self.product_name)
            .gt(product::Column::Price, int(&self.price_from))
            .lt(product::Column::Price, int(&self.price_to))
            .like(product::Column::Remarks, &self.remarks)
            .eq(product::Column::Quantity, int(&self.quantity))
            .paginate(&self.page.offset, &self.page.limit)
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ProductRequest {
    #[validate(custom(function = "validation::required"), length(max = 64))]
    pub product_name: String,
    #[validate(range(min = 0))]
    pub price: i64,
    #[validate(length(max = 255))]
    pub remarks: String,
    #[validate(range(min = 0))]
    pub quantity: i32,
}

impl ProductRequest {
    pub fn into_active_model(self, id: String, now: DateTime<Utc>) -> product::ActiveModel {
        product::ActiveModel {
            id: Set(id),
            product_name: Set(self.product_name),
            price: Set(self.price),
            remarks: Set(self.remarks),
            quantity: Set(self.quantity),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    pub fn apply_to(self, model: &mut product::ActiveModel, now: DateTime<Utc>) {
        model.product_name = Set(self.product_name);
        model.price = Set(self.price);
        model.remarks = Set(self.remarks);
        model.quantity = Set(self.quantity);
        model.updated_at = Set(now);
    }
}
