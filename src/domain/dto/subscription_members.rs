use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use serde::Deserialize;
use validator::Validate;

use super::Pagination;
use crate::domain::entities::subscription_member;
use crate::errors::validation;
use crate::repositories::query_spec::{datetime, text, QuerySpec};

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct SearchSubscriptionMemberParams {
    #[validate(custom(function = "validation::uuid4"))]
    pub user_id: String,
    #[validate(custom(function = "validation::member_status"))]
    pub member_status: String,
    #[validate(custom(function = "validation::datetime"))]
    pub member_start_date_from: String,
    #[validate(custom(function = "validation::datetime"))]
    pub member_end_date_to: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub page: Pagination,
}

impl SearchSubscriptionMemberParams {
    pub fn to_spec(&self) -> QuerySpec<subscription_member::Entity> {
        use subscription_member::Column;

        QuerySpec::new()
            .eq(Column::UserId, text(&self.user_id))
            .eq(Column::MemberStatus, text(&self.member_status))
            .gt(Column::MemberStartDate, datetime(&self.member_start_date_from))
            .lt(Column::MemberEndDate, datetime(&self.member_end_date_to))
            .paginate(&self.page.offset, &self.page.limit)
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct SubscriptionMemberRequest {
    #[validate(custom(function = "validation::required_uuid4"))]
    pub user_id: String,
    #[validate(custom(function = "validation::required_member_status"))]
    pub member_status: String,
    #[validate(required)]
    pub member_start_date: Option<DateTime<Utc>>,
    /// 비어 있으면 무기한
    pub member_end_date: Option<DateTime<Utc>>,
}

impl SubscriptionMemberRequest {
    pub fn into_active_model(self, id: String, now: DateTime<Utc>) -> subscription_member::ActiveModel {
        let mut model = subscription_member::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        self.apply_to(&mut model, now);
        model
    }

    pub fn apply_to(self, model: &mut subscription_member::ActiveModel, now: DateTime<Utc>) {
        model.user_id = Set(self.user_id);
        model.member_status = Set(self.member_status);
        model.member_start_date = Set(self.member_start_date.unwrap_or(now));
        model.member_end_date = Set(self.member_end_date);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, EntityTrait, QueryTrait};

    #[test]
    fn test_member_period_filters() {
        let user_id = uuid::Uuid::new_v4().to_string();
        let params = SearchSubscriptionMemberParams {
            user_id: user_id.clone(),
            member_status: "premium".to_string(),
            member_start_date_from: "2022-04-01T00:00:00+09:00".to_string(),
            member_end_date_to: "2023-03-31T00:00:00+09:00".to_string(),
            page: crate::domain::dto::Pagination::default(),
        };
        assert_eq!(params.to_spec().predicates().len(), 4);

        let sql = params
            .to_spec()
            .apply(subscription_member::Entity::find())
            .build(DbBackend::MySql)
            .to_string();
        assert!(sql.contains(&format!("`user_id` = '{}'", user_id)));
        assert!(sql.contains("`member_start_date` >"));
        assert!(sql.contains("`member_end_date` <"));
    }

    #[test]
    fn test_invalid_user_id_is_rejected() {
        let params = SearchSubscriptionMemberParams {
            user_id: "not-a-uuid".to_string(),
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }
}
