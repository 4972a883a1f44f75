use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Pagination;
use crate::domain::entities::{user, user_group};
use crate::errors::validation;
use crate::repositories::query_spec::QuerySpec;

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct SearchUserGroupParams {
    #[validate(length(max = 64))]
    pub group_name: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub page: Pagination,
}

impl SearchUserGroupParams {
    pub fn to_spec(&self) -> QuerySpec<user_group::Entity> {
        QuerySpec::new()
            .like(user_group::Column::GroupName, &self.group_name)
            .paginate(&self.page.offset, &self.page.limit)
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UserGroupRequest {
    #[validate(custom(function = "validation::required"), length(max = 64))]
    pub group_name: String,
}

impl UserGroupRequest {
    pub fn into_active_model(self, id: String, now: DateTime<Utc>) -> user_group::ActiveModel {
        user_group::ActiveModel {
            id: Set(id),
            group_name: Set(self.group_name),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    pub fn apply_to(self, model: &mut user_group::ActiveModel, now: DateTime<Utc>) {
        model.group_name = Set(self.group_name);
        model.updated_at = Set(now);
    }
}

/// 소속 사용자를 포함한 그룹
#[derive(Debug, Serialize)]
pub struct UserGroupResponse {
    #[serde(flatten)]
    pub group: user_group::Model,
    pub users: Vec<user::Model>,
}
