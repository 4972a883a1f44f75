use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use serde::Deserialize;
use validator::Validate;

use super::Pagination;
use crate::domain::entities::issue;
use crate::errors::validation;
use crate::repositories::query_spec::{text, QuerySpec};

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct SearchIssueParams {
    #[validate(length(max = 64))]
    pub title: String,
    #[validate(custom(function = "validation::id_length"))]
    pub user_id: String,
    #[validate(custom(function = "validation::id_length"))]
    pub milestone_id: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub page: Pagination,
}

impl SearchIssueParams {
    pub fn to_spec(&self) -> QuerySpec<issue::Entity> {
        QuerySpec::new()
            .like(issue::Column::Title, &self.title)
            .eq(issue::Column::UserId, text(&self.user_id))
            .eq(issue::Column::MilestoneId, text(&self.milestone_id))
            .paginate(&self.page.offset, &self.page.limit)
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct IssueRequest {
    #[validate(custom(function = "validation::required"), length(max = 64))]
    pub title: String,
    #[validate(length(max = 255))]
    pub description: String,
    #[validate(custom(function = "validation::required"), length(equal = 36))]
    pub user_id: String,
    #[validate(length(max = 36))]
    pub milestone_id: String,
    #[validate(custom(function = "validation::required"), length(max = 64))]
    pub issue_status: String,
}

impl IssueRequest {
    pub fn into_active_model(self, id: String, now: DateTime<Utc>) -> issue::ActiveModel {
        issue::ActiveModel {
            id: Set(id),
            title: Set(self.title),
            description: Set(self.description),
            user_id: Set(self.user_id),
            milestone_id: Set(self.milestone_id),
            issue_status: Set(self.issue_status),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    pub fn apply_to(self, model: &mut issue::ActiveModel, now: DateTime<Utc>) {
        model.title = Set(self.title);
        model.description = Set(self.description);
        model.user_id = Set(self.user_id);
        model.milestone_id = Set(self.milestone_id);
        model.issue_status = Set(self.issue_status);
        model.updated_at = Set(now);
    }
}
