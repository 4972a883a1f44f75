use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use serde::Deserialize;
use validator::Validate;

use super::Pagination;
use crate::domain::entities::milestone;
use crate::errors::validation;
use crate::repositories::query_spec::{text, QuerySpec};

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct SearchMilestoneParams {
    #[validate(length(max = 64))]
    pub milestone_title: String,
    #[validate(length(max = 36))]
    pub project_id: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub page: Pagination,
}

impl SearchMilestoneParams {
    pub fn to_spec(&self) -> QuerySpec<milestone::Entity> {
        QuerySpec::new()
            .like(milestone::Column::MilestoneTitle, &self.milestone_title)
            .eq(milestone::Column::ProjectId, text(&self.project_id))
            .paginate(&self.page.offset, &self.page.limit)
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct MilestoneRequest {
    #[validate(custom(function = "validation::required"), length(max = 64))]
    pub milestone_title: String,
    #[validate(length(max = 255))]
    pub milestone_description: String,
    #[validate(custom(function = "validation::required"), length(max = 36))]
    pub project_id: String,
}

impl MilestoneRequest {
    pub fn into_active_model(self, id: String, now: DateTime<Utc>) -> milestone::ActiveModel {
        milestone::ActiveModel {
            id: Set(id),
            milestone_title: Set(self.milestone_title),
            milestone_description: Set(self.milestone_description),
            project_id: Set(self.project_id),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    pub fn apply_to(self, model: &mut milestone::ActiveModel, now: DateTime<Utc>) {
        model.milestone_title = Set(self.milestone_title);
        model.milestone_description = Set(self.milestone_description);
        model.project_id = Set(self.project_id);
        model.updated_at = Set(now);
    }
}
