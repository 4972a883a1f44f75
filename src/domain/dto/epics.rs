use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use serde::Deserialize;
use validator::Validate;

use super::Pagination;
use crate::domain::entities::epic;
use crate::errors::validation;
use crate::repositories::query_spec::{flag, text, QuerySpec};

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct SearchEpicParams {
    #[validate(custom(function = "validation::boolean"))]
    pub is_open: String,
    pub author_id: String,
    pub label: String,
    pub milestone_id: String,
    pub assignee_id: String,
    pub project_id: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub page: Pagination,
}

impl SearchEpicParams {
    pub fn to_spec(&self) -> QuerySpec<epic::Entity> {
        QuerySpec::new()
            .eq(epic::Column::IsOpen, flag(&self.is_open))
            .eq(epic::Column::AuthorId, text(&self.author_id))
            .eq(epic::Column::Label, text(&self.label))
            .eq(epic::Column::MilestoneId, text(&self.milestone_id))
            .eq(epic::Column::AssigneeId, text(&self.assignee_id))
            .eq(epic::Column::ProjectId, text(&self.project_id))
            .paginate(&self.page.offset, &self.page.limit)
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct EpicRequest {
    pub is_open: bool,
    #[validate(custom(function = "validation::required"), length(max = 36))]
    pub author_id: String,
    #[validate(custom(function = "validation::required"), length(max = 64))]
    pub epic_title: String,
    #[validate(length(max = 255))]
    pub epic_description: String,
    #[validate(length(max = 64))]
    pub label: String,
    #[validate(length(max = 36))]
    pub milestone_id: String,
    #[validate(length(max = 36))]
    pub assignee_id: String,
    #[validate(custom(function = "validation::required"), length(max = 36))]
    pub project_id: String,
}

impl EpicRequest {
    pub fn into_active_model(self, id: String, now: DateTime<Utc>) -> epic::ActiveModel {
        let mut model = epic::ActiveModel {
            id: Set(id),
            created_at: Set(now),
            ..Default::default()
        };
        self.apply_to(&mut model, now);
        model
    }

    pub fn apply_to(self, model: &mut epic::ActiveModel, now: DateTime<Utc>) {
        model.is_open = Set(self.is_open);
        model.author_id = Set(self.author_id);
        model.epic_title = Set(self.epic_title);
        model.epic_description = Set(self.epic_description);
        model.label = Set(self.label);
        model.milestone_id = Set(self.milestone_id);
        model.assignee_id = Set(self.assignee_id);
        model.project_id = Set(self.project_id);
        model.updated_at = Set(now);
    }
}
