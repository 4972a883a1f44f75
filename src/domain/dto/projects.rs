use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Pagination;
use crate::domain::entities::{epic, project};
use crate::errors::validation;
use crate::repositories::query_spec::QuerySpec;

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct SearchProjectParams {
    #[validate(length(max = 64))]
    pub project_title: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub page: Pagination,
}

impl SearchProjectParams {
    pub fn to_spec(&self) -> QuerySpec<project::Entity> {
        QuerySpec::new()
            .like(project::Column::ProjectTitle, &self.project_title)
            .paginate(&self.page.offset, &self.page.limit)
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ProjectRequest {
    #[validate(custom(function = "validation::required"), length(max = 64))]
    pub project_title: String,
    #[validate(length(max = 255))]
    pub project_description: String,
}

impl ProjectRequest {
    pub fn into_active_model(self, id: String, now: DateTime<Utc>) -> project::ActiveModel {
        project::ActiveModel {
            id: Set(id),
            project_title: Set(self.project_title),
            project_description: Set(self.project_description),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    pub fn apply_to(self, model: &mut project::ActiveModel, now: DateTime<Utc>) {
        model.project_title = Set(self.project_title);
        model.project_description = Set(self.project_description);
        model.updated_at = Set(now);
    }
}

/// 에픽 목록을 포함한 프로젝트 상세
#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    #[serde(flatten)]
    pub project: project::Model,
    pub epics: Vec<epic::Model>,
}
