use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use serde::Deserialize;
use validator::Validate;

use super::Pagination;
use crate::domain::entities::todo;
use crate::errors::validation;
use crate::repositories::query_spec::{datetime, text, QuerySpec};

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct SearchTodoParams {
    #[validate(length(max = 64))]
    pub title: String,
    #[validate(length(max = 64))]
    pub body: String,
    #[validate(custom(function = "validation::todo_status"))]
    pub status: String,
    #[validate(length(max = 64))]
    pub user_id: String,
    #[validate(custom(function = "validation::datetime"))]
    pub created_at: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub page: Pagination,
}

impl SearchTodoParams {
    pub fn to_spec(&self) -> QuerySpec<todo::Entity> {
        QuerySpec::new()
            .like(todo::Column::Title, &self.title)
            .like(todo::Column::Body, &self.body)
            .eq(todo::Column::Status, text(&self.status))
            .eq(todo::Column::UserId, text(&self.user_id))
            .eq(todo::Column::CreatedAt, datetime(&self.created_at))
            .paginate(&self.page.offset, &self.page.limit)
    }
}

/// 생성/수정 공용 요청 본문
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct TodoRequest {
    #[validate(custom(function = "validation::required"), length(max = 64))]
    pub title: String,
    #[validate(custom(function = "validation::required"), length(max = 64))]
    pub body: String,
    #[validate(custom(function = "validation::required_todo_status"))]
    pub status: String,
    #[validate(custom(function = "validation::required"), length(max = 64))]
    pub user_id: String,
}

impl TodoRequest {
    pub fn into_active_model(self, id: String, now: DateTime<Utc>) -> todo::ActiveModel {
        todo::ActiveModel {
            id: Set(id),
            title: Set(self.title),
            body: Set(self.body),
            status: Set(self.status),
            user_id: Set(self.user_id),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    pub fn apply_to(self, model: &mut todo::ActiveModel, now: DateTime<Utc>) {
        model.title = Set(self.title);
        model.body = Set(self.body);
        model.status = Set(self.status);
        model.user_id = Set(self.user_id);
        model.updated_at = Set(now);
    }
}
