use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use serde::Deserialize;
use validator::Validate;

use super::Pagination;
use crate::domain::entities::user;
use crate::errors::validation;
use crate::repositories::query_spec::{int, QuerySpec};

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct SearchUserParams {
    #[validate(length(max = 64))]
    pub first_name: String,
    #[validate(length(max = 64))]
    pub last_name: String,
    #[validate(custom(function = "validation::numeric"))]
    pub age: String,
    #[validate(length(max = 64))]
    pub email: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub page: Pagination,
}

impl SearchUserParams {
    pub fn to_spec(&self) -> QuerySpec<user::Entity> {
        QuerySpec::new()
            .like(user::Column::FirstName, &self.first_name)
            .like(user::Column::LastName, &self.last_name)
            .eq(user::Column::Age, int(&self.age))
            .like(user::Column::Email, &self.email)
            .paginate(&self.page.offset, &self.page.limit)
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreateUserRequest {
    #[validate(custom(function = "validation::required"), length(max = 64))]
    pub first_name: String,
    #[validate(custom(function = "validation::required"), length(max = 64))]
    pub last_name: String,
    #[validate(range(min = 0, max = 150))]
    pub age: i32,
    #[validate(custom(function = "validation::required"), email, length(max = 64))]
    pub email: String,
    #[validate(custom(function = "validation::required"), length(min = 8, max = 64))]
    pub password: String,
}

impl CreateUserRequest {
    /// `password_hash`는 이미 해시된 값이어야 합니다.
    pub fn into_active_model(self, id: String, password_hash: String, now: DateTime<Utc>) -> user::ActiveModel {
        user::ActiveModel {
            id: Set(id),
            first_name: Set(self.first_name),
            last_name: Set(self.last_name),
            image: Set(String::new()),
            age: Set(self.age),
            email: Set(self.email),
            password: Set(password_hash),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }
}

/// 프로필 수정. 비밀번호는 변경하지 않습니다.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateUserRequest {
    #[validate(custom(function = "validation::required"), length(max = 64))]
    pub first_name: String,
    #[validate(custom(function = "validation::required"), length(max = 64))]
    pub last_name: String,
    #[validate(length(max = 255))]
    pub image: String,
    #[validate(range(min = 0, max = 150))]
    pub age: i32,
    #[validate(custom(function = "validation::required"), email, length(max = 64))]
    pub email: String,
}

impl UpdateUserRequest {
    pub fn apply_to(self, model: &mut user::ActiveModel, now: DateTime<Utc>) {
        model.first_name = Set(self.first_name);
        model.last_name = Set(self.last_name);
        model.image = Set(self.image);
        model.age = Set(self.age);
        model.email = Set(self.email);
        model.updated_at = Set(now);
    }
}
