//! # 사용자 리포지토리
//!
//! 이메일 조회와 CSV 내보내기용 전체 조회를 담당합니다.
//! 단건 조회/수정/삭제는 [`crud`](crate::repositories::crud) 헬퍼를 사용합니다.

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::domain::entities::user;
use crate::errors::AppResult;

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// 이메일 주소로 사용자 조회
    ///
    /// # Returns
    ///
    /// * `Ok(Some(user::Model))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 이메일의 사용자가 없는 경우
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<user::Model>> {
        Ok(user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(self.db)
            .await?)
    }

    /// 이메일 유니크 인덱스 위반은 `From<DbErr>`에서 ConflictError로 변환됩니다.
    pub async fn create(&self, model: user::ActiveModel) -> AppResult<user::Model> {
        Ok(model.insert(self.db).await?)
    }

    /// 내보내기용 전체 목록 (생성일시 순)
    pub async fn find_all_ordered(&self) -> AppResult<Vec<user::Model>> {
        Ok(user::Entity::find()
            .order_by_asc(user::Column::CreatedAt)
            .all(self.db)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::errors::AppError;
    use chrono::Utc;
    use sea_orm::ActiveValue::Set;

    fn new_user(email: &str) -> user::ActiveModel {
        let now = Utc::now();
        user::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            first_name: Set("Taro".to_string()),
            last_name: Set("Yamada".to_string()),
            image: Set(String::new()),
            age: Set(30),
            email: Set(email.to_string()),
            password: Set("hash".to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    #[actix_web::test]
    async fn test_find_by_email() {
        let db = Database::in_memory().await;
        let repo = UserRepository::new(&db);
        repo.create(new_user("taro@example.com")).await.unwrap();

        let found = repo.find_by_email("taro@example.com").await.unwrap();
        assert_eq!(found.map(|u| u.full_name()), Some("Yamada Taro".to_string()));
        assert!(repo.find_by_email("nobody@example.com").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_duplicate_email_is_conflict() {
        let db = Database::in_memory().await;
        let repo = UserRepository::new(&db);
        repo.create(new_user("taro@example.com")).await.unwrap();

        match repo.create(new_user("taro@example.com")).await {
            Err(AppError::ConflictError(_)) => {}
            other => panic!("unexpected: {:?}", other),
        }
    }
}
