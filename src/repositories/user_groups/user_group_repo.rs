//! 사용자 그룹과 소속 사용자 (group_user 조인 테이블)

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, TransactionTrait,
};

use crate::domain::dto::user_groups::UserGroupResponse;
use crate::domain::entities::{group_user, user, user_group};
use crate::errors::AppResult;
use crate::repositories::crud;
use crate::repositories::query_spec::QuerySpec;

pub struct UserGroupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserGroupRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_with_users(&self, spec: QuerySpec<user_group::Entity>) -> AppResult<Vec<UserGroupResponse>> {
        let groups = crud::find_all(self.db, spec).await?;
        let mut members = self.members_of(groups.iter().map(|g| g.id.clone()).collect()).await?;

        Ok(groups
            .into_iter()
            .map(|group| {
                let users = members.remove(&group.id).unwrap_or_default();
                UserGroupResponse { group, users }
            })
            .collect())
    }

    pub async fn find_with_users(&self, id: &str) -> AppResult<UserGroupResponse> {
        let group = crud::find_by_id::<user_group::Entity, _>(self.db, id, "user group").await?;
        let users = self
            .members_of(vec![group.id.clone()])
            .await?
            .remove(&group.id)
            .unwrap_or_default();

        Ok(UserGroupResponse { group, users })
    }

    /// 그룹에 사용자를 추가합니다. 이미 소속이면 ConflictError.
    pub async fn add_user(&self, group_id: &str, user_id: &str) -> AppResult<UserGroupResponse> {
        crud::find_by_id::<user_group::Entity, _>(self.db, group_id, "user group").await?;
        crud::find_by_id::<user::Entity, _>(self.db, user_id, "user").await?;

        group_user::ActiveModel {
            group_id: Set(group_id.to_string()),
            user_id: Set(user_id.to_string()),
            created_at: Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        self.find_with_users(group_id).await
    }

    /// 그룹 삭제 시 소속 정보도 함께 제거합니다.
    ///
    /// 그룹이 없으면 NotFound를 반환하고 소속 정보 삭제도 롤백됩니다.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let txn = self.db.begin().await?;

        group_user::Entity::delete_many()
            .filter(group_user::Column::GroupId.eq(id))
            .exec(&txn)
            .await?;
        crud::delete_by_id::<user_group::Entity, _>(&txn, id, "user group").await?;

        txn.commit().await?;
        Ok(())
    }

    async fn members_of(&self, group_ids: Vec<String>) -> AppResult<HashMap<String, Vec<user::Model>>> {
        if group_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let links = group_user::Entity::find()
            .filter(group_user::Column::GroupId.is_in(group_ids))
            .all(self.db)
            .await?;
        let user_ids: Vec<String> = links.iter().map(|l| l.user_id.clone()).collect();
        let users: HashMap<String, user::Model> = user::Entity::find()
            .filter(user::Column::Id.is_in(user_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.id.clone(), u))
            .collect();

        let mut grouped: HashMap<String, Vec<user::Model>> = HashMap::new();
        for link in links {
            if let Some(user) = users.get(&link.user_id) {
                grouped.entry(link.group_id).or_default().push(user.clone());
            }
        }
        Ok(grouped)
    }
}
