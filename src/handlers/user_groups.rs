//! 사용자 그룹 HTTP Handlers
//!
//! 목록과 상세 모두 소속 사용자를 `users` 필드로 포함합니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use chrono::Utc;
use sea_orm::ActiveModelTrait;
use uuid::Uuid;
use validator::Validate;

use crate::core::AppState;
use crate::domain::dto::user_groups::{SearchUserGroupParams, UserGroupRequest, UserGroupResponse};
use crate::domain::dto::ListResponse;
use crate::domain::entities::user_group;
use crate::errors::AppError;
use crate::repositories::crud;
use crate::repositories::user_groups::UserGroupRepository;

#[get("")]
pub async fn list_user_groups(
    state: web::Data<AppState>,
    params: web::Query<SearchUserGroupParams>,
) -> Result<HttpResponse, AppError> {
    params.validate()?;

    let groups = UserGroupRepository::new(state.db())
        .list_with_users(params.to_spec())
        .await?;
    Ok(HttpResponse::Ok().json(ListResponse::new("user_groups", groups)))
}

#[get("/{id}")]
pub async fn get_user_group(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let group = UserGroupRepository::new(state.db()).find_with_users(&id).await?;
    Ok(HttpResponse::Ok().json(group))
}

#[post("")]
pub async fn create_user_group(
    state: web::Data<AppState>,
    payload: web::Json<UserGroupRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let group = payload
        .into_inner()
        .into_active_model(Uuid::new_v4().to_string(), Utc::now())
        .insert(state.db())
        .await?;
    Ok(HttpResponse::Created().json(UserGroupResponse { group, users: Vec::new() }))
}

#[put("/{id}")]
pub async fn update_user_group(
    state: web::Data<AppState>,
    id: web::Path<String>,
    payload: web::Json<UserGroupRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let request = payload.into_inner();
    let now = Utc::now();
    crud::update_by_id::<user_group::ActiveModel, _, _>(state.db(), &id, "user group", move |model| {
        request.apply_to(model, now)
    })
    .await?;

    let group = UserGroupRepository::new(state.db()).find_with_users(&id).await?;
    Ok(HttpResponse::Accepted().json(group))
}

#[delete("/{id}")]
pub async fn delete_user_group(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    UserGroupRepository::new(state.db()).delete(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// `POST /userGroups/{id}/users/{user_id}`
#[post("/{id}/users/{user_id}")]
pub async fn add_user_to_group(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (group_id, user_id) = path.into_inner();

    let group = UserGroupRepository::new(state.db())
        .add_user(&group_id, &user_id)
        .await?;
    log::info!("✅ 그룹 멤버 추가: group={} user={}", group_id, user_id);
    Ok(HttpResponse::Created().json(group))
}
