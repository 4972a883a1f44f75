//! 이슈 HTTP Handlers
//!
//! `user_id`, `milestone_id` 필터는 36자 ID만 받습니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use chrono::Utc;
use sea_orm::ActiveModelTrait;
use uuid::Uuid;
use validator::Validate;

use crate::core::AppState;
use crate::domain::dto::issues::{SearchIssueParams, IssueRequest};
use crate::domain::dto::ListResponse;
use crate::domain::entities::issue;
use crate::errors::AppError;
use crate::repositories::crud;

#[get("")]
pub async fn list_issues(
    state: web::Data<AppState>,
    params: web::Query<SearchIssueParams>,
) -> Result<HttpResponse, AppError> {
    params.validate()?;

    let issues = crud::find_all(state.db(), params.to_spec()).await?;
    Ok(HttpResponse::Ok().json(ListResponse::new("issues", issues)))
}

#[get("/{id}")]
pub async fn get_issue(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let issue = crud::find_by_id::<issue::Entity, _>(state.db(), &id, "issue").await?;
    Ok(HttpResponse::Ok().json(issue))
}

#[post("")]
pub async fn create_issue(
    state: web::Data<AppState>,
    payload: web::Json<IssueRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let issue = payload
        .into_inner()
        .into_active_model(Uuid::new_v4().to_string(), Utc::now())
        .insert(state.db())
        .await?;
    Ok(HttpResponse::Created().json(issue))
}

#[put("/{id}")]
pub async fn update_issue(
    state: web::Data<AppState>,
    id: web::Path<String>,
    payload: web::Json<IssueRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let request = payload.into_inner();
    let now = Utc::now();
    let issue = crud::update_by_id::<issue::ActiveModel, _, _>(state.db(), &id, "issue", move |model| {
        request.apply_to(model, now)
    })
    .await?;
    Ok(HttpResponse::Accepted().json(issue))
}

#[delete("/{id}")]
pub async fn delete_issue(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    crud::delete_by_id::<issue::Entity, _>(state.db(), &id, "issue").await?;
    Ok(HttpResponse::NoContent().finish())
}
