//! Todo HTTP Handlers
//!
//! | 메서드 | 경로 | 상태 코드 |
//! |--------|------|-----------|
//! | `GET` | `/todos` | 200 |
//! | `GET` | `/todos/{id}` | 200 / 404 |
//! | `POST` | `/todos` | 201 / 400 |
//! | `PUT` | `/todos/{id}` | 202 / 400 / 404 |
//! | `DELETE` | `/todos/{id}` | 204 / 404 |

use actix_web::{delete, get, post, put, web, HttpResponse};
use chrono::Utc;
use sea_orm::ActiveModelTrait;
use uuid::Uuid;
use validator::Validate;

use crate::core::AppState;
use crate::domain::dto::todos::{SearchTodoParams, TodoRequest};
use crate::domain::dto::ListResponse;
use crate::domain::entities::todo;
use crate::errors::AppError;
use crate::repositories::crud;

#[get("")]
pub async fn list_todos(
    state: web::Data<AppState>,
    params: web::Query<SearchTodoParams>,
) -> Result<HttpResponse, AppError> {
    params.validate()?;

    let todos = crud::find_all(state.db(), params.to_spec()).await?;
    Ok(HttpResponse::Ok().json(ListResponse::new("todos", todos)))
}

#[get("/{id}")]
pub async fn get_todo(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let todo = crud::find_by_id::<todo::Entity, _>(state.db(), &id, "todo").await?;
    Ok(HttpResponse::Ok().json(todo))
}

#[post("")]
pub async fn create_todo(
    state: web::Data<AppState>,
    payload: web::Json<TodoRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let todo = payload
        .into_inner()
        .into_active_model(Uuid::new_v4().to_string(), Utc::now())
        .insert(state.db())
        .await?;
    Ok(HttpResponse::Created().json(todo))
}

#[put("/{id}")]
pub async fn update_todo(
    state: web::Data<AppState>,
    id: web::Path<String>,
    payload: web::Json<TodoRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let request = payload.into_inner();
    let now = Utc::now();
    let todo = crud::update_by_id::<todo::ActiveModel, _, _>(state.db(), &id, "todo", move |model| {
        request.apply_to(model, now)
    })
    .await?;
    Ok(HttpResponse::Accepted().json(todo))
}

#[delete("/{id}")]
pub async fn delete_todo(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    crud::delete_by_id::<todo::Entity, _>(state.db(), &id, "todo").await?;
    Ok(HttpResponse::NoContent().finish())
}
