//! # User Management HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/users` | 사용자 목록 | 200 OK |
//! | `GET` | `/users/{id}` | 사용자 조회 | 200 OK |
//! | `POST` | `/users` | 사용자 생성 (비밀번호 해싱) | 201 Created |
//! | `PUT` | `/users/{id}` | 프로필 수정 | 202 Accepted |
//! | `PUT` | `/users/{id}/uploadImage` | 프로필 이미지 업로드 (`multipart/form-data`, 필드 `image`) | 200 OK |
//! | `DELETE` | `/users/{id}` | 사용자 삭제 | 204 No Content |
//! | `POST` | `/users/exportCsv` | 전체 사용자 CSV 출력 | 200 OK |
//!
//! 응답의 사용자 객체에는 비밀번호 해시가 포함되지 않습니다.

use actix_multipart::Multipart;
use actix_web::{delete, get, post, put, web, HttpResponse};
use chrono::Utc;
use serde_json::json;
use validator::Validate;

use crate::core::AppState;
use crate::domain::dto::users::{CreateUserRequest, SearchUserParams, UpdateUserRequest};
use crate::domain::dto::{FileOutputResponse, ListResponse};
use crate::domain::entities::user;
use crate::errors::AppError;
use crate::repositories::crud;
use crate::services::exports::csv_export;
use crate::services::users::image_upload;
use crate::services::users::UserService;

#[get("")]
pub async fn list_users(
    state: web::Data<AppState>,
    params: web::Query<SearchUserParams>,
) -> Result<HttpResponse, AppError> {
    params.validate()?;

    let users = crud::find_all(state.db(), params.to_spec()).await?;
    Ok(HttpResponse::Ok().json(ListResponse::new("users", users)))
}

#[get("/{id}")]
pub async fn get_user(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = crud::find_by_id::<user::Entity, _>(state.db(), &id, "user").await?;
    Ok(HttpResponse::Ok().json(user))
}

/// 이메일 중복이면 409
#[post("")]
pub async fn create_user(
    state: web::Data<AppState>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    log::info!("사용자 생성 요청: {}", payload.email);
    let user = UserService::new(&state).create_user(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(user))
}

#[put("/{id}")]
pub async fn update_user(
    state: web::Data<AppState>,
    id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let request = payload.into_inner();
    let now = Utc::now();
    let user = crud::update_by_id::<user::ActiveModel, _, _>(state.db(), &id, "user", move |model| {
        request.apply_to(model, now)
    })
    .await?;
    Ok(HttpResponse::Accepted().json(user))
}

/// 사용자가 없으면 파일을 쓰지 않고 404
#[put("/{id}/uploadImage")]
pub async fn upload_user_image(
    state: web::Data<AppState>,
    id: web::Path<String>,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let image = image_upload::read_image_field(payload).await?;
    let user =
        image_upload::store_user_image(state.db(), &state.settings().assets_dir, &id, image).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "画像がアップロードされました",
        "image": user.image,
    })))
}

#[delete("/{id}")]
pub async fn delete_user(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    crud::delete_by_id::<user::Entity, _>(state.db(), &id, "user").await?;
    log::info!("사용자 삭제: {}", id);
    Ok(HttpResponse::NoContent().finish())
}

#[post("/exportCsv")]
pub async fn export_users_csv(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let path = csv_export::export_users(state.db(), &state.settings().assets_dir).await?;
    Ok(HttpResponse::Ok().json(FileOutputResponse::new("CSVを出力しました", &path)))
}
