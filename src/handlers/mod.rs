//! # HTTP Request Handlers Module
//!
//! 리소스별 HTTP 핸들러입니다. 모든 핸들러는 같은 흐름을 따릅니다.
//!
//! ```text
//! bind (Json / Query / Path) ─▶ validate ─▶ QuerySpec / Service ─▶ sea-orm ─▶ JSON
//! ```
//!
//! ## 공통 규칙
//!
//! | 요청 | 응답 |
//! |------|------|
//! | `GET /<resource>` | 200 `{"total": n, "<resource>": [...]}` |
//! | `GET /<resource>/{id}` | 200 / 404 |
//! | `POST /<resource>` | 201 / 400 |
//! | `PUT /<resource>/{id}` | 202 / 400 / 404 |
//! | `DELETE /<resource>/{id}` | 204 / 404 |
//!
//! 바인딩 실패는 `routes`에서 등록한 extractor 설정이, 검증 실패는
//! `From<ValidationErrors> for AppError`가 400 응답으로 변환합니다.
//!
//! ```rust,ignore
//! #[get("/{id}")]
//! pub async fn get_todo(
//!     state: web::Data<AppState>,
//!     id: web::Path<String>,
//! ) -> Result<HttpResponse, AppError> {
//!     let todo = crud::find_by_id::<todo::Entity, _>(state.db(), &id, "todo").await?;
//!     Ok(HttpResponse::Ok().json(todo))
//! }
//! ```

pub mod auth;
pub mod coupons;
pub mod epics;
pub mod issues;
pub mod milestones;
pub mod order_details;
pub mod orders;
pub mod products;
pub mod projects;
pub mod qr_code;
pub mod subscription_members;
pub mod todos;
pub mod user_groups;
pub mod users;
