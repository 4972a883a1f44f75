//! API 라우트 설정 모듈
//!
//! 리소스별 스코프와 extractor 에러 처리, 헬스체크 엔드포인트를 등록합니다.
//!
//! # Auth
//!
//! 관리 리소스는 인증 없이 열려 있고, `/auth/me`와 `/auth/logout`만
//! 핸들러 단위로 [`AuthMiddleware`](crate::middlewares::AuthMiddleware)를 적용합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .app_data(web::Data::new(state))
//!     .configure(configure_all_routes);
//! ```

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{web, HttpRequest};
use serde_json::json;

use crate::errors::AppError;
use crate::handlers;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    configure_extractors(cfg);

    cfg.service(health_check);
    cfg.service(handlers::qr_code::generate);

    configure_auth_routes(cfg);
    configure_resource_routes(cfg);
}

/// Json/Query/Path 바인딩 실패를 `{code, message, details: null}` 응답으로 통일합니다.
fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        AppError::ValidationError(err.to_string()).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err: QueryPayloadError, _req: &HttpRequest| {
        AppError::ValidationError(err.to_string()).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err: PathError, _req: &HttpRequest| {
        AppError::ValidationError(err.to_string()).into()
    }));
}

/// - `POST /auth/register`, `POST /auth/login`
/// - `GET /auth/me`, `POST /auth/logout` (인증 필요)
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(handlers::auth::register)
            .service(handlers::auth::login)
            .service(handlers::auth::me)
            .service(handlers::auth::logout),
    );
}

fn configure_resource_routes(cfg: &mut web::ServiceConfig) {
    use handlers::*;

    cfg.service(
        web::scope("/todos")
            .service(todos::list_todos)
            .service(todos::get_todo)
            .service(todos::create_todo)
            .service(todos::update_todo)
            .service(todos::delete_todo),
    )
    .service(
        web::scope("/users")
            .service(users::export_users_csv)
            .service(users::list_users)
            .service(users::get_user)
            .service(users::create_user)
            .service(users::upload_user_image)
            .service(users::update_user)
            .service(users::delete_user),
    )
    .service(
        web::scope("/products")
            .service(products::list_products)
            .service(products::get_product)
            .service(products::create_product)
            .service(products::update_product)
            .service(products::delete_product),
    )
    .service(
        web::scope("/orders")
            .service(orders::list_orders)
            .service(orders::get_order)
            .service(orders::create_order)
            .service(orders::update_order)
            .service(orders::delete_order)
            .service(orders::export_order_pdf),
    )
    .service(
        web::scope("/orderDetails")
            .service(order_details::get_order_detail)
            .service(order_details::create_order_detail)
            .service(order_details::update_order_detail)
            .service(order_details::delete_order_detail),
    )
    .service(
        web::scope("/coupons")
            .service(coupons::list_coupons)
            .service(coupons::get_coupon)
            .service(coupons::create_coupon)
            .service(coupons::update_coupon)
            .service(coupons::delete_coupon)
            .service(coupons::acquire_coupon),
    )
    .service(
        web::scope("/milestones")
            .service(milestones::list_milestones)
            .service(milestones::get_milestone)
            .service(milestones::create_milestone)
            .service(milestones::update_milestone)
            .service(milestones::delete_milestone),
    )
    .service(
        web::scope("/epics")
            .service(epics::list_epics)
            .service(epics::get_epic)
            .service(epics::create_epic)
            .service(epics::update_epic)
            .service(epics::delete_epic),
    )
    .service(
        web::scope("/projects")
            .service(projects::list_projects)
            .service(projects::get_project)
            .service(projects::create_project)
            .service(projects::update_project)
            .service(projects::delete_project),
    )
    .service(
        web::scope("/userGroups")
            .service(user_groups::list_user_groups)
            .service(user_groups::get_user_group)
            .service(user_groups::create_user_group)
            .service(user_groups::update_user_group)
            .service(user_groups::delete_user_group)
            .service(user_groups::add_user_to_group),
    )
    .service(
        web::scope("/subscriptionMembers")
            .service(subscription_members::list_subscription_members)
            .service(subscription_members::get_subscription_member)
            .service(subscription_members::create_subscription_member)
            .service(subscription_members::update_subscription_member)
            .service(subscription_members::delete_subscription_member),
    )
    .service(
        web::scope("/issues")
            .service(issues::list_issues)
            .service(issues::get_issue)
            .service(issues::create_issue)
            .service(issues::update_issue)
            .service(issues::delete_issue),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "admin_api_backend",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
