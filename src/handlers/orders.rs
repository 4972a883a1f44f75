//! 주문 HTTP Handlers
//!
//! 주문 생성은 [`OrderService`]가 헤더와 상세를 한 트랜잭션으로 저장합니다.
//! 목록은 생성일시 내림차순이며 각 주문에 상세 행이 포함됩니다.
//!
//! `GET /orders/{id}/exportPdf`는 주문자 이름과 합계 금액으로 영수증 PDF를 생성합니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use chrono::Utc;
use validator::Validate;

use crate::core::AppState;
use crate::domain::dto::orders::{CreateOrderRequest, SearchOrderParams, UpdateOrderRequest};
use crate::domain::dto::{FileOutputResponse, ListResponse};
use crate::domain::entities::{order, user};
use crate::errors::AppError;
use crate::repositories::crud;
use crate::repositories::orders::OrderRepository;
use crate::services::exports::pdf_receipt;
use crate::services::orders::OrderService;

#[get("")]
pub async fn list_orders(
    state: web::Data<AppState>,
    params: web::Query<SearchOrderParams>,
) -> Result<HttpResponse, AppError> {
    params.validate()?;

    let orders = OrderRepository::new(state.db())
        .list_with_details(params.to_spec())
        .await?;
    Ok(HttpResponse::Ok().json(ListResponse::new("orders", orders)))
}

#[get("/{id}")]
pub async fn get_order(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let order = OrderRepository::new(state.db()).find_with_details(&id).await?;
    Ok(HttpResponse::Ok().json(order))
}

#[post("")]
pub async fn create_order(
    state: web::Data<AppState>,
    payload: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let order = OrderService::new(&state).create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(order))
}

/// 주문 헤더만 덮어씁니다. 수량/금액 재계산은 하지 않습니다.
#[put("/{id}")]
pub async fn update_order(
    state: web::Data<AppState>,
    id: web::Path<String>,
    payload: web::Json<UpdateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let request = payload.into_inner();
    let now = Utc::now();
    crud::update_by_id::<order::ActiveModel, _, _>(state.db(), &id, "order", move |model| {
        request.apply_to(model, now)
    })
    .await?;

    let order = OrderRepository::new(state.db()).find_with_details(&id).await?;
    Ok(HttpResponse::Accepted().json(order))
}

#[delete("/{id}")]
pub async fn delete_order(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    OrderRepository::new(state.db()).delete_with_details(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[get("/{id}/exportPdf")]
pub async fn export_order_pdf(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let order = crud::find_by_id::<order::Entity, _>(state.db(), &id, "order").await?;
    let user = crud::find_by_id::<user::Entity, _>(state.db(), &order.user_id, "user").await?;

    let settings = state.settings();
    let path = pdf_receipt::render_receipt(
        &settings.receipt_template_path,
        &settings.pdf_font_path,
        &settings.assets_dir,
        &order,
        &user,
    )?;
    Ok(HttpResponse::Ok().json(FileOutputResponse::new("PDFを出力しました", &path)))
}
