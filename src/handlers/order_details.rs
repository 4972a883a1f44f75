//! 주문 상세 HTTP Handlers (목록 조회 없음)

use actix_web::{delete, get, post, put, web, HttpResponse};
use sea_orm::ActiveModelTrait;
use uuid::Uuid;
use validator::Validate;

use crate::core::AppState;
use crate::domain::dto::orders::OrderDetailRequest;
use crate::domain::entities::order_detail;
use crate::errors::AppError;
use crate::repositories::crud;

#[get("/{id}")]
pub async fn get_order_detail(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let detail = crud::find_by_id::<order_detail::Entity, _>(state.db(), &id, "order detail").await?;
    Ok(HttpResponse::Ok().json(detail))
}

#[post("")]
pub async fn create_order_detail(
    state: web::Data<AppState>,
    payload: web::Json<OrderDetailRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let detail = payload
        .into_inner()
        .into_active_model(Uuid::new_v4().to_string())
        .insert(state.db())
        .await?;
    Ok(HttpResponse::Created().json(detail))
}

#[put("/{id}")]
pub async fn update_order_detail(
    state: web::Data<AppState>,
    id: web::Path<String>,
    payload: web::Json<OrderDetailRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let request = payload.into_inner();
    let detail = crud::update_by_id::<order_detail::ActiveModel, _, _>(
        state.db(),
        &id,
        "order detail",
        move |model| request.apply_to(model),
    )
    .await?;
    Ok(HttpResponse::Accepted().json(detail))
}

#[delete("/{id}")]
pub async fn delete_order_detail(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    crud::delete_by_id::<order_detail::Entity, _>(state.db(), &id, "order detail").await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use crate::core::app_state::testing::test_state;
    use crate::routes::configure_all_routes;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use serde_json::{json, Value};
    use uuid::Uuid;

    #[actix_web::test]
    async fn test_order_detail_lifecycle() {
        let (state, _) = test_state().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/orders")
            .set_json(json!({
                "user_id": Uuid::new_v4().to_string(),
                "order_details": [
                    { "product_id": Uuid::new_v4().to_string(), "quantity": 1, "price": 100 },
                ],
            }))
            .to_request();
        let order: Value = test::call_and_read_body_json(&app, req).await;
        let order_id = order["id"].as_str().unwrap().to_string();

        let product_id = Uuid::new_v4().to_string();
        let req = test::TestRequest::post()
            .uri("/orderDetails")
            .set_json(json!({
                "order_id": order_id,
                "product_id": product_id,
                "quantity": 3,
                "price": 120,
            }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(res).await;
        assert_eq!(created["order_detail_status"], "new");
        let id = created["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::put()
            .uri(&format!("/orderDetails/{}", id))
            .set_json(json!({
                "order_id": order_id,
                "product_id": product_id,
                "quantity": 3,
                "price": 120,
                "order_detail_status": "paid",
            }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::ACCEPTED);

        let req = test::TestRequest::get()
            .uri(&format!("/orderDetails/{}", id))
            .to_request();
        let fetched: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched["order_detail_status"], "paid");
        assert_eq!(fetched["quantity"], 3);

        let req = test::TestRequest::delete()
            .uri(&format!("/orderDetails/{}", id))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get()
            .uri(&format!("/orderDetails/{}", id))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_invalid_detail_is_rejected() {
        let (state, _) = test_state().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/orderDetails")
            .set_json(json!({
                "order_id": Uuid::new_v4().to_string(),
                "product_id": Uuid::new_v4().to_string(),
                "quantity": 0,
                "price": 100,
                "order_detail_status": "shipped",
            }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
