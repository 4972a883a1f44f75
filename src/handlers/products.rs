//! 상품 HTTP Handlers
//!
//! 가격 범위(`price_from`, `price_to`)는 양 끝을 포함하지 않습니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use chrono::Utc;
use sea_orm::ActiveModelTrait;
use uuid::Uuid;
use validator::Validate;

use crate::core::AppState;
use crate::domain::dto::products::{SearchProductParams, ProductRequest};
use crate::domain::dto::ListResponse;
use crate::domain::entities::product;
use crate::errors::AppError;
use crate::repositories::crud;

#[get("")]
pub async fn list_products(
    state: web::Data<AppState>,
    params: web::Query<SearchProductParams>,
) -> Result<HttpResponse, AppError> {
    params.validate()?;

    let products = crud::find_all(state.db(), params.to_spec()).await?;
    Ok(HttpResponse::Ok().json(ListResponse::new("products", products)))
}

#[get("/{id}")]
pub async fn get_product(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let product = crud::find_by_id::<product::Entity, _>(state.db(), &id, "product").await?;
    Ok(HttpResponse::Ok().json(product))
}

#[post("")]
pub async fn create_product(
    state: web::Data<AppState>,
    payload: web::Json<ProductRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let product = payload
        .into_inner()
        .into_active_model(Uuid::new_v4().to_string(), Utc::now())
        .insert(state.db())
        .await?;
    Ok(HttpResponse::Created().json(product))
}

#[put("/{id}")]
pub async fn update_product(
    state: web::Data<AppState>,
    id: web::Path<String>,
    payload: web::Json<ProductRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let request = payload.into_inner();
    let now = Utc::now();
    let product = crud::update_by_id::<product::ActiveModel, _, _>(state.db(), &id, "product", move |model| {
        request.apply_to(model, now)
    })
    .await?;
    Ok(HttpResponse::Accepted().json(product))
}

#[delete("/{id}")]
pub async fn delete_product(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    crud::delete_by_id::<product::Entity, _>(state.db(), &id, "product").await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use crate::core::app_state::testing::test_state;
    use crate::routes::configure_all_routes;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn test_price_range_is_exclusive() {
        let (state, _) = test_state().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_all_routes),
        )
        .await;

        for (name, price) in [("りんご", 100), ("みかん", 200), ("ぶどう", 300)] {
            let req = test::TestRequest::post()
                .uri("/products")
                .set_json(json!({ "product_name": name, "price": price, "quantity": 1 }))
                .to_request();
            assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
        }

        let req = test::TestRequest::get()
            .uri("/products?price_from=100&price_to=300")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["total"], 1);
        assert_eq!(body["products"][0]["price"], 200);

        let req = test::TestRequest::get().uri("/products?limit=2").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["total"], 2);
    }

    #[actix_web::test]
    async fn test_non_numeric_filter_is_rejected() {
        let (state, _) = test_state().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/products?price_from=abc").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["details"][0]["message"], "price_fromは不正です");
    }
}
