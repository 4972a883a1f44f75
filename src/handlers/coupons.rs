//! 쿠폰 HTTP Handlers
//!
//! 기본 CRUD 외에 `POST /coupons/{coupon_id}/users/{user_id}`로 쿠폰을 획득합니다.
//! 같은 사용자가 같은 쿠폰을 두 번 획득하면 400 `coupon already acquired`.

use actix_web::{delete, get, post, put, web, HttpResponse};
use chrono::Utc;
use sea_orm::ActiveModelTrait;
use uuid::Uuid;
use validator::Validate;

use crate::core::AppState;
use crate::domain::dto::coupons::{CouponRequest, SearchCouponParams};
use crate::domain::dto::ListResponse;
use crate::domain::entities::coupon;
use crate::errors::AppError;
use crate::repositories::coupons::CouponRepository;
use crate::repositories::crud;

#[get("")]
pub async fn list_coupons(
    state: web::Data<AppState>,
    params: web::Query<SearchCouponParams>,
) -> Result<HttpResponse, AppError> {
    params.validate()?;

    let coupons = crud::find_all(state.db(), params.to_spec()).await?;
    Ok(HttpResponse::Ok().json(ListResponse::new("coupons", coupons)))
}

#[get("/{id}")]
pub async fn get_coupon(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let coupon = crud::find_by_id::<coupon::Entity, _>(state.db(), &id, "coupon").await?;
    Ok(HttpResponse::Ok().json(coupon))
}

#[post("")]
pub async fn create_coupon(
    state: web::Data<AppState>,
    payload: web::Json<CouponRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let coupon = payload
        .into_inner()
        .into_active_model(Uuid::new_v4().to_string(), Utc::now())
        .insert(state.db())
        .await?;
    Ok(HttpResponse::Created().json(coupon))
}

#[put("/{id}")]
pub async fn update_coupon(
    state: web::Data<AppState>,
    id: web::Path<String>,
    payload: web::Json<CouponRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let request = payload.into_inner();
    let now = Utc::now();
    let coupon = crud::update_by_id::<coupon::ActiveModel, _, _>(state.db(), &id, "coupon", move |model| {
        request.apply_to(model, now)
    })
    .await?;
    Ok(HttpResponse::Accepted().json(coupon))
}

#[delete("/{id}")]
pub async fn delete_coupon(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    crud::delete_by_id::<coupon::Entity, _>(state.db(), &id, "coupon").await?;
    Ok(HttpResponse::NoContent().finish())
}

#[post("/{coupon_id}/users/{user_id}")]
pub async fn acquire_coupon(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (coupon_id, user_id) = path.into_inner();

    let acquired = CouponRepository::new(state.db())
        .acquire(&coupon_id, &user_id)
        .await?;
    Ok(HttpResponse::Created().json(acquired))
}

#[cfg(test)]
mod tests {
    use crate::core::app_state::testing::test_state;
    use crate::domain::entities::coupon_user;
    use crate::routes::configure_all_routes;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use sea_orm::{EntityTrait, PaginatorTrait};
    use serde_json::{json, Value};

    fn coupon_body() -> Value {
        json!({
            "title": "春のセール",
            "discount_amount": 500,
            "discount_rate": 10,
            "max_discount_amount": 1000,
            "use_start_at": "2022-04-01T00:00:00Z",
            "use_end_at": "2022-04-30T00:00:00Z",
            "public_start_at": "2022-03-25T00:00:00Z",
            "public_end_at": "2022-04-30T00:00:00Z",
            "is_public": true,
            "is_premium": false,
        })
    }

    #[actix_web::test]
    async fn test_duplicate_acquisition_is_rejected() {
        let (state, _) = test_state().await;
        let db = state.db().clone();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post().uri("/coupons").set_json(coupon_body()).to_request();
        let coupon: Value = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({
                "first_name": "花子",
                "last_name": "鈴木",
                "age": 25,
                "email": "hanako@example.com",
                "password": "password123",
            }))
            .to_request();
        let user: Value = test::call_and_read_body_json(&app, req).await;

        let uri = format!(
            "/coupons/{}/users/{}",
            coupon["id"].as_str().unwrap(),
            user["id"].as_str().unwrap()
        );

        let res = test::call_service(&app, test::TestRequest::post().uri(&uri).to_request()).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let acquired: Value = test::read_body_json(res).await;
        assert_eq!(acquired["use_count"], 0);

        let res = test::call_service(&app, test::TestRequest::post().uri(&uri).to_request()).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["message"], "coupon already acquired");

        assert_eq!(coupon_user::Entity::find().count(&db).await.unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_acquire_unknown_coupon_is_not_found() {
        let (state, _) = test_state().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/coupons/missing/users/missing")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["message"], "coupon not found");
    }

    #[actix_web::test]
    async fn test_missing_period_is_required() {
        let (state, _) = test_state().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_all_routes),
        )
        .await;

        let mut body = coupon_body();
        body.as_object_mut().unwrap().remove("use_start_at");
        let req = test::TestRequest::post().uri("/coupons").set_json(body).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["details"][0]["message"], "use_start_atは必須です");
    }
}
