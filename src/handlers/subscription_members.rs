//! 구독 회원 HTTP Handlers

use actix_web::{delete, get, post, put, web, HttpResponse};
use chrono::Utc;
use sea_orm::ActiveModelTrait;
use uuid::Uuid;
use validator::Validate;

use crate::core::AppState;
use crate::domain::dto::subscription_members::{SearchSubscriptionMemberParams, SubscriptionMemberRequest};
use crate::domain::dto::ListResponse;
use crate::domain::entities::subscription_member;
use crate::errors::AppError;
use crate::repositories::crud;

#[get("")]
pub async fn list_subscription_members(
    state: web::Data<AppState>,
    params: web::Query<SearchSubscriptionMemberParams>,
) -> Result<HttpResponse, AppError> {
    params.validate()?;

    let subscription_members = crud::find_all(state.db(), params.to_spec()).await?;
    Ok(HttpResponse::Ok().json(ListResponse::new("subscription_members", subscription_members)))
}

#[get("/{id}")]
pub async fn get_subscription_member(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let subscription_member = crud::find_by_id::<subscription_member::Entity, _>(state.db(), &id, "subscription member").await?;
    Ok(HttpResponse::Ok().json(subscription_member))
}

#[post("")]
pub async fn create_subscription_member(
    state: web::Data<AppState>,
    payload: web::Json<SubscriptionMemberRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let subscription_member = payload
        .into_inner()
        .into_active_model(Uuid::new_v4().to_string(), Utc::now())
        .insert(state.db())
        .await?;
    Ok(HttpResponse::Created().json(subscription_member))
}

#[put("/{id}")]
pub async fn update_subscription_member(
    state: web::Data<AppState>,
    id: web::Path<String>,
    payload: web::Json<SubscriptionMemberRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let request = payload.into_inner();
    let now = Utc::now();
    let subscription_member = crud::update_by_id::<subscription_member::ActiveModel, _, _>(state.db(), &id, "subscription member", move |model| {
        request.apply_to(model, now)
    })
    .await?;
    Ok(HttpResponse::Accepted().json(subscription_member))
}

#[delete("/{id}")]
pub async fn delete_subscription_member(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    crud::delete_by_id::<subscription_member::Entity, _>(state.db(), &id, "subscription member").await?;
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
    async fn test_member_status_and_period_filters() {
        let (state, _) = test_state().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_all_routes),
        )
        .await;

        let members = [
            ("premium", "2023-04-01T00:00:00Z"),
            ("premium", "2025-04-01T00:00:00Z"),
            ("basic", "2025-04-01T00:00:00Z"),
        ];
        for (status, start) in members {
            let req = test::TestRequest::post()
                .uri("/subscriptionMembers")
                .set_json(json!({
                    "user_id": Uuid::new_v4().to_string(),
                    "member_status": status,
                    "member_start_date": start,
                }))
                .to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::CREATED);
        }

        let req = test::TestRequest::get()
            .uri("/subscriptionMembers?member_status=premium")
            .to_request();
        let list: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(list["total"], 2);

        let req = test::TestRequest::get()
            .uri("/subscriptionMembers?member_status=premium&member_start_date_from=2024-01-01T00:00:00Z")
            .to_request();
        let list: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(list["total"], 1);
        assert!(list["subscription_members"][0]["member_end_date"].is_null());

        let req = test::TestRequest::get()
            .uri("/subscriptionMembers?member_status=gold")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_start_date_is_required_and_member_can_be_stopped() {
        let (state, _) = test_state().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_all_routes),
        )
        .await;

        let user_id = Uuid::new_v4().to_string();
        let req = test::TestRequest::post()
            .uri("/subscriptionMembers")
            .set_json(json!({ "user_id": user_id, "member_status": "basic" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/subscriptionMembers")
            .set_json(json!({
                "user_id": user_id,
                "member_status": "basic",
                "member_start_date": "2024-01-01T00:00:00Z",
            }))
            .to_request();
        let member: Value = test::call_and_read_body_json(&app, req).await;
        let id = member["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::put()
            .uri(&format!("/subscriptionMembers/{}", id))
            .set_json(json!({
                "user_id": user_id,
                "member_status": "stopped",
                "member_start_date": "2024-01-01T00:00:00Z",
                "member_end_date": "2024-06-30T00:00:00Z",
            }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::ACCEPTED);

        let req = test::TestRequest::get()
            .uri(&format!("/subscriptionMembers/{}", id))
            .to_request();
        let fetched: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched["member_status"], "stopped");
        assert!(!fetched["member_end_date"].is_null());
    }
}
