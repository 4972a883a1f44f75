//! 마일스톤 HTTP Handlers

use actix_web::{delete, get, post, put, web, HttpResponse};
use chrono::Utc;
use sea_orm::ActiveModelTrait;
use uuid::Uuid;
use validator::Validate;

use crate::core::AppState;
use crate::domain::dto::milestones::{SearchMilestoneParams, MilestoneRequest};
use crate::domain::dto::ListResponse;
use crate::domain::entities::milestone;
use crate::errors::AppError;
use crate::repositories::crud;

#[get("")]
pub async fn list_milestones(
    state: web::Data<AppState>,
    params: web::Query<SearchMilestoneParams>,
) -> Result<HttpResponse, AppError> {
    params.validate()?;

    let milestones = crud::find_all(state.db(), params.to_spec()).await?;
    Ok(HttpResponse::Ok().json(ListResponse::new("milestones", milestones)))
}

#[get("/{id}")]
pub async fn get_milestone(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let milestone = crud::find_by_id::<milestone::Entity, _>(state.db(), &id, "milestone").await?;
    Ok(HttpResponse::Ok().json(milestone))
}

#[post("")]
pub async fn create_milestone(
    state: web::Data<AppState>,
    payload: web::Json<MilestoneRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let milestone = payload
        .into_inner()
        .into_active_model(Uuid::new_v4().to_string(), Utc::now())
        .insert(state.db())
        .await?;
    Ok(HttpResponse::Created().json(milestone))
}

#[put("/{id}")]
pub async fn update_milestone(
    state: web::Data<AppState>,
    id: web::Path<String>,
    payload: web::Json<MilestoneRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let request = payload.into_inner();
    let now = Utc::now();
    let milestone = crud::update_by_id::<milestone::ActiveModel, _, _>(state.db(), &id, "milestone", move |model| {
        request.apply_to(model, now)
    })
    .await?;
    Ok(HttpResponse::Accepted().json(milestone))
}

#[delete("/{id}")]
pub async fn delete_milestone(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    crud::delete_by_id::<milestone::Entity, _>(state.db(), &id, "milestone").await?;
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
    async fn test_milestone_crud_and_project_filter() {
        let (state, _) = test_state().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_all_routes),
        )
        .await;

        let project_id = Uuid::new_v4().to_string();
        for (title, project) in [("v1.0", project_id.clone()), ("v2.0", Uuid::new_v4().to_string())] {
            let req = test::TestRequest::post()
                .uri("/milestones")
                .set_json(json!({ "milestone_title": title, "project_id": project }))
                .to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::CREATED);
        }

        let req = test::TestRequest::get()
            .uri(&format!("/milestones?project_id={}", project_id))
            .to_request();
        let list: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(list["total"], 1);
        assert_eq!(list["milestones"][0]["milestone_title"], "v1.0");
        let id = list["milestones"][0]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::put()
            .uri(&format!("/milestones/{}", id))
            .set_json(json!({
                "milestone_title": "v1.1",
                "milestone_description": "bugfix",
                "project_id": project_id,
            }))
            .to_request();
        let updated: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated["milestone_title"], "v1.1");

        let req = test::TestRequest::get().uri("/milestones?milestone_title=v1").to_request();
        let list: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(list["total"], 1);

        let req = test::TestRequest::delete()
            .uri(&format!("/milestones/{}", id))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::delete()
            .uri(&format!("/milestones/{}", id))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_title_is_required() {
        let (state, _) = test_state().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/milestones")
            .set_json(json!({ "project_id": Uuid::new_v4().to_string() }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
