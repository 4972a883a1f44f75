//! 프로젝트 HTTP Handlers
//!
//! 상세 조회는 소속 에픽을 함께 반환합니다. 목록에는 포함하지 않습니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use chrono::Utc;
use sea_orm::ActiveModelTrait;
use uuid::Uuid;
use validator::Validate;

use crate::core::AppState;
use crate::domain::dto::projects::{ProjectRequest, SearchProjectParams};
use crate::domain::dto::ListResponse;
use crate::domain::entities::project;
use crate::errors::AppError;
use crate::repositories::crud;
use crate::repositories::projects::ProjectRepository;

#[get("")]
pub async fn list_projects(
    state: web::Data<AppState>,
    params: web::Query<SearchProjectParams>,
) -> Result<HttpResponse, AppError> {
    params.validate()?;

    let projects = crud::find_all(state.db(), params.to_spec()).await?;
    Ok(HttpResponse::Ok().json(ListResponse::new("projects", projects)))
}

#[get("/{id}")]
pub async fn get_project(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let project = ProjectRepository::new(state.db()).find_with_epics(&id).await?;
    Ok(HttpResponse::Ok().json(project))
}

#[post("")]
pub async fn create_project(
    state: web::Data<AppState>,
    payload: web::Json<ProjectRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let project = payload
        .into_inner()
        .into_active_model(Uuid::new_v4().to_string(), Utc::now())
        .insert(state.db())
        .await?;
    Ok(HttpResponse::Created().json(project))
}

#[put("/{id}")]
pub async fn update_project(
    state: web::Data<AppState>,
    id: web::Path<String>,
    payload: web::Json<ProjectRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let request = payload.into_inner();
    let now = Utc::now();
    let project = crud::update_by_id::<project::ActiveModel, _, _>(state.db(), &id, "project", move |model| {
        request.apply_to(model, now)
    })
    .await?;
    Ok(HttpResponse::Accepted().json(project))
}

#[delete("/{id}")]
pub async fn delete_project(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    crud::delete_by_id::<project::Entity, _>(state.db(), &id, "project").await?;
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

    fn epic_body(project_id: &str, title: &str) -> Value {
        json!({
            "is_open": true,
            "author_id": Uuid::new_v4().to_string(),
            "epic_title": title,
            "project_id": project_id,
        })
    }

    #[actix_web::test]
    async fn test_get_project_includes_its_epics() {
        let (state, _) = test_state().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/projects")
            .set_json(json!({ "project_title": "管理画面" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let project: Value = test::read_body_json(res).await;
        let project_id = project["id"].as_str().unwrap().to_string();

        for (project, title) in [(project_id.as_str(), "ログイン"), (project_id.as_str(), "注文"), ("other-project", "別件")] {
            let req = test::TestRequest::post()
                .uri("/epics")
                .set_json(epic_body(project, title))
                .to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::CREATED);
        }

        let req = test::TestRequest::get()
            .uri(&format!("/projects/{}", project_id))
            .to_request();
        let detail: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(detail["project_title"], "管理画面");
        let epics = detail["epics"].as_array().unwrap();
        assert_eq!(epics.len(), 2);
        assert!(epics.iter().all(|epic| epic["project_id"] == project_id.as_str()));

        let req = test::TestRequest::get().uri("/projects").to_request();
        let list: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(list["total"], 1);
        assert!(list["projects"][0].get("epics").is_none());
    }

    #[actix_web::test]
    async fn test_update_and_delete_project() {
        let (state, _) = test_state().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/projects")
            .set_json(json!({ "project_title": "旧名" }))
            .to_request();
        let project: Value = test::call_and_read_body_json(&app, req).await;
        let id = project["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::put()
            .uri(&format!("/projects/{}", id))
            .set_json(json!({ "project_title": "新名", "project_description": "説明" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::ACCEPTED);
        let updated: Value = test::read_body_json(res).await;
        assert_eq!(updated["project_title"], "新名");

        let req = test::TestRequest::delete()
            .uri(&format!("/projects/{}", id))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get()
            .uri(&format!("/projects/{}", id))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
