use actix_web::{delete, get, post, put, web, HttpResponse};
use chrono::Utc;
use sea_orm::ActiveModelTrait;
use uuid::Uuid;
use validator::Validate;

use crate::core::AppState;
use crate::domain::dto::epics::{SearchEpicParams, EpicRequest};
use crate::domain::dto::ListResponse;
use crate::domain::entities::epic;
use crate::errors::AppError;
use crate::repositories::crud;

#[get("")]
pub async fn list_epics(
    state: web::Data<AppState>,
    params: web::Query<SearchEpicParams>,
) -> Result<HttpResponse, AppError> {
    params.validate()?;

    let epics = crud::find_all(state.db(), params.to_spec()).await?;
    Ok(HttpResponse::Ok().json(ListResponse::new("epics", epics)))
}

#[get("/{id}")]
pub async fn get_epic(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let epic = crud::find_by_id::<epic::Entity, _>(state.db(), &id, "epic").await?;
    Ok(HttpResponse::Ok().json(epic))
}

#[post("")]
pub async fn create_epic(
    state: web::Data<AppState>,
    payload: web::Json<EpicRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let epic = payload
        .into_inner()
        .into_active_model(Uuid::new_v4().to_string(), Utc::now())
        .insert(state.db())
        .await?;
    Ok(HttpResponse::Created().json(epic))
}

#[put("/{id}")]
pub async fn update_epic(
    state: web::Data<AppState>,
    id: web::Path<String>,
    payload: web::Json<EpicRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let request = payload.into_inner();
    let now = Utc::now();
    let epic = crud::update_by_id::<epic::ActiveModel, _, _>(state.db(), &id, "epic", move |model| {
        request.apply_to(model, now)
    })
    .await?;
    Ok(HttpResponse::Accepted().json(epic))
}

#[delete("/{id}")]
pub async fn delete_epic(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    crud::delete_by_id::<epic::Entity, _>(state.db(), &id, "epic").await?;
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
    async fn test_epic_flag_and_label_filters() {
        let (state, _) = test_state().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_all_routes),
        )
        .await;

        let project_id = Uuid::new_v4().to_string();
        for (title, is_open, label) in [("検索", true, "feature"), ("決済", false, "feature"), ("障害", true, "bug")] {
            let req = test::TestRequest::post()
                .uri("/epics")
                .set_json(json!({
                    "is_open": is_open,
                    "author_id": Uuid::new_v4().to_string(),
                    "epic_title": title,
                    "label": label,
                    "project_id": project_id,
                }))
                .to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::CREATED);
        }

        let req = test::TestRequest::get().uri("/epics?is_open=true").to_request();
        let list: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(list["total"], 2);

        let req = test::TestRequest::get()
            .uri("/epics?is_open=1&label=feature")
            .to_request();
        let list: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(list["total"], 1);
        assert_eq!(list["epics"][0]["epic_title"], "検索");

        let req = test::TestRequest::get()
            .uri(&format!("/epics?project_id={}&limit=2", project_id))
            .to_request();
        let list: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(list["total"], 2);

        let req = test::TestRequest::get().uri("/epics?is_open=yes").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_close_epic() {
        let (state, _) = test_state().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_all_routes),
        )
        .await;

        let author_id = Uuid::new_v4().to_string();
        let project_id = Uuid::new_v4().to_string();
        let req = test::TestRequest::post()
            .uri("/epics")
            .set_json(json!({
                "is_open": true,
                "author_id": author_id,
                "epic_title": "検索",
                "project_id": project_id,
            }))
            .to_request();
        let epic: Value = test::call_and_read_body_json(&app, req).await;
        let id = epic["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::put()
            .uri(&format!("/epics/{}", id))
            .set_json(json!({
                "is_open": false,
                "author_id": author_id,
                "epic_title": "検索",
                "project_id": project_id,
            }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::ACCEPTED);

        let req = test::TestRequest::get().uri(&format!("/epics/{}", id)).to_request();
        let fetched: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched["is_open"], false);
        assert_eq!(fetched["created_at"], epic["created_at"]);
    }
}
