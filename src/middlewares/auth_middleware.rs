//! 세션 인증 미들웨어
//!
//! 보호된 스코프에 `.wrap(AuthMiddleware)`로 적용합니다.
//! 인증에 성공하면 [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)가
//! 요청 extensions에 저장되고, 실패하면 401 `{"message":"unauthorized!"}`로 응답합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::auth_inner::AuthMiddlewareService;

#[derive(Debug, Clone, Default)]
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::app_state::testing::test_state;
    use crate::domain::dto::auth::{LoginRequest, RegisterRequest};
    use crate::domain::models::auth::AuthenticatedUser;
    use crate::services::auth::AuthService;
    use actix_web::cookie::Cookie;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App, HttpResponse};

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.user.email)
    }

    async fn logged_in_state() -> (crate::core::AppState, String, String) {
        let (state, _) = test_state().await;
        let auth = AuthService::new(&state);
        auth.register(RegisterRequest {
            first_name: "太郎".to_string(),
            last_name: "山田".to_string(),
            age: 30,
            email: "taro@example.com".to_string(),
            password: "password123".to_string(),
            password_confirmation: "password123".to_string(),
        })
        .await
        .unwrap();
        let session = auth
            .login(&LoginRequest {
                email: "taro@example.com".to_string(),
                password: "password123".to_string(),
            })
            .await
            .unwrap();
        (state, session.session_key, session.token)
    }

    #[actix_web::test]
    async fn test_session_cookie_authenticates() {
        let (state, session_key, _) = logged_in_state().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(web::scope("/me").wrap(AuthMiddleware).route("", web::get().to(whoami))),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/me")
            .cookie(Cookie::new("session", session_key))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(test::read_body(res).await, "taro@example.com");
    }

    #[actix_web::test]
    async fn test_bearer_token_fallback() {
        let (state, _, token) = logged_in_state().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(web::scope("/me").wrap(AuthMiddleware).route("", web::get().to(whoami))),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_unknown_session_is_unauthorized() {
        let (state, _, _) = logged_in_state().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(web::scope("/me").wrap(AuthMiddleware).route("", web::get().to(whoami))),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/me")
            .cookie(Cookie::new("session", "forged"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body, serde_json::json!({ "message": "unauthorized!" }));
    }

    #[actix_web::test]
    async fn test_missing_credentials_is_unauthorized() {
        let (state, _, _) = logged_in_state().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(web::scope("/me").wrap(AuthMiddleware).route("", web::get().to(whoami))),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/me").to_request()).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
