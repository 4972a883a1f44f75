//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::core::AppState;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::{AppError, AppResult};
use crate::services::auth::AuthService;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let result = match req.app_data::<web::Data<AppState>>().cloned() {
                Some(state) => authenticate(&req, &state).await,
                None => Err(AppError::InternalError("AppState가 등록되지 않았습니다".to_string())),
            };

            match result {
                Ok(user) => {
                    log::debug!("인증 성공: 사용자 ID {}", user.user_id());
                    req.extensions_mut().insert(user);

                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Err(err) => {
                    log::warn!("⚠️ 인증 실패 {}: {}", req.path(), err);
                    let response = AppError::AuthenticationError(err.to_string()).error_response();
                    let (req, _) = req.into_parts();
                    Ok(ServiceResponse::new(req, response).map_into_right_body())
                }
            }
        })
    }
}

/// 세션 쿠키를 우선 확인하고, 없으면 `Authorization: Bearer` 헤더를 사용합니다.
async fn authenticate(req: &ServiceRequest, state: &AppState) -> AppResult<AuthenticatedUser> {
    let auth = AuthService::new(state);

    if let Some(cookie) = req.cookie(&state.settings().session_cookie_name) {
        return auth.resolve_session(cookie.value()).await;
    }

    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("세션 쿠키와 Authorization 헤더가 없습니다".to_string()))?;

    let token = state.tokens().extract_bearer_token(header)?;
    auth.resolve_bearer(token).await
}
