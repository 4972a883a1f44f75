//! 인증된 사용자 추출기
//!
//! 인증 미들웨어가 요청 extensions에 넣어 둔 사용자를 핸들러 인자로 꺼냅니다.

use std::future::{ready, Ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::Serialize;

use crate::domain::entities::user;
use crate::errors::AppError;

#[derive(Debug, Clone, Serialize)]
pub struct AuthenticatedUser {
    pub user: user::Model,
    /// 쿠키 세션으로 인증된 경우의 세션 키 (Bearer 인증이면 None)
    #[serde(skip)]
    pub session_key: Option<String>,
}

impl AuthenticatedUser {
    pub fn user_id(&self) -> &str {
        &self.user.id
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "인증되지 않은 요청입니다".to_string(),
            ))),
        }
    }
}
