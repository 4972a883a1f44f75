//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 모든 핸들러가
//! 동일한 JSON 에러 형식을 반환하도록 합니다.
//!
//! 응답 형식은 두 가지입니다.
//!
//! * REST 에러: `{"message", "status", "error", "causes"}`
//! * 파라미터 검증 에러: `{"code", "message", "details": [{"attribute", "message"}]}`
//!
//! ```rust,ignore
//! use crate::errors::errors::{AppError, AppResult};
//!
//! async fn find_todo(db: &DatabaseConnection, id: &str) -> AppResult<todo::Model> {
//!     todo::Entity::find_by_id(id.to_string())
//!         .one(db)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound("todo not found".to_string()))
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use thiserror::Error;

/// 검증 실패 응답의 최상위 메시지
pub const INVALID_PARAMETERS_MESSAGE: &str = "パラメータが不正です";

/// 필드 단위 검증 실패 정보
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDetail {
    pub attribute: String,
    pub message: String,
}

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 세션 저장소 에러 (500)
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 요청 본문/쿼리 바인딩 실패 (400, details 없음)
    #[error("{0}")]
    ValidationError(String),

    /// 필드 검증 실패 (400, details 포함)
    #[error("{}", INVALID_PARAMETERS_MESSAGE)]
    InvalidParameters(Vec<ErrorDetail>),

    /// 잘못된 요청 (400)
    #[error("{0}")]
    BadRequest(String),

    /// 리소스 찾을 수 없음 (404)
    #[error("{0}")]
    NotFound(String),

    /// 충돌/중복 (409)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 (401)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 (403)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 내부 서버 에러 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

#[derive(Debug, Serialize)]
struct RestErrorBody<'a> {
    message: &'a str,
    status: u16,
    error: &'a str,
    causes: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
struct ValidationErrorBody<'a> {
    code: u16,
    message: &'a str,
    details: Option<&'a [ErrorDetail]>,
}

impl AppError {
    /// REST 에러 본문의 `error` 필드 값
    fn kind(&self) -> &'static str {
        match self {
            AppError::ValidationError(_)
            | AppError::InvalidParameters(_)
            | AppError::BadRequest(_) => "bad_request",
            AppError::NotFound(_) => "not_found",
            AppError::ConflictError(_) => "conflict",
            AppError::AuthenticationError(_) => "unauthorized",
            AppError::AuthorizationError(_) => "forbidden",
            AppError::DatabaseError(_) | AppError::RedisError(_) | AppError::InternalError(_) => {
                "internal_server_error"
            }
        }
    }

    fn message(&self) -> &str {
        match self {
            AppError::DatabaseError(_) | AppError::RedisError(_) | AppError::InternalError(_) => {
                "internal server error"
            }
            AppError::ValidationError(msg)
            | AppError::BadRequest(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg)
            | AppError::AuthenticationError(msg)
            | AppError::AuthorizationError(msg) => msg,
            AppError::InvalidParameters(_) => INVALID_PARAMETERS_MESSAGE,
        }
    }

    fn causes(&self) -> Option<Vec<String>> {
        match self {
            AppError::DatabaseError(cause)
            | AppError::RedisError(cause)
            | AppError::InternalError(cause) => Some(vec![cause.clone()]),
            _ => None,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::InvalidParameters(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 에러 종류별로 REST 에러 또는 검증 에러 본문을 생성합니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("❌ {}", self);
        }

        match self {
            AppError::InvalidParameters(details) => {
                HttpResponse::build(status).json(ValidationErrorBody {
                    code: status.as_u16(),
                    message: INVALID_PARAMETERS_MESSAGE,
                    details: Some(details.as_slice()),
                })
            }
            AppError::ValidationError(msg) => HttpResponse::build(status).json(ValidationErrorBody {
                code: status.as_u16(),
                message: msg,
                details: None,
            }),
            AppError::AuthenticationError(_) => {
                HttpResponse::build(status).json(serde_json::json!({ "message": "unauthorized!" }))
            }
            _ => HttpResponse::build(status).json(RestErrorBody {
                message: self.message(),
                status: status.as_u16(),
                error: self.kind(),
                causes: self.causes(),
            }),
        }
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => AppError::ConflictError(detail),
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => AppError::BadRequest(detail),
            _ => AppError::DatabaseError(err.to_string()),
        }
    }
}

impl From<redis::RedisError> for AppError {
    fn from(err: redis::RedisError) -> Self {
        AppError::RedisError(err.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_json(error: AppError) -> serde_json::Value {
        let response = error.error_response();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_not_found_error_response() {
        let error = AppError::NotFound("todo not found".to_string());
        assert_eq!(error.error_response().status(), StatusCode::NOT_FOUND);

        let body = body_json(error).await;
        assert_eq!(body["message"], "todo not found");
        assert_eq!(body["status"], 404);
        assert_eq!(body["error"], "not_found");
        assert!(body["causes"].is_null());
    }

    #[actix_web::test]
    async fn test_internal_error_carries_cause() {
        let body = body_json(AppError::DatabaseError("connection refused".to_string())).await;
        assert_eq!(body["status"], 500);
        assert_eq!(body["error"], "internal_server_error");
        assert_eq!(body["causes"][0], "connection refused");
    }

    #[actix_web::test]
    async fn test_invalid_parameters_response() {
        let error = AppError::InvalidParameters(vec![ErrorDetail {
            attribute: "タイトル".to_string(),
            message: "タイトルは必須です".to_string(),
        }]);
        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);

        let body = body_json(error).await;
        assert_eq!(body["code"], 400);
        assert_eq!(body["message"], INVALID_PARAMETERS_MESSAGE);
        assert_eq!(body["details"][0]["attribute"], "タイトル");
    }

    #[actix_web::test]
    async fn test_binding_error_has_null_details() {
        let body = body_json(AppError::ValidationError("EOF while parsing".to_string())).await;
        assert_eq!(body["code"], 400);
        assert_eq!(body["message"], "EOF while parsing");
        assert!(body["details"].is_null());
    }

    #[actix_web::test]
    async fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("session expired".to_string());
        assert_eq!(error.error_response().status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(error).await["message"], "unauthorized!");
    }

    #[test]
    fn test_authorization_error_response() {
        let error = AppError::AuthorizationError("forbidden".to_string());
        assert_eq!(error.error_response().status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("disk full");
        match result.context("CSV 파일 생성 실패") {
            Err(AppError::InternalError(msg)) => assert_eq!(msg, "CSV 파일 생성 실패: disk full"),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
