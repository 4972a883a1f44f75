//! Authentication HTTP Handlers
//!
//! 쿠키 세션 기반 인증 엔드포인트입니다.
//!
//! - **회원가입**: `POST /auth/register`
//! - **로그인**: `POST /auth/login` (세션 쿠키 발급 + JWT 반환)
//! - **현재 사용자**: `GET /auth/me` (인증 필요)
//! - **로그아웃**: `POST /auth/logout` (인증 필요, 쿠키 만료)

use actix_web::cookie::time::Duration;
use actix_web::cookie::Cookie;
use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::core::AppState;
use crate::domain::dto::auth::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::middlewares::AuthMiddleware;
use crate::services::auth::AuthService;

pub const LOGIN_SUCCESS_MESSAGE: &str = "認証に成功しました";
pub const LOGOUT_MESSAGE: &str = "ログアウトしました";

#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let user = AuthService::new(&state).register(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(user))
}

/// 로그인 핸들러
///
/// 성공하면 HttpOnly 세션 쿠키를 설정하고 본문으로 JWT를 돌려줍니다.
/// 쿠키를 쓰지 않는 클라이언트는 이 토큰을 `Authorization: Bearer`로 보낼 수 있습니다.
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let session = AuthService::new(&state).login(&payload).await?;
    let settings = state.settings();
    let cookie = Cookie::build(settings.session_cookie_name.clone(), session.session_key)
        .path("/")
        .http_only(true)
        .max_age(Duration::seconds(settings.session_ttl_seconds as i64))
        .finish();

    Ok(HttpResponse::Ok().cookie(cookie).json(LoginResponse {
        message: LOGIN_SUCCESS_MESSAGE,
        token: session.token,
        user: session.user,
    }))
}

#[get("/me", wrap = "AuthMiddleware")]
pub async fn me(auth: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(auth.user))
}

#[post("/logout", wrap = "AuthMiddleware")]
pub async fn logout(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    AuthService::new(&state).logout(&auth).await?;

    let mut cookie = Cookie::build(state.settings().session_cookie_name.clone(), "")
        .path("/")
        .http_only(true)
        .finish();
    cookie.make_removal();

    Ok(HttpResponse::Ok().cookie(cookie).json(MessageResponse {
        message: LOGOUT_MESSAGE,
    }))
}
