//! 쿠키 세션 기반 인증 흐름
//!
//! 로그인 시 JWT를 발급하고, 무작위 세션 키 → 토큰 매핑을 세션 저장소에 보관합니다.
//! 이후 요청은 쿠키의 세션 키를 토큰으로 되돌려 검증한 뒤 사용자를 불러옵니다.
//!
//! ```text
//! cookie(session key) ─▶ SessionStore ─▶ JWT ─▶ TokenService::verify ─▶ users
//! ```

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use chrono::Utc;
use rand::RngCore;

use crate::caching::SessionRecord;
use crate::core::AppState;
use crate::domain::dto::auth::{LoginRequest, RegisterRequest};
use crate::domain::dto::users::CreateUserRequest;
use crate::domain::entities::user;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::{AppError, AppResult};
use crate::repositories::crud;
use crate::services::users::UserService;

pub const PASSWORD_MISMATCH_MESSAGE: &str = "パスワードが一致しません";

const SESSION_KEY_BYTES: usize = 64;

/// 로그인 성공 결과
#[derive(Debug)]
pub struct LoginSession {
    pub session_key: String,
    pub token: String,
    pub user: user::Model,
}

/// URL-safe base64로 인코딩한 64바이트 무작위 세션 키
pub fn new_session_key() -> String {
    let mut bytes = [0u8; SESSION_KEY_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE.encode(bytes)
}

pub struct AuthService<'a> {
    state: &'a AppState,
}

impl<'a> AuthService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    pub async fn register(&self, request: RegisterRequest) -> AppResult<user::Model> {
        if !request.passwords_match() {
            return Err(AppError::BadRequest(PASSWORD_MISMATCH_MESSAGE.to_string()));
        }

        UserService::new(self.state)
            .create_user(CreateUserRequest {
                first_name: request.first_name,
                last_name: request.last_name,
                age: request.age,
                email: request.email,
                password: request.password,
            })
            .await
    }

    pub async fn login(&self, request: &LoginRequest) -> AppResult<LoginSession> {
        let user = UserService::new(self.state)
            .verify_password(&request.email, &request.password)
            .await?;

        let token = self.state.tokens().issue(&user.id)?;
        let session_key = new_session_key();
        let record = SessionRecord {
            token: token.clone(),
            user_id: user.id.clone(),
            created_at: Utc::now(),
        };
        self.state
            .sessions()
            .save(&session_key, &record, self.state.settings().session_ttl_seconds)
            .await?;

        log::info!("✅ 로그인 성공: 사용자 ID {}", user.id);
        Ok(LoginSession {
            session_key,
            token,
            user,
        })
    }

    /// 세션 키 → 토큰 → 사용자. 어느 단계든 실패하면 AuthenticationError.
    pub async fn resolve_session(&self, session_key: &str) -> AppResult<AuthenticatedUser> {
        let record = self
            .state
            .sessions()
            .find(session_key)
            .await?
            .ok_or_else(|| AppError::AuthenticationError("세션이 없거나 만료되었습니다".to_string()))?;

        let user = self.resolve_token(&record.token).await?;
        Ok(AuthenticatedUser {
            user,
            session_key: Some(session_key.to_string()),
        })
    }

    pub async fn resolve_bearer(&self, token: &str) -> AppResult<AuthenticatedUser> {
        let user = self.resolve_token(token).await?;
        Ok(AuthenticatedUser {
            user,
            session_key: None,
        })
    }

    pub async fn logout(&self, auth: &AuthenticatedUser) -> AppResult<()> {
        if let Some(session_key) = &auth.session_key {
            self.state.sessions().remove(session_key).await?;
        }
        log::info!("로그아웃: 사용자 ID {}", auth.user_id());
        Ok(())
    }

    async fn resolve_token(&self, token: &str) -> AppResult<user::Model> {
        let claims = self.state.tokens().verify(token)?;
        crud::find_by_id::<user::Entity, _>(self.state.db(), &claims.sub, "user")
            .await
            .map_err(|e| match e {
                AppError::NotFound(_) => AppError::AuthenticationError("사용자를 찾을 수 없습니다".to_string()),
                other => other,
            })
    }
}
