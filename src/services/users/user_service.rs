//! # 사용자 관리 서비스
//!
//! 사용자 등록(비밀번호 해싱)과 이메일/비밀번호 검증을 담당합니다.
//!
//! ## 비밀번호 보안
//!
//! - **bcrypt 해싱**: 환경별 cost (개발/테스트 4, 스테이징 10, 운영 12)
//! - **솔트 자동 생성**: bcrypt가 해시마다 고유 솔트를 생성
//! - 해싱/검증 소요 시간은 로그로 남깁니다.
//!
//! ## 에러 정책
//!
//! | 상황 | 에러 |
//! |------|------|
//! | 이메일 중복 | `ConflictError` (409) |
//! | 이메일 없음 | `NotFound` (404) |
//! | 비밀번호 불일치 | `BadRequest` (400) |

use std::time::Instant;

use chrono::Utc;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::core::AppState;
use crate::domain::dto::users::CreateUserRequest;
use crate::domain::entities::user;
use crate::errors::{AppError, AppResult};
use crate::repositories::users::UserRepository;

pub const USER_NOT_FOUND_MESSAGE: &str = "ユーザが見つかりませんでした";
pub const WRONG_PASSWORD_MESSAGE: &str = "パスワードが間違っています";

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    bcrypt_cost: u32,
}

impl<'a> UserService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self {
            db: state.db(),
            bcrypt_cost: state.settings().bcrypt_cost,
        }
    }

    /// 새 사용자 생성
    ///
    /// 요청 검증은 핸들러에서 끝난 상태여야 합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 이메일 중복 (DB 유니크 인덱스)
    /// * `AppError::InternalError` - 해싱 실패
    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<user::Model> {
        let start_time = Instant::now();

        let hash_start = Instant::now();
        let password_hash = bcrypt::hash(&request.password, self.bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        log::info!("Password hashing took: {:?}", hash_start.elapsed());

        let email = request.email.clone();
        let model = request.into_active_model(Uuid::new_v4().to_string(), password_hash, Utc::now());
        let created = UserRepository::new(self.db).create(model).await?;

        log::info!(
            "✅ 사용자 생성 완료: {} ({:?})",
            email,
            start_time.elapsed()
        );
        Ok(created)
    }

    /// 이메일/비밀번호 검증
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 이메일에 해당하는 사용자 없음
    /// * `AppError::BadRequest` - 비밀번호 불일치
    pub async fn verify_password(&self, email: &str, password: &str) -> AppResult<user::Model> {
        let user = UserRepository::new(self.db)
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND_MESSAGE.to_string()))?;

        let verify_start = Instant::now();
        let is_valid = bcrypt::verify(password, &user.password)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;
        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            log::warn!("⚠️ 비밀번호 불일치: {}", email);
            return Err(AppError::BadRequest(WRONG_PASSWORD_MESSAGE.to_string()));
        }

        Ok(user)
    }
}
