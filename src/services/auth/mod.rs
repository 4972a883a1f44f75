//! 인증 서비스
//!
//! * [`TokenService`] - HS256 JWT 발급/검증
//! * [`AuthService`] - 회원가입, 로그인, 세션 해석, 로그아웃

pub mod auth_service;
pub mod token_service;

pub use auth_service::*;
pub use token_service::*;
