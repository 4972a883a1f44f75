//! # 도메인 모델
//!
//! 테이블에 직접 대응하지 않는 값 객체들입니다.
//!
//! ```text
//! models/
//! ├── auth/     ← 인증된 사용자, JWT 클레임
//! └── status.rs ← 상태 값 목록
//! ```

pub mod auth;
pub mod status;
