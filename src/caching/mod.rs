//! 세션 저장소 계층
//!
//! 로그인 시 발급되는 세션 키와 JWT를 매핑해 보관합니다.
//! 운영 환경에서는 Redis를 사용합니다.
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
pub mod session_store;

pub use session_store::{RedisSessionStore, SessionRecord, SessionStore};
