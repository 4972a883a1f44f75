//! 미들웨어 모듈
//!
//! 요청 처리 파이프라인의 횡단 관심사를 담당합니다.
//!
//! * [`TraceIdMiddleware`]: 트레이스 ID 결정 및 응답 헤더 반영
//! * [`log_requests`]: 트레이스 ID를 포함한 요청/응답 로그 (`middleware::from_fn`으로 등록)
//! * [`AuthMiddleware`]: 세션 쿠키(또는 Bearer 토큰) 인증
//!
//! ```rust,ignore
//! App::new()
//!     .wrap(from_fn(log_requests))
//!     .wrap(TraceIdMiddleware)
//!     .service(
//!         web::scope("/auth")
//!             .wrap(AuthMiddleware)
//!             .service(handlers::auth::me),
//!     )
//! ```
//!
//! actix-web은 나중에 `wrap`한 미들웨어가 먼저 실행됩니다.

pub mod auth_middleware;
mod auth_inner;
pub mod request_logger;
pub mod trace_id;

pub use auth_middleware::AuthMiddleware;
pub use request_logger::log_requests;
pub use trace_id::{TraceId, TraceIdMiddleware};
