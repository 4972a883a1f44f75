//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 핸들러와 배치 실행 파일이 공유하는 로직을 도메인별로 나눕니다.
//! 서비스는 요청마다 [`AppState`](crate::core::AppState)에서 필요한 의존성을 빌려 생성합니다.
//!
//! ```rust,ignore
//! use crate::services::{auth::AuthService, orders::OrderService};
//!
//! let session = AuthService::new(&state).login(&req).await?;
//! let order = OrderService::new(&state).create(req).await?;
//! ```

pub mod auth;
pub mod exports;
pub mod imports;
pub mod orders;
pub mod users;
