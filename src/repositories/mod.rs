//! 데이터 액세스 계층
//!
//! * [`query_spec`] - 목록 조회 조건 명세
//! * [`crud`] - 문자열 기본 키 엔티티 공통 헬퍼
//! * 집계 단위 리포지토리 - 여러 테이블을 함께 다루는 연산 (트랜잭션 포함)
//!
//! 리포지토리는 연결을 빌려 쓰는 가벼운 값이므로 요청마다 생성합니다.
//!
//! ```rust,ignore
//! use crate::repositories::orders::OrderRepository;
//!
//! let summary = OrderRepository::new(state.db()).cancel_new_orders().await?;
//! ```

pub mod query_spec;
pub mod crud;
pub mod coupons;
pub mod orders;
pub mod projects;
pub mod user_groups;
pub mod users;
