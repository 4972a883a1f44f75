//! 관리 화면용 REST API 백엔드
//!
//! Todo, 사용자, 상품, 주문, 쿠폰, 프로젝트 관리 등 관리 화면의 리소스를
//! CRUD 형태로 제공하고, 배치 실행 파일(`src/bin`)과 로직을 공유합니다.
//!
//! # Features
//!
//! - **리소스 CRUD**: 검색 조건을 [`QuerySpec`](repositories::query_spec::QuerySpec)으로 조립
//! - **검증**: `validator` 결과를 일본어 필드 메시지로 변환
//! - **인증**: bcrypt + JWT, Redis 세션 쿠키 (Bearer 토큰 대체 지원)
//! - **파일 산출물**: 주문/사용자 CSV, 영수증 PDF, QR 코드 PNG
//! - **배치**: 미처리 주문 취소, 상품 CSV 등록, UUID 생성
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + 미들웨어
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 바인딩/검증/응답
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 인증, 주문 생성, 파일 출력
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← QuerySpec, 트랜잭션
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  MySQL + Redis  │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use admin_api_backend::core::AppState;
//! use admin_api_backend::routes::configure_all_routes;
//!
//! let state = AppState::new(db, sessions, AppSettings::from_env());
//! let app = App::new()
//!     .app_data(web::Data::new(state))
//!     .configure(configure_all_routes);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
