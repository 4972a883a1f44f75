//! # Core Module
//!
//! 요청 처리 전반에서 공유되는 애플리케이션 상태를 정의합니다.
//!
//! 모든 공유 자원(DB 연결 풀, 세션 저장소, 토큰 서비스, 설정)은 시작 시점에
//! 한 번 생성되어 [`AppState`]로 묶이고, `web::Data<AppState>`로 핸들러와
//! 미들웨어에 주입됩니다. 전역 싱글톤은 사용하지 않습니다.
//!
//! ```rust,ignore
//! let state = AppState::new(db, Arc::new(RedisSessionStore::new(redis)), AppSettings::from_env());
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .app_data(web::Data::new(state.clone()))
//!         .configure(configure_all_routes)
//! })
//! ```

pub mod app_state;

pub use app_state::AppState;
