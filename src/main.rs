//! 관리자 API 서버 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! MySQL(sea-orm)과 Redis 세션 저장소를 연결하고 [`AppState`]로 묶어 핸들러에 주입합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use log::{error, info};

use admin_api_backend::caching::redis::RedisClient;
use admin_api_backend::caching::session_store::RedisSessionStore;
use admin_api_backend::config::profile::bootstrap;
use admin_api_backend::config::{
    AppSettings, CorsConfig, DatabaseConfig, Environment, RateLimitConfig, RedisConfig,
    ServerConfig,
};
use admin_api_backend::core::AppState;
use admin_api_backend::db::Database;
use admin_api_backend::middlewares::trace_id::{CGI_TRACE_ID_HEADER, TRACE_ID_HEADER};
use admin_api_backend::middlewares::{log_requests, TraceIdMiddleware};
use admin_api_backend::routes::configure_all_routes;
use admin_api_backend::utils::display_terminal::print_startup_banner;

#[actix_web::main]
async fn main() -> io::Result<()> {
    bootstrap();

    info!("🚀 관리자 API 서버 시작중...");

    let state = initialize_state().await?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(state).await
}

/// 데이터베이스와 Redis를 연결하고 [`AppState`]를 구성합니다.
///
/// 어느 한쪽이라도 연결에 실패하면 에러 로그를 남기고 기동을 중단합니다.
async fn initialize_state() -> io::Result<AppState> {
    info!("📡 데이터베이스 연결 중...");

    let db = Database::connect(&DatabaseConfig::url(), DatabaseConfig::max_connections())
        .await
        .map_err(|e| {
            error!("❌ 데이터베이스 연결 실패: {}", e);
            io::Error::other(e.to_string())
        })?;

    Database::create_tables(&db).await.map_err(|e| {
        error!("❌ 테이블 생성 실패: {}", e);
        io::Error::other(e.to_string())
    })?;

    let redis = RedisClient::connect(&RedisConfig::url()).await.map_err(|e| {
        error!("❌ Redis 연결 실패: {}", e);
        io::Error::other(e.to_string())
    })?;

    info!("✅ Redis 연결 성공");

    let sessions = Arc::new(RedisSessionStore::new(redis));
    Ok(AppState::new(db, sessions, AppSettings::from_env()))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 미들웨어는 나중에 등록한 것이 먼저 실행됩니다.
/// 요청은 경로 정규화 → trace id 부여 → 요청 로그 → 접근 로그 → CORS → Rate Limiting 순으로 통과합니다.
async fn start_http_server(state: AppState) -> io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    let rate_limit = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit.per_second)
        .burst_size(rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit.per_second, rate_limit.burst_size
    );

    print_startup_banner(&bind_address, &format!("{:?}", Environment::current()));
    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let data = web::Data::new(state);

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::from_fn(log_requests))
            .wrap(TraceIdMiddleware)
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind(&bind_address)?
    .shutdown_timeout(ServerConfig::shutdown_timeout_seconds())
    .run()
    .await
}

/// `CORS_ALLOWED_ORIGINS`가 `*`이면 모든 Origin을 허용하고, 아니면 목록의 Origin만 허용합니다.
///
/// 세션 쿠키를 주고받으므로 자격 증명은 항상 허용합니다.
fn configure_cors() -> Cors {
    let origins = CorsConfig::allowed_origins();

    let cors = if origins.iter().any(|origin| origin == "*") {
        Cors::default().allow_any_origin()
    } else {
        origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors.allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            TRACE_ID_HEADER.clone(),
            CGI_TRACE_ID_HEADER.clone(),
        ])
        .expose_headers(vec![TRACE_ID_HEADER.clone()])
        .supports_credentials()
        .max_age(CorsConfig::max_age_seconds())
}
