//! 요청/응답 로그
//!
//! 요청 시작과 응답 상태, 처리 시간을 트레이스 ID와 함께 남깁니다.
//! [`TraceIdMiddleware`](super::TraceIdMiddleware)보다 안쪽에 등록해야 ID가 보입니다.

use std::time::Instant;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Next;
use actix_web::{Error, HttpMessage};

use super::trace_id::TraceId;

pub async fn log_requests(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let started = Instant::now();
    let trace_id = req
        .extensions()
        .get::<TraceId>()
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());
    let method = req.method().to_string();
    let path = req.path().to_string();

    log::info!("[{}] ▶ {} {}", trace_id, method, path);

    let res = next.call(req).await?;
    let status = res.status();
    let elapsed = started.elapsed().as_millis();

    if status.is_server_error() {
        log::error!("[{}] ❌ {} {} {} ({}ms)", trace_id, method, path, status.as_u16(), elapsed);
    } else if status.is_client_error() {
        log::warn!("[{}] ⚠️ {} {} {} ({}ms)", trace_id, method, path, status.as_u16(), elapsed);
    } else {
        log::info!("[{}] ✅ {} {} {} ({}ms)", trace_id, method, path, status.as_u16(), elapsed);
    }

    Ok(res)
}
