//! 트레이스 ID 전파 미들웨어
//!
//! `x-cgi-trace-id` → `x-trace-id` 순으로 요청 헤더를 확인하고, 없으면 UUID v4를 생성합니다.
//! 결정된 ID는 요청 extensions에 [`TraceId`]로 저장되고 응답 `x-trace-id` 헤더로 반환됩니다.

use std::fmt;
use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::dev::{forward_ready, Payload, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::LocalBoxFuture;
use uuid::Uuid;

pub static TRACE_ID_HEADER: HeaderName = HeaderName::from_static("x-trace-id");
pub static CGI_TRACE_ID_HEADER: HeaderName = HeaderName::from_static("x-cgi-trace-id");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceId(String);

impl TraceId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn from_request_headers(req: &ServiceRequest) -> Self {
        [&CGI_TRACE_ID_HEADER, &TRACE_ID_HEADER]
            .into_iter()
            .filter_map(|name| req.headers().get(name))
            .filter_map(|value| value.to_str().ok())
            .find(|value| !value.trim().is_empty())
            .map(|value| Self(value.to_string()))
            .unwrap_or_else(Self::generate)
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 미들웨어가 적용되지 않은 경로에서는 새 ID를 만듭니다.
impl FromRequest for TraceId {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let trace_id = req
            .extensions()
            .get::<TraceId>()
            .cloned()
            .unwrap_or_else(TraceId::generate);
        ready(Ok(trace_id))
    }
}

#[derive(Debug, Clone, Default)]
pub struct TraceIdMiddleware;

impl<S, B> Transform<S, ServiceRequest> for TraceIdMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = TraceIdService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceIdService {
            service: Rc::new(service),
        }))
    }
}

pub struct TraceIdService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for TraceIdService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let trace_id = TraceId::from_request_headers(&req);
        req.extensions_mut().insert(trace_id.clone());

        Box::pin(async move {
            let mut res = service.call(req).await?;
            if let Ok(value) = HeaderValue::from_str(trace_id.as_str()) {
                res.headers_mut().insert(TRACE_ID_HEADER.clone(), value);
            }
            Ok(res)
        })
    }
}
