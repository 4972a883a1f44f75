//! 에러 타입과 검증 결과 매핑

pub mod errors;
pub mod validation;

pub use errors::{AppError, AppResult, ErrorContext, ErrorDetail};
