//! 사용자 서비스
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user = UserService::new(&state).create_user(request).await?;
//! ```

pub mod image_upload;
pub mod user_service;

pub use user_service::UserService;
