//! 사용자 데이터 액세스
//!
//! ```rust,ignore
//! use crate::repositories::users::UserRepository;
//!
//! let user = UserRepository::new(state.db()).find_by_email("user@example.com").await?;
//! ```

pub mod user_repo;

pub use user_repo::UserRepository;
