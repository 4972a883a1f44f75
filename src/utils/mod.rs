//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 금액/연호/타임스탬프 포맷팅
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::format_price;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! assert_eq!(format_price(1234567), "1,234,567");
//! print_boxed_title("Server Started");
//! ```

pub mod string_utils;
pub mod display_terminal;
