//! 애플리케이션 설정
//!
//! 개별 설정 리더(`ServerConfig`, `JwtConfig` 등)는 환경 변수를 직접 읽고,
//! [`AppSettings`]는 시작 시점에 한 번 읽은 값을 묶어 핸들러에 주입합니다.

pub mod data_config;
pub mod auth_config;
pub mod profile;

pub use data_config::*;
pub use auth_config::*;

use std::path::PathBuf;

/// 시작 시점에 고정되는 런타임 설정
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,
    pub bcrypt_cost: u32,
    pub session_cookie_name: String,
    pub session_ttl_seconds: u64,
    pub assets_dir: PathBuf,
    pub pdf_font_path: PathBuf,
    pub receipt_template_path: PathBuf,
    pub qrcode_content: String,
}

impl AppSettings {
    pub fn from_env() -> Self {
        Self {
            jwt_secret: JwtConfig::secret(),
            jwt_expiration_hours: JwtConfig::expiration_hours(),
            bcrypt_cost: PasswordConfig::bcrypt_cost(),
            session_cookie_name: SessionConfig::cookie_name(),
            session_ttl_seconds: SessionConfig::ttl_seconds(),
            assets_dir: AssetConfig::assets_dir(),
            pdf_font_path: AssetConfig::pdf_font_path(),
            receipt_template_path: AssetConfig::receipt_template_path(),
            qrcode_content: AssetConfig::qrcode_content(),
        }
    }
}
