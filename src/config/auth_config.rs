//! 인증 관련 설정
//!
//! JWT 서명 키/만료 시간과 세션 쿠키 설정을 관리합니다.
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! export SESSION_COOKIE_NAME="session"
//! export SESSION_TTL_SECONDS="86400"
//! ```

use std::env;

pub struct JwtConfig;

impl JwtConfig {
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "your-secret-key".to_string()
        })
    }

    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24)
    }
}

pub struct SessionConfig;

impl SessionConfig {
    pub fn cookie_name() -> String {
        env::var("SESSION_COOKIE_NAME").unwrap_or_else(|_| "session".to_string())
    }

    pub fn ttl_seconds() -> u64 {
        env::var("SESSION_TTL_SECONDS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(86_400)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        if env::var("JWT_EXPIRATION_HOURS").is_err() {
            assert_eq!(JwtConfig::expiration_hours(), 24);
        }
        if env::var("SESSION_COOKIE_NAME").is_err() {
            assert_eq!(SessionConfig::cookie_name(), "session");
        }
        if env::var("SESSION_TTL_SECONDS").is_err() {
            assert_eq!(SessionConfig::ttl_seconds(), 86_400);
        }
    }
}
