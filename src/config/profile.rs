//! `.env` 프로필 로딩과 로거 초기화
//!
//! 서버와 배치 실행 파일이 시작할 때 공통으로 호출합니다.
//!
//! | PROFILE | 파일 |
//! |---------|------|
//! | `dev` (기본값) | `.env.dev` |
//! | `test` | `.env.test` |
//! | `prod` | `.env.prod` |
//! | 기타 | `.env` |
//!
//! 프로필 파일이 없으면 `.env`로 대체합니다.

use std::env;

use env_logger::Env;

pub fn profile_file(profile: &str) -> Option<&'static str> {
    match profile {
        "dev" => Some(".env.dev"),
        "test" => Some(".env.test"),
        "prod" => Some(".env.prod"),
        _ => None,
    }
}

/// 환경별 `.env` 파일을 로드하고, 실제로 로드한 파일 이름을 돌려줍니다.
///
/// 로거 초기화 전에 호출되므로 결과는 호출 측에서 로그로 남깁니다.
pub fn load_env_file() -> Option<String> {
    let profile = env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    if let Some(file) = profile_file(&profile) {
        if dotenv::from_filename(file).is_ok() {
            return Some(file.to_string());
        }
    }

    dotenv::dotenv().ok().map(|path| path.display().to_string())
}

/// `RUST_LOG`가 없으면 `info,actix_web=debug`
pub fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// 프로필 로딩 + 로거 초기화 + 로딩 결과 로그
pub fn bootstrap() {
    let loaded = load_env_file();
    init_logging();

    match loaded {
        Some(file) => log::info!("✅ 환경 파일 로드: {}", file),
        None => log::warn!("⚠️ 환경 파일이 없습니다. 환경 변수와 기본값을 사용합니다"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_file_mapping() {
        assert_eq!(profile_file("dev"), Some(".env.dev"));
        assert_eq!(profile_file("test"), Some(".env.test"));
        assert_eq!(profile_file("prod"), Some(".env.prod"));
        assert_eq!(profile_file("staging"), None);
    }
}
