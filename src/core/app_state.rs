use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::caching::SessionStore;
use crate::config::AppSettings;
use crate::services::auth::TokenService;

/// 핸들러와 미들웨어가 공유하는 상태
///
/// 내부 필드는 모두 `Clone` 비용이 낮으므로 워커마다 복제해도 됩니다.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    sessions: Arc<dyn SessionStore>,
    tokens: TokenService,
    settings: Arc<AppSettings>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, sessions: Arc<dyn SessionStore>, settings: AppSettings) -> Self {
        let tokens = TokenService::new(settings.jwt_secret.clone(), settings.jwt_expiration_hours);

        Self {
            db,
            sessions,
            tokens,
            settings: Arc::new(settings),
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn sessions(&self) -> &dyn SessionStore {
        self.sessions.as_ref()
    }

    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }
}

#[cfg(test)]
pub mod testing {
    //! 핸들러 테스트용 상태 구성

    use std::path::PathBuf;
    use std::sync::Arc;

    use super::AppState;
    use crate::caching::session_store::MemorySessionStore;
    use crate::config::AppSettings;
    use crate::db::Database;

    pub fn test_settings(assets_dir: PathBuf) -> AppSettings {
        AppSettings {
            jwt_secret: "test-secret".to_string(),
            jwt_expiration_hours: 1,
            bcrypt_cost: 4,
            session_cookie_name: "session".to_string(),
            session_ttl_seconds: 60,
            pdf_font_path: assets_dir.join("fonts/missing.ttf"),
            receipt_template_path: assets_dir.join("template.pdf"),
            assets_dir,
            qrcode_content: "https://example.com".to_string(),
        }
    }

    /// 인메모리 SQLite + 인메모리 세션 저장소로 상태를 만듭니다.
    pub async fn test_state() -> (AppState, Arc<MemorySessionStore>) {
        let sessions = Arc::new(MemorySessionStore::default());
        let assets_dir = std::env::temp_dir().join(format!("admin-api-test-{}", uuid::Uuid::new_v4()));
        let state = AppState::new(
            Database::in_memory().await,
            sessions.clone(),
            test_settings(assets_dir),
        );
        (state, sessions)
    }
}
