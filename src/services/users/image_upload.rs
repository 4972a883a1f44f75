//! 사용자 프로필 이미지 업로드
//!
//! `multipart/form-data`의 `image` 필드를 읽어 `{ASSETS_DIR}/images/users/` 아래에 저장하고
//! 사용자 레코드의 `image` 컬럼을 저장 경로로 갱신합니다.

use std::path::{Path, PathBuf};

use actix_multipart::Multipart;
use chrono::{DateTime, Utc};
use futures_util::StreamExt;
use sea_orm::ActiveValue::Set;
use sea_orm::DatabaseConnection;

use crate::domain::entities::user;
use crate::errors::{AppError, AppResult, ErrorContext};
use crate::repositories::crud;
use crate::services::exports::ensure_dir;

pub const IMAGE_FIELD: &str = "image";
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;
const ALLOWED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

#[derive(Debug)]
pub struct UploadedImage {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// 허용된 확장자를 소문자로 반환합니다.
pub fn image_extension(filename: &str) -> AppResult<String> {
    let extension = Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    if ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        Ok(extension)
    } else {
        Err(AppError::BadRequest(format!("unsupported image type: {}", filename)))
    }
}

pub fn user_image_path(assets_dir: &Path, user_id: &str, extension: &str, at: DateTime<Utc>) -> PathBuf {
    assets_dir
        .join("images")
        .join("users")
        .join(format!("{}_{}.{}", user_id, at.format("%Y%m%d%H%M%S"), extension))
}

/// `image` 필드만 읽고 나머지 필드는 버립니다.
///
/// # Errors
///
/// * `AppError::BadRequest` - 필드 누락, 빈 파일, 크기 초과, 잘못된 multipart 본문
pub async fn read_image_field(mut payload: Multipart) -> AppResult<UploadedImage> {
    let mut uploaded = None;

    while let Some(field) = payload.next().await {
        let mut field = field.map_err(|e| AppError::BadRequest(e.to_string()))?;

        let (name, filename) = match field.content_disposition() {
            Some(cd) => (
                cd.get_name().map(str::to_string),
                cd.get_filename().map(str::to_string),
            ),
            None => (None, None),
        };

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| AppError::BadRequest(e.to_string()))?;
            if bytes.len() + chunk.len() > MAX_IMAGE_BYTES {
                return Err(AppError::BadRequest("image is too large".to_string()));
            }
            bytes.extend_from_slice(&chunk);
        }

        if name.as_deref() == Some(IMAGE_FIELD) {
            uploaded = Some(UploadedImage {
                filename: filename.unwrap_or_default(),
                bytes,
            });
        }
    }

    match uploaded {
        Some(image) if !image.bytes.is_empty() => Ok(image),
        Some(_) => Err(AppError::BadRequest("image is empty".to_string())),
        None => Err(AppError::BadRequest("image is required".to_string())),
    }
}

/// 사용자 존재를 먼저 확인한 뒤 파일을 쓰고 `image` 경로를 갱신합니다.
///
/// # Errors
///
/// * `AppError::NotFound` - 사용자 없음
/// * `AppError::BadRequest` - 허용되지 않는 확장자
/// * `AppError::InternalError` - 파일 쓰기 실패
pub async fn store_user_image(
    db: &DatabaseConnection,
    assets_dir: &Path,
    user_id: &str,
    image: UploadedImage,
) -> AppResult<user::Model> {
    crud::find_by_id::<user::Entity, _>(db, user_id, "user").await?;
    let extension = image_extension(&image.filename)?;

    let now = Utc::now();
    let path = user_image_path(assets_dir, user_id, &extension, now);
    if let Some(dir) = path.parent() {
        ensure_dir(dir)?;
    }
    std::fs::write(&path, &image.bytes)
        .with_context(|| format!("이미지 저장 실패 {}", path.display()))?;

    let image_path = path.display().to_string();
    let updated = crud::update_by_id::<user::ActiveModel, _, _>(db, user_id, "user", move |model| {
        model.image = Set(image_path);
        model.updated_at = Set(now);
    })
    .await?;

    log::info!("✅ 사용자 이미지 저장: {} -> {}", user_id, path.display());
    Ok(updated)
}
