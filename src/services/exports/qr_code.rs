//! QR 코드 PNG 생성 (오류 정정 레벨 M, 최소 256×256)

use std::path::{Path, PathBuf};

use image::Luma;
use qrcode::{EcLevel, QrCode};

use super::ensure_dir;
use crate::errors::{AppResult, ErrorContext};

const MIN_SIZE: u32 = 256;

pub fn qrcode_path(assets_dir: &Path) -> PathBuf {
    assets_dir.join("qrcode").join("qrcode.png")
}

pub fn generate_qrcode(assets_dir: &Path, content: &str) -> AppResult<PathBuf> {
    let code = QrCode::with_error_correction_level(content.as_bytes(), EcLevel::M)
        .context("QR 코드 인코딩 실패")?;
    let image = code
        .render::<Luma<u8>>()
        .min_dimensions(MIN_SIZE, MIN_SIZE)
        .build();

    let path = qrcode_path(assets_dir);
    if let Some(dir) = path.parent() {
        ensure_dir(dir)?;
    }
    image
        .save(&path)
        .with_context(|| format!("QR 코드 저장 실패 {}", path.display()))?;

    log::info!("✅ QR 코드 생성: {}", path.display());
    Ok(path)
}
