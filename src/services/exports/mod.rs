//! 파일 산출물 생성 (CSV, PDF 영수증, QR 코드)
//!
//! 모든 산출물은 `ASSETS_DIR` 하위에 기록되며, 필요한 디렉터리는 자동으로 생성됩니다.

pub mod csv_export;
pub mod pdf_receipt;
pub mod qr_code;

use std::path::Path;

use crate::errors::{AppResult, ErrorContext};

pub(crate) fn ensure_dir(dir: &Path) -> AppResult<()> {
    if !dir.exists() {
        std::fs::create_dir_all(dir).with_context(|| format!("디렉터리 생성 실패 {}", dir.display()))?;
        log::info!("디렉터리를 생성했습니다: {}", dir.display());
    }
    Ok(())
}
