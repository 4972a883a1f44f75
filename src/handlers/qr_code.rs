use actix_web::{get, web, HttpResponse};

use crate::core::AppState;
use crate::domain::dto::FileOutputResponse;
use crate::errors::AppError;
use crate::services::exports::qr_code::generate_qrcode;

/// `QRCODE_CONTENT`를 담은 QR 코드 PNG를 생성합니다.
#[get("/qrcode")]
pub async fn generate(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let settings = state.settings();
    let path = generate_qrcode(&settings.assets_dir, &settings.qrcode_content)?;
    Ok(HttpResponse::Ok().json(FileOutputResponse::new("QRコードを生成しました", &path)))
}
