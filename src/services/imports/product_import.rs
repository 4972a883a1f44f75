//! Shift-JIS 상품 CSV 일괄 등록
//!
//! 헤더 없는 `id,product_name,price,remarks,quantity` 레코드를 한 줄에 상품 하나로 등록합니다.
//! `id` 열이 비어 있으면 새 UUID를 발급합니다.
//! 해석할 수 없는 레코드는 경고 로그를 남기고 건너뜁니다.

use std::path::Path;

use chrono::Utc;
use encoding_rs::SHIFT_JIS;
use sea_orm::{ActiveModelTrait, DatabaseConnection};
use uuid::Uuid;

use crate::domain::dto::products::ProductRequest;
use crate::errors::{AppResult, ErrorContext};

/// CSV 한 행
#[derive(Debug)]
pub struct ProductRecord {
    pub id: String,
    pub product: ProductRequest,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
}

/// Shift-JIS 바이트열을 상품 행 목록으로 해석합니다. 두 번째 값은 건너뛴 레코드 수입니다.
pub fn parse_products(raw: &[u8]) -> (Vec<ProductRecord>, usize) {
    let (text, _, had_errors) = SHIFT_JIS.decode(raw);
    if had_errors {
        log::warn!("⚠️ Shift-JIS로 해석할 수 없는 바이트가 있습니다");
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut products = Vec::new();
    let mut skipped = 0;

    for (index, record) in reader.records().enumerate() {
        let line = index + 1;
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                log::warn!("⚠️ {}행 읽기 실패: {}", line, e);
                skipped += 1;
                continue;
            }
        };

        match to_record(&record) {
            Some(product) => products.push(product),
            None => {
                log::warn!("⚠️ {}행을 건너뜁니다: {:?}", line, record);
                skipped += 1;
            }
        }
    }

    (products, skipped)
}

fn to_record(record: &csv::StringRecord) -> Option<ProductRecord> {
    if record.len() < 5 {
        return None;
    }

    let id = match record.get(0)?.trim() {
        "" => Uuid::new_v4().to_string(),
        id if id.chars().count() == 36 => id.to_string(),
        _ => return None,
    };

    Some(ProductRecord {
        id,
        product: ProductRequest {
            product_name: record.get(1)?.trim().to_string(),
            price: record.get(2)?.trim().parse().ok()?,
            remarks: record.get(3)?.trim().to_string(),
            quantity: record.get(4)?.trim().parse().ok()?,
        },
    })
}

pub async fn import_products(db: &DatabaseConnection, path: &Path) -> AppResult<ImportSummary> {
    let raw = std::fs::read(path).with_context(|| format!("CSV 파일을 읽을 수 없습니다 {}", path.display()))?;
    let (products, skipped) = parse_products(&raw);

    let mut summary = ImportSummary {
        imported: 0,
        skipped,
    };

    for ProductRecord { id, product } in products {
        let name = product.product_name.clone();
        match product
            .into_active_model(id, Utc::now())
            .insert(db)
            .await
        {
            Ok(_) => summary.imported += 1,
            Err(e) => {
                log::warn!("⚠️ 상품 등록 실패 {}: {}", name, e);
                summary.skipped += 1;
            }
        }
    }

    log::info!(
        "✅ 상품 등록 완료: {}건 등록, {}건 건너뜀",
        summary.imported,
        summary.skipped
    );
    Ok(summary)
}
