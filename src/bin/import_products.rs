//! Shift-JIS 상품 CSV를 읽어 `products` 테이블에 등록하는 배치
//!
//! 열 순서: ID, 상품명, 가격, 비고, 수량 (헤더 없음, ID가 비어 있으면 새로 발급)

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use admin_api_backend::config::profile::bootstrap;
use admin_api_backend::config::DatabaseConfig;
use admin_api_backend::db::Database;
use admin_api_backend::errors::AppResult;
use admin_api_backend::services::imports::{import_products, ImportSummary};
use admin_api_backend::utils::display_terminal::print_batch_boundary;

const BATCH_NAME: &str = "商品CSV取込バッチ";

#[derive(Parser, Debug)]
#[command(name = "import_products", about = "商品CSVを取り込みます")]
struct Args {
    /// 입력 CSV 경로
    #[arg(short, long, default_value = "product.CSV")]
    file: PathBuf,
}

async fn run(file: PathBuf) -> AppResult<ImportSummary> {
    let db = Database::connect(&DatabaseConfig::url(), DatabaseConfig::max_connections()).await?;
    Database::create_tables(&db).await?;
    import_products(&db, &file).await
}

#[actix_web::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    bootstrap();
    print_batch_boundary(BATCH_NAME, true);

    let code = match run(args.file).await {
        Ok(summary) => {
            info!("✅ 상품 {}건 등록, {}건 건너뜀", summary.imported, summary.skipped);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("❌ 상품 CSV 취입 실패: {}", e);
            ExitCode::FAILURE
        }
    };

    print_batch_boundary(BATCH_NAME, false);
    code
}
