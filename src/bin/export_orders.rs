//! 전체 주문을 날짜별 디렉터리에 CSV로 출력하는 배치

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use admin_api_backend::config::profile::bootstrap;
use admin_api_backend::config::{AssetConfig, DatabaseConfig};
use admin_api_backend::db::Database;
use admin_api_backend::errors::AppResult;
use admin_api_backend::services::exports::csv_export;
use admin_api_backend::utils::display_terminal::print_batch_boundary;

const BATCH_NAME: &str = "注文CSV出力バッチ";

#[derive(Parser, Debug)]
#[command(name = "export_orders", about = "注文一覧をCSVに出力します")]
struct Args {
    /// 출력 루트 디렉터리 (기본값: ASSETS_DIR)
    #[arg(long)]
    assets_dir: Option<PathBuf>,
}

async fn run(assets_dir: PathBuf) -> AppResult<PathBuf> {
    let db = Database::connect(&DatabaseConfig::url(), DatabaseConfig::max_connections()).await?;
    csv_export::export_orders(&db, &assets_dir).await
}

#[actix_web::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    bootstrap();
    print_batch_boundary(BATCH_NAME, true);

    let assets_dir = args.assets_dir.unwrap_or_else(AssetConfig::assets_dir);

    let code = match run(assets_dir).await {
        Ok(path) => {
            info!("✅ 출력 파일: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("❌ 주문 CSV 출력 실패: {}", e);
            ExitCode::FAILURE
        }
    };

    print_batch_boundary(BATCH_NAME, false);
    code
}
