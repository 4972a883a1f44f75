//! `new` 상태로 남은 주문과 그 상세를 일괄 취소하는 배치
//!
//! ```bash
//! PROFILE=prod cargo run --bin order_cancel
//! ```

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use admin_api_backend::config::profile::bootstrap;
use admin_api_backend::config::DatabaseConfig;
use admin_api_backend::db::Database;
use admin_api_backend::errors::AppResult;
use admin_api_backend::repositories::orders::{CancelSummary, OrderRepository};
use admin_api_backend::utils::display_terminal::print_batch_boundary;

const BATCH_NAME: &str = "注文キャンセルバッチ";

#[derive(Parser, Debug)]
#[command(name = "order_cancel", about = "未処理(new)の注文をキャンセルします")]
struct Args {}

async fn run() -> AppResult<CancelSummary> {
    let db = Database::connect(&DatabaseConfig::url(), DatabaseConfig::max_connections()).await?;
    OrderRepository::new(&db).cancel_new_orders().await
}

#[actix_web::main]
async fn main() -> ExitCode {
    let _args = Args::parse();
    bootstrap();
    print_batch_boundary(BATCH_NAME, true);

    let code = match run().await {
        Ok(summary) => {
            info!("✅ 주문 {}건, 주문 상세 {}건 취소", summary.orders, summary.details);
            println!("キャンセルした注文: {}件", summary.orders);
            println!("キャンセルした注文詳細: {}件", summary.details);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("❌ 주문 취소 배치 실패: {}", e);
            ExitCode::FAILURE
        }
    };

    print_batch_boundary(BATCH_NAME, false);
    code
}
