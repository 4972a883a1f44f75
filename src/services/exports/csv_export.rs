//! 주문/사용자 목록 CSV 내보내기

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Datelike, Utc};
use sea_orm::{DatabaseConnection, EntityTrait};

use super::ensure_dir;
use crate::domain::entities::{order, user};
use crate::errors::{AppResult, ErrorContext};
use crate::repositories::users::UserRepository;
use crate::utils::string_utils::file_timestamp;

const ORDER_HEADER: [&str; 8] = [
    "注文ID",
    "ユーザID",
    "数量",
    "合計金額",
    "注文ステータス",
    "注文備考",
    "作成日時",
    "更新日時",
];

const USER_HEADER: [&str; 5] = ["ID", "LastName", "FirstName", "Email", "Age"];

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn write_orders<W: Write>(writer: W, orders: &[order::Model]) -> AppResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(ORDER_HEADER).context("CSV 헤더 쓰기 실패")?;

    for order in orders {
        csv.write_record([
            order.id.clone(),
            order.user_id.clone(),
            order.quantity.to_string(),
            order.total_price.to_string(),
            order.order_status.clone(),
            order.remarks.clone(),
            order.created_at.format(DATETIME_FORMAT).to_string(),
            order.updated_at.format(DATETIME_FORMAT).to_string(),
        ])
        .context("CSV 행 쓰기 실패")?;
    }

    csv.flush().context("CSV flush 실패")?;
    Ok(())
}

pub fn write_users<W: Write>(writer: W, users: &[user::Model]) -> AppResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(USER_HEADER).context("CSV 헤더 쓰기 실패")?;

    for user in users {
        csv.write_record([
            user.id.clone(),
            user.last_name.clone(),
            user.first_name.clone(),
            user.email.clone(),
            user.age.to_string(),
        ])
        .context("CSV 행 쓰기 실패")?;
    }

    csv.flush().context("CSV flush 실패")?;
    Ok(())
}

/// `{assets}/csv/orders/{YYYY}/{M}/{D}/{YYYYMMDD}_orders.csv`
pub fn order_export_path(assets_dir: &Path, at: &DateTime<Utc>) -> PathBuf {
    assets_dir
        .join("csv/orders")
        .join(at.year().to_string())
        .join(at.month().to_string())
        .join(at.day().to_string())
        .join(format!("{}_orders.csv", at.format("%Y%m%d")))
}

/// `{assets}/csv/users/{YYYYMMDDhhmmss}_users.csv`
pub fn user_export_path(assets_dir: &Path, at: &DateTime<Utc>) -> PathBuf {
    assets_dir
        .join("csv/users")
        .join(format!("{}_users.csv", file_timestamp(at)))
}

pub async fn export_orders(db: &DatabaseConnection, assets_dir: &Path) -> AppResult<PathBuf> {
    let orders = order::Entity::find().all(db).await?;
    let path = order_export_path(assets_dir, &Utc::now());
    write_to_file(&path, |file| write_orders(file, &orders))?;

    log::info!("✅ 주문 CSV 출력 완료: {} ({}건)", path.display(), orders.len());
    Ok(path)
}

pub async fn export_users(db: &DatabaseConnection, assets_dir: &Path) -> AppResult<PathBuf> {
    let users = UserRepository::new(db).find_all_ordered().await?;
    let path = user_export_path(assets_dir, &Utc::now());
    write_to_file(&path, |file| write_users(file, &users))?;

    log::info!("✅ 사용자 CSV 출력 완료: {} ({}건)", path.display(), users.len());
    Ok(path)
}

fn write_to_file<F>(path: &Path, write: F) -> AppResult<()>
where
    F: FnOnce(std::fs::File) -> AppResult<()>,
{
    if let Some(dir) = path.parent() {
        ensure_dir(dir)?;
    }
    let file = std::fs::File::create(path).with_context(|| format!("파일 생성 실패 {}", path.display()))?;
    write(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_order() -> order::Model {
        let at = Utc.with_ymd_and_hms(2022, 3, 4, 5, 6, 7).unwrap();
        order::Model {
            id: "order-1".to_string(),
            user_id: "user-1".to_string(),
            quantity: 3,
            total_price: 200,
            order_status: "new".to_string(),
            remarks: "gift, wrap".to_string(),
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn test_write_orders() {
        let mut out = Vec::new();
        write_orders(&mut out, &[sample_order()]).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "注文ID,ユーザID,数量,合計金額,注文ステータス,注文備考,作成日時,更新日時");
        assert_eq!(
            lines[1],
            "order-1,user-1,3,200,new,\"gift, wrap\",2022-03-04 05:06:07,2022-03-04 05:06:07"
        );
    }

    #[test]
    fn test_write_users_header_only() {
        let mut out = Vec::new();
        write_users(&mut out, &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "ID,LastName,FirstName,Email,Age\n");
    }

    #[test]
    fn test_export_paths() {
        let at = Utc.with_ymd_and_hms(2022, 3, 4, 5, 6, 7).unwrap();
        assert_eq!(
            order_export_path(Path::new("assets"), &at),
            PathBuf::from("assets/csv/orders/2022/3/4/20220304_orders.csv")
        );
        assert_eq!(
            user_export_path(Path::new("assets"), &at),
            PathBuf::from("assets/csv/users/20220304050607_users.csv")
        );
    }
}
