//! `validator` 검증 결과를 응답용 필드 메시지 목록으로 변환합니다.
//!
//! 필드명은 정적 라벨 테이블을 통해 일본어 라벨로 변환되고,
//! `required` 코드는 "必須", 그 외의 코드는 "不正" 메시지가 됩니다.

use std::collections::HashMap;

use chrono::DateTime;
use once_cell::sync::Lazy;
use uuid::Uuid;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

use super::errors::{AppError, ErrorDetail};

static FIELD_LABELS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("body", "本文"),
        ("title", "タイトル"),
        ("user_id", "ユーザーID"),
        ("status", "ステータス"),
        ("age", "年齢"),
        ("password", "パスワード"),
        ("email", "メールアドレス"),
        ("password_confirmation", "パスワード確認"),
        ("first_name", "名"),
        ("last_name", "姓"),
        ("order_status", "注文ステータス"),
        ("order_id", "注文ID"),
        ("remarks", "備考"),
        ("quantity", "数量"),
        ("total_price", "合計金額"),
        ("created_at", "作成日時"),
        ("updated_at", "更新日時"),
    ])
});

/// 필드명을 라벨로 변환합니다. 테이블에 없으면 필드명을 그대로 사용합니다.
pub fn field_label(field: &str) -> &str {
    FIELD_LABELS.get(field).copied().unwrap_or(field)
}

fn detail_for(field: &str, errors: &[ValidationError]) -> ErrorDetail {
    let label = field_label(field);
    let message = if errors.iter().any(|e| e.code == "required") {
        format!("{}は必須です", label)
    } else {
        format!("{}は不正です", label)
    };

    ErrorDetail {
        attribute: label.to_string(),
        message,
    }
}

fn collect(errors: &ValidationErrors, path: &str, out: &mut Vec<(String, ErrorDetail)>) {
    for (field, kind) in errors.errors() {
        let key = if path.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", path, field)
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                out.push((key, detail_for(field, field_errors)));
            }
            ValidationErrorsKind::Struct(nested) => collect(nested, &key, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect(nested, &format!("{}[{}]", key, index), out);
                }
            }
        }
    }
}

/// 검증 에러를 필드 경로 순으로 정렬된 상세 목록으로 변환합니다.
pub fn to_error_details(errors: &ValidationErrors) -> Vec<ErrorDetail> {
    let mut collected = Vec::new();
    collect(errors, "", &mut collected);
    collected.sort_by(|a, b| a.0.cmp(&b.0));
    collected.into_iter().map(|(_, detail)| detail).collect()
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::InvalidParameters(to_error_details(&errors))
    }
}

// 이하 문자열 필드용 커스텀 검증기. 빈 문자열은 "미지정"으로 간주하여 통과시킵니다.

pub fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// 정수만 허용합니다. 조회 조건은 정수 컬럼에만 쓰이므로 소수/지수 표기는 거부합니다.
pub fn numeric(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.parse::<i64>().is_ok() {
        return Ok(());
    }
    Err(ValidationError::new("numeric"))
}

/// `offset` / `limit` 용 0 이상의 정수
pub fn non_negative(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.parse::<u64>().is_ok() {
        return Ok(());
    }
    Err(ValidationError::new("numeric"))
}

pub fn boolean(value: &str) -> Result<(), ValidationError> {
    match value {
        "" | "true" | "false" | "1" | "0" => Ok(()),
        _ => Err(ValidationError::new("boolean")),
    }
}

pub fn datetime(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || DateTime::parse_from_rfc3339(value).is_ok() {
        return Ok(());
    }
    Err(ValidationError::new("datetime"))
}

pub fn uuid4(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    match Uuid::parse_str(value) {
        Ok(id) if id.get_version_num() == 4 => Ok(()),
        _ => Err(ValidationError::new("uuid4")),
    }
}

/// 36자 고정 길이 ID
pub fn id_length(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.chars().count() == 36 {
        return Ok(());
    }
    Err(ValidationError::new("len"))
}

fn one_of(value: &str, allowed: &[&str], code: &'static str) -> Result<(), ValidationError> {
    if value.is_empty() || allowed.contains(&value) {
        return Ok(());
    }
    Err(ValidationError::new(code))
}

pub fn todo_status(value: &str) -> Result<(), ValidationError> {
    one_of(value, crate::domain::models::status::TODO_STATUSES, "oneof")
}

pub fn order_status(value: &str) -> Result<(), ValidationError> {
    one_of(value, crate::domain::models::status::ORDER_STATUSES, "oneof")
}

pub fn order_detail_status(value: &str) -> Result<(), ValidationError> {
    one_of(value, crate::domain::models::status::ORDER_DETAIL_STATUSES, "oneof")
}

pub fn member_status(value: &str) -> Result<(), ValidationError> {
    one_of(value, crate::domain::models::status::MEMBER_STATUSES, "oneof")
}

pub fn required_todo_status(value: &str) -> Result<(), ValidationError> {
    required(value)?;
    todo_status(value)
}

pub fn required_order_status(value: &str) -> Result<(), ValidationError> {
    required(value)?;
    order_status(value)
}

pub fn required_member_status(value: &str) -> Result<(), ValidationError> {
    required(value)?;
    member_status(value)
}

pub fn required_uuid4(value: &str) -> Result<(), ValidationError> {
    required(value)?;
    uuid4(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Debug, Validate)]
    struct TodoLike {
        #[validate(custom(function = "required"), length(max = 64))]
        title: String,
        #[validate(custom(function = "required"))]
        body: String,
        #[validate(custom(function = "numeric"))]
        priority: String,
    }

    #[test]
    fn test_required_and_invalid_messages() {
        let input = TodoLike {
            title: "a".repeat(65),
            body: String::new(),
            priority: "high".to_string(),
        };

        let details = to_error_details(&input.validate().unwrap_err());
        assert_eq!(
            details,
            vec![
                ErrorDetail {
                    attribute: "本文".to_string(),
                    message: "本文は必須です".to_string(),
                },
                ErrorDetail {
                    attribute: "priority".to_string(),
                    message: "priorityは不正です".to_string(),
                },
                ErrorDetail {
                    attribute: "タイトル".to_string(),
                    message: "タイトルは不正です".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_empty_values_pass_optional_validators() {
        assert!(numeric("").is_ok());
        assert!(boolean("").is_ok());
        assert!(datetime("").is_ok());
        assert!(uuid4("").is_ok());
        assert!(order_status("").is_ok());
    }

    #[test]
    fn test_value_validators() {
        assert!(numeric("12").is_ok());
        assert!(numeric("-3").is_ok());
        assert!(numeric("12.5").is_err());
        assert!(numeric("1e3").is_err());
        assert!(numeric("NaN").is_err());
        assert!(numeric("12a").is_err());
        assert!(non_negative("0").is_ok());
        assert!(non_negative("-1").is_err());
        assert!(non_negative("5.5").is_err());
        assert!(boolean("true").is_ok());
        assert!(boolean("yes").is_err());
        assert!(datetime("2022-01-01T00:00:00+09:00").is_ok());
        assert!(datetime("2022-01-01").is_err());
        assert!(uuid4(&Uuid::new_v4().to_string()).is_ok());
        assert!(uuid4("not-a-uuid").is_err());
        assert!(order_status("paid").is_ok());
        assert!(order_status("shipped").is_err());
        assert!(required("  ").is_err());
        assert!(id_length("").is_ok());
        assert!(id_length("short").is_err());
    }

    #[test]
    fn test_unmapped_field_uses_raw_name() {
        assert_eq!(field_label("discount_rate"), "discount_rate");
        assert_eq!(field_label("email"), "メールアドレス");
    }
}
