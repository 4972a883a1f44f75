//! # 요청/응답 DTO
//!
//! 리소스별 요청 본문, 검색 파라미터, 응답 구조를 정의합니다.
//!
//! * 요청 본문은 `#[serde(default)]`로 누락 필드를 빈 값으로 받고, 필수 여부는 `validator`가 판단합니다.
//! * 검색 파라미터는 모두 문자열이며 `""`는 미지정입니다. `to_spec()`으로 [`QuerySpec`]을 만듭니다.
//! * 목록 응답은 `{"total": n, "<resource>": [...]}` 형식입니다.
//!
//! [`QuerySpec`]: crate::repositories::query_spec::QuerySpec

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::validation;

pub mod auth;
pub mod coupons;
pub mod epics;
pub mod issues;
pub mod milestones;
pub mod orders;
pub mod products;
pub mod projects;
pub mod subscription_members;
pub mod todos;
pub mod user_groups;
pub mod users;

/// 검색 파라미터 공통 페이지네이션 (`offset` 기본 0, `limit` 기본 10)
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct Pagination {
    #[validate(custom(function = "validation::non_negative"))]
    pub offset: String,
    #[validate(custom(function = "validation::non_negative"))]
    pub limit: String,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            offset: "0".to_string(),
            limit: "10".to_string(),
        }
    }
}

/// `{"total": n, "<key>": [...]}` 목록 응답
#[derive(Debug)]
pub struct ListResponse<T> {
    key: &'static str,
    items: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(key: &'static str, items: Vec<T>) -> Self {
        Self { key, items }
    }
}

impl<T: Serialize> Serialize for ListResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("total", &self.items.len())?;
        map.serialize_entry(self.key, &self.items)?;
        map.end()
    }
}

/// 파일 산출물 생성 결과
#[derive(Debug, Serialize)]
pub struct FileOutputResponse {
    pub message: &'static str,
    pub path: String,
}

impl FileOutputResponse {
    pub fn new(message: &'static str, path: &std::path::Path) -> Self {
        Self {
            message,
            path: path.display().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_shape() {
        let body = serde_json::to_value(ListResponse::new("todos", vec!["a", "b"])).unwrap();
        assert_eq!(body, serde_json::json!({ "total": 2, "todos": ["a", "b"] }));
    }

    #[test]
    fn test_pagination_defaults_from_empty_query() {
        let page: Pagination = serde_json::from_str("{}").unwrap();
        assert_eq!(page.offset, "0");
        assert_eq!(page.limit, "10");
        assert!(page.validate().is_ok());
    }

    #[test]
    fn test_pagination_rejects_negative_and_fractional_values() {
        let page: Pagination = serde_json::from_str(r#"{"offset":"-1","limit":"5.5"}"#).unwrap();
        let details = crate::errors::validation::to_error_details(&page.validate().unwrap_err());
        let messages: Vec<_> = details.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(messages, vec!["limitは不正です", "offsetは不正です"]);
    }
}
