//! # 목록 조회용 쿼리 명세
//!
//! 검색 파라미터 구조체는 [`QuerySpec`]에 조건을 하나씩 기술하고,
//! [`QuerySpec::apply`]가 그 목록을 sea-orm `Select`에 해석해 붙입니다.
//!
//! 모든 조건 생성 메서드는 값이 비어 있으면(`""` 또는 파싱 실패) 아무것도 추가하지 않습니다.
//! 범위 조건은 `_from` → `>`, `_to` → `<` 로 양 끝을 포함하지 않습니다.
//!
//! ```rust,ignore
//! let spec = QuerySpec::<todo::Entity>::new()
//!     .like(todo::Column::Title, &params.title)
//!     .eq(todo::Column::Status, text(&params.status))
//!     .paginate(&params.offset, &params.limit);
//!
//! let todos = spec.apply(todo::Entity::find()).all(&db).await?;
//! ```

use chrono::{DateTime, Utc};
use sea_orm::sea_query::SimpleExpr;
use sea_orm::{ColumnTrait, EntityTrait, Order, QueryFilter, QueryOrder, QuerySelect, Select, Value};

/// 단일 WHERE 조건 기술자
#[derive(Debug, Clone)]
pub enum Predicate<C> {
    /// `column = value`
    Eq(C, Value),
    /// `column LIKE %value%`
    Like(C, String),
    /// `column > value`
    Gt(C, Value),
    /// `column < value`
    Lt(C, Value),
}

impl<C: ColumnTrait> Predicate<C> {
    fn into_expr(self) -> SimpleExpr {
        match self {
            Predicate::Eq(column, value) => column.eq(value),
            Predicate::Like(column, needle) => column.contains(needle),
            Predicate::Gt(column, value) => column.gt(value),
            Predicate::Lt(column, value) => column.lt(value),
        }
    }
}

#[derive(Debug, Clone)]
pub struct QuerySpec<E: EntityTrait> {
    predicates: Vec<Predicate<E::Column>>,
    order: Option<(E::Column, Order)>,
    offset: Option<u64>,
    limit: Option<u64>,
}

impl<E: EntityTrait> Default for QuerySpec<E> {
    fn default() -> Self {
        Self {
            predicates: Vec::new(),
            order: None,
            offset: None,
            limit: None,
        }
    }
}

impl<E: EntityTrait> QuerySpec<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq<V: Into<Value>>(mut self, column: E::Column, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.predicates.push(Predicate::Eq(column, value.into()));
        }
        self
    }

    pub fn like(mut self, column: E::Column, value: &str) -> Self {
        if !value.is_empty() {
            self.predicates.push(Predicate::Like(column, value.to_string()));
        }
        self
    }

    pub fn gt<V: Into<Value>>(mut self, column: E::Column, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.predicates.push(Predicate::Gt(column, value.into()));
        }
        self
    }

    pub fn lt<V: Into<Value>>(mut self, column: E::Column, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.predicates.push(Predicate::Lt(column, value.into()));
        }
        self
    }

    pub fn order_by_desc(mut self, column: E::Column) -> Self {
        self.order = Some((column, Order::Desc));
        self
    }

    pub fn paginate(mut self, offset: &str, limit: &str) -> Self {
        self.offset = offset.parse().ok();
        self.limit = limit.parse().ok();
        self
    }

    pub fn predicates(&self) -> &[Predicate<E::Column>] {
        &self.predicates
    }

    /// 명세를 기본 쿼리에 적용합니다. 이 단계에서는 실패하지 않습니다.
    pub fn apply(self, select: Select<E>) -> Select<E> {
        let mut select = self
            .predicates
            .into_iter()
            .fold(select, |select, predicate| select.filter(predicate.into_expr()));

        if let Some((column, order)) = self.order {
            select = select.order_by(column, order);
        }

        select.offset(self.offset).limit(self.limit)
    }
}

// 문자열 파라미터 → 컬럼 값 변환. 비어 있거나 해석할 수 없으면 None.

pub fn text(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

pub fn int(value: &str) -> Option<i64> {
    value.parse().ok()
}

pub fn flag(value: &str) -> Option<bool> {
    match value {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

pub fn datetime(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{coupon, todo};
    use sea_orm::{DbBackend, QueryTrait};

    fn todo_spec(title: &str, status: &str) -> QuerySpec<todo::Entity> {
        QuerySpec::new()
            .like(todo::Column::Title, title)
            .eq(todo::Column::Status, text(status))
            .paginate("0", "10")
    }

    #[test]
    fn test_empty_fields_add_no_predicates() {
        let spec = todo_spec("", "");
        assert!(spec.predicates().is_empty());

        let sql = spec
            .apply(todo::Entity::find())
            .build(DbBackend::MySql)
            .to_string();
        assert!(!sql.contains("WHERE"));
        assert!(sql.contains("LIMIT 10"));
        assert!(sql.contains("OFFSET 0"));
    }

    #[test]
    fn test_each_non_empty_field_adds_one_predicate() {
        let spec = todo_spec("buy", "");
        assert!(matches!(
            spec.predicates(),
            [Predicate::Like(_, needle)] if needle == "buy"
        ));

        let spec = todo_spec("buy", "done");
        assert_eq!(spec.predicates().len(), 2);

        let sql = spec
            .apply(todo::Entity::find())
            .build(DbBackend::MySql)
            .to_string();
        assert!(sql.contains("LIKE '%buy%'"));
        assert!(sql.contains("= 'done'"));
    }

    #[test]
    fn test_range_bounds_are_exclusive() {
        let spec = QuerySpec::<coupon::Entity>::new()
            .gt(coupon::Column::UseStartAt, datetime("2022-01-01T00:00:00+09:00"))
            .lt(coupon::Column::UseStartAt, datetime("2022-12-31T00:00:00+09:00"))
            .eq(coupon::Column::IsPublic, flag("true"));

        let sql = spec
            .apply(coupon::Entity::find())
            .build(DbBackend::MySql)
            .to_string();
        assert!(sql.contains("`use_start_at` >"));
        assert!(sql.contains("`use_start_at` <"));
        assert!(!sql.contains(">="));
        assert!(!sql.contains("<="));
    }

    #[test]
    fn test_unparseable_values_are_ignored() {
        let spec = QuerySpec::<coupon::Entity>::new()
            .eq(coupon::Column::DiscountAmount, int("abc"))
            .eq(coupon::Column::IsPremium, flag(""))
            .gt(coupon::Column::PublicEndAt, datetime(""))
            .paginate("", "");
        assert!(spec.predicates().is_empty());

        let sql = spec
            .apply(coupon::Entity::find())
            .build(DbBackend::MySql)
            .to_string();
        assert!(!sql.contains("LIMIT"));
    }

    #[test]
    fn test_order_by_desc() {
        let sql = QuerySpec::<todo::Entity>::new()
            .order_by_desc(todo::Column::CreatedAt)
            .apply(todo::Entity::find())
            .build(DbBackend::MySql)
            .to_string();
        assert!(sql.contains("ORDER BY `todos`.`created_at` DESC"));
    }
}
