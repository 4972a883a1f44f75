//! 엔티티 공통 조회/수정/삭제 헬퍼
//!
//! 기본 키가 문자열(UUID)인 엔티티라면 어느 것이든 사용할 수 있습니다.
//! 대상이 없으면 `"{label} not found"` 메시지로 [`AppError::NotFound`]를 반환합니다.

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait,
};

use super::query_spec::QuerySpec;
use crate::errors::{AppError, AppResult};

type PrimaryKeyValue<E> = <<E as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

pub fn not_found(label: &str) -> AppError {
    AppError::NotFound(format!("{} not found", label))
}

pub async fn find_all<E, C>(db: &C, spec: QuerySpec<E>) -> AppResult<Vec<E::Model>>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    Ok(spec.apply(E::find()).all(db).await?)
}

pub async fn find_by_id<E, C>(db: &C, id: &str, label: &str) -> AppResult<E::Model>
where
    E: EntityTrait,
    C: ConnectionTrait,
    String: Into<PrimaryKeyValue<E>>,
{
    E::find_by_id(id.to_string())
        .one(db)
        .await?
        .ok_or_else(|| not_found(label))
}

/// 기존 행을 읽어 `apply`로 필드를 덮어쓴 뒤 저장합니다.
pub async fn update_by_id<A, C, F>(
    db: &C,
    id: &str,
    label: &str,
    apply: F,
) -> AppResult<<A::Entity as EntityTrait>::Model>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    C: ConnectionTrait,
    String: Into<PrimaryKeyValue<A::Entity>>,
    F: FnOnce(&mut A),
{
    let mut active = find_by_id::<A::Entity, C>(db, id, label)
        .await?
        .into_active_model();
    apply(&mut active);

    Ok(active.update(db).await?)
}

/// 하드 삭제. 삭제된 행이 없으면 NotFound.
pub async fn delete_by_id<E, C>(db: &C, id: &str, label: &str) -> AppResult<()>
where
    E: EntityTrait,
    C: ConnectionTrait,
    String: Into<PrimaryKeyValue<E>>,
{
    let result = E::delete_by_id(id.to_string()).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(not_found(label));
    }
    Ok(())
}
