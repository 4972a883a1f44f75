use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::domain::dto::projects::ProjectResponse;
use crate::domain::entities::{epic, project};
use crate::errors::AppResult;
use crate::repositories::crud;

pub struct ProjectRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// 프로젝트 상세 (소속 에픽 포함)
    pub async fn find_with_epics(&self, id: &str) -> AppResult<ProjectResponse> {
        let project = crud::find_by_id::<project::Entity, _>(self.db, id, "project").await?;
        let epics = epic::Entity::find()
            .filter(epic::Column::ProjectId.eq(project.id.as_str()))
            .all(self.db)
            .await?;

        Ok(ProjectResponse { project, epics })
    }
}
