use bson::oid::ObjectId;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::collection::SortKey,
    model::project::{ProjectFields, ProjectParam},
};

pub struct ProjectRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new project document under the given identifier
    pub async fn create(&self, id: ObjectId, fields: ProjectFields) -> Result<ProjectParam, DbErr> {
        let project = entity::project::ActiveModel {
            id: ActiveValue::Set(id.to_hex()),
            name: ActiveValue::Set(fields.name.clone()),
            description: ActiveValue::Set(fields.description.clone()),
            tasks: ActiveValue::Set(fields.tasks_json()?),
        }
        .insert(self.db)
        .await?;

        ProjectParam::from_entity(project)
    }

    /// Gets every project document.
    ///
    /// Sorts by the key's column when documents carry that field. Otherwise the key is
    /// ignored, as a document store does for an absent field. Ties and unsortable keys
    /// fall back to ascending object id, which is creation order.
    pub async fn get_all(&self, sort: &SortKey) -> Result<Vec<ProjectParam>, DbErr> {
        let mut query = entity::prelude::Project::find();

        match sort.column() {
            Some(column) => query = query.order_by(column, sort.order()),
            None => tracing::debug!("Ignoring sort on unknown field '{}'", sort.field()),
        }

        query
            .order_by_asc(entity::project::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(ProjectParam::from_entity)
            .collect()
    }

    /// Gets a project document by identifier
    pub async fn get_by_id(&self, id: ObjectId) -> Result<Option<ProjectParam>, DbErr> {
        entity::prelude::Project::find_by_id(id.to_hex())
            .one(self.db)
            .await?
            .map(ProjectParam::from_entity)
            .transpose()
    }

    /// Replaces every field of a project document.
    ///
    /// Returns `None` when no document has the identifier.
    pub async fn replace(
        &self,
        id: ObjectId,
        fields: ProjectFields,
    ) -> Result<Option<ProjectParam>, DbErr> {
        let result = entity::prelude::Project::update_many()
            .set(entity::project::ActiveModel {
                id: ActiveValue::NotSet,
                name: ActiveValue::Set(fields.name.clone()),
                description: ActiveValue::Set(fields.description.clone()),
                tasks: ActiveValue::Set(fields.tasks_json()?),
            })
            .filter(entity::project::Column::Id.eq(id.to_hex()))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        Ok(Some(ProjectParam::from_fields(id, fields)))
    }

    /// Deletes a project document, returning whether one was removed
    pub async fn delete(&self, id: ObjectId) -> Result<bool, DbErr> {
        let result = entity::prelude::Project::delete_by_id(id.to_hex())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
