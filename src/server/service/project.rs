use bson::oid::ObjectId;

use crate::server::{
    data::{
        collection::{ProjectCollection, SortKey},
        project::ProjectRepository,
    },
    error::store::StoreError,
    model::project::{ProjectFields, ProjectParam},
};

/// Sort requested when listing projects.
///
/// Project documents carry no `start` field, so the key never matches a column and
/// listings come back in creation order.
pub const LIST_SORT: &str = "-start";

pub struct ProjectService<'a> {
    collection: &'a ProjectCollection,
}

impl<'a> ProjectService<'a> {
    pub fn new(collection: &'a ProjectCollection) -> Self {
        Self { collection }
    }

    fn repository(&self) -> ProjectRepository<'a> {
        ProjectRepository::new(self.collection.db())
    }

    /// Stores a new project under a freshly generated identifier
    pub async fn create(&self, fields: ProjectFields) -> Result<ProjectParam, StoreError> {
        let id = ObjectId::new();

        let project = self.repository().create(id, fields).await?;

        tracing::debug!("Created project {} in {}", id, self.collection.name());

        Ok(project)
    }

    /// Gets every project in the collection
    pub async fn get_all(&self) -> Result<Vec<ProjectParam>, StoreError> {
        let projects = self.repository().get_all(&SortKey::parse(LIST_SORT)).await?;

        Ok(projects)
    }

    /// Gets a single project by its hex identifier
    pub async fn get_by_id(&self, id: &str) -> Result<ProjectParam, StoreError> {
        let id = parse_id(id)?;

        self.repository()
            .get_by_id(id)
            .await?
            .ok_or(StoreError::NotFound)
    }

    /// Replaces the whole document stored under the hex identifier
    pub async fn replace(
        &self,
        id: &str,
        fields: ProjectFields,
    ) -> Result<ProjectParam, StoreError> {
        let id = parse_id(id)?;

        self.repository()
            .replace(id, fields)
            .await?
            .ok_or(StoreError::NotFound)
    }

    /// Removes the document stored under the hex identifier
    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let id = parse_id(id)?;

        if !self.repository().delete(id).await? {
            return Err(StoreError::NotFound);
        }

        tracing::debug!("Deleted project {} from {}", id, self.collection.name());

        Ok(())
    }
}

fn parse_id(value: &str) -> Result<ObjectId, StoreError> {
    ObjectId::parse_str(value).map_err(|source| StoreError::InvalidId {
        value: value.to_string(),
        source,
    })
}
