//! Project factory for inserting test project documents.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

use crate::factory::helpers::{next_id, next_object_id};

/// Factory for creating test projects with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::project::ProjectFactory;
///
/// let project = ProjectFactory::new(&db)
///     .name("CRM")
///     .task("Golang", &["BACKEND"])
///     .build()
///     .await?;
/// ```
pub struct ProjectFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    description: String,
    tasks: Vec<serde_json::Value>,
}

impl<'a> ProjectFactory<'a> {
    /// Creates a new ProjectFactory with default values.
    ///
    /// Defaults:
    /// - id: next zero padded object id
    /// - name: `"Project {n}"` where n is auto-incremented
    /// - description: `"Description {n}"`
    /// - tasks: empty
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            id: next_object_id(),
            name: format!("Project {}", n),
            description: format!("Description {}", n),
            tasks: Vec::new(),
        }
    }

    /// Sets the object id in hex form.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the project name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the project description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Appends a task with the given tags, preserving insertion order.
    pub fn task(mut self, description: impl Into<String>, tags: &[&str]) -> Self {
        self.tasks.push(json!({
            "description": description.into(),
            "tags": tags,
        }));
        self
    }

    /// Builds and inserts the project document into the database.
    ///
    /// # Returns
    /// - `Ok(entity::project::Model)` - Created project entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::project::Model, DbErr> {
        entity::project::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            tasks: ActiveValue::Set(serde_json::Value::Array(self.tasks)),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a project with default values.
///
/// Shorthand for `ProjectFactory::new(db).build().await`.
pub async fn create_project(db: &DatabaseConnection) -> Result<entity::project::Model, DbErr> {
    ProjectFactory::new(db).build().await
}
