//! Project domain models and parameters.
//!
//! These models are the boundary between the data layer and the service/controller
//! layers. Entity models never leave the data layer and DTOs never enter it.

use bson::oid::ObjectId;
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};

use crate::model::project::{ProjectDto, TaskDto};

/// A stored project document.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectParam {
    /// Store-generated identifier, immutable after creation.
    pub id: ObjectId,
    pub name: String,
    pub description: String,
    /// Tasks in insertion order.
    pub tasks: Vec<TaskParam>,
}

/// A task nested inside a project document.
///
/// Also the shape of each element of the `tasks` JSON column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskParam {
    pub description: String,
    pub tags: Vec<String>,
}

/// Every field of a project except its identifier.
///
/// Used both for inserts and for whole-document replacement.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectFields {
    pub name: String,
    pub description: String,
    pub tasks: Vec<TaskParam>,
}

impl ProjectFields {
    /// Converts a request body to document fields, dropping any client supplied id.
    pub fn from_dto(dto: ProjectDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            tasks: dto.tasks.into_iter().map(TaskParam::from_dto).collect(),
        }
    }

    /// Serializes the task list into the value stored in the `tasks` column.
    pub fn tasks_json(&self) -> Result<serde_json::Value, DbErr> {
        serde_json::to_value(&self.tasks)
            .map_err(|e| DbErr::Custom(format!("Failed to serialize tasks: {}", e)))
    }
}

impl ProjectParam {
    /// Attaches an identifier to a set of document fields.
    pub fn from_fields(id: ObjectId, fields: ProjectFields) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            tasks: fields.tasks,
        }
    }

    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(ProjectParam)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored id is not an object id or tasks are malformed
    pub fn from_entity(entity: entity::project::Model) -> Result<Self, DbErr> {
        let id = ObjectId::parse_str(&entity.id)
            .map_err(|e| DbErr::Custom(format!("Failed to parse project id: {}", e)))?;

        let tasks = serde_json::from_value::<Vec<TaskParam>>(entity.tasks)
            .map_err(|e| DbErr::Custom(format!("Failed to parse tasks of {}: {}", id, e)))?;

        Ok(Self {
            id,
            name: entity.name,
            description: entity.description,
            tasks,
        })
    }

    pub fn into_dto(self) -> ProjectDto {
        ProjectDto {
            id: self.id.to_hex(),
            name: self.name,
            description: self.description,
            tasks: self.tasks.into_iter().map(TaskParam::into_dto).collect(),
        }
    }
}

impl TaskParam {
    pub fn from_dto(dto: TaskDto) -> Self {
        Self {
            description: dto.description,
            tags: dto.tags,
        }
    }

    pub fn into_dto(self) -> TaskDto {
        TaskDto {
            description: self.description,
            tags: self.tags,
        }
    }
}
