//! Collection handle and sort specification for the projects collection.

use std::str::FromStr;

use sea_orm::{DatabaseConnection, EntityName, Order};

/// Handle to the projects collection.
///
/// Wraps the shared connection pool; clones share the pool, so the handle is cheap to
/// hand to every request and needs no locking.
#[derive(Clone)]
pub struct ProjectCollection {
    db: DatabaseConnection,
}

impl ProjectCollection {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Name of the backing table.
    pub fn name(&self) -> String {
        entity::prelude::Project.table_name().to_string()
    }
}

/// Sort specification in the `field` / `-field` notation, `-` meaning descending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    field: String,
    descending: bool,
}

impl SortKey {
    pub fn parse(spec: &str) -> Self {
        match spec.strip_prefix('-') {
            Some(field) => Self {
                field: field.to_string(),
                descending: true,
            },
            None => Self {
                field: spec.trim_start_matches('+').to_string(),
                descending: false,
            },
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn order(&self) -> Order {
        if self.descending {
            Order::Desc
        } else {
            Order::Asc
        }
    }

    /// Column the key refers to, or `None` when documents have no such field.
    pub fn column(&self) -> Option<entity::project::Column> {
        entity::project::Column::from_str(&self.field).ok()
    }
}
