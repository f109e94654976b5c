//! Project fixtures for creating in-memory test data.

use entity::project;
use serde_json::{json, Value};

/// Default object id of the fixture project.
pub const DEFAULT_ID: &str = "59d3db513405112c58d87470";

/// Well formed object id that no fixture or factory ever produces.
pub const MISSING_ID: &str = "59d3db513405112c58d87480";

/// Default test project name.
pub const DEFAULT_NAME: &str = "CRM";

/// Default test project description.
pub const DEFAULT_DESCRIPTION: &str = "Description Project";

/// Creates a project entity model with default values.
///
/// # Default Values
/// - id: `"59d3db513405112c58d87470"`
/// - name: `"CRM"`
/// - description: `"Description Project"`
/// - tasks: the three tasks of [`crm_body`]
pub fn entity() -> project::Model {
    project::Model {
        id: DEFAULT_ID.to_string(),
        name: DEFAULT_NAME.to_string(),
        description: DEFAULT_DESCRIPTION.to_string(),
        tasks: crm_body()["tasks"].clone(),
    }
}

/// Request body for creating the "CRM" project with three tasks.
pub fn crm_body() -> Value {
    json!({
        "name": DEFAULT_NAME,
        "description": DEFAULT_DESCRIPTION,
        "tasks": [
            { "description": "Golang", "tags": ["BACKEND"] },
            { "description": "Mongodb", "tags": ["BACKEND"] },
            { "description": "ReactJS", "tags": ["FRONTEND"] },
        ]
    })
}

/// Request body replacing a project with the "BLOG" document.
pub fn blog_body() -> Value {
    json!({
        "name": "BLOG",
        "description": "Description Project alter",
        "tasks": [
            { "description": "GO", "tags": ["BACK"] },
            { "description": "Postgres", "tags": ["BACK"] },
            { "description": "AngularJS", "tags": ["FRONT"] },
        ]
    })
}
