use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Project document as sent and received over HTTP.
///
/// Every field is optional on input so partially filled bodies decode the way a
/// lenient binder would; `id` is ignored on input and omitted on output while empty.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct ProjectDto {
    /// Object id in 24 character hex form.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub tasks: Vec<TaskDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct TaskDto {
    #[serde(default)]
    pub description: String,
    /// Tags in submitted order, duplicates included.
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub tags: Vec<String>,
}

fn deserialize_null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
