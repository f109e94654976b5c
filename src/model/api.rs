use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every failed request: a single human readable message.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ErrorDto {
    pub message: String,
}
