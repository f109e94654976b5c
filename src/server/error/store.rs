use thiserror::Error;

/// Failures of a single document store operation.
///
/// The `Display` output of every variant is what clients see in the `message`
/// field of the error body.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No document in the collection has the requested identifier.
    #[error("not found")]
    NotFound,

    /// The identifier in the request path is not a 24 character hex object id.
    #[error("invalid object id '{value}': {source}")]
    InvalidId {
        /// The raw path segment
        value: String,
        /// Why parsing failed
        #[source]
        source: bson::oid::Error,
    },

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
