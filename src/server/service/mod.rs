//! Business logic between the HTTP controllers and the data layer.
//!
//! Services resolve path identifiers, generate new object ids and turn missing
//! documents into `StoreError::NotFound`.

pub mod project;
