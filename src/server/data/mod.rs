//! Database repository layer for the projects collection.
//!
//! Repositories use SeaORM entity models internally and return parameter models to
//! maintain separation between the data layer and business logic layer. All
//! queries, inserts, replacements and deletes go through `ProjectRepository`.

pub mod collection;
pub mod project;

#[cfg(test)]
mod test;
