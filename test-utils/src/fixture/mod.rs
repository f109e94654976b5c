//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. They provide
//! in-memory entity models and the JSON request bodies used by the HTTP tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let project = fixture::project::entity();
//! let body = fixture::project::crm_body();
//! ```

pub mod project;

pub use project::{entity as project_entity, blog_body, crm_body};
