//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting project documents with sensible
//! defaults, reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let project = factory::create_project(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let project = factory::project::ProjectFactory::new(&db)
//!     .name("CRM")
//!     .task("Backend", &["BACKEND", "API"])
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod project;

pub use project::create_project;
