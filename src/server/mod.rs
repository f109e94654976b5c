//! Server-side API backend for the projects collection.
//!
//! The backend uses Axum as the web framework and SeaORM on SQLite as the document
//! store. Projects are stored as single rows whose task lists live in a JSON column.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Identifier handling and not-found detection
//! - **Data Layer** (`data/`) - Collection handle and entity-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Binds the collection handle to each request
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state holding the collection handle
//! - **Startup** (`startup`) - Database connection, migrations, tracing and listener setup
//! - **Router** (`router`) - Route table, HTTP layers and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request
//! 2. **Middleware** attaches the collection handle to the request extensions
//! 3. **Controller** decodes the body and calls the service
//! 4. **Service** parses the id and performs exactly one store operation
//! 5. **Controller** converts the result to a DTO, or the error to `{"message": ...}`

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
