//! HTTP request handlers.
//!
//! Controllers decode requests, call the service layer and convert domain models to
//! DTOs. Each project handler performs exactly one store operation.

pub mod project;
