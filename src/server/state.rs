//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into the router. It holds the
//! projects collection handle, which the binder middleware attaches to each request.

use crate::server::data::collection::ProjectCollection;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `ProjectCollection` wraps a connection pool whose
/// clones share the same connections.
#[derive(Clone)]
pub struct AppState {
    /// Handle to the projects collection, shared read-only by every request.
    pub collection: ProjectCollection,
}

impl AppState {
    /// Creates a new application state around the collection handle.
    pub fn new(collection: ProjectCollection) -> Self {
        Self { collection }
    }
}
