//! Binds the projects collection handle to every request.
//!
//! The handle is stored in the request extensions, where handlers pick it up with
//! `Extension<ProjectCollection>`. Routers built around a different handle, such as
//! one backed by a test database, serve the same handlers without changes.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::server::{data::collection::ProjectCollection, state::AppState};

/// Attaches the state's collection handle to the request and runs the next stage.
///
/// Install with `axum::middleware::from_fn_with_state(state, bind_collection)`.
/// The response of the next stage is returned unchanged.
pub async fn bind_collection(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    request
        .extensions_mut()
        .insert::<ProjectCollection>(state.collection);

    next.run(request).await
}
