use axum::{middleware, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::project,
    middleware::collection::bind_collection,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Projectboard API", description = "CRUD over the projects collection"),
    tags((name = "project", description = "Projects and their tasks"))
)]
struct ApiDoc;

/// Builds the HTTP router with the collection binder installed on every route.
///
/// Swagger UI is served at `/api/docs` with the generated document at
/// `/api/docs/openapi.json`.
pub fn router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(project::get_projects, project::create_project))
        .routes(routes!(
            project::get_project,
            project::update_project,
            project::delete_project
        ))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(middleware::from_fn_with_state(state, bind_collection))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
