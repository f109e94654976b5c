use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path,
    },
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    model::{api::ErrorDto, project::ProjectDto},
    server::{
        data::collection::ProjectCollection, error::AppError, model::project::ProjectFields,
        service::project::ProjectService,
    },
};

/// Tag for grouping project endpoints in OpenAPI documentation
pub static PROJECT_TAG: &str = "project";

/// Create a new project.
///
/// Stores the submitted project under a freshly generated object id. Any `id` in
/// the body is ignored.
///
/// # Arguments
/// - `collection` - Projects collection bound to the request
/// - `payload` - Project body, or the reason it could not be decoded
///
/// # Returns
/// - `200 OK` - The stored project including its new id
/// - `500 Internal Server Error` - `{"message":"bad request"}` for an undecodable body
///   or a failed insert
#[utoipa::path(
    post,
    path = "/projects",
    tag = PROJECT_TAG,
    request_body = ProjectDto,
    responses(
        (status = 200, description = "Successfully created project", body = ProjectDto),
        (status = 500, description = "Undecodable body or failed insert", body = ErrorDto)
    ),
)]
pub async fn create_project(
    Extension(collection): Extension<ProjectCollection>,
    payload: Result<Json<ProjectDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(reject_body)?;

    let service = ProjectService::new(&collection);

    let project = service
        .create(ProjectFields::from_dto(payload))
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert project: {}", e);
            AppError::BadRequest
        })?;

    Ok((StatusCode::OK, Json(project.into_dto())))
}

/// Get all projects.
///
/// Requests a descending sort on `start`; project documents have no such field, so
/// the listing follows creation order.
///
/// # Returns
/// - `200 OK` - Array of projects, empty when the collection is empty
/// - `500 Internal Server Error` - `{"message":"bad request"}` when the query fails
#[utoipa::path(
    get,
    path = "/projects",
    tag = PROJECT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved projects", body = Vec<ProjectDto>),
        (status = 500, description = "Query failed", body = ErrorDto)
    ),
)]
pub async fn get_projects(
    Extension(collection): Extension<ProjectCollection>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProjectService::new(&collection);

    let projects = service.get_all().await.map_err(|e| {
        tracing::error!("Failed to list projects: {}", e);
        AppError::BadRequest
    })?;

    let projects: Vec<ProjectDto> = projects.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(projects)))
}

/// Get a specific project by ID.
///
/// # Arguments
/// - `collection` - Projects collection bound to the request
/// - `id` - Object id in hex form, or the reason it could not be extracted
///
/// # Returns
/// - `200 OK` - The project
/// - `500 Internal Server Error` - `{"message":"not found"}`, an invalid id message, or
///   the store error message
#[utoipa::path(
    get,
    path = "/projects/{id}",
    tag = PROJECT_TAG,
    params(
        ("id" = String, Path, description = "Project object id (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved project", body = ProjectDto),
        (status = 500, description = "Project not found or store error", body = ErrorDto)
    ),
)]
pub async fn get_project(
    Extension(collection): Extension<ProjectCollection>,
    id: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let service = ProjectService::new(&collection);

    let project = service.get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(project.into_dto())))
}

/// Replace a project.
///
/// Replaces every field of the stored document, including the task list. The
/// response always carries the path id; any `id` in the body is ignored.
///
/// # Arguments
/// - `collection` - Projects collection bound to the request
/// - `id` - Object id in hex form, or the reason it could not be extracted
/// - `payload` - Replacement project body, or the reason it could not be decoded
///
/// # Returns
/// - `200 OK` - The replaced project
/// - `500 Internal Server Error` - `{"message":"bad request"}` for an undecodable body,
///   otherwise the store error message
#[utoipa::path(
    put,
    path = "/projects/{id}",
    tag = PROJECT_TAG,
    params(
        ("id" = String, Path, description = "Project object id (24 hex characters)")
    ),
    request_body = ProjectDto,
    responses(
        (status = 200, description = "Successfully replaced project", body = ProjectDto),
        (status = 500, description = "Undecodable body, project not found or store error", body = ErrorDto)
    ),
)]
pub async fn update_project(
    Extension(collection): Extension<ProjectCollection>,
    id: Result<Path<String>, PathRejection>,
    payload: Result<Json<ProjectDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload.map_err(reject_body)?;

    let service = ProjectService::new(&collection);

    let project = service
        .replace(&id, ProjectFields::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(project.into_dto())))
}

/// Delete a project.
///
/// # Arguments
/// - `collection` - Projects collection bound to the request
/// - `id` - Object id in hex form, or the reason it could not be extracted
///
/// # Returns
/// - `200 OK` - The JSON string `"ok"`
/// - `500 Internal Server Error` - `{"message":"not found"}`, an invalid id message, or
///   the store error message
#[utoipa::path(
    delete,
    path = "/projects/{id}",
    tag = PROJECT_TAG,
    params(
        ("id" = String, Path, description = "Project object id (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Successfully deleted project", body = String),
        (status = 500, description = "Project not found or store error", body = ErrorDto)
    ),
)]
pub async fn delete_project(
    Extension(collection): Extension<ProjectCollection>,
    id: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let service = ProjectService::new(&collection);

    service.delete(&id).await?;

    Ok((StatusCode::OK, Json("ok")))
}

fn reject_body(rejection: JsonRejection) -> AppError {
    tracing::debug!("Rejected project body: {}", rejection.body_text());
    AppError::BadRequest
}
