// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    Json,
};

use super::{has_text, patch_fields, require_fields, JsonBody};
use crate::{
    error::{ApiError, ErrorBody},
    models::{Folder, FolderFields, NewFolder},
    sanitize::Sanitize,
    state::AppState,
    storage::FolderRepository,
    validation::{validate_folder, validate_folder_patch},
};

pub const FOLDER_NOT_FOUND: &str = "Folder Not Found";
pub const FOLDER_PATCH_EMPTY: &str = "Request body must contain 'name'";

/// Load-and-attach step shared by every id-scoped folder route.
async fn load_folder(state: &AppState, folder_id: &str) -> Result<Folder, ApiError> {
    let folder = match folder_id.parse::<i64>() {
        Ok(id) => FolderRepository::new(&state.db).get_by_id(id).await?,
        Err(_) => None,
    };

    folder.ok_or_else(|| {
        tracing::error!("Folder with id {folder_id} not found.");
        ApiError::not_found(FOLDER_NOT_FOUND)
    })
}

#[utoipa::path(
    get,
    path = "/folders",
    tag = "Folders",
    responses((status = 200, body = [Folder]))
)]
pub async fn list_folders(State(state): State<AppState>) -> Result<Json<Vec<Folder>>, ApiError> {
    let folders = FolderRepository::new(&state.db).list_all().await?;
    Ok(Json(folders.sanitize()))
}

#[utoipa::path(
    post,
    path = "/folders",
    request_body = FolderFields,
    tag = "Folders",
    responses(
        (status = 201, body = Folder, headers(("Location" = String))),
        (status = 400, body = ErrorBody)
    )
)]
pub async fn create_folder(
    State(state): State<AppState>,
    JsonBody(fields): JsonBody<FolderFields>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<Folder>), ApiError> {
    require_fields("Folder", &[("name", has_text(&fields.name))])?;
    validate_folder(&fields)?;

    let new_folder = NewFolder {
        name: fields.name.unwrap_or_default(),
    };
    let folder = FolderRepository::new(&state.db).insert(&new_folder).await?;
    tracing::info!("Folder with id {} and name {} created.", folder.id, folder.name);

    let location = format!("/folders/{}", folder.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(folder.sanitize()),
    ))
}

#[utoipa::path(
    get,
    path = "/folders/{folder_id}",
    params(("folder_id" = i64, Path, description = "Identifier of the folder")),
    tag = "Folders",
    responses((status = 200, body = Folder), (status = 404, body = ErrorBody))
)]
pub async fn get_folder(
    Path(folder_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Folder>, ApiError> {
    let folder = load_folder(&state, &folder_id).await?;
    Ok(Json(folder.sanitize()))
}

#[utoipa::path(
    delete,
    path = "/folders/{folder_id}",
    params(("folder_id" = i64, Path, description = "Identifier of the folder to delete")),
    tag = "Folders",
    responses((status = 204), (status = 404, body = ErrorBody))
)]
pub async fn delete_folder(
    Path(folder_id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let folder = load_folder(&state, &folder_id).await?;
    FolderRepository::new(&state.db)
        .delete_by_id(folder.id)
        .await?;
    tracing::info!("Folder with id {} deleted.", folder.id);
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    patch,
    path = "/folders/{folder_id}",
    params(("folder_id" = i64, Path, description = "Identifier of the folder to update")),
    request_body = FolderFields,
    tag = "Folders",
    responses(
        (status = 200, body = Folder),
        (status = 400, body = ErrorBody),
        (status = 404, body = ErrorBody)
    )
)]
pub async fn update_folder(
    Path(folder_id): Path<String>,
    State(state): State<AppState>,
    body: Result<Json<FolderFields>, JsonRejection>,
) -> Result<Json<Folder>, ApiError> {
    let folder = load_folder(&state, &folder_id).await?;
    let patch = patch_fields(body)?;

    if patch.is_empty() {
        tracing::error!("Invalid update without required field");
        return Err(ApiError::bad_request(FOLDER_PATCH_EMPTY));
    }
    validate_folder_patch(&patch)?;

    let updated = FolderRepository::new(&state.db)
        .update_by_id(folder.id, &patch)
        .await?
        .ok_or_else(|| ApiError::not_found(FOLDER_NOT_FOUND))?;
    Ok(Json(updated.sanitize()))
}
