// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    Json,
};

use super::{has_id, has_text, patch_fields, require_fields, JsonBody};
use crate::{
    error::{ApiError, ErrorBody},
    models::{NewNote, Note, NoteFields},
    sanitize::Sanitize,
    state::AppState,
    storage::{NoteRepository, StoreError},
    validation::{validate_note, validate_note_patch, NOTE_FOLDER_MISSING},
};

pub const NOTE_NOT_FOUND: &str = "Note Not Found";
pub const NOTE_PATCH_EMPTY: &str =
    "Request body must contain either 'name', 'content', or 'folderId'";

/// Load-and-attach step shared by every id-scoped note route.
async fn load_note(state: &AppState, note_id: &str) -> Result<Note, ApiError> {
    let note = match note_id.parse::<i64>() {
        Ok(id) => NoteRepository::new(&state.db).get_by_id(id).await?,
        Err(_) => None,
    };

    note.ok_or_else(|| {
        tracing::error!("Note with id {note_id} not found.");
        ApiError::not_found(NOTE_NOT_FOUND)
    })
}

/// A note pointing at a folder that does not exist is a client error.
fn map_folder_reference(err: StoreError) -> ApiError {
    match err {
        StoreError::ForeignKeyViolation => {
            tracing::error!("{NOTE_FOLDER_MISSING}");
            ApiError::bad_request(NOTE_FOLDER_MISSING)
        }
        other => other.into(),
    }
}

#[utoipa::path(
    get,
    path = "/notes",
    tag = "Notes",
    responses((status = 200, body = [Note]))
)]
pub async fn list_notes(State(state): State<AppState>) -> Result<Json<Vec<Note>>, ApiError> {
    let notes = NoteRepository::new(&state.db).list_all().await?;
    Ok(Json(notes.sanitize()))
}

#[utoipa::path(
    post,
    path = "/notes",
    request_body = NoteFields,
    tag = "Notes",
    responses(
        (status = 201, body = Note, headers(("Location" = String))),
        (status = 400, body = ErrorBody)
    )
)]
pub async fn create_note(
    State(state): State<AppState>,
    JsonBody(fields): JsonBody<NoteFields>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<Note>), ApiError> {
    require_fields(
        "Note",
        &[
            ("name", has_text(&fields.name)),
            ("content", has_text(&fields.content)),
            ("folderId", has_id(fields.folder_id)),
        ],
    )?;
    validate_note(&fields)?;

    let new_note = NewNote {
        name: fields.name.unwrap_or_default(),
        content: fields.content.unwrap_or_default(),
        folder_id: fields.folder_id.unwrap_or_default(),
    };
    let note = NoteRepository::new(&state.db)
        .insert(&new_note)
        .await
        .map_err(map_folder_reference)?;
    tracing::info!("Note with id {} and folderId {} created.", note.id, note.folder_id);

    let location = format!("/notes/{}", note.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(note.sanitize()),
    ))
}

#[utoipa::path(
    get,
    path = "/notes/{note_id}",
    params(("note_id" = i64, Path, description = "Identifier of the note")),
    tag = "Notes",
    responses((status = 200, body = Note), (status = 404, body = ErrorBody))
)]
pub async fn get_note(
    Path(note_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Note>, ApiError> {
    let note = load_note(&state, &note_id).await?;
    Ok(Json(note.sanitize()))
}

#[utoipa::path(
    delete,
    path = "/notes/{note_id}",
    params(("note_id" = i64, Path, description = "Identifier of the note to delete")),
    tag = "Notes",
    responses((status = 204), (status = 404, body = ErrorBody))
)]
pub async fn delete_note(
    Path(note_id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let note = load_note(&state, &note_id).await?;
    NoteRepository::new(&state.db).delete_by_id(note.id).await?;
    tracing::info!("Note with id {} deleted.", note.id);
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    patch,
    path = "/notes/{note_id}",
    params(("note_id" = i64, Path, description = "Identifier of the note to update")),
    request_body = NoteFields,
    tag = "Notes",
    responses(
        (status = 200, body = Note),
        (status = 400, body = ErrorBody),
        (status = 404, body = ErrorBody)
    )
)]
pub async fn update_note(
    Path(note_id): Path<String>,
    State(state): State<AppState>,
    body: Result<Json<NoteFields>, JsonRejection>,
) -> Result<Json<Note>, ApiError> {
    let note = load_note(&state, &note_id).await?;
    let patch = patch_fields(body)?;

    if patch.is_empty() {
        tracing::error!("Invalid update without required fields");
        return Err(ApiError::bad_request(NOTE_PATCH_EMPTY));
    }
    validate_note_patch(&patch)?;

    let updated = NoteRepository::new(&state.db)
        .update_by_id(note.id, &patch)
        .await
        .map_err(map_folder_reference)?
        .ok_or_else(|| ApiError::not_found(NOTE_NOT_FOUND))?;
    Ok(Json(updated.sanitize()))
}
