// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::any::Any;

use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::{header, HeaderValue, Method, StatusCode, Uri},
    middleware::from_fn_with_state,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth::require_bearer_token,
    error::{ApiError, ErrorBody, ErrorMessage},
    models::{Folder, FolderFields, Note, NoteFields},
    state::AppState,
};

pub mod folders;
pub mod notes;

pub const ROUTE_NOT_FOUND: &str = "Not Found";
pub const METHOD_NOT_ALLOWED: &str = "Method Not Allowed";

/// `axum::Json` whose rejections render as the standard error body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

/// Rejects with 400 naming the first field (in the given order) whose value
/// is missing or falsy.
pub(crate) fn require_fields(resource: &str, fields: &[(&str, bool)]) -> Result<(), ApiError> {
    match fields.iter().find(|(_, present)| !present) {
        Some((field, _)) => {
            tracing::error!("{resource} {field} is required");
            Err(ApiError::bad_request(format!(
                "{resource} '{field}' is required"
            )))
        }
        None => Ok(()),
    }
}

/// Resolve a PATCH body after the target record has been loaded. A request
/// that carries no JSON body patches nothing.
pub(crate) fn patch_fields<T: Default>(
    body: Result<Json<T>, JsonRejection>,
) -> Result<T, ApiError> {
    match body {
        Ok(Json(fields)) => Ok(fields),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(rejection) => Err(rejection.into()),
    }
}

pub(crate) fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

pub(crate) fn has_id(value: Option<i64>) -> bool {
    value.is_some_and(|v| v != 0)
}

pub fn router(state: AppState) -> Router {
    let resource_routes = Router::new()
        .route(
            "/folders",
            get(folders::list_folders).post(folders::create_folder),
        )
        .route(
            "/folders/{folder_id}",
            get(folders::get_folder)
                .patch(folders::update_folder)
                .delete(folders::delete_folder),
        )
        .route("/notes", get(notes::list_notes).post(notes::create_note))
        .route(
            "/notes/{note_id}",
            get(notes::get_note)
                .patch(notes::update_note)
                .delete(notes::delete_note),
        )
        .with_state(state.clone());

    let mut app = Router::new()
        .merge(resource_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(route_not_found)
        .layer(from_fn_with_state(
            state.api_token.clone(),
            require_bearer_token,
        ));

    if state.trace_requests {
        app = app.layer(TraceLayer::new_for_http());
    }

    app.layer(CorsLayer::permissive())
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_DNS_PREFETCH_CONTROL,
            HeaderValue::from_static("off"),
        ))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(CatchPanicLayer::custom(handle_panic))
}

async fn route_not_found(uri: Uri) -> ApiError {
    tracing::error!(path = %uri.path(), "no route matched");
    ApiError::not_found(ROUTE_NOT_FOUND)
}

async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    tracing::error!(%method, path = %uri.path(), "method not allowed");
    ApiError::new(StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED)
}

/// Terminal handler for anything that escaped a route by panicking.
fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = %detail, "request handler panicked");
    ApiError::internal().into_response()
}

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        folders::list_folders,
        folders::create_folder,
        folders::get_folder,
        folders::update_folder,
        folders::delete_folder,
        notes::list_notes,
        notes::create_note,
        notes::get_note,
        notes::update_note,
        notes::delete_note
    ),
    components(schemas(Folder, FolderFields, Note, NoteFields, ErrorBody, ErrorMessage)),
    modifiers(&BearerAuth),
    security(("bearer" = [])),
    tags(
        (name = "Folders", description = "Folder management"),
        (name = "Notes", description = "Notes inside folders")
    )
)]
struct ApiDoc;
