//! Author endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::AppJson;
use crate::{
    error::{AppError, AppResult},
    models::{Author, AuthorBooks, AuthorList, CreateAuthor},
    AppState,
};

/// List all authors
#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    responses(
        (status = 200, description = "List of authors", body = AuthorList)
    )
)]
pub async fn list_authors(State(state): State<AppState>) -> Json<AuthorList> {
    Json(AuthorList::from(state.services.authors.list().await))
}

/// Get a specific author by ID
#[utoipa::path(
    get,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = String, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author details", body = Author),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Author>> {
    let author = state.services.authors.get_by_id(&id).await?;
    Ok(Json(author))
}

/// Create a new author
#[utoipa::path(
    post,
    path = "/authors",
    tag = "authors",
    request_body = CreateAuthor,
    responses(
        (status = 201, description = "Author created", body = Author),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_author(
    State(state): State<AppState>,
    AppJson(data): AppJson<CreateAuthor>,
) -> AppResult<(StatusCode, Json<Author>)> {
    let author = state.services.authors.create(data).await?;
    Ok((StatusCode::CREATED, Json(author)))
}

/// Replace an author
#[utoipa::path(
    put,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = String, Path, description = "Author ID")),
    request_body = CreateAuthor,
    responses(
        (status = 200, description = "Author updated", body = Author),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<AppJson<CreateAuthor>, AppError>,
) -> AppResult<Json<Author>> {
    let author = state
        .services
        .authors
        .replace(&id, body.map(|AppJson(data)| data))
        .await?;
    Ok(Json(author))
}

/// Delete an author
#[utoipa::path(
    delete,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = String, Path, description = "Author ID")),
    responses(
        (status = 204, description = "Author deleted"),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.services.authors.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Get all books by an author
#[utoipa::path(
    get,
    path = "/authors/{id}/books",
    tag = "authors",
    params(("id" = String, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author with their books", body = AuthorBooks),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_author_books(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<AuthorBooks>> {
    let author_books = state.services.authors.books(&id).await?;
    Ok(Json(author_books))
}
