//! API handlers for BookStore REST endpoints

pub mod authors;
pub mod books;
pub mod health;
pub mod openapi;

use axum::{
    extract::FromRequest,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::ToSchema;

use crate::{error::AppError, AppState};

/// JSON body extractor whose rejections use the API error body
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    /// Location of the interactive documentation
    pub docs: String,
}

/// API root (outside the versioned prefix)
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Welcome to the BookStore API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        docs: openapi::DOCS_PATH.to_string(),
    })
}

async fn not_found() -> AppError {
    AppError::NotFound("Resource not found".to_string())
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .patch(books::partial_update_book)
                .delete(books::delete_book),
        )
        // Authors
        .route("/authors", get(authors::list_authors).post(authors::create_author))
        .route(
            "/authors/:id",
            get(authors::get_author)
                .put(authors::update_author)
                .delete(authors::delete_author),
        )
        .route("/authors/:id/books", get(authors::get_author_books))
        .with_state(state);

    Router::new()
        .route("/", get(root))
        .nest("/api/v1", api_v1)
        .merge(openapi::create_openapi_router())
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}
