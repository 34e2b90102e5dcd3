//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{authors, books, health};

/// Swagger UI location
pub const DOCS_PATH: &str = "/api/docs";
/// Raw OpenAPI document location
pub const SPEC_PATH: &str = "/apispec.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "BookStore API",
        version = "1.0.0",
        description = "A sample REST API demonstrating typical REST principles with books and authors",
        contact(name = "API Support", email = "support@bookstore.example")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::partial_update_book,
        books::delete_book,
        // Authors
        authors::list_authors,
        authors::get_author,
        authors::create_author,
        authors::update_author,
        authors::delete_author,
        authors::get_author_books,
    ),
    components(
        schemas(
            crate::models::book::Book,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            crate::models::book::BookList,
            crate::models::author::Author,
            crate::models::author::CreateAuthor,
            crate::models::author::AuthorList,
            crate::models::author::AuthorBooks,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "books", description = "Operations related to books"),
        (name = "authors", description = "Operations related to authors"),
        (name = "health", description = "Health check operations")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new(DOCS_PATH).url(SPEC_PATH, ApiDoc::openapi()))
}
