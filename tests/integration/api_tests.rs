//! API integration tests

use bookstore_api::{api, config::AppConfig, AppState};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

/// Start a server on an ephemeral port with a freshly seeded store
async fn spawn_app_with(config: AppConfig) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("No local address");
    let app = api::create_router(AppState::seeded(config));
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });
    format!("http://{}", addr)
}

async fn spawn_app() -> String {
    spawn_app_with(AppConfig::default()).await
}

fn new_book() -> Value {
    json!({
        "title": "Brave New World",
        "author_id": "3",
        "isbn": "978-0-06-085052-4",
        "published_year": 1932,
        "price": 11.5
    })
}

async fn get_json(client: &Client, url: String) -> (StatusCode, Value) {
    let response = client.get(url).send().await.expect("Failed to send request");
    let status = response.status();
    let body = response.json().await.expect("Failed to parse response");
    (status, body)
}

#[tokio::test]
async fn test_root_and_health() {
    let base = spawn_app().await;
    let client = Client::new();

    let (status, body) = get_json(&client, format!("{}/", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Welcome to the BookStore API");
    assert_eq!(body["version"], "1.0.0");
    assert_eq!(body["docs"], "/api/docs");

    let (status, body) = get_json(&client, format!("{}/api/v1/health", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_seed_data() {
    let base = spawn_app().await;
    let client = Client::new();

    let (status, body) = get_json(&client, format!("{}/api/v1/books", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 3);
    let titles: Vec<_> = body["books"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["The Great Gatsby", "To Kill a Mockingbird", "1984"]);

    let (_, body) = get_json(&client, format!("{}/api/v1/authors", base)).await;
    assert_eq!(body["count"], 3);
    assert_eq!(body["authors"][1]["name"], "Harper Lee");
}

#[tokio::test]
async fn test_book_filters() {
    let base = spawn_app().await;
    let client = Client::new();

    let (_, body) = get_json(&client, format!("{}/api/v1/books?author_id=1", base)).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["books"][0]["title"], "The Great Gatsby");

    let (_, body) =
        get_json(&client, format!("{}/api/v1/books?min_price=13&max_price=14", base)).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["books"][0]["title"], "1984");

    let (status, body) =
        get_json(&client, format!("{}/api/v1/books?min_price=cheap", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 3);
}

#[tokio::test]
async fn test_create_book() {
    let base = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/v1/books", base))
        .json(&new_book())
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = response.json().await.expect("Failed to parse response");
    let id = body["id"].as_str().expect("No book ID");
    assert!(!["1", "2", "3"].contains(&id));
    assert_eq!(body["created_at"], body["updated_at"]);
    assert_eq!(body["stock"], 0);

    let (status, fetched) = get_json(&client, format!("{}/api/v1/books/{}", base, id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn test_create_book_missing_field() {
    let base = spawn_app().await;
    let client = Client::new();

    let mut payload = new_book();
    payload.as_object_mut().unwrap().remove("price");

    let response = client
        .post(format!("{}/api/v1/books", base))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({"error": "Missing required field: price"}));

    let (_, body) = get_json(&client, format!("{}/api/v1/books", base)).await;
    assert_eq!(body["count"], 3);
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let base = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/v1/books", base))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_replace_missing_book_is_not_found() {
    let base = spawn_app().await;
    let client = Client::new();

    let response = client
        .put(format!("{}/api/v1/books/does-not-exist", base))
        .json(&json!({"title": "only a title"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({"error": "Book not found"}));

    let response = client
        .put(format!("{}/api/v1/books/does-not-exist", base))
        .header("content-type", "application/json")
        .body("garbage")
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_replace_book_twice() {
    let base = spawn_app().await;
    let client = Client::new();
    let url = format!("{}/api/v1/books/2", base);

    let first: Value = client
        .put(&url)
        .json(&new_book())
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let second: Value = client
        .put(&url)
        .json(&new_book())
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(first["id"], "2");
    assert_eq!(first["created_at"], "2024-01-01T00:00:00Z");
    assert_eq!(first["title"], "Brave New World");
    assert_eq!(first["stock"], 0);
    for field in ["id", "title", "author_id", "isbn", "published_year", "price", "stock", "created_at"] {
        assert_eq!(first[field], second[field], "field {} changed", field);
    }
    let parse = |v: &Value| {
        chrono::DateTime::parse_from_rfc3339(v.as_str().unwrap()).expect("Invalid timestamp")
    };
    assert!(parse(&second["updated_at"]) >= parse(&first["updated_at"]));

    let response = client
        .put(&url)
        .json(&json!({"title": "x", "author_id": "1", "isbn": "y", "published_year": 2000}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_patch_book_stock() {
    let base = spawn_app().await;
    let client = Client::new();
    let url = format!("{}/api/v1/books/3", base);

    let (_, before) = get_json(&client, url.clone()).await;

    let response = client
        .patch(&url)
        .json(&json!({"stock": 5, "unknown_key": true}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let after: Value = response.json().await.expect("Failed to parse response");

    assert_eq!(after["stock"], 5);
    for field in ["id", "title", "author_id", "isbn", "published_year", "price", "created_at"] {
        assert_eq!(before[field], after[field], "field {} changed", field);
    }
    assert_ne!(after["updated_at"], before["updated_at"]);

    let response = client
        .patch(format!("{}/api/v1/books/missing", base))
        .json(&json!({"stock": 1}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_empty_patch_refreshes_updated_at() {
    let base = spawn_app().await;
    let client = Client::new();
    let url = format!("{}/api/v1/books/1", base);

    let (_, before) = get_json(&client, url.clone()).await;

    let response = client
        .patch(&url)
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let after: Value = response.json().await.expect("Failed to parse response");

    for field in ["id", "title", "author_id", "isbn", "published_year", "price", "stock", "created_at"] {
        assert_eq!(before[field], after[field], "field {} changed", field);
    }
    let updated_at = after["updated_at"].as_str().unwrap();
    let seeded = chrono::DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z").unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(updated_at).unwrap() > seeded);
    // Either whole seconds or exactly six fractional digits
    let fraction = updated_at
        .trim_end_matches('Z')
        .rsplit_once('.')
        .map(|(_, digits)| digits.len());
    assert!(matches!(fraction, None | Some(6)), "unexpected precision: {}", updated_at);
}

#[tokio::test]
async fn test_delete_book() {
    let base = spawn_app().await;
    let client = Client::new();
    let url = format!("{}/api/v1/books/1", base);

    let response = client.delete(&url).send().await.expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(response.bytes().await.unwrap().is_empty());

    let (status, body) = get_json(&client, url.clone()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Book not found");

    let response = client.delete(&url).send().await.expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_author_crud() {
    let base = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/v1/authors", base))
        .json(&json!({"name": "Aldous Huxley", "birth_year": 1894}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Missing required field: nationality");

    let response = client
        .post(format!("{}/api/v1/authors", base))
        .json(&json!({"name": "Aldous Huxley", "birth_year": 1894, "nationality": "British"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Value = response.json().await.expect("Failed to parse response");
    let id = created["id"].as_str().unwrap().to_string();

    let response = client
        .put(format!("{}/api/v1/authors/{}", base, id))
        .json(&json!({"name": "A. Huxley", "birth_year": 1894, "nationality": "British"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let replaced: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(replaced["name"], "A. Huxley");
    assert_eq!(replaced["created_at"], created["created_at"]);

    let response = client
        .put(format!("{}/api/v1/authors/missing", base))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = client
        .delete(format!("{}/api/v1/authors/{}", base, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let (status, body) = get_json(&client, format!("{}/api/v1/authors/{}", base, id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Author not found");
}

#[tokio::test]
async fn test_author_books() {
    let base = spawn_app().await;
    let client = Client::new();

    let (status, body) = get_json(&client, format!("{}/api/v1/authors/1/books", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["author"]["name"], "F. Scott Fitzgerald");
    assert_eq!(body["count"], 1);

    client
        .delete(format!("{}/api/v1/books/1", base))
        .send()
        .await
        .expect("Failed to send request");

    let (status, body) = get_json(&client, format!("{}/api/v1/authors/1/books", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
    assert_eq!(body["books"], json!([]));

    let (status, _) = get_json(&client, format!("{}/api/v1/authors/1", base)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get_json(&client, format!("{}/api/v1/authors/404/books", base)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Author not found");
}

#[tokio::test]
async fn test_deleting_author_keeps_books() {
    let base = spawn_app().await;
    let client = Client::new();

    let response = client
        .delete(format!("{}/api/v1/authors/2", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let (status, body) = get_json(&client, format!("{}/api/v1/books/2", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["author_id"], "2");
}

#[tokio::test]
async fn test_enforced_author_reference() {
    let mut config = AppConfig::default();
    config.catalog.enforce_author_reference = true;
    let base = spawn_app_with(config).await;
    let client = Client::new();

    let mut payload = new_book();
    payload["author_id"] = json!("999");
    let response = client
        .post(format!("{}/api/v1/books", base))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Author not found: 999");

    let response = client
        .post(format!("{}/api/v1/books", base))
        .json(&new_book())
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_unknown_route() {
    let base = spawn_app().await;
    let client = Client::new();

    let (status, body) = get_json(&client, format!("{}/api/v1/publishers", base)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Resource not found");
}
