use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::app;
use tower::ServiceExt;

const KEY: &str = "test-key";

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- omdb search ---

#[tokio::test]
async fn search_by_title() {
    let resp = app(KEY).oneshot(get("/?apikey=test-key&t=Inception")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["Title"], "Inception");
    assert_eq!(body["Year"], "2010");
    assert_eq!(body["Response"], "True");
}

#[tokio::test]
async fn search_title_is_case_insensitive_and_decoded() {
    let resp = app(KEY).oneshot(get("/?apikey=test-key&t=civil+war")).await.unwrap();

    let body = body_json(resp).await;
    assert_eq!(body["Title"], "Civil War");
}

#[tokio::test]
async fn search_filters_by_year_and_type() {
    let resp = app(KEY)
        .oneshot(get("/?apikey=test-key&t=Inception&y=2010&type=movie"))
        .await
        .unwrap();
    assert_eq!(body_json(resp).await["Response"], "True");

    let resp = app(KEY)
        .oneshot(get("/?apikey=test-key&t=Inception&y=1999"))
        .await
        .unwrap();
    assert_eq!(body_json(resp).await["Error"], "Movie not found!");

    let resp = app(KEY)
        .oneshot(get("/?apikey=test-key&t=Dark&type=series"))
        .await
        .unwrap();
    assert_eq!(body_json(resp).await["Type"], "series");
}

#[tokio::test]
async fn search_unknown_title_returns_semantic_failure() {
    let resp = app(KEY).oneshot(get("/?apikey=test-key&t=Nope")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["Response"], "False");
    assert_eq!(body["Error"], "Movie not found!");
}

#[tokio::test]
async fn search_without_title() {
    let resp = app(KEY).oneshot(get("/?apikey=test-key")).await.unwrap();

    assert_eq!(body_json(resp).await["Error"], "Incorrect IMDb ID.");
}

#[tokio::test]
async fn search_wrong_key_returns_401() {
    let resp = app(KEY).oneshot(get("/?apikey=bogus&t=Inception")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(resp).await["Error"], "Invalid API key!");
}

#[tokio::test]
async fn search_missing_key_returns_401() {
    let resp = app(KEY).oneshot(get("/?t=Inception")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(resp).await["Error"], "No API key provided.");
}

// --- tmdb ---

#[tokio::test]
async fn tmdb_movie_with_api_key() {
    let resp = app(KEY).oneshot(get("/3/movie/11?api_key=test-key")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["id"], 11);
    assert_eq!(body["title"], "Star Wars");
}

#[tokio::test]
async fn tmdb_movie_with_bearer_token() {
    let req = Request::builder()
        .uri("/3/movie/27205")
        .header(header::AUTHORIZATION, "Bearer test-key")
        .body(String::new())
        .unwrap();
    let resp = app(KEY).oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["title"], "Inception");
}

#[tokio::test]
async fn tmdb_movie_unauthorized() {
    let resp = app(KEY).oneshot(get("/3/movie/11")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(resp).await["status_code"], 7);
}

#[tokio::test]
async fn tmdb_movie_not_found() {
    let resp = app(KEY).oneshot(get("/3/movie/1?api_key=test-key")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["status_code"], 34);
}

#[tokio::test]
async fn tmdb_movie_bad_id_returns_400() {
    let resp = app(KEY).oneshot(get("/3/movie/not-a-number?api_key=test-key")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- maintenance ---

#[tokio::test]
async fn maintenance_returns_html() {
    let resp = app(KEY).oneshot(get("/maintenance")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let bytes = body_bytes(resp).await;
    assert!(bytes.starts_with(b"<html>"));
}
