use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::Html,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Movie {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Type")]
    pub media_type: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Plot")]
    pub plot: String,
    #[serde(skip)]
    pub tmdb_id: Option<u64>,
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub apikey: Option<String>,
    pub t: Option<String>,
    pub y: Option<String>,
    #[serde(rename = "type")]
    pub media_type: Option<String>,
}

#[derive(Deserialize)]
pub struct TmdbParams {
    pub api_key: Option<String>,
}

pub struct Catalog {
    pub api_key: String,
    pub movies: Vec<Movie>,
}

pub type Db = Arc<Catalog>;

pub fn catalog() -> Vec<Movie> {
    let movie = |title: &str, year: &str, media_type: &str, imdb_id: &str, plot: &str, tmdb_id| Movie {
        title: title.to_string(),
        year: year.to_string(),
        media_type: media_type.to_string(),
        imdb_id: imdb_id.to_string(),
        plot: plot.to_string(),
        tmdb_id,
    };
    vec![
        movie(
            "Inception",
            "2010",
            "movie",
            "tt1375666",
            "A thief who steals corporate secrets through the use of dream-sharing technology",
            Some(27205),
        ),
        movie(
            "Civil War",
            "2024",
            "movie",
            "tt17279496",
            "A journey across a dystopian future America.",
            Some(929590),
        ),
        movie(
            "Star Wars",
            "1977",
            "movie",
            "tt0076759",
            "Luke Skywalker joins forces with a Jedi Knight.",
            Some(11),
        ),
        movie(
            "Dark",
            "2017–2020",
            "series",
            "tt5753856",
            "A family saga with a supernatural twist.",
            None,
        ),
    ]
}

pub fn app(api_key: &str) -> Router {
    let db: Db = Arc::new(Catalog {
        api_key: api_key.to_string(),
        movies: catalog(),
    });
    Router::new()
        .route("/", get(search))
        .route("/3/movie/{id}", get(tmdb_movie))
        .route("/maintenance", get(maintenance))
        .with_state(db)
}

pub async fn run(listener: TcpListener, api_key: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app(api_key)).await
}

fn omdb_error(message: &str) -> Json<Value> {
    Json(json!({ "Response": "False", "Error": message }))
}

async fn search(State(db): State<Db>, Query(params): Query<SearchParams>) -> (StatusCode, Json<Value>) {
    match params.apikey.as_deref() {
        None | Some("") => return (StatusCode::UNAUTHORIZED, omdb_error("No API key provided.")),
        Some(key) if key != db.api_key => {
            return (StatusCode::UNAUTHORIZED, omdb_error("Invalid API key!"))
        }
        Some(_) => {}
    }

    let Some(title) = params.t.as_deref().filter(|t| !t.is_empty()) else {
        return (StatusCode::OK, omdb_error("Incorrect IMDb ID."));
    };

    let found = db.movies.iter().find(|m| {
        m.title.eq_ignore_ascii_case(title)
            && params.y.as_deref().is_none_or(|y| m.year.starts_with(y))
            && params
                .media_type
                .as_deref()
                .is_none_or(|t| m.media_type.eq_ignore_ascii_case(t))
    });

    match found {
        Some(movie) => {
            let mut body = serde_json::to_value(movie).unwrap_or_default();
            if let Value::Object(fields) = &mut body {
                fields.insert("Response".to_string(), json!("True"));
            }
            (StatusCode::OK, Json(body))
        }
        None => (StatusCode::OK, omdb_error("Movie not found!")),
    }
}

async fn tmdb_movie(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Query(params): Query<TmdbParams>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));
    let authorized = params.api_key.as_deref() == Some(db.api_key.as_str())
        || bearer == Some(db.api_key.as_str());
    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "success": false,
                "status_code": 7,
                "status_message": "Invalid API key: You must be granted a valid key."
            })),
        );
    }

    match db.movies.iter().find(|m| m.tmdb_id == Some(id)) {
        Some(movie) => (
            StatusCode::OK,
            Json(json!({
                "id": id,
                "title": movie.title,
                "imdb_id": movie.imdb_id,
                "overview": movie.plot,
            })),
        ),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "success": false,
                "status_code": 34,
                "status_message": "The resource you requested could not be found."
            })),
        ),
    }
}

async fn maintenance() -> (StatusCode, Html<&'static str>) {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Html("<html><body><h1>Down for maintenance</h1></body></html>"),
    )
}
