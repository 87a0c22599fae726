//! Stub terminology API served on a local port.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, RawQuery, State},
    http::{HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use backend::{api_utils::terminology_api::TerminologyApi, settings::ApiSettings};
use serde_json::json;


#[derive(Debug, Clone, PartialEq)]
pub struct SeenRequest {
    pub method: Method,
    pub resource: String,
    pub query: String,
    pub include_facets: bool,
}

pub type Seen = Arc<Mutex<Vec<SeenRequest>>>;

pub async fn spawn_upstream(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

pub fn api_for(base_url: &str) -> TerminologyApi {
    TerminologyApi::new(&ApiSettings { base_url: base_url.to_string(), ..ApiSettings::default() }).unwrap()
}

/// Upstream answering every collection: concepts 35 hits (page 2 of 10), other types fewer.
pub async fn healthy_upstream() -> (String, Seen) {
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/{resource}/", get(collection).post(create))
        .route("/{resource}/{id}/", get(detail).put(update).delete(remove))
        .with_state(seen.clone());
    (spawn_upstream(app).await, seen)
}

/// Upstream answering every request with `status`.
pub async fn failing_upstream(status: StatusCode) -> String {
    let app = Router::new().fallback(move || async move { (status, "upstream says no") });
    spawn_upstream(app).await
}

async fn collection(
    State(seen): State<Seen>,
    method: Method,
    headers: HeaderMap,
    Path(resource): Path<String>,
    RawQuery(query): RawQuery,
) -> Response {
    seen.lock().unwrap().push(SeenRequest {
        method,
        resource: resource.clone(),
        query: query.unwrap_or_default(),
        include_facets: headers.get("includefacets").is_some_and(|v| v == "true"),
    });

    let (found, returned, offset) = match resource.as_str() {
        "concepts" => (35, 10, 10),
        "mappings" => (3, 3, 0),
        "sources" => (2, 2, 0),
        "collections" => (0, 0, 0),
        "orgs" => (1, 1, 0),
        "users" => (4, 4, 0),
        _ => return StatusCode::NOT_FOUND.into_response(),
    };
    let records = (0..returned).map(|i| json!({ "id": format!("{}-{}", resource, offset + i) })).collect::<Vec<_>>();
    let body = json!({
        "results": records,
        "facets": { "fields": {
            "conceptClass": [["Diagnosis", 20, false], ["Symptom", 15, false]],
            "locale": [["en", 35, false]]
        }}
    });
    let headers = [
        ("num_found", found.to_string()),
        ("num_returned", returned.to_string()),
        ("offset", offset.to_string()),
    ];
    (headers, Json(body)).into_response()
}

async fn detail(Path((resource, id)): Path<(String, String)>) -> Response {
    if id == "missing" {
        return StatusCode::NOT_FOUND.into_response();
    }
    Json(json!({ "type": resource, "id": id })).into_response()
}

async fn create(Path(resource): Path<String>, Json(body): Json<serde_json::Value>) -> Response {
    (StatusCode::CREATED, Json(json!({ "type": resource, "created": body }))).into_response()
}

async fn update(Path((_resource, id)): Path<(String, String)>, Json(body): Json<serde_json::Value>) -> Response {
    Json(json!({ "id": id, "updated": body })).into_response()
}

async fn remove(Path((_resource, _id)): Path<(String, String)>) -> Response {
    StatusCode::NO_CONTENT.into_response()
}
