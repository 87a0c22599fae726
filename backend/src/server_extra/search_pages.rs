use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, RawQuery, Request, State},
    http::{StatusCode, Uri},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use common::{param_bag::ParamBag, search_query::ResourceType, search_result::SearchResultPage};
use serde::Serialize;
use tracing::info;

use crate::api::search::{SearchContext, query_translator::PARAM_TYPE, search_for_results};
use crate::api_utils::{api_error::ApiError, terminology_api::TerminologyApi};
use crate::filter_table::FilterTable;
use crate::reference_data::{ReferenceData, StaticReferenceData};
use crate::settings::Settings;


#[derive(Clone)]
pub struct AppState {
    pub api: Arc<TerminologyApi>,
    pub filter_table: Arc<FilterTable>,
    pub reference: Arc<dyn ReferenceData>,
}

impl AppState {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        Ok(Self {
            api: Arc::new(TerminologyApi::new(&settings.api)?),
            filter_table: Arc::new(FilterTable::standard()),
            reference: Arc::new(StaticReferenceData::standard()),
        })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route("/search/", get(search_page))
        .route("/reference-data/", get(reference_data))
        .route("/{resource_type}/", get(resource_search_page))
        .layer(middleware::from_fn(|request: Request, next: Next| async move {
            let method = request.method().clone();
            let path = request.uri().path().to_string();
            let res = next.run(request).await;
            info!("{} {} -> {}", method, path, res.status());
            res
        }))
        .with_state(state)
}

async fn _search_page(state: &AppState, params: &ParamBag, base_url: &str, include_counts: bool) -> Result<SearchResultPage, ApiError> {
    let ctx = SearchContext {
        api: state.api.as_ref(),
        filter_table: state.filter_table.as_ref(),
        reference: state.reference.as_ref(),
    };
    search_for_results(&ctx, params, base_url, include_counts).await
}

fn parse_raw_query(query: Option<String>) -> ParamBag {
    query.as_deref().unwrap_or("").parse().unwrap_or_default()
}

/// Global search: results for the requested type plus counts for every other type.
pub async fn search_page(State(state): State<AppState>, uri: Uri, RawQuery(query): RawQuery) -> Response {
    let params = parse_raw_query(query);
    match _search_page(&state, &params, uri.path(), true).await {
        Ok(page) => Json(page).into_response(),
        Err(e) => api_error_response(e),
    }
}

/// Search restricted to the resource type named by the path, e.g. `/sources/`.
pub async fn resource_search_page(
    State(state): State<AppState>,
    Path(resource_type): Path<String>,
    uri: Uri,
    RawQuery(query): RawQuery,
) -> Response {
    let Some(resource_type) = ResourceType::from_param(&resource_type) else {
        return (StatusCode::NOT_FOUND, Json(serde_json::json!({ "error": "unknown resource type" }))).into_response();
    };
    let params = parse_raw_query(query).with_value(PARAM_TYPE, resource_type.as_str());
    match _search_page(&state, &params, uri.path(), false).await {
        Ok(page) => Json(page).into_response(),
        Err(e) => api_error_response(e),
    }
}

#[derive(Debug, Serialize)]
pub struct ReferenceDataResponse {
    pub concept_classes: Vec<String>,
    pub datatypes: Vec<String>,
    pub locales: Vec<LocaleOption>,
}

#[derive(Debug, Serialize)]
pub struct LocaleOption {
    pub code: String,
    pub name: String,
}

pub async fn reference_data(State(state): State<AppState>) -> Json<ReferenceDataResponse> {
    let reference = state.reference.as_ref();
    Json(ReferenceDataResponse {
        concept_classes: reference.concept_classes().to_vec(),
        datatypes: reference.datatypes().to_vec(),
        locales: reference
            .locales()
            .iter()
            .map(|(code, name)| LocaleOption { code: code.clone(), name: name.clone() })
            .collect(),
    })
}

/// 404 from the API stays a 404; every other upstream failure is a 502.
pub fn api_error_response(e: ApiError) -> Response {
    tracing::error!("search page: request failed: {:#?}", e);
    let status = if e.is_not_found() { StatusCode::NOT_FOUND } else { StatusCode::BAD_GATEWAY };
    (status, Json(serde_json::json!({ "error": e.to_string() }))).into_response()
}
