use std::collections::BTreeMap;

use async_trait::async_trait;
use anyhow::Context;
use common::search_query::ResourceType;
use reqwest::{
    StatusCode,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{api_utils::api_error::ApiError, settings::ApiSettings};

pub const HEADER_NUM_FOUND: &str = "num_found";
pub const HEADER_NUM_RETURNED: &str = "num_returned";
pub const HEADER_OFFSET: &str = "offset";
pub const HEADER_INCLUDE_FACETS: &str = "INCLUDEFACETS";


/// Paging headers attached to every collection response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageHeaders {
    pub num_found: u64,
    pub num_returned: u64,
    pub offset: u64,
}

impl PageHeaders {
    /// Missing or non-integer headers read as zero.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let read = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u64>().ok())
                .unwrap_or(0)
        };
        Self {
            num_found: read(HEADER_NUM_FOUND),
            num_returned: read(HEADER_NUM_RETURNED),
            offset: read(HEADER_OFFSET),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawApiResponse {
    pub headers: PageHeaders,
    pub body: serde_json::Value,
}

impl RawApiResponse {
    /// Records of a collection response: a bare array, the `results` of a faceted
    /// response, or a single object.
    pub fn records(&self) -> Vec<serde_json::Value> {
        match &self.body {
            serde_json::Value::Array(items) => items.clone(),
            serde_json::Value::Object(obj) => match obj.get("results") {
                Some(serde_json::Value::Array(items)) => items.clone(),
                _ => vec![self.body.clone()],
            },
            serde_json::Value::Null => vec![],
            other => vec![other.clone()],
        }
    }

    /// The `facets.fields` object, when the API attached facets.
    pub fn facet_fields(&self) -> Option<&serde_json::Map<String, serde_json::Value>> {
        self.body.get("facets")?.get("fields")?.as_object()
    }
}


/// Search calls the search pages depend on.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, resource_type: ResourceType, params: &BTreeMap<String, String>) -> Result<RawApiResponse, ApiError>;

    /// Total hits only, without fetching records.
    async fn count(&self, resource_type: ResourceType, params: &BTreeMap<String, String>) -> Result<u64, ApiError>;
}


pub struct TerminologyApi {
    client: reqwest::Client,
    base_url: String,
}

impl TerminologyApi {
    pub fn new(settings: &ApiSettings) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(token) = &settings.token {
            let value = HeaderValue::from_str(&format!("Token {}", token)).context("API token is not a valid header value")?;
            headers.insert(AUTHORIZATION, value);
        }
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client, base_url: settings.base_url.trim_end_matches('/').to_string() })
    }

    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    pub async fn get(&self, path: &str, params: &BTreeMap<String, String>) -> Result<RawApiResponse, ApiError> {
        self.get_with_headers(path, params, &[]).await
    }

    async fn get_with_headers(
        &self,
        path: &str,
        params: &BTreeMap<String, String>,
        extra_headers: &[(&'static str, &'static str)],
    ) -> Result<RawApiResponse, ApiError> {
        let t0 = std::time::Instant::now();
        let mut request = self.client.get(self.url(path)).query(params);
        for (name, value) in extra_headers {
            request = request.header(*name, *value);
        }
        let response = ensure_success(request.send().await?).await?;
        let headers = PageHeaders::from_headers(response.headers());
        let body = decode_body(&response.text().await?)?;
        info!("GET {} -> {} found in {}ms", path, headers.num_found, t0.elapsed().as_millis());
        Ok(RawApiResponse { headers, body })
    }

    pub async fn head(&self, path: &str, params: &BTreeMap<String, String>) -> Result<PageHeaders, ApiError> {
        let response = ensure_success(self.client.head(self.url(path)).query(params).send().await?).await?;
        let headers = PageHeaders::from_headers(response.headers());
        debug!("HEAD {} -> {} found", path, headers.num_found);
        Ok(headers)
    }

    pub async fn post(&self, path: &str, body: &serde_json::Value) -> Result<serde_json::Value, ApiError> {
        let request = self.client.post(self.url(path)).header(CONTENT_TYPE, "application/json").body(serde_json::to_vec(body)?);
        let response = ensure_success(request.send().await?).await?;
        info!("POST {} -> {}", path, response.status());
        decode_body(&response.text().await?)
    }

    pub async fn put(&self, path: &str, body: &serde_json::Value) -> Result<serde_json::Value, ApiError> {
        let request = self.client.put(self.url(path)).header(CONTENT_TYPE, "application/json").body(serde_json::to_vec(body)?);
        let response = ensure_success(request.send().await?).await?;
        info!("PUT {} -> {}", path, response.status());
        decode_body(&response.text().await?)
    }

    pub async fn delete(&self, path: &str) -> Result<serde_json::Value, ApiError> {
        let response = ensure_success(self.client.delete(self.url(path)).send().await?).await?;
        info!("DELETE {} -> {}", path, response.status());
        decode_body(&response.text().await?)
    }
}

#[async_trait]
impl SearchBackend for TerminologyApi {
    async fn search(&self, resource_type: ResourceType, params: &BTreeMap<String, String>) -> Result<RawApiResponse, ApiError> {
        self.get_with_headers(&resource_type.api_path(), params, &[(HEADER_INCLUDE_FACETS, "true")]).await
    }

    async fn count(&self, resource_type: ResourceType, params: &BTreeMap<String, String>) -> Result<u64, ApiError> {
        Ok(self.head(&resource_type.api_path(), params).await?.num_found)
    }
}

async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let url = response.url().to_string();
    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound { url });
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::RequestFailed { status: status.as_u16(), url, body })
}

fn decode_body(text: &str) -> Result<serde_json::Value, ApiError> {
    if text.trim().is_empty() {
        return Ok(serde_json::Value::Null);
    }
    Ok(serde_json::from_str(text)?)
}
