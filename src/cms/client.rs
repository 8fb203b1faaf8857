//! Read-only client for the Sanity HTTP query API.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error, warn};

use super::cache::ResponseCache;
use crate::config::CmsSettings;

#[derive(Debug, thiserror::Error)]
pub enum CmsError {
    #[error("CMS client is not configured")]
    NotConfigured,

    #[error("Failed to send request to content API: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Content API error ({status}): {body}")]
    Api { status: StatusCode, body: String },

    #[error("Failed to decode content API response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Named GROQ parameters (`$slug` etc.). Values are sent JSON-encoded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams(BTreeMap<String, Value>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.0.insert(name.to_string(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Query-string pairs in the `$name=<json>` form the API expects.
    fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(name, value)| (format!("${}", name), value.to_string()))
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    result: Value,
}

/// Process-wide handle to the content store.
///
/// Cheap to clone; clones share the HTTP connection pool and the cache.
#[derive(Debug, Clone)]
pub struct CmsClient {
    settings: CmsSettings,
    http: reqwest::Client,
    cache: Arc<ResponseCache>,
}

impl CmsClient {
    pub fn new(settings: CmsSettings) -> Self {
        Self {
            settings,
            http: reqwest::Client::new(),
            cache: Arc::new(ResponseCache::new()),
        }
    }

    pub fn settings(&self) -> &CmsSettings {
        &self.settings
    }

    pub fn is_configured(&self) -> bool {
        self.settings.is_configured()
    }

    /// Full query endpoint, or `None` when no project id is configured.
    pub fn query_url(&self) -> Option<String> {
        let project_id = self.settings.project_id.as_deref().filter(|_| self.is_configured())?;

        let base = match &self.settings.api_host {
            Some(host) => host.trim_end_matches('/').to_string(),
            None if self.settings.use_cdn => format!("https://{}.apicdn.sanity.io", project_id),
            None => format!("https://{}.api.sanity.io", project_id),
        };

        let version = self.settings.api_version.trim_start_matches('v');

        Some(format!(
            "{}/v{}/data/query/{}",
            base, version, self.settings.dataset
        ))
    }

    /// Run a query, returning `None` on any failure.
    ///
    /// Failures are logged here so callers only have to pick a fallback.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        query: &str,
        params: &QueryParams,
        tags: &[&str],
    ) -> Option<T> {
        match self.try_fetch(query, params, tags).await {
            Ok(value) => Some(value),
            Err(CmsError::NotConfigured) => {
                warn!("Sanity client not configured, set SANITY_PROJECT_ID to load content");
                None
            }
            Err(e) => {
                error!(error = %e, tags = ?tags, "Sanity fetch error");
                None
            }
        }
    }

    /// Run a query and surface the error instead of swallowing it.
    pub async fn try_fetch<T: DeserializeOwned>(
        &self,
        query: &str,
        params: &QueryParams,
        tags: &[&str],
    ) -> Result<T, CmsError> {
        let url = self.query_url().ok_or(CmsError::NotConfigured)?;

        let max_age = Duration::from_secs(self.settings.revalidate_secs());
        let key = cache_key(query, params);

        if !max_age.is_zero() {
            if let Some(cached) = self.cache.get(&key, max_age) {
                debug!(tags = ?tags, "Serving content query from cache");
                return Ok(serde_json::from_value(cached)?);
            }
        }

        let mut pairs = vec![
            ("query".to_string(), query.to_string()),
            ("perspective".to_string(), "published".to_string()),
        ];
        pairs.extend(params.to_query_pairs());

        let mut request = self.http.get(&url).query(&pairs);
        if let Some(token) = &self.settings.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CmsError::Api { status, body });
        }

        let bytes = response.bytes().await?;
        let envelope: QueryResponse = serde_json::from_slice(&bytes)?;
        let value = serde_json::from_value(envelope.result.clone())?;

        if !max_age.is_zero() {
            self.cache.insert(key, envelope.result, tags);
        }

        Ok(value)
    }

    /// Evict cached results carrying `tag`.
    pub fn invalidate_tag(&self, tag: &str) -> usize {
        self.cache.invalidate_tag(tag)
    }
}

fn cache_key(query: &str, params: &QueryParams) -> String {
    let params: Vec<String> = params
        .to_query_pairs()
        .into_iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect();
    format!("{}|{}", query, params.join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::{
        matchers::{header, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    // ==================== Helper Functions ====================

    fn settings(api_host: Option<String>, use_cdn: bool) -> CmsSettings {
        CmsSettings {
            project_id: Some("testproj".to_string()),
            dataset: "production".to_string(),
            api_version: "2024-01-01".to_string(),
            use_cdn,
            token: None,
            api_host,
        }
    }

    fn envelope(result: Value) -> Value {
        json!({ "ms": 4, "query": "*", "result": result })
    }

    // ==================== URL Tests ====================

    #[test]
    fn test_query_url_live_api() {
        let client = CmsClient::new(settings(None, false));
        assert_eq!(
            client.query_url().unwrap(),
            "https://testproj.api.sanity.io/v2024-01-01/data/query/production"
        );
    }

    #[test]
    fn test_query_url_cdn() {
        let client = CmsClient::new(settings(None, true));
        assert_eq!(
            client.query_url().unwrap(),
            "https://testproj.apicdn.sanity.io/v2024-01-01/data/query/production"
        );
    }

    #[test]
    fn test_query_url_override_and_prefixed_version() {
        let mut s = settings(Some("http://localhost:9999/".to_string()), false);
        s.api_version = "v2021-10-21".to_string();
        let client = CmsClient::new(s);
        assert_eq!(
            client.query_url().unwrap(),
            "http://localhost:9999/v2021-10-21/data/query/production"
        );
    }

    #[test]
    fn test_query_url_none_when_unconfigured() {
        let mut s = settings(None, false);
        s.project_id = None;
        assert!(CmsClient::new(s).query_url().is_none());
    }

    #[test]
    fn test_query_params_are_json_encoded() {
        let params = QueryParams::new().with("slug", "slate-roof").with("limit", 3);
        let pairs = params.to_query_pairs();
        assert!(pairs.contains(&("$slug".to_string(), "\"slate-roof\"".to_string())));
        assert!(pairs.contains(&("$limit".to_string(), "3".to_string())));
    }

    // ==================== Fetch Tests ====================

    #[tokio::test]
    async fn test_fetch_unconfigured_returns_none() {
        let mut s = settings(None, false);
        s.project_id = None;
        let client = CmsClient::new(s);

        let result: Option<Vec<Value>> = client.fetch("*", &QueryParams::new(), &[]).await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_try_fetch_unconfigured_error() {
        let mut s = settings(None, false);
        s.project_id = Some(String::new());
        let client = CmsClient::new(s);

        let result: Result<Value, _> = client.try_fetch("*", &QueryParams::new(), &[]).await;
        assert!(matches!(result, Err(CmsError::NotConfigured)));
    }

    #[tokio::test]
    async fn test_fetch_success_sends_query_and_params() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2024-01-01/data/query/production"))
            .and(query_param("query", "*[slug.current == $slug]"))
            .and(query_param("$slug", "\"slate-roof\""))
            .and(query_param("perspective", "published"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(envelope(json!({ "title": "Slate" }))),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = CmsClient::new(settings(Some(mock_server.uri()), false));
        let params = QueryParams::new().with("slug", "slate-roof");
        let result: Option<Value> = client
            .fetch("*[slug.current == $slug]", &params, &["project"])
            .await;

        assert_eq!(result, Some(json!({ "title": "Slate" })));
    }

    #[tokio::test]
    async fn test_fetch_sends_bearer_token() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(header("Authorization", "Bearer read-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([]))))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut s = settings(Some(mock_server.uri()), false);
        s.token = Some("read-token".to_string());
        let client = CmsClient::new(s);

        let result: Option<Vec<Value>> = client.fetch("*", &QueryParams::new(), &[]).await;
        assert_eq!(result, Some(vec![]));
    }

    #[tokio::test]
    async fn test_fetch_server_error_returns_none() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&mock_server)
            .await;

        let client = CmsClient::new(settings(Some(mock_server.uri()), false));
        let result: Option<Vec<Value>> = client.fetch("*", &QueryParams::new(), &[]).await;
        assert!(result.is_none());

        let err = client
            .try_fetch::<Vec<Value>>("*", &QueryParams::new(), &[])
            .await
            .unwrap_err();
        assert!(matches!(err, CmsError::Api { status, .. } if status == StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[tokio::test]
    async fn test_fetch_invalid_json_returns_none() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
            .mount(&mock_server)
            .await;

        let client = CmsClient::new(settings(Some(mock_server.uri()), false));
        let result: Option<Vec<Value>> = client.fetch("*", &QueryParams::new(), &[]).await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_fetch_connection_error_returns_none() {
        let client = CmsClient::new(settings(Some("http://localhost:1".to_string()), false));
        let result: Option<Vec<Value>> = client.fetch("*", &QueryParams::new(), &[]).await;
        assert!(result.is_none());
    }

    // ==================== Cache Tests ====================

    #[tokio::test]
    async fn test_cdn_reads_are_cached() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([1]))))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = CmsClient::new(settings(Some(mock_server.uri()), true));
        for _ in 0..3 {
            let result: Option<Vec<u32>> = client.fetch("*", &QueryParams::new(), &["project"]).await;
            assert_eq!(result, Some(vec![1]));
        }
    }

    #[tokio::test]
    async fn test_live_reads_are_not_cached() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([1]))))
            .expect(2)
            .mount(&mock_server)
            .await;

        let client = CmsClient::new(settings(Some(mock_server.uri()), false));
        for _ in 0..2 {
            let _: Option<Vec<u32>> = client.fetch("*", &QueryParams::new(), &["project"]).await;
        }
    }

    #[tokio::test]
    async fn test_invalidate_tag_forces_refetch() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([1]))))
            .expect(2)
            .mount(&mock_server)
            .await;

        let client = CmsClient::new(settings(Some(mock_server.uri()), true));
        let _: Option<Vec<u32>> = client.fetch("*", &QueryParams::new(), &["project"]).await;
        assert_eq!(client.invalidate_tag("project"), 1);
        let _: Option<Vec<u32>> = client.fetch("*", &QueryParams::new(), &["project"]).await;
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .expect(2)
            .mount(&mock_server)
            .await;

        let client = CmsClient::new(settings(Some(mock_server.uri()), true));
        for _ in 0..2 {
            let result: Option<Vec<u32>> = client.fetch("*", &QueryParams::new(), &["project"]).await;
            assert!(result.is_none());
        }
    }
}
