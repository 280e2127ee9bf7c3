//! HTTP client for the NVD CVE API 2.0.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use url::Url;

use crate::{
    config::{ClientConfig, DEFAULT_BASE_URL},
    query::CveQuery,
    types::{CveResponse, VulnerabilityRecord},
    user_agent::get_user_agent,
    Error,
};

/// Header carrying the API key. Header names are case-insensitive on the wire.
const API_KEY_HEADER: &str = "apikey";

/// HTTP client for the CVE search endpoint.
///
/// Holds one `reqwest::Client` configured at construction with the user
/// agent, timeout, and optional `apiKey` header. It keeps no per-call state,
/// so a single instance can be shared between tasks.
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
}

impl Client {
    /// Creates a client for the production endpoint.
    pub fn new(api_key: Option<&str>) -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: Option<&str>) -> Result<Self, Error> {
        let config = match api_key {
            Some(key) => ClientConfig::default().with_api_key(key),
            None => ClientConfig::default(),
        };
        Self::from_config(config.with_base_url(base_url))
    }

    /// Creates a client from `NVD_*` environment variables; see [`ClientConfig::from_env`].
    pub fn from_env() -> Result<Self, Error> {
        Self::from_config(ClientConfig::from_env()?)
    }

    pub fn from_config(config: ClientConfig) -> Result<Self, Error> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            Error::InvalidConfig(format!("invalid base URL '{}': {}", config.base_url, e))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(api_key) = &config.api_key {
            let mut value = HeaderValue::from_str(api_key).map_err(|_| {
                Error::InvalidConfig("API key is not a valid header value".to_string())
            })?;
            value.set_sensitive(true);
            headers.insert(HeaderName::from_static(API_KEY_HEADER), value);
        }

        let http = reqwest::Client::builder()
            .user_agent(get_user_agent())
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetches one page of results, surfacing transport failures as errors.
    ///
    /// The query is validated before anything is sent; an unknown parameter or
    /// rejected value returns immediately without touching the network.
    pub async fn search_page(&self, query: &CveQuery) -> Result<CveResponse, Error> {
        let translated = query.translate()?;
        let url = translated.add_to_url(&self.base_url);
        tracing::debug!(params = translated.len(), "GET {}", url);

        let resp = self.http.get(url).send().await.map_err(|e| {
            tracing::error!("Failed to get resource: {}", e);
            Error::RequestFailed
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<CveResponse>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::RequestFailed
        })?;

        Ok(parsed)
    }

    /// Returns the `vulnerabilities` array for the query.
    ///
    /// Validation errors are returned. Transport, status and decode failures
    /// are logged and yield an empty list; use [`Client::search_page`] to tell
    /// them apart from a query with no matches.
    pub async fn search(&self, query: &CveQuery) -> Result<Vec<VulnerabilityRecord>, Error> {
        self.search_lenient(query)
            .await
            .map(|resp| resp.vulnerabilities)
    }

    /// Looks up a single CVE and returns the `cve` object of the first match.
    ///
    /// Returns `Ok(None)` when nothing matches or the request failed.
    pub async fn get(&self, cve_id: &str) -> Result<Option<serde_json::Value>, Error> {
        self.search_lenient(&CveQuery::new().with_cve_id(cve_id))
            .await
            .map(CveResponse::into_first_cve)
    }

    async fn search_lenient(&self, query: &CveQuery) -> Result<CveResponse, Error> {
        match self.search_page(query).await {
            Err(e) if !e.is_validation() => {
                tracing::warn!("CVE search failed, returning no results: {}", e);
                Ok(CveResponse::default())
            }
            other => other,
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn client_is_shareable() {
        assert_send_sync::<Client>();
    }

    #[test]
    fn rejects_malformed_base_url() {
        let err = Client::with_base_url("not a url", None).err().unwrap();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn rejects_api_key_with_newline() {
        let err = Client::new(Some("abc\ndef")).err().unwrap();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn default_endpoint() {
        let client = Client::new(None).unwrap();
        assert_eq!(
            client.base_url().as_str(),
            "https://services.nvd.nist.gov/rest/json/cves/2.0"
        );
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let body = "é".repeat(1500);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("...[truncated]"));
        assert!(truncated.len() < body.len());

        assert_eq!(truncate_body("short"), "short");
    }
}
