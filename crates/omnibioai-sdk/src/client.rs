//! Registry client and its two read operations.

use crate::config::{ClientConfig, ClientOptions};
use crate::error::{Error, Result};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde_json::Value;

const OBJECTS_PATH: &str = "/api/dev/objects/";

/// Client for the OmniBioAI object registry.
///
/// Holds the resolved configuration and one HTTP connection pool. Every
/// operation is a single authenticated `GET`; nothing is retried or cached.
#[derive(Debug, Clone)]
pub struct OmniClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl OmniClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("omnibioai-sdk/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()?;

        Ok(Self { config, http })
    }

    /// Configure from `OMNIBIOAI_BASE_URL` / `OMNIBIOAI_TOKEN`, or defaults.
    pub fn from_env() -> Result<Self> {
        Self::with_options(ClientOptions::default())
    }

    /// Explicit options first, then the environment, then defaults.
    pub fn with_options(options: ClientOptions) -> Result<Self> {
        Self::new(ClientConfig::from_env(options)?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// List objects: `GET /api/dev/objects/`.
    pub async fn objects_list(&self) -> Result<Value> {
        self.get_json(OBJECTS_PATH).await
    }

    /// Fetch one object: `GET /api/dev/objects/{object_id}/`.
    ///
    /// The identifier is not validated; the registry decides whether it
    /// names an object.
    pub async fn object_get(&self, object_id: &str) -> Result<Value> {
        self.get_json(&format!("{OBJECTS_PATH}{object_id}/")).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url())
    }

    async fn get_json(&self, path: &str) -> Result<Value> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let resp = self
            .http
            .get(&url)
            .bearer_auth(self.config.token())
            .send()
            .await?;
        let status = resp.status();
        tracing::debug!(%url, status = status.as_u16(), "registry responded");

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Http {
                status: status.as_u16(),
                body,
            });
        }
        Ok(resp.json().await?)
    }
}
