//! Figma REST API client

use crate::node::FileResponse;
use crate::source::{DesignSource, ImageExport};
use async_trait::async_trait;
use figsync_core::{Error, Result};
use reqwest::{Client, RequestBuilder};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Public Figma API endpoint
pub const DEFAULT_API_BASE: &str = "https://api.figma.com";

/// Header carrying the personal access token
pub const TOKEN_HEADER: &str = "X-Figma-Token";

/// Connection settings for one design file
#[derive(Debug, Clone)]
pub struct FigmaConfig {
    /// API base URL, without trailing slash
    pub api_base: String,
    /// Key of the design file holding the artwork
    pub file_key: String,
    /// Personal access token
    pub token: SecretString,
}

impl FigmaConfig {
    /// Settings for the public API
    #[must_use]
    pub fn new(file_key: impl Into<String>, token: SecretString) -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            file_key: file_key.into(),
            token,
        }
    }

    /// Point the client at another API base (proxy, mock server)
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }
}

/// Client for the files and images endpoints of one design file
#[derive(Debug)]
pub struct FigmaClient {
    client: Client,
    config: FigmaConfig,
}

impl FigmaClient {
    /// Create a client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the TLS backend cannot be initialised
    pub fn new(config: FigmaConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("figsync/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    fn files_url(&self) -> String {
        format!("{}/v1/files/{}", self.config.api_base, self.config.file_key)
    }

    fn images_url(&self) -> String {
        format!("{}/v1/images/{}", self.config.api_base, self.config.file_key)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(TOKEN_HEADER, self.config.token.expose_secret())
    }

    async fn send_json<T: DeserializeOwned>(&self, target: &str, request: RequestBuilder) -> Result<T> {
        let response = request
            .send()
            .await
            .map_err(|e| Error::fetch(target, e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::fetch(target, format!("HTTP {}", response.status())));
        }

        response
            .json()
            .await
            .map_err(|e| Error::fetch(target, format!("invalid response body: {e}")))
    }
}

#[async_trait]
impl DesignSource for FigmaClient {
    async fn fetch_document(&self) -> Result<FileResponse> {
        let url = self.files_url();
        debug!(%url, file_key = %self.config.file_key, "Fetching design document");

        let request = self.authorized(self.client.get(&url));
        self.send_json(&url, request).await
    }

    async fn fetch_image_urls(&self, ids: &[&str]) -> Result<ImageExport> {
        let url = self.images_url();
        debug!(%url, count = ids.len(), "Requesting SVG export URLs");

        let request = self
            .authorized(self.client.get(&url))
            .query(&[("ids", ids.join(",").as_str()), ("format", "svg")]);
        let export: ImageExport = self.send_json(&url, request).await?;

        if let Some(err) = export.err.as_deref() {
            return Err(Error::fetch(&url, err));
        }
        Ok(export)
    }

    async fn fetch_svg(&self, url: &str) -> Result<String> {
        debug!(%url, "Downloading SVG");

        // Export URLs are pre-signed; the API token is not sent to them.
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::fetch(url, e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::fetch(url, format!("HTTP {}", response.status())));
        }

        response
            .text()
            .await
            .map_err(|e| Error::fetch(url, format!("unreadable body: {e}")))
    }
}
