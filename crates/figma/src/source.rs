//! Seam between the sync pipeline and the remote design tool

use crate::node::FileResponse;
use async_trait::async_trait;
use figsync_core::Result;
use serde::Deserialize;
use std::collections::HashMap;

/// Response of `GET /v1/images/{key}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageExport {
    /// Error reported by the export service, if any
    #[serde(default)]
    pub err: Option<String>,
    /// Export URL per node id; `null` when rendering failed
    #[serde(default)]
    pub images: HashMap<String, Option<String>>,
}

impl ImageExport {
    /// Export URL for a node id
    #[must_use]
    pub fn url(&self, id: &str) -> Option<&str> {
        self.images.get(id).and_then(|url| url.as_deref())
    }
}

/// Remote source of design documents and rendered artwork
#[async_trait]
pub trait DesignSource: Send + Sync {
    /// Fetch the whole document tree and component registry
    async fn fetch_document(&self) -> Result<FileResponse>;

    /// Request SVG export URLs for every id in one call
    async fn fetch_image_urls(&self, ids: &[&str]) -> Result<ImageExport>;

    /// Download the raw SVG served at an export URL
    async fn fetch_svg(&self, url: &str) -> Result<String>;
}
