//! Staging of raw SVG files for icon font compilation

use crate::output::write_file;
use figsync_core::{IconContent, Result};
use std::path::PathBuf;
use tracing::info;

/// Default staging directory consumed by the font build
pub const DEFAULT_STAGING_DIR: &str = "dist/fonts/icons/svg";

/// Copies font-compatible icons verbatim into a staging directory
#[derive(Debug, Clone)]
pub struct FontAssetEmitter {
    staging_root: PathBuf,
}

impl FontAssetEmitter {
    /// Create an emitter staging into `staging_root`
    #[must_use]
    pub fn new(staging_root: impl Into<PathBuf>) -> Self {
        Self {
            staging_root: staging_root.into(),
        }
    }

    /// Write `{staging}/{file_name}.svg` for a font-compatible icon.
    ///
    /// Icons that are not font-compatible are skipped and `None` is returned.
    ///
    /// # Errors
    ///
    /// Returns [`figsync_core::Error::Write`] if the file cannot be written
    pub fn stage(&self, icon: &IconContent) -> Result<Option<PathBuf>> {
        if !icon.descriptor.is_font_compatible() {
            return Ok(None);
        }

        let path = self
            .staging_root
            .join(format!("{}.svg", icon.descriptor.file_name()));
        info!(path = %path.display(), "Staging SVG for the icon font");
        write_file(&path, &icon.svg)?;
        Ok(Some(path))
    }
}
