//! Content fetching: one batched URL request, then one download per icon

use crate::enumerate::enumerate_icons;
use crate::source::DesignSource;
use figsync_core::{Error, IconContent, IconDescriptor, IconNaming, Result};
use tracing::{debug, info};

/// Fetch the document and enumerate the icons of `page_name`.
///
/// # Errors
///
/// Propagates fetch, lookup and enumeration failures
pub async fn list_icons(
    source: &dyn DesignSource,
    page_name: &str,
    naming: &IconNaming,
) -> Result<Vec<IconDescriptor>> {
    info!(page = page_name, "Fetching design document");
    let document = source.fetch_document().await?;

    let title_marker_id = document.find_title_marker_id()?;
    debug!(id = title_marker_id, "Found frame title component");

    let page = document.find_page(page_name)?;
    enumerate_icons(page, title_marker_id, naming)
}

/// Fetch the SVG markup of every icon, preserving order.
///
/// Downloads run one at a time and stop at the first failure so the error
/// always names the icon or URL responsible.
///
/// # Errors
///
/// Returns [`Error::Fetch`] when the batched request or a download fails, and
/// [`Error::MissingAsset`] when the export response lacks an icon's URL
pub async fn fetch_icon_contents(
    source: &dyn DesignSource,
    icons: Vec<IconDescriptor>,
) -> Result<Vec<IconContent>> {
    let ids: Vec<&str> = icons.iter().map(IconDescriptor::id).collect();
    info!(count = ids.len(), "Requesting export URLs");
    let export = source.fetch_image_urls(&ids).await?;

    info!("Downloading SVG content of each icon");
    let mut contents = Vec::with_capacity(icons.len());
    for icon in icons {
        let Some(url) = export.url(icon.id()) else {
            return Err(Error::missing_asset(icon.id(), icon.component_name()));
        };
        let svg = source.fetch_svg(url).await?;
        debug!(component = icon.component_name(), bytes = svg.len(), "Fetched SVG");
        contents.push(IconContent::new(icon, svg));
    }

    Ok(contents)
}
