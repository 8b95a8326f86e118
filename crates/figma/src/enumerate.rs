//! Icon enumeration over a located page

use crate::node::Node;
use figsync_core::{Error, IconDescriptor, IconNaming, Result};
use tracing::debug;

/// Walk the frames of `page` and describe every icon they contain.
///
/// Frames are categories; their component and instance children are icons.
/// Children instantiated from the title marker component are captions and are
/// skipped. Order follows the tree.
///
/// # Errors
///
/// Returns [`Error::EmptySet`] when the page holds no icon at all
pub fn enumerate_icons(
    page: &Node,
    title_marker_id: &str,
    naming: &IconNaming,
) -> Result<Vec<IconDescriptor>> {
    let mut icons = Vec::new();

    for frame in page.children() {
        let Node::Frame(category) = frame else {
            continue;
        };

        for child in &category.children {
            if child.component_id() == Some(title_marker_id) {
                continue;
            }
            if !child.is_icon_shape() {
                continue;
            }
            let Some(data) = child.data() else {
                continue;
            };

            let icon = IconDescriptor::new(
                &data.id,
                &data.name,
                &category.name,
                naming,
                child.is_font_compatible(),
            );
            debug!(
                id = icon.id(),
                component = icon.component_name(),
                category = icon.directory(),
                "Registered icon"
            );
            icons.push(icon);
        }
    }

    if icons.is_empty() {
        return Err(Error::empty_set(page.name().unwrap_or_default()));
    }
    Ok(icons)
}
