//! Icon descriptors produced by enumeration and consumed by the emitters

use crate::naming::{kebab_segment, pascal_case};

/// How file and component names are derived for one icon set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconNaming {
    /// Leading segment of every file name (e.g. `oui-icon`)
    pub prefix: String,
    /// Insert the category directory between prefix and icon name
    pub use_category_in_filename: bool,
}

impl IconNaming {
    /// Create naming rules for a prefix
    #[must_use]
    pub fn new(prefix: impl Into<String>, use_category_in_filename: bool) -> Self {
        Self {
            prefix: prefix.into(),
            use_category_in_filename,
        }
    }
}

/// One enumerated icon, immutable once built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconDescriptor {
    id: String,
    file_name: String,
    component_name: String,
    directory: String,
    font_compatible: bool,
}

impl IconDescriptor {
    /// Derive every generated name for an icon found in `category`.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        icon_name: &str,
        category: &str,
        naming: &IconNaming,
        font_compatible: bool,
    ) -> Self {
        let directory = kebab_segment(category);
        let stem = if naming.use_category_in_filename {
            format!("{}-{}", naming.prefix, directory)
        } else {
            naming.prefix.clone()
        };
        let file_name = format!("{stem}-{}", kebab_segment(icon_name));
        let component_name = pascal_case(&file_name);

        Self {
            id: id.into(),
            file_name,
            component_name,
            directory,
            font_compatible,
        }
    }

    /// Source node identifier
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Generated file name, without extension
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Generated component identifier
    #[must_use]
    pub fn component_name(&self) -> &str {
        &self.component_name
    }

    /// Category directory
    #[must_use]
    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// Whether the icon shape can go into the icon font
    #[must_use]
    pub const fn is_font_compatible(&self) -> bool {
        self.font_compatible
    }
}

/// An icon descriptor with its fetched SVG markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconContent {
    /// The enumerated icon
    pub descriptor: IconDescriptor,
    /// Raw SVG text as served by the export URL
    pub svg: String,
}

impl IconContent {
    /// Pair a descriptor with its markup
    #[must_use]
    pub fn new(descriptor: IconDescriptor, svg: impl Into<String>) -> Self {
        Self {
            descriptor,
            svg: svg.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_only_naming() {
        let naming = IconNaming::new("oui-icon", false);
        let icon = IconDescriptor::new("1:2", "Left", "Arrows", &naming, true);
        assert_eq!(icon.id(), "1:2");
        assert_eq!(icon.file_name(), "oui-icon-left");
        assert_eq!(icon.component_name(), "OuiIconLeft");
        assert_eq!(icon.directory(), "arrows");
        assert!(icon.is_font_compatible());
    }

    #[test]
    fn test_category_in_filename() {
        let naming = IconNaming::new("oui-emoji", true);
        let icon = IconDescriptor::new("7:9", "Café Açaí", "Food & Drinks", &naming, false);
        assert_eq!(icon.directory(), "food-drinks");
        assert_eq!(icon.file_name(), "oui-emoji-food-drinks-cafe-acai");
        assert_eq!(icon.component_name(), "OuiEmojiFoodDrinksCafeAcai");
        assert!(!icon.is_font_compatible());
    }
}
