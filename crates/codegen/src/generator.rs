//! Component file generation
//!
//! This module turns fetched icons into source files:
//! - transforming the SVG markup and rendering the component template
//! - writing `{root}/{directory}/{file_name}.tsx`
//! - appending re-exports to the category index and the global index

use crate::output::{append_line, write_file};
use crate::svg::SvgTransform;
use crate::template::ComponentTemplate;
use figsync_core::{Error, IconContent, IconDescriptor, Result};
use std::path::PathBuf;

/// Extension of generated component files
pub const COMPONENT_EXTENSION: &str = "tsx";

/// Name of the generated index files
pub const INDEX_FILE: &str = "index.ts";

/// Generated component information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedComponent {
    /// Path the component was written to
    pub path: PathBuf,
    /// Exported component name
    pub component_name: String,
}

/// Writes icon components below a root directory
#[derive(Debug)]
pub struct ComponentEmitter {
    root: PathBuf,
    template: ComponentTemplate,
}

impl ComponentEmitter {
    /// Create an emitter writing below `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            template: ComponentTemplate::default(),
        }
    }

    /// Path of the component file for an icon
    #[must_use]
    pub fn component_path(&self, icon: &IconDescriptor) -> PathBuf {
        self.root
            .join(icon.directory())
            .join(format!("{}.{COMPONENT_EXTENSION}", icon.file_name()))
    }

    /// Generate the component source of an icon without writing anything.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Generation`] if the SVG cannot be transformed
    pub fn generate(&self, icon: &IconContent) -> Result<String> {
        let descriptor = &icon.descriptor;
        let jsx = SvgTransform::for_icon(descriptor.file_name())
            .transform(&icon.svg)
            .map_err(|e| Error::generation(descriptor.component_name(), e.to_string()))?;

        Ok(self.template.render(descriptor.component_name(), &jsx))
    }

    /// Generate, write and index one component.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Generation`] if the transform fails and
    /// [`Error::Write`] if any file cannot be written
    pub fn emit(&self, icon: &IconContent) -> Result<GeneratedComponent> {
        let descriptor = &icon.descriptor;
        let path = self.component_path(descriptor);
        tracing::info!(path = %path.display(), "Generating icon component");

        let source = self.generate(icon)?;
        write_file(&path, &source)?;
        self.reference_in_indexes(descriptor)?;

        Ok(GeneratedComponent {
            path,
            component_name: descriptor.component_name().to_string(),
        })
    }

    fn reference_in_indexes(&self, icon: &IconDescriptor) -> Result<()> {
        let category_index = self.root.join(icon.directory()).join(INDEX_FILE);
        append_line(
            &category_index,
            &format!(
                "export {{default as {}}} from './{}';",
                icon.component_name(),
                icon.file_name()
            ),
        )?;

        let global_index = self.root.join(INDEX_FILE);
        append_line(
            &global_index,
            &format!(
                "export {{default as {}}} from './{}/{}';",
                icon.component_name(),
                icon.directory(),
                icon.file_name()
            ),
        )
    }
}
