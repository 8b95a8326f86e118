//! Error types shared by every figsync crate

// Rust 1.92 compiler bug: false positives for thiserror/miette derive macro fields
// https://github.com/rust-lang/rust/issues/147648
#![allow(unused_assignments)]

use miette::Diagnostic;
use std::path::Path;
use thiserror::Error;

/// Error type for figsync operations
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// A remote call failed, returned a non-success status or an unparseable body
    #[error("Failed to fetch {target}: {message}")]
    #[diagnostic(
        code(figsync::fetch),
        help("Check the network connection and that the Figma token can read the file")
    )]
    Fetch {
        /// What was being fetched (endpoint or URL)
        target: String,
        /// Underlying failure description
        message: String,
    },

    /// A named entity expected in the design document is absent
    #[error("No {kind} named '{name}' was found in the design document")]
    #[diagnostic(code(figsync::not_found))]
    NotFound {
        /// Kind of entity ("page", "title component", ...)
        kind: String,
        /// Name that was searched for
        name: String,
    },

    /// The batched export response has no URL for a known icon
    #[error("No export URL for image {id} -> {component_name}")]
    #[diagnostic(code(figsync::missing_asset))]
    MissingAsset {
        /// Figma node identifier
        id: String,
        /// Component the icon would have produced
        component_name: String,
    },

    /// Enumeration produced zero icons
    #[error("No icon was found on page '{page}'")]
    #[diagnostic(
        code(figsync::empty_set),
        help("Check that every icon is a component placed inside a frame of the page")
    )]
    EmptySet {
        /// Page that was enumerated
        page: String,
    },

    /// The SVG to component transform failed
    #[error("Could not generate component {component_name}: {message}")]
    #[diagnostic(code(figsync::generation))]
    Generation {
        /// Component being generated
        component_name: String,
        /// Transform failure description
        message: String,
    },

    /// A filesystem operation failed while writing or cleaning outputs
    #[error("I/O {operation} failed: {}", path.display())]
    #[diagnostic(
        code(figsync::write),
        help("Check file permissions and ensure the path exists")
    )]
    Write {
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
        /// Path that caused the error
        path: Box<Path>,
        /// Operation that failed (e.g., "write", "append", "remove")
        operation: String,
    },

    /// Invalid setup (missing credential, unusable HTTP client)
    #[error("Configuration error: {message}")]
    #[diagnostic(code(figsync::config))]
    Configuration {
        /// Error message describing the configuration issue
        message: String,
    },
}

impl Error {
    /// Create a fetch error
    #[must_use]
    pub fn fetch(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fetch {
            target: target.into(),
            message: message.into(),
        }
    }

    /// Create a not found error
    #[must_use]
    pub fn not_found(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::NotFound {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Create a missing asset error
    #[must_use]
    pub fn missing_asset(id: impl Into<String>, component_name: impl Into<String>) -> Self {
        Self::MissingAsset {
            id: id.into(),
            component_name: component_name.into(),
        }
    }

    /// Create an empty set error
    #[must_use]
    pub fn empty_set(page: impl Into<String>) -> Self {
        Self::EmptySet { page: page.into() }
    }

    /// Create a generation error
    #[must_use]
    pub fn generation(component_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Generation {
            component_name: component_name.into(),
            message: message.into(),
        }
    }

    /// Create a write error with path context
    #[must_use]
    pub fn write(
        source: std::io::Error,
        path: impl AsRef<Path>,
        operation: impl Into<String>,
    ) -> Self {
        Self::Write {
            source,
            path: path.as_ref().into(),
            operation: operation.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration {
            message: msg.into(),
        }
    }
}

/// Result type for figsync operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_error_display_includes_path() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = Error::write(io, "/tmp/out/index.ts", "append");
        assert_eq!(error.to_string(), "I/O append failed: /tmp/out/index.ts");
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_diagnostic_codes() {
        let error = Error::empty_set("05 - Icons");
        let code = error.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("figsync::empty_set"));
        assert!(error.help().is_some());

        let error = Error::missing_asset("1:2", "OuiIconLeft");
        let code = error.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("figsync::missing_asset"));
    }
}
