//! Figma access for figsync.
//!
//! Reads a design file over the REST API and turns the frames of one page into
//! [`IconDescriptor`](figsync_core::IconDescriptor)s, then downloads the SVG
//! rendering of each icon:
//!
//! 1. [`list_icons`]: fetch the document, locate the page and the frame
//!    title component, enumerate icons
//! 2. [`fetch_icon_contents`]: batch-request export URLs, download each SVG
//!
//! The network sits behind [`DesignSource`]; [`FigmaClient`] is the real
//! implementation.

pub mod client;
pub mod enumerate;
pub mod fetch;
pub mod node;
pub mod source;

pub use client::{FigmaClient, FigmaConfig};
pub use enumerate::enumerate_icons;
pub use fetch::{fetch_icon_contents, list_icons};
pub use node::{FileResponse, Node, NodeData, TITLE_MARKER_NAME};
pub use source::{DesignSource, ImageExport};
