//! # figsync-codegen
//!
//! Turns fetched icon artwork into React/TypeScript component files.
//!
//! This crate provides:
//! - an SVG to JSX transform with svgo-style optimization passes ([`svg`])
//! - a prettier-like JSX printer and the component template
//! - the component emitter, which writes component files and append-only
//!   category and global index files ([`ComponentEmitter`])
//! - the font asset emitter, which stages raw SVGs for icon font builds
//!   ([`FontAssetEmitter`])
//!
//! ## Output layout
//!
//! ```text
//! {root}/index.ts                      export {default as OuiIconLeft} from './arrows/oui-icon-left';
//! {root}/arrows/index.ts               export {default as OuiIconLeft} from './oui-icon-left';
//! {root}/arrows/oui-icon-left.tsx
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod font;
pub mod formatter;
pub mod generator;
pub mod jsx;
pub mod output;
pub mod svg;
pub mod template;

pub use font::FontAssetEmitter;
pub use generator::{ComponentEmitter, GeneratedComponent};
pub use output::clean_dir;
pub use svg::{SvgError, SvgTransform};
