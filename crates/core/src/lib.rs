//! Core types and utilities for figsync
//!
//! Shared by the Figma client, the component generator and the CLI:
//! - [`Error`]: the error taxonomy of a sync run
//! - [`IconDescriptor`] / [`IconContent`]: what flows through the pipeline
//! - [`naming`]: diacritic stripping and casing rules for generated names

pub mod error;
pub mod icon;
pub mod naming;

pub use error::{Error, Result};
pub use icon::{IconContent, IconDescriptor, IconNaming};
