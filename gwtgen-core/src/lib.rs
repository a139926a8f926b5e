//! Core generation types for the aggregate GWT module descriptor.
//!
//! The descriptor is rendered from a bundled template bound with the
//! discovered module names and a handful of scalar settings, then written
//! with an overwrite guard so a hand-maintained file is never clobbered.

mod config;
mod error;
mod generator;
mod template;

pub use config::{
    DEFAULT_ENTRY_POINT, DEFAULT_GWT_XML_PATH, DEFAULT_STYLE_SHEET, GeneratorConfig,
};
pub use error::{Error, Result};
pub use generator::{generate, render};
pub use template::Template;
