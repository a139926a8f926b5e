//! Classpath scanning for GWT module descriptors.
//!
//! This crate finds `*.gwt.xml` resources across a classpath-like search
//! path of directories and JAR/ZIP archives, filtered by dotted package
//! prefixes, and turns matches into logical module names.

mod filter;
mod scan;

pub use filter::SearchFilter;
pub use scan::{GWT_XML_SUFFIX, default_search_path, module_name, scan};
