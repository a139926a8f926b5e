use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

pub const DEFAULT_GWT_XML_PATH: &str = "org/eclipse/che/ide/IDE.gwt.xml";
pub const DEFAULT_ENTRY_POINT: &str = "org.eclipse.che.ide.client.IDE";
pub const DEFAULT_STYLE_SHEET: &str = "IDE.css";

/// Everything the generator needs to emit one aggregate descriptor.
///
/// Built once from parsed flags (or the defaults above) and consumed by a
/// single [`generate`](crate::generate) call; never mutated afterwards.
/// Module names are held in a `BTreeSet` so rendering is deterministic.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    modules: BTreeSet<String>,
    root_dir: PathBuf,
    gwt_file_name: PathBuf,
    entry_point: String,
    style_sheet: String,
    logging_enabled: bool,
}

impl GeneratorConfig {
    /// Create a config with the default file name, entry point and
    /// stylesheet, and logging disabled.
    pub fn new(modules: BTreeSet<String>, root_dir: impl Into<PathBuf>) -> Self {
        Self {
            modules,
            root_dir: root_dir.into(),
            gwt_file_name: PathBuf::from(DEFAULT_GWT_XML_PATH),
            entry_point: DEFAULT_ENTRY_POINT.to_string(),
            style_sheet: DEFAULT_STYLE_SHEET.to_string(),
            logging_enabled: false,
        }
    }

    pub fn with_gwt_file_name(mut self, gwt_file_name: impl Into<PathBuf>) -> Self {
        self.gwt_file_name = gwt_file_name.into();
        self
    }

    pub fn with_entry_point(mut self, entry_point: impl Into<String>) -> Self {
        self.entry_point = entry_point.into();
        self
    }

    pub fn with_style_sheet(mut self, style_sheet: impl Into<String>) -> Self {
        self.style_sheet = style_sheet.into();
        self
    }

    pub fn with_logging_enabled(mut self, logging_enabled: bool) -> Self {
        self.logging_enabled = logging_enabled;
        self
    }

    /// The dotted names of every module inherited by the descriptor.
    pub fn modules(&self) -> &BTreeSet<String> {
        &self.modules
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Where the descriptor will be written: the file name resolved
    /// against the root directory.
    pub fn target_path(&self) -> PathBuf {
        self.root_dir.join(&self.gwt_file_name)
    }

    pub fn entry_point(&self) -> &str {
        &self.entry_point
    }

    pub fn style_sheet(&self) -> &str {
        &self.style_sheet
    }

    pub fn logging_enabled(&self) -> bool {
        self.logging_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::new(BTreeSet::new(), ".");
        assert_eq!(
            config.target_path(),
            PathBuf::from(".").join(DEFAULT_GWT_XML_PATH)
        );
        assert_eq!(config.entry_point(), DEFAULT_ENTRY_POINT);
        assert_eq!(config.style_sheet(), DEFAULT_STYLE_SHEET);
        assert!(!config.logging_enabled());
    }

    #[test]
    fn test_builder_overrides() {
        let config = GeneratorConfig::new(BTreeSet::new(), "out")
            .with_gwt_file_name("App.gwt.xml")
            .with_entry_point("x.Y")
            .with_style_sheet("s.css")
            .with_logging_enabled(true);
        assert_eq!(config.target_path(), PathBuf::from("out/App.gwt.xml"));
        assert_eq!(config.entry_point(), "x.Y");
        assert_eq!(config.style_sheet(), "s.css");
        assert!(config.logging_enabled());
    }
}
