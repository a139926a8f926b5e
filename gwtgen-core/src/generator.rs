use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::template::Template;

/// Render the aggregate descriptor for `config` without touching disk.
pub fn render(config: &GeneratorConfig) -> Result<String> {
    let inherits = config
        .modules()
        .iter()
        .map(|module| format!("    <inherits name=\"{module}\"/>"))
        .collect::<Vec<_>>()
        .join("\n");

    let bindings = BTreeMap::from([
        ("modules", inherits),
        ("entryPoint", config.entry_point().to_string()),
        ("styleSheet", config.style_sheet().to_string()),
        ("loggingEnabled", config.logging_enabled().to_string()),
    ]);
    Template::bundled().render(&bindings)
}

/// Render the descriptor and write it to the configured target path,
/// creating parent directories as needed.
///
/// Refuses to overwrite: if the target already exists as a file or a
/// directory the call fails with [`Error::AlreadyExists`] before anything
/// is written. The content is staged in a temp file next to the target and
/// renamed into place without clobbering, so an interrupted run never
/// leaves a partial descriptor and a concurrent generator racing for the
/// same path loses with the same error.
pub fn generate(config: &GeneratorConfig) -> Result<PathBuf> {
    let target = config.target_path();
    if target.exists() {
        return Err(Error::AlreadyExists { path: target });
    }

    let content = render(config)?;

    let parent = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent).map_err(|source| Error::Io {
        path: parent.clone(),
        source,
    })?;

    let mut staged = NamedTempFile::new_in(&parent).map_err(|source| Error::Io {
        path: target.clone(),
        source,
    })?;
    staged
        .write_all(content.as_bytes())
        .map_err(|source| Error::Io {
            path: target.clone(),
            source,
        })?;
    staged.persist_noclobber(&target).map_err(|err| {
        if err.error.kind() == std::io::ErrorKind::AlreadyExists {
            Error::AlreadyExists {
                path: target.clone(),
            }
        } else {
            Error::Io {
                path: target.clone(),
                source: err.error,
            }
        }
    })?;

    Ok(target)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn modules(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_render_inherits_every_module_once() {
        let config = GeneratorConfig::new(modules(&["foo.Bar", "baz.Qux"]), ".");
        let rendered = render(&config).unwrap();
        assert_eq!(rendered.matches("foo.Bar").count(), 1);
        assert_eq!(rendered.matches("baz.Qux").count(), 1);
        assert_eq!(rendered.matches("<inherits").count(), 2);
    }

    #[test]
    fn test_render_binds_scalar_settings() {
        let config = GeneratorConfig::new(BTreeSet::new(), ".")
            .with_entry_point("x.Y")
            .with_style_sheet("s.css")
            .with_logging_enabled(true);
        let rendered = render(&config).unwrap();
        assert!(rendered.contains("<entry-point class=\"x.Y\"/>"));
        assert!(rendered.contains("<stylesheet src=\"s.css\"/>"));
        assert!(rendered.contains("name=\"gwt.logging.enabled\" value=\"true\""));
    }

    #[test]
    fn test_render_is_deterministic_regardless_of_insertion_order() {
        let forward = GeneratorConfig::new(modules(&["a.A", "b.B", "c.C"]), ".");
        let reverse = GeneratorConfig::new(modules(&["c.C", "b.B", "a.A"]), ".");
        assert_eq!(render(&forward).unwrap(), render(&reverse).unwrap());
    }
}
