use std::collections::BTreeSet;
use std::env;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;
use zip::ZipArchive;
use zip::result::ZipResult;

use crate::filter::SearchFilter;

/// Suffix identifying GWT module descriptors.
pub const GWT_XML_SUFFIX: &str = ".gwt.xml";

/// Resolve the process's own resource search path from the `CLASSPATH`
/// environment variable, split with the platform path separator.
pub fn default_search_path() -> Vec<PathBuf> {
    match env::var_os("CLASSPATH") {
        Some(raw) => env::split_paths(&raw)
            .filter(|p| !p.as_os_str().is_empty())
            .collect(),
        None => Vec::new(),
    }
}

/// Search every location for resources whose package passes `filter` and
/// whose path ends with `suffix`.
///
/// Directories are walked recursively; regular files are opened as ZIP/JAR
/// archives when they start with the PK magic, anything else is skipped.
/// An empty `search_path` falls back to [`default_search_path`]. Locations
/// that cannot be read are skipped with a warning, and locations that do
/// not exist contribute nothing. Duplicates across locations collapse;
/// iteration order of the result carries no meaning.
pub fn scan(search_path: &[PathBuf], filter: &SearchFilter, suffix: &str) -> BTreeSet<String> {
    let fallback;
    let locations = if search_path.is_empty() {
        fallback = default_search_path();
        &fallback
    } else {
        search_path
    };

    let mut matches = BTreeSet::new();
    for location in locations {
        if location.is_dir() {
            scan_directory(location, filter, suffix, &mut matches);
        } else if location.is_file() {
            if let Err(err) = scan_archive(location, filter, suffix, &mut matches) {
                warn!(location = %location.display(), %err, "skipping unreadable archive");
            }
        }
    }
    matches
}

/// Derive the dotted module name from a matched resource path:
/// `org/eclipse/che/Ide.gwt.xml` becomes `org.eclipse.che.Ide`.
pub fn module_name(resource: &str, suffix: &str) -> String {
    let stem = resource.strip_suffix(suffix).unwrap_or(resource);
    stem.replace('/', ".")
}

/// The dotted package of a `/`-separated resource path, empty for
/// resources at a search-path root.
fn package_of(resource: &str) -> String {
    match resource.rfind('/') {
        Some(idx) => resource[..idx].replace('/', "."),
        None => String::new(),
    }
}

fn is_match(resource: &str, filter: &SearchFilter, suffix: &str) -> bool {
    filter.accepts(&package_of(resource)) && resource.ends_with(suffix)
}

fn scan_directory(root: &Path, filter: &SearchFilter, suffix: &str, out: &mut BTreeSet<String>) {
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(location = %root.display(), %err, "skipping unreadable directory entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        let resource = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        if is_match(&resource, filter, suffix) {
            out.insert(resource);
        }
    }
}

fn scan_archive(
    path: &Path,
    filter: &SearchFilter,
    suffix: &str,
    out: &mut BTreeSet<String>,
) -> ZipResult<()> {
    let mut file = File::open(path)?;
    let mut magic = [0u8; 2];
    if file.read_exact(&mut magic).is_err() || &magic != b"PK" {
        // Not an archive; classpaths carry plenty of other files.
        return Ok(());
    }
    file.seek(SeekFrom::Start(0))?;

    let archive = ZipArchive::new(file)?;
    for name in archive.file_names() {
        if is_match(name, filter, suffix) {
            out.insert(name.to_string());
        }
    }
    Ok(())
}
