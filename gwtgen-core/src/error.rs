use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for descriptor generation.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// The target output path pre-exists as a file or directory. The
    /// generator never overwrites; this surfaces as a fatal error.
    #[error("{} already exists or is a directory", path.display())]
    #[diagnostic(
        code(gwtgen::already_exists),
        help("remove the existing file or pick a different --gwt-file-name")
    )]
    AlreadyExists { path: PathBuf },

    /// The bundled descriptor template is malformed or cannot be bound.
    /// Non-recoverable configuration error, never retried.
    #[error("unable to read template: {reason}")]
    #[diagnostic(code(gwtgen::template_unavailable))]
    TemplateUnavailable { reason: String },

    /// I/O failure while writing the descriptor.
    #[error("failed to write {}", path.display())]
    #[diagnostic(code(gwtgen::write_failed))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
