use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the document query API and the file/stream entry points.
///
/// Parsing itself never fails: malformed lines are skipped. The only failures
/// are lookups of names that do not exist and I/O problems while reading input.
#[derive(Error, Debug, Diagnostic)]
pub enum IniError {
    #[error("Section [{name}] not found")]
    #[diagnostic(
        code(ini::section_not_found),
        help("Section names are matched exactly and case-sensitively, after trimming.")
    )]
    SectionNotFound { name: String },

    #[error("Key `{key}` not found in section [{section}]")]
    #[diagnostic(
        code(ini::key_not_found),
        help("Keys are matched exactly and case-sensitively, after trimming.")
    )]
    KeyNotFound { section: String, key: String },

    #[error("Failed to read {}", display_path(.path))]
    #[diagnostic(
        code(ini::io),
        help("Check that the file exists, is readable and contains valid UTF-8.")
    )]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => p.display().to_string(),
        None => "input".to_string(),
    }
}

impl IniError {
    pub(crate) fn io(path: Option<PathBuf>, source: std::io::Error) -> Self {
        IniError::Io { path, source }
    }
}
