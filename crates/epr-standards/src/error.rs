#![deny(unsafe_code)]

use std::path::{Path, PathBuf};

use crate::context::SourceContext;

/// Broad failure class of a [`LoadError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The file could not be read.
    Io,
    /// The text is not well-formed JSON.
    Parse,
    /// Well-formed JSON without the shape the tool depends on.
    Structural,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parse error at line {line}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
        context: SourceContext,
    },

    #[error("Expected '{key}' key at root level")]
    MissingKey { path: PathBuf, key: String },

    #[error("expected exactly one root key in {path}, found {found}")]
    RootKeyCount { path: PathBuf, found: usize },

    #[error("invalid structure in {path} at {location}: {message}")]
    InvalidStructure {
        path: PathBuf,
        location: String,
        message: String,
    },
}

impl LoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Build a parse error from a `serde_json` syntax error.
    ///
    /// `source` is the text that failed to parse; the lines around the
    /// failure are kept for the diagnostic.
    ///
    /// End-of-input errors sit one line past the text; `line` is the marked
    /// line of the context so the headline and the excerpt agree.
    pub(crate) fn parse(path: &Path, source: &str, error: &serde_json::Error) -> Self {
        let context = SourceContext::around(source, error.line());
        Self::Parse {
            path: path.to_path_buf(),
            line: context.error_line().unwrap_or(error.line()),
            column: error.column(),
            message: bare_message(error),
            context,
        }
    }

    pub(crate) fn invalid(
        path: &Path,
        location: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidStructure {
            path: path.to_path_buf(),
            location: location.into(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            LoadError::Io { .. } => FailureKind::Io,
            LoadError::Parse { .. } => FailureKind::Parse,
            LoadError::MissingKey { .. }
            | LoadError::RootKeyCount { .. }
            | LoadError::InvalidStructure { .. } => FailureKind::Structural,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            LoadError::Io { path, .. }
            | LoadError::Parse { path, .. }
            | LoadError::MissingKey { path, .. }
            | LoadError::RootKeyCount { path, .. }
            | LoadError::InvalidStructure { path, .. } => path,
        }
    }

    /// Source lines around a parse failure, if this is one.
    pub fn source_context(&self) -> Option<&SourceContext> {
        match self {
            LoadError::Parse { context, .. } => Some(context),
            _ => None,
        }
    }
}

/// The `serde_json` message without its trailing position.
pub(crate) fn bare_message(error: &serde_json::Error) -> String {
    let full = error.to_string();
    let position = format!(" at line {} column {}", error.line(), error.column());
    full.strip_suffix(&position).unwrap_or(&full).to_string()
}
