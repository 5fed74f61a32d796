//! Error types for the Incisor analysis core.

/// Result type alias for Incisor operations.
pub type Result<T> = std::result::Result<T, IncisorError>;

/// Errors the core can raise.
///
/// The analyzer itself never fails because code *looks* wrong to it --
/// unresolved providers and ambiguous candidates are diagnostics, not
/// errors (see spec.md §7). `IncisorError` covers setup and IO failures
/// that happen before analysis can even begin.
#[derive(Debug, thiserror::Error)]
pub enum IncisorError {
    /// Reading a source or header file failed.
    #[error("failed to read {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// tree-sitter failed to parse a file at all (not merely with syntax
    /// errors inside the tree -- a hard parser failure).
    #[error("failed to parse {path}")]
    Parse { path: std::path::PathBuf },

    /// The tree-sitter C++ grammar could not be loaded.
    #[error("failed to load tree-sitter language: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// A header search path entry does not exist or isn't a directory.
    #[error("invalid header search path: {0}")]
    InvalidSearchPath(std::path::PathBuf),

    /// Catch-all for anything else, preserving context via anyhow.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IncisorError {
    pub fn io(path: impl Into<std::path::PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<std::path::PathBuf>) -> Self {
        Self::Parse { path: path.into() }
    }
}
