//! Find specification models and top-level error types.

use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////
// #region EnumsInit

/// Per-entry decision handed back to the walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EnumWalkStep {
    /// Keep walking (descend if the entry is a directory).
    Continue,
    /// Do not descend into the current directory.
    SkipDir,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region StructsAndErrors

/// Input options for `find_with_options` and `find_iter`.
#[derive(Debug, Clone)]
pub struct SpecFindOptions {
    /// Regular expression tested against entry basename. Empty matches all.
    pub pattern: String,
    /// Descend into directories below the root.
    pub if_recursive: bool,
    /// Follow symbolic links while walking.
    pub if_follow_symlinks: bool,
}

impl Default for SpecFindOptions {
    fn default() -> Self {
        Self {
            pattern: String::new(),
            if_recursive: true,
            if_follow_symlinks: false,
        }
    }
}

/// Errors that abort a find run.
///
/// Each variant carries the failing collaborator's error untouched, so
/// `Display` and `source` are those of the wrapped value.
#[derive(Debug, Error)]
pub enum FindError<E> {
    /// The name pattern failed to compile. Nothing was walked.
    #[error(transparent)]
    InvalidPattern(#[from] regex::Error),
    /// The walker failed to read an entry.
    #[error(transparent)]
    Walk(#[from] walkdir::Error),
    /// The caller's callback returned an error for a matched entry.
    #[error(transparent)]
    Callback(E),
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
