use std::path::PathBuf;
use thiserror::Error;

/// A required form field that was left empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MissingField {
    #[error("name")]
    Name,
    #[error("image")]
    Image,
    #[error("description")]
    Description,
    #[error("price")]
    Price,
    #[error("category")]
    Category,
}

/// Every failure an operator action can produce. None of them are fatal: the caller
/// reports the error and the catalog stays in its previous stable state.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file could not be read or decoded. The message carries the full context chain.
    #[error("failed to load {path:?}: {message}")]
    Load { path: PathBuf, message: String },

    /// The file could not be encoded or written. In-memory records are unaffected.
    #[error("failed to save {path:?}: {message}")]
    Save { path: PathBuf, message: String },

    #[error("missing {0}")]
    Validation(MissingField),

    #[error("no {kind} named {key:?}")]
    NotFound { kind: &'static str, key: String },

    /// The largest id in the list is already `i64::MAX`.
    #[error("no {kind} ids left to assign")]
    IdExhausted { kind: &'static str },

    #[error("no {kind} file is loaded")]
    NoFileBound { kind: &'static str },
}

impl StoreError {
    pub(crate) fn load(path: &std::path::Path, err: &anyhow::Error) -> Self {
        Self::Load {
            path: path.to_path_buf(),
            message: format!("{err:#}"),
        }
    }

    pub(crate) fn save(path: &std::path::Path, err: &anyhow::Error) -> Self {
        Self::Save {
            path: path.to_path_buf(),
            message: format!("{err:#}"),
        }
    }
}

impl From<MissingField> for StoreError {
    fn from(field: MissingField) -> Self {
        Self::Validation(field)
    }
}
