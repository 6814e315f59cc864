use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid cell coordinate \"{label}\": {reason}")]
    InvalidCoordinate { label: String, reason: &'static str },

    #[error("invalid cell range \"{0}\"")]
    InvalidRange(String),

    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid Excel file: {path} ({details})")]
    InvalidExcel { path: PathBuf, details: String },

    #[error("sheet \"{name}\" not found (available: {available})")]
    SheetNotFound { name: String, available: String },

    #[error("sheet \"{name}\": {details}")]
    SheetOperation { name: String, details: String },

    #[error("failed to save {path}: {details}")]
    SaveFailed { path: PathBuf, details: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse grouping of [`Error`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A malformed `A1` label or range reference.
    Format,
    /// The workbook or one of its sheets could not be read, found or written.
    WorkbookAccess,
    Other,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidCoordinate { .. } | Error::InvalidRange(_) => ErrorKind::Format,
            Error::FileNotFound(_)
            | Error::UnsupportedFormat(_)
            | Error::InvalidExcel { .. }
            | Error::SheetNotFound { .. }
            | Error::SheetOperation { .. }
            | Error::SaveFailed { .. } => ErrorKind::WorkbookAccess,
            Error::Io(_) => ErrorKind::Other,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
