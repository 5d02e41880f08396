use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Extensions accepted by the format dispatcher, as shown in error messages.
pub const SUPPORTED_EXTENSIONS: &str = ".txt, .csv, .json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    FileNotFound,
    EmptyFile,
    ParseError,
    UnsupportedExtension,
}

impl ErrorKind {
    /// Fixed prefix every rendered error of this kind starts with.
    pub const fn prefix(self) -> &'static str {
        match self {
            ErrorKind::FileNotFound => "Error: File not found",
            ErrorKind::EmptyFile => "Error: File is empty",
            ErrorKind::ParseError => "Error parsing file",
            ErrorKind::UnsupportedExtension => "Error: Unsupported file extension",
        }
    }

    /// Classify a rendered result string; `None` means it is a selected item.
    pub fn from_rendered(rendered: &str) -> Option<Self> {
        [
            ErrorKind::FileNotFound,
            ErrorKind::EmptyFile,
            ErrorKind::ParseError,
            ErrorKind::UnsupportedExtension,
        ]
        .into_iter()
        .find(|kind| rendered.starts_with(kind.prefix()))
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

#[derive(Debug, Error)]
pub enum SelectError {
    #[error("Error: File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Error: File is empty: {}", .path.display())]
    EmptyFile { path: PathBuf },

    #[error("Error parsing file {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error(
        "Error: Unsupported file extension '{}' (expected one of {})",
        .extension.as_deref().unwrap_or("<none>"),
        SUPPORTED_EXTENSIONS
    )]
    UnsupportedExtension { extension: Option<String> },
}

impl SelectError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SelectError::FileNotFound { .. } => ErrorKind::FileNotFound,
            SelectError::EmptyFile { .. } => ErrorKind::EmptyFile,
            SelectError::Parse { .. } => ErrorKind::ParseError,
            SelectError::UnsupportedExtension { .. } => ErrorKind::UnsupportedExtension,
        }
    }

    pub fn empty(path: &Path) -> Self {
        SelectError::EmptyFile {
            path: path.to_path_buf(),
        }
    }

    pub fn parse(path: &Path, message: impl fmt::Display) -> Self {
        SelectError::Parse {
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }

    /// Map an I/O failure on `path`. Only a missing file keeps its own class;
    /// everything else is terminal and reported as a parse failure.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => SelectError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => SelectError::parse(path, err),
        }
    }
}

pub type Result<T> = std::result::Result<T, SelectError>;
