use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{Result, SelectError};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A user-supplied input file, read whole into memory for one call.
pub struct SourceFile {
    path: PathBuf,
    bytes: Vec<u8>,
}

impl SourceFile {
    /// Resolve `path` to a regular file and read it. The handle is closed
    /// before this returns.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(SelectError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let bytes = fs::read(path).map_err(|e| SelectError::from_io(path, e))?;
        debug!(path = %path.display(), bytes = bytes.len(), "read source file");

        Ok(Self {
            path: path.to_path_buf(),
            bytes,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// Lowercased final suffix including the dot, e.g. `".json"`.
    pub fn extension(&self) -> Option<String> {
        extension_of(&self.path)
    }

    /// Decoded contents. A leading BOM is skipped and invalid UTF-8 sequences
    /// become U+FFFD, so decoding itself never fails. Empty or whitespace-only
    /// content is an empty file.
    pub fn text(&self) -> Result<Cow<'_, str>> {
        let bytes = self.bytes.strip_prefix(UTF8_BOM).unwrap_or(&self.bytes[..]);

        let text = String::from_utf8_lossy(bytes);
        if let Cow::Owned(_) = text {
            warn!(path = %self.path.display(), "replaced invalid UTF-8 sequences");
        }

        if text.trim().is_empty() {
            return Err(SelectError::empty(&self.path));
        }
        Ok(text)
    }
}

pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
}
