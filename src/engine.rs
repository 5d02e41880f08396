use std::path::Path;

use tracing::{debug, warn};

use crate::candidates::CandidateSet;
use crate::error::Result;
use crate::file_loader::SourceFile;
use crate::format::FileFormat;
use crate::selector::{self, SelectionSeed};

/// Load `path` and extract its candidates without selecting.
pub fn load_candidates<P: AsRef<Path>>(path: P) -> Result<CandidateSet> {
    let source = SourceFile::open(path)?;
    let text = source.text()?;

    let format = FileFormat::from_extension(source.extension().as_deref())?;
    debug!(path = %source.path().display(), %format, "dispatching on extension");

    format.extract(source.path(), &text)
}

/// Pick one item from the file at `path`, reproducibly for `seed`.
pub fn select_from_file<P, S>(path: P, seed: S) -> Result<String>
where
    P: AsRef<Path>,
    S: Into<SelectionSeed>,
{
    let candidates = load_candidates(path)?;
    Ok(selector::select(&candidates, seed.into()).to_string())
}

/// String boundary for hosts: the selected item, or the rendered error with
/// its fixed prefix. Never panics.
pub fn random_item<P, S>(path: P, seed: S) -> String
where
    P: AsRef<Path>,
    S: Into<SelectionSeed>,
{
    let path = path.as_ref();
    match select_from_file(path, seed) {
        Ok(item) => item,
        Err(e) => {
            warn!(path = %path.display(), kind = ?e.kind(), "selection failed: {}", e);
            e.to_string()
        }
    }
}
