//! Deterministic seeded selection of one item from a `.txt`, `.csv` or
//! `.json` file.
//!
//! A call loads the file, extracts its candidates according to the
//! extension, and picks one with a freshly seeded ChaCha8 generator. Failures
//! are typed as [`SelectError`]; [`random_item`] flattens them into strings
//! with fixed prefixes for hosts that only accept text.

pub mod candidates;
pub mod engine;
pub mod error;
pub mod file_loader;
pub mod format;
pub mod logging;
pub mod selector;

pub use candidates::CandidateSet;
pub use engine::{load_candidates, random_item, select_from_file};
pub use error::{ErrorKind, Result, SelectError};
pub use format::{FileFormat, JsonShape};
pub use selector::{select, select_index, SelectionSeed};
