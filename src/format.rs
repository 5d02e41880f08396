use std::fmt;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::candidates::CandidateSet;
use crate::error::{Result, SelectError};

/// Supported input formats, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    PlainText,
    Csv,
    Json,
}

/// Top-level shape of a JSON document that yields candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonShape {
    List,
    Mapping,
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileFormat::PlainText => write!(f, "text"),
            FileFormat::Csv => write!(f, "csv"),
            FileFormat::Json => write!(f, "json"),
        }
    }
}

impl FileFormat {
    /// Map an extension (with or without the leading dot, any case).
    pub fn from_extension(extension: Option<&str>) -> Result<Self> {
        let Some(extension) = extension else {
            return Err(SelectError::UnsupportedExtension { extension: None });
        };

        let normalized = extension.trim_start_matches('.').to_lowercase();
        match normalized.as_str() {
            "txt" => Ok(FileFormat::PlainText),
            "csv" => Ok(FileFormat::Csv),
            "json" => Ok(FileFormat::Json),
            _ => Err(SelectError::UnsupportedExtension {
                extension: Some(format!(".{}", normalized)),
            }),
        }
    }

    /// Extract candidates from decoded `text`. `path` is only used for error
    /// context.
    pub fn extract(self, path: &Path, text: &str) -> Result<CandidateSet> {
        let set = match self {
            FileFormat::PlainText => CandidateSet::collect(path, text_lines(text)),
            FileFormat::Csv => CandidateSet::collect(path, csv_rows(path, text)?),
            FileFormat::Json => {
                let (shape, items) = json_values(path, text)?;
                debug!(?shape, "parsed json document");
                CandidateSet::collect(path, items)
            }
        }?;

        debug!(format = %self, candidates = set.len(), "extracted candidates");
        Ok(set)
    }
}

/// Splits on `\n`, `\r\n` and bare `\r`; the empty piece between `\r` and
/// `\n` is dropped with the other blank lines.
fn text_lines(text: &str) -> Vec<String> {
    text.split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn csv_rows(path: &Path, text: &str) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| SelectError::parse(path, e))?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        rows.push(record.iter().collect::<Vec<_>>().join(","));
    }
    Ok(rows)
}

fn json_values(path: &Path, text: &str) -> Result<(JsonShape, Vec<String>)> {
    let document: Value = serde_json::from_str(text).map_err(|e| SelectError::parse(path, e))?;

    match document {
        Value::Array(items) => Ok((JsonShape::List, items.into_iter().map(stringify).collect())),
        Value::Object(map) => Ok((
            JsonShape::Mapping,
            map.into_iter().map(|(_, value)| stringify(value)).collect(),
        )),
        other => Err(SelectError::parse(
            path,
            format!(
                "expected a JSON array or object at the top level, found {}",
                json_kind(&other)
            ),
        )),
    }
}

fn stringify(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
