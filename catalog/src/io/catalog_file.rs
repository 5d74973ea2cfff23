//! Catalog file load/save with schema validation.
//!
//! Loading never fails: a missing or malformed file yields an empty
//! collection and a log line. Saving overwrites the whole file atomically.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use jsonschema::validator_for;
use serde_json::Value;
use tracing::{debug, warn};

use crate::book::Book;

const CATALOG_SCHEMA: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../schemas/catalog/v1.schema.json"
));

/// Load the collection from `path`, recovering to empty on any problem.
pub fn load_books(path: &Path) -> Vec<Book> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "catalog file missing, starting empty");
            return Vec::new();
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "catalog file unreadable, starting empty");
            return Vec::new();
        }
    };
    match parse_books(&contents) {
        Ok(books) => {
            debug!(path = %path.display(), count = books.len(), "catalog loaded");
            books
        }
        Err(err) => {
            let reason = format!("{:#}", err);
            warn!(path = %path.display(), error = %reason, "catalog file malformed, starting empty");
            Vec::new()
        }
    }
}

/// Parse and validate catalog JSON: schema conformance, then typed decode.
pub fn parse_books(contents: &str) -> Result<Vec<Book>> {
    let value: Value = serde_json::from_str(contents).context("parse catalog json")?;
    validate_schema(&value)?;
    let books: Vec<Book> = serde_json::from_value(value).context("deserialize catalog")?;
    Ok(books)
}

/// Write the whole collection to `path` (pretty JSON, trailing newline).
pub fn write_books(path: &Path, books: &[Book]) -> Result<()> {
    debug!(path = %path.display(), count = books.len(), "writing catalog");
    let mut buf = serde_json::to_string_pretty(books).context("serialize catalog")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

/// Write `contents` beside `path` and rename it into place.
pub(crate) fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let mut tmp_name = path
        .file_name()
        .with_context(|| format!("path has no file name {}", path.display()))?
        .to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp file {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace {}", path.display()))?;
    Ok(())
}

fn validate_schema(value: &Value) -> Result<()> {
    let schema: Value = serde_json::from_str(CATALOG_SCHEMA).context("parse catalog schema")?;
    let compiled = validator_for(&schema).map_err(|err| anyhow!("invalid schema: {}", err))?;
    if !compiled.is_valid(value) {
        let messages = compiled
            .iter_errors(value)
            .map(|err| err.to_string())
            .collect::<Vec<_>>();
        return Err(anyhow!(
            "catalog schema validation failed: {}",
            messages.join("; ")
        ));
    }
    Ok(())
}
