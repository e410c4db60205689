//! The JSON document consumed by the presentation layer.
//!
//! ```text
//! {
//!     "daily":  [ { "date": "a to b", "id": "b.csv", "stats": { "general": { "percent": [...], "diff": [...] }, ... } }, ... ],
//!     "weekly": [ ... ]
//! }
//! ```

use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tagtrend_core::ComparisonSeries;

use crate::TrendsError;

/// Render `series` as four-space indented JSON.
///
/// # Errors
///
/// Returns [`TrendsError::Json`] if serialization fails.
pub fn to_json(series: &ComparisonSeries) -> Result<String, TrendsError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    series.serialize(&mut ser).map_err(|e| TrendsError::Json {
        context: "comparison series".to_owned(),
        source: e,
    })?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Parse a document produced by [`to_json`].
///
/// # Errors
///
/// Returns [`TrendsError::Json`] if `text` is not a valid series document.
pub fn from_json(text: &str) -> Result<ComparisonSeries, TrendsError> {
    serde_json::from_str(text).map_err(|e| TrendsError::Json {
        context: "comparison series".to_owned(),
        source: e,
    })
}

/// Write `series` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`TrendsError::Io`] on filesystem failure or [`TrendsError::Json`]
/// if serialization fails.
pub fn write_artifact(path: &Path, series: &ComparisonSeries) -> Result<(), TrendsError> {
    let json = to_json(series)?;
    let io_err = |source| TrendsError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, json).map_err(io_err)?;
    tracing::info!(
        path = %path.display(),
        daily = series.daily.len(),
        weekly = series.weekly.len(),
        "comparison artifact written"
    );
    Ok(())
}

/// Read a previously written artifact.
///
/// # Errors
///
/// Returns [`TrendsError::Io`] if the file cannot be read or
/// [`TrendsError::Json`] if it does not parse.
pub fn read_artifact(path: &Path) -> Result<ComparisonSeries, TrendsError> {
    let text = std::fs::read_to_string(path).map_err(|source| TrendsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_json(&text)
}
