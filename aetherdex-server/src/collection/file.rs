//! Collection interchange file: the exported/imported JSON document.
//!
//! ```text
//! {
//!   "version": "1.0",
//!   "exportDate": "2025-10-17T12:00:00.000Z",
//!   "collectedIds": ["jotunn", "nixe"]
//! }
//! ```
//!
//! The live localStorage entry is the bare id array; this envelope exists
//! only in the downloaded file.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

use crate::catalog::is_monster_id;
use crate::config::{EXPORT_FILE_PREFIX, FILE_VERSION};
use crate::store::schema::{ObjectFields, ValidationError, array_of, format_issues, string};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionFile {
    pub version: String,
    pub export_date: String,
    pub collected_ids: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Failed to read collection file: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("{}", format_errors(.0))]
    Invalid(#[from] ValidationError),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to format export timestamp: {0}")]
    Timestamp(#[from] time::error::Format),
    #[error("failed to serialize collection file: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CollectionFile {
    /// A file stamped with the current version and `exported_at`.
    pub fn new(collected_ids: Vec<String>, exported_at: OffsetDateTime) -> Result<Self, ExportError> {
        Ok(Self {
            version: FILE_VERSION.to_string(),
            export_date: iso_timestamp(exported_at)?,
            collected_ids,
        })
    }

    /// `aetherdex-collection-<YYYY-MM-DD>.json`, dated from the export stamp.
    pub fn file_name(&self) -> String {
        let date = self.export_date.split('T').next().unwrap_or_default();
        format!("{EXPORT_FILE_PREFIX}-{date}.json")
    }

    pub fn to_pretty_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// UTC timestamp with millisecond precision, e.g. `2025-10-17T12:00:00.000Z`.
pub fn iso_timestamp(at: OffsetDateTime) -> Result<String, time::error::Format> {
    at.to_offset(UtcOffset::UTC).format(format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
    ))
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// `^\d+\.\d+$`
fn is_version(s: &str) -> bool {
    s.split_once('.')
        .is_some_and(|(major, minor)| is_digits(major) && is_digits(minor))
}

/// `YYYY-MM-DDTHH:MM:SS[.fraction]Z` naming a real instant. Leap seconds
/// are refused.
fn is_iso_datetime(s: &str) -> bool {
    s.len() > 19
        && s.as_bytes()[10] == b'T'
        && s.get(17..19) != Some("60")
        && s.ends_with('Z')
        && OffsetDateTime::parse(s, &Rfc3339).is_ok()
}

fn version_string(value: &Value) -> Result<String, ValidationError> {
    let s = string(value)?;
    if !is_version(s) {
        return Err(ValidationError::new("Invalid version format (expected X.Y)"));
    }
    Ok(s.to_string())
}

fn datetime_string(value: &Value) -> Result<String, ValidationError> {
    let s = string(value)?;
    if !is_iso_datetime(s) {
        return Err(ValidationError::new(
            "Invalid date format (expected ISO 8601 datetime)",
        ));
    }
    Ok(s.to_string())
}

/// A non-empty id naming a catalog entry.
pub fn monster_id(value: &Value) -> Result<String, ValidationError> {
    let id = string(value)?;
    if id.is_empty() {
        return Err(ValidationError::new("Monster ID cannot be empty"));
    }
    if !is_monster_id(id) {
        return Err(ValidationError::new("Invalid monster ID"));
    }
    Ok(id.to_string())
}

/// Validate untyped input as a collection file. Unknown fields are
/// ignored; a missing `collectedIds` becomes an empty list; duplicates
/// pass through untouched.
pub fn validate(raw: &Value) -> Result<CollectionFile, ValidationError> {
    let mut fields = ObjectFields::new(raw)?;
    let version = fields.required("version", version_string);
    let export_date = fields.required("exportDate", datetime_string);
    let collected_ids = fields.with_default("collectedIds", Vec::new, |v| array_of(v, monster_id));

    match (version, export_date, collected_ids, fields.into_error()) {
        (Some(version), Some(export_date), Some(collected_ids), None) => Ok(CollectionFile {
            version,
            export_date,
            collected_ids,
        }),
        (.., Some(err)) => Err(err),
        _ => Err(ValidationError::new("Invalid collection file")),
    }
}

/// One `"path: message"` segment per issue, joined with `"; "`.
pub fn format_errors(err: &ValidationError) -> String {
    format_issues(err.issues())
}

/// Parse uploaded file text and validate it.
pub fn parse(text: &str) -> Result<CollectionFile, ImportError> {
    let raw: Value = serde_json::from_str(text)?;
    Ok(validate(&raw)?)
}
