//! Shape validation over untyped JSON.
//!
//! A schema turns a `serde_json::Value` into a typed value or a
//! [`ValidationError`] listing every (path, message) issue found. Any
//! `Fn(&Value) -> Result<T, ValidationError>` is a [`Schema`], so schemas
//! compose as plain functions built from the helpers below.

use std::fmt;

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// One violated constraint. An empty path means the root value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub path: Vec<PathSegment>,
    pub message: String,
}

impl Issue {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            path: Vec::new(),
            message: message.into(),
        }
    }

    pub fn dotted_path(&self) -> String {
        self.path
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.dotted_path(), self.message)
        }
    }
}

/// Every issue found while validating one value, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", format_issues(&self.issues))]
pub struct ValidationError {
    issues: Vec<Issue>,
}

impl ValidationError {
    /// A single issue at the root.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            issues: vec![Issue::new(message)],
        }
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn merge(&mut self, other: ValidationError) {
        self.issues.extend(other.issues);
    }

    /// Prefix every issue path with `segment`.
    pub fn at(mut self, segment: impl Into<PathSegment>) -> Self {
        let segment = segment.into();
        for issue in &mut self.issues {
            issue.path.insert(0, segment.clone());
        }
        self
    }
}

/// `"<dotted.path>: <message>"` per issue (bare message at the root),
/// joined with `"; "`.
pub fn format_issues(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub trait Schema<T> {
    fn parse(&self, value: &Value) -> Result<T, ValidationError>;
}

impl<T, F> Schema<T> for F
where
    F: Fn(&Value) -> Result<T, ValidationError>,
{
    fn parse(&self, value: &Value) -> Result<T, ValidationError> {
        self(value)
    }
}

/// JSON kind name used in type-mismatch messages.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn type_mismatch(expected: &str, value: &Value) -> ValidationError {
    ValidationError::new(format!("Expected {expected}, received {}", kind_of(value)))
}

pub fn object(value: &Value) -> Result<&Map<String, Value>, ValidationError> {
    value.as_object().ok_or_else(|| type_mismatch("object", value))
}

pub fn string(value: &Value) -> Result<&str, ValidationError> {
    value.as_str().ok_or_else(|| type_mismatch("string", value))
}

/// Validate every element with `item`, collecting all element issues
/// under their index before failing.
pub fn array_of<T>(
    value: &Value,
    item: impl Fn(&Value) -> Result<T, ValidationError>,
) -> Result<Vec<T>, ValidationError> {
    let elements = value.as_array().ok_or_else(|| type_mismatch("array", value))?;
    let mut parsed = Vec::with_capacity(elements.len());
    let mut errors = ValidationError::default();
    for (index, element) in elements.iter().enumerate() {
        match item(element) {
            Ok(v) => parsed.push(v),
            Err(e) => errors.merge(e.at(index)),
        }
    }
    if errors.is_empty() { Ok(parsed) } else { Err(errors) }
}

/// One of a fixed set of string literals.
pub fn literal<T: Copy>(value: &Value, choices: &[(&str, T)]) -> Result<T, ValidationError> {
    let expected = choices
        .iter()
        .map(|(name, _)| format!("'{name}'"))
        .collect::<Vec<_>>()
        .join(" | ");
    let Some(s) = value.as_str() else {
        return Err(ValidationError::new(format!(
            "Expected {expected}, received {}",
            kind_of(value)
        )));
    };
    choices
        .iter()
        .find(|(name, _)| *name == s)
        .map(|(_, v)| *v)
        .ok_or_else(|| {
            ValidationError::new(format!(
                "Invalid enum value. Expected {expected}, received '{s}'"
            ))
        })
}

/// Field-by-field reader over a JSON object that keeps going after a bad
/// field so one pass reports every issue.
pub struct ObjectFields<'a> {
    map: &'a Map<String, Value>,
    errors: ValidationError,
}

impl<'a> ObjectFields<'a> {
    pub fn new(value: &'a Value) -> Result<Self, ValidationError> {
        Ok(Self {
            map: object(value)?,
            errors: ValidationError::default(),
        })
    }

    /// A field that must be present. Missing fields report `"Required"`.
    pub fn required<T>(
        &mut self,
        key: &str,
        schema: impl Fn(&Value) -> Result<T, ValidationError>,
    ) -> Option<T> {
        match self.map.get(key) {
            Some(value) => self.check(key, value, schema),
            None => {
                self.errors.merge(ValidationError::new("Required").at(key));
                None
            }
        }
    }

    /// A field that falls back to `default` when absent. An explicit
    /// `null` is still validated.
    pub fn with_default<T>(
        &mut self,
        key: &str,
        default: impl FnOnce() -> T,
        schema: impl Fn(&Value) -> Result<T, ValidationError>,
    ) -> Option<T> {
        match self.map.get(key) {
            Some(value) => self.check(key, value, schema),
            None => Some(default()),
        }
    }

    /// `None` when every field passed.
    pub fn into_error(self) -> Option<ValidationError> {
        if self.errors.is_empty() {
            None
        } else {
            Some(self.errors)
        }
    }

    fn check<T>(
        &mut self,
        key: &str,
        value: &Value,
        schema: impl Fn(&Value) -> Result<T, ValidationError>,
    ) -> Option<T> {
        match schema(value) {
            Ok(v) => Some(v),
            Err(e) => {
                self.errors.merge(e.at(key));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn root_issue_formats_without_path() {
        let err = ValidationError::new("Expected object, received null");
        assert_eq!(err.to_string(), "Expected object, received null");
    }

    #[test]
    fn nested_paths_are_dotted() {
        let err = ValidationError::new("Invalid monster ID").at(2).at("collectedIds");
        assert_eq!(err.to_string(), "collectedIds.2: Invalid monster ID");
    }

    #[test]
    fn multiple_issues_join_with_semicolons() {
        let mut err = ValidationError::new("a").at("x");
        err.merge(ValidationError::new("b"));
        assert_eq!(err.to_string(), "x: a; b");
    }

    #[test]
    fn array_of_reports_every_bad_element() {
        let err = array_of(&json!(["ok", 1, true]), |v| string(v).map(str::to_string)).unwrap_err();
        let paths: Vec<String> = err.issues().iter().map(Issue::dotted_path).collect();
        assert_eq!(paths, ["1", "2"]);
        assert_eq!(err.issues()[0].message, "Expected string, received number");
    }

    #[test]
    fn array_of_rejects_non_arrays() {
        let err = array_of(&json!("nope"), |v| string(v).map(str::to_string)).unwrap_err();
        assert_eq!(err.to_string(), "Expected array, received string");
    }

    #[test]
    fn literal_lists_expected_values() {
        let choices = [("on", true), ("off", false)];
        assert_eq!(literal(&json!("off"), &choices), Ok(false));
        let err = literal(&json!("maybe"), &choices).unwrap_err();
        assert_eq!(err.to_string(), "Invalid enum value. Expected 'on' | 'off', received 'maybe'");
        let err = literal(&json!(3), &choices).unwrap_err();
        assert!(err.to_string().contains("received number"));
    }

    #[test]
    fn object_fields_collects_missing_and_invalid() {
        let value = json!({ "b": 5 });
        let mut fields = ObjectFields::new(&value).unwrap();
        assert_eq!(fields.required("a", |v| string(v).map(str::to_string)), None);
        assert_eq!(fields.required("b", |v| string(v).map(str::to_string)), None);
        assert_eq!(fields.with_default("c", || 7, |_| Ok(0)), Some(7));
        let err = fields.into_error().unwrap();
        assert_eq!(err.to_string(), "a: Required; b: Expected string, received number");
    }

    #[test]
    fn closures_are_schemas() {
        let schema = |v: &Value| string(v).map(str::len);
        assert_eq!(schema.parse(&json!("four")), Ok(4));
    }
}
