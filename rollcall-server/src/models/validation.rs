//! Validation error types

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Prefix axum puts in front of serde messages for body data errors.
const BODY_PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";

static MISSING_FIELD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"missing field `([^`]+)`").expect("invalid missing-field regex"));

/// `field.path: message` as produced by serde_path_to_error
static FIELD_PATH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z_][A-Za-z0-9_.\[\]]*): (.+)$").expect("invalid field-path regex")
});

static POSITION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" at line \d+ column \d+$").expect("invalid position regex"));

/// Machine-readable category of a validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationKind {
    /// Required field absent
    Missing,
    /// Field present with the wrong primitive type
    InvalidType,
    /// Body is not well-formed JSON
    JsonInvalid,
    /// Request did not declare `application/json`
    MissingContentType,
    /// Path segment is not an integer
    IntParsing,
    /// Body could not be read at all
    BodyUnreadable,
}

/// One validation failure, located in the request by `loc`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Location of the failure, e.g. `["body", "age"]` or `["path", "student_id"]`
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: ValidationKind,
}

impl ValidationError {
    pub fn new(loc: Vec<String>, msg: impl Into<String>, kind: ValidationKind) -> Self {
        Self {
            loc,
            msg: msg.into(),
            kind,
        }
    }

    /// A required body field is absent.
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            vec!["body".to_owned(), field.to_owned()],
            "Field required",
            ValidationKind::Missing,
        )
    }

    /// A path parameter did not parse as an integer.
    pub fn path_param(name: &str, value: &str) -> Self {
        Self::new(
            vec!["path".to_owned(), name.to_owned()],
            format!("expected an integer, got '{}'", value),
            ValidationKind::IntParsing,
        )
    }

    /// A failure that concerns the body as a whole.
    pub fn body(msg: impl Into<String>, kind: ValidationKind) -> Self {
        Self::new(vec!["body".to_owned()], msg, kind)
    }

    /// Build an error from a serde deserialization message.
    ///
    /// Recognizes missing fields and `path: message` prefixes so the
    /// offending field ends up in `loc`.
    pub fn from_deserialize_message(text: &str) -> Self {
        let text = text.strip_prefix(BODY_PREFIX).unwrap_or(text);
        let text = POSITION_RE.replace(text, "");

        if let Some(caps) = MISSING_FIELD_RE.captures(&text) {
            return Self::missing_field(&caps[1]);
        }

        let mut loc = vec!["body".to_owned()];
        let msg = match FIELD_PATH_RE.captures(&text) {
            Some(caps) => {
                loc.extend(caps[1].split('.').map(str::to_owned));
                caps[2].to_owned()
            }
            None => text.to_string(),
        };

        Self::new(loc, msg, ValidationKind::InvalidType)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.loc.join("."), self.msg)
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::missing_field("age");
        assert_eq!(err.to_string(), "body.age: Field required");
    }

    #[test]
    fn parses_missing_field() {
        let err = ValidationError::from_deserialize_message(
            "Failed to deserialize the JSON body into the target type: missing field `city` at line 1 column 57",
        );
        assert_eq!(err.loc, vec!["body", "city"]);
        assert_eq!(err.kind, ValidationKind::Missing);
    }

    #[test]
    fn parses_field_path() {
        let err = ValidationError::from_deserialize_message(
            "Failed to deserialize the JSON body into the target type: age: invalid type: string \"old\", expected i64 at line 1 column 20",
        );
        assert_eq!(err.loc, vec!["body", "age"]);
        assert_eq!(err.msg, "invalid type: string \"old\", expected i64");
        assert_eq!(err.kind, ValidationKind::InvalidType);
    }

    #[test]
    fn unrecognized_message_stays_on_body() {
        let err = ValidationError::from_deserialize_message(
            "invalid type: integer `3`, expected a map",
        );
        assert_eq!(err.loc, vec!["body"]);
        assert_eq!(err.msg, "invalid type: integer `3`, expected a map");
    }

    #[test]
    fn serializes_kind_as_type() {
        let json = serde_json::to_value(ValidationError::path_param("class_id", "abc")).unwrap();
        assert_eq!(json["type"], "int_parsing");
        assert_eq!(json["loc"], serde_json::json!(["path", "class_id"]));
    }
}
