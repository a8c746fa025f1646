//! Error bodies returned by the API.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// `{field: message}` pairs that serialize as a JSON object, keeping the
/// order they were given in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(String, String)>);

impl FieldErrors {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<Vec<(String, String)>> for FieldErrors {
    fn from(fields: Vec<(String, String)>) -> Self {
        Self(fields)
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, message) in &self.0 {
            map.serialize_entry(field, message)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FieldErrors {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldErrorsVisitor;

        impl<'de> Visitor<'de> for FieldErrorsVisitor {
            type Value = FieldErrors;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of field names to messages")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<FieldErrors, A::Error> {
                let mut fields = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, String>()? {
                    fields.push(entry);
                }
                Ok(FieldErrors(fields))
            }
        }

        deserializer.deserialize_map(FieldErrorsVisitor)
    }
}

/// Error body. Either a bare JSON string (not found, internal errors) or a
/// flat `{field: message}` object (validation failures).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorResponse {
    Message(String),
    Fields(FieldErrors),
}

impl ErrorResponse {
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    pub fn fields(fields: impl Into<FieldErrors>) -> Self {
        Self::Fields(fields.into())
    }

    // Common error constructors
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::message(detail)
    }

    pub fn internal_error(detail: impl std::fmt::Display) -> Self {
        Self::Message(format!("Internal Server Error: {}", detail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_serializes_as_string() {
        let body = ErrorResponse::not_found("Post with id 2 not found.");
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#""Post with id 2 not found.""#
        );
    }

    #[test]
    fn test_internal_error_prefix() {
        let body = ErrorResponse::internal_error("connection refused");
        assert_eq!(
            body,
            ErrorResponse::Message("Internal Server Error: connection refused".to_string())
        );
    }

    #[test]
    fn test_fields_serialize_as_object() {
        let fields = vec![(
            "limit".to_string(),
            "This value should be less than 100.".to_string(),
        )];

        let json = serde_json::to_value(ErrorResponse::fields(fields)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"limit": "This value should be less than 100."})
        );
    }

    #[test]
    fn test_fields_keep_given_order() {
        let fields = vec![
            ("slug".to_string(), "a".to_string()),
            ("title".to_string(), "b".to_string()),
            ("content".to_string(), "c".to_string()),
        ];

        let body = ErrorResponse::fields(fields);
        let text = serde_json::to_string(&body).unwrap();
        assert_eq!(text, r#"{"slug":"a","title":"b","content":"c"}"#);

        let parsed: ErrorResponse = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, body);
    }
}
