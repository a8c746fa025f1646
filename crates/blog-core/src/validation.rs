//! Field-level validation shared by entities and request value objects.
//!
//! Rules are declared with the `validator` derive macros on each type. The
//! [`Validateable`] trait flattens whatever `validator` reports into a plain
//! field name to message mapping, which is what API clients receive.

use std::fmt;

use crate::error::DomainError;

/// Field name to human-readable message, in the order the fields are
/// declared on the validated type. Empty when the value is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<(String, String)>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten a `validator` result, ordering fields by their position in
    /// `fields`. Fields not listed there go last, by name.
    pub fn collect(result: Result<(), validator::ValidationErrors>, fields: &[&str]) -> Self {
        let Err(errors) = result else {
            return Self::new();
        };
        let mut mapped = Self::from(errors);
        mapped.0.sort_by(|(a, _), (b, _)| {
            let rank = |name: &str| fields.iter().position(|f| *f == name).unwrap_or(fields.len());
            rank(a).cmp(&rank(b)).then_with(|| a.cmp(b))
        });
        mapped
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, message)| message.as_str())
    }

    /// Record a violation. A later message for the same field replaces the
    /// earlier one and keeps its position.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        let message = message.into();
        match self.0.iter_mut().find(|(name, _)| *name == field) {
            Some(entry) => entry.1 = message,
            None => self.0.push((field, message)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_inner(self) -> Vec<(String, String)> {
        self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

impl From<validator::ValidationErrors> for ValidationErrors {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut mapped = Self::new();
        for (field, field_errors) in errors.field_errors() {
            // One message per field, the first rule that failed.
            if let Some(error) = field_errors.first() {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                mapped.insert(field.to_string(), message);
            }
        }
        mapped
    }
}

/// Self-validation contract.
pub trait Validateable {
    /// Collect every violated rule as a field to message mapping.
    fn validate(&self) -> ValidationErrors;

    /// Same as [`validate`](Self::validate) but as a `Result`, for `?` in callers.
    fn ensure_valid(&self) -> Result<(), DomainError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_first_position() {
        let mut errors = ValidationErrors::new();
        errors.insert("title", "first");
        errors.insert("content", "second");
        errors.insert("title", "replaced");

        let entries: Vec<(&str, &str)> = errors.iter().collect();
        assert_eq!(entries, vec![("title", "replaced"), ("content", "second")]);
    }

    #[test]
    fn test_collect_orders_by_declared_fields() {
        let mut raw = validator::ValidationErrors::new();
        raw.add("content", validator::ValidationError::new("length"));
        raw.add("slug", validator::ValidationError::new("length"));

        let errors = ValidationErrors::collect(Err(raw), &["slug", "title", "content"]);
        let fields: Vec<&str> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec!["slug", "content"]);
        assert_eq!(errors.get("slug"), Some("length"));
    }

    #[test]
    fn test_collect_ok_is_empty() {
        assert!(ValidationErrors::collect(Ok(()), &["limit"]).is_empty());
    }

    #[test]
    fn test_display_joins_fields() {
        let mut errors = ValidationErrors::new();
        errors.insert("slug", "too long");
        errors.insert("content", "also too long");

        assert_eq!(errors.to_string(), "slug: too long, content: also too long");
    }
}
