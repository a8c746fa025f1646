use std::borrow::Cow;
use std::num::IntErrorKind;

use validator::ValidationError;

use crate::validation::{Validateable, ValidationErrors};

pub const DEFAULT_LIMIT: i64 = 10;
pub const DEFAULT_OFFSET: i64 = 0;
/// Exclusive upper bound for `limit`.
pub const MAX_LIMIT: i64 = 100;

/// Pagination bounds for a post listing. Built per request, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, validator::Validate)]
pub struct Limitation {
    #[validate(
        range(min = 0, message = "This value should be either positive or zero."),
        custom(function = "below_max_limit")
    )]
    pub limit: i64,
    #[validate(range(min = 0, message = "This value should be either positive or zero."))]
    pub offset: i64,
}

impl Default for Limitation {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT, DEFAULT_OFFSET)
    }
}

impl Limitation {
    pub fn new(limit: i64, offset: i64) -> Self {
        Self { limit, offset }
    }

    /// Build from raw query values. Missing or non-numeric values fall back
    /// to the defaults. Numeric values are kept for validation; integers too
    /// large for `i64` saturate at its bounds.
    pub fn from_query(limit: Option<&str>, offset: Option<&str>) -> Self {
        Self::new(
            parse_or(limit, DEFAULT_LIMIT),
            parse_or(offset, DEFAULT_OFFSET),
        )
    }

    /// Bounds for the storage query. Negative values clamp to zero, so only
    /// call this on a validated limitation.
    pub fn window(&self) -> (u64, u64) {
        (
            u64::try_from(self.limit).unwrap_or(0),
            u64::try_from(self.offset).unwrap_or(0),
        )
    }
}

impl Validateable for Limitation {
    fn validate(&self) -> ValidationErrors {
        ValidationErrors::collect(validator::Validate::validate(self), &["limit", "offset"])
    }
}

fn parse_or(raw: Option<&str>, default: i64) -> i64 {
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse::<i64>() {
        Ok(value) => value,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => default,
        },
    }
}

fn below_max_limit(limit: i64) -> Result<(), ValidationError> {
    if limit < MAX_LIMIT {
        return Ok(());
    }
    Err(ValidationError::new("less_than").with_message(Cow::Owned(format!(
        "This value should be less than {}.",
        MAX_LIMIT
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOT_NEGATIVE: &str = "This value should be either positive or zero.";

    #[test]
    fn test_defaults() {
        let limitation = Limitation::from_query(None, None);
        assert_eq!(limitation, Limitation::new(10, 0));
        assert_eq!(limitation, Limitation::default());
    }

    #[test]
    fn test_non_numeric_falls_back_to_default() {
        let limitation = Limitation::from_query(Some("abc"), Some(""));
        assert_eq!(limitation, Limitation::new(DEFAULT_LIMIT, DEFAULT_OFFSET));
    }

    #[test]
    fn test_numeric_values_are_parsed() {
        let limitation = Limitation::from_query(Some("1"), Some("-2"));
        assert_eq!(limitation, Limitation::new(1, -2));
    }

    #[test]
    fn test_oversized_numbers_saturate() {
        let limitation =
            Limitation::from_query(Some("99999999999999999999"), Some("-99999999999999999999"));
        assert_eq!(limitation, Limitation::new(i64::MAX, i64::MIN));
    }

    #[test]
    fn test_oversized_limit_is_rejected() {
        let errors = Limitation::from_query(Some("99999999999999999999"), None).validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("limit"),
            Some("This value should be less than 100.")
        );
    }

    #[test]
    fn test_oversized_offset_is_valid() {
        let limitation = Limitation::from_query(None, Some("99999999999999999999"));
        assert!(limitation.validate().is_empty());
        assert_eq!(limitation.window(), (10, i64::MAX as u64));
    }

    #[test]
    fn test_errors_follow_field_order() {
        let errors = Limitation::new(150, -1).validate();
        let fields: Vec<&str> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec!["limit", "offset"]);
    }

    #[test]
    fn test_limits_in_range_are_valid() {
        for limit in [0, 1, 50, 99] {
            for offset in [0, 1, 1_000_000] {
                let errors = Limitation::new(limit, offset).validate();
                assert!(errors.is_empty(), "limit={limit} offset={offset}: {errors}");
            }
        }
    }

    #[test]
    fn test_negative_limit() {
        let errors = Limitation::new(-1, 0).validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("limit"), Some(NOT_NEGATIVE));
    }

    #[test]
    fn test_limit_at_max_is_rejected() {
        let errors = Limitation::new(100, 0).validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("limit"),
            Some("This value should be less than 100.")
        );
    }

    #[test]
    fn test_negative_offset() {
        let errors = Limitation::new(10, -5).validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("offset"), Some(NOT_NEGATIVE));
    }

    #[test]
    fn test_both_fields_reported() {
        let errors = Limitation::new(150, -1).validate();
        assert_eq!(errors.len(), 2);
        assert!(errors.get("limit").is_some());
        assert!(errors.get("offset").is_some());
    }

    #[test]
    fn test_window() {
        assert_eq!(Limitation::new(1, 2).window(), (1, 2));
    }
}
