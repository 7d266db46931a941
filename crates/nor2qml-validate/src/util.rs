//! Shared field checks.
//!
//! Every helper skips absent values: presence is checked separately, and
//! only for the fields that require it.

use nor2qml_model::Issue;

/// Push an [`Issue::OutOfRange`] unless `value` lies in `[min, max]`.
pub fn check_range(issues: &mut Vec<Issue>, field: &str, value: Option<f64>, min: f64, max: f64) {
    if let Some(value) = value
        && !(min..=max).contains(&value)
    {
        issues.push(out_of_range(field, value, min, max));
    }
}

/// Like [`check_range`] with an exclusive upper bound.
pub fn check_range_exclusive(
    issues: &mut Vec<Issue>,
    field: &str,
    value: Option<f64>,
    min: f64,
    max: f64,
) {
    if let Some(value) = value
        && !(min..max).contains(&value)
    {
        issues.push(out_of_range(field, value, min, max));
    }
}

pub fn check_non_negative(issues: &mut Vec<Issue>, field: &str, value: Option<f64>) {
    if let Some(value) = value
        && value < 0.0
    {
        issues.push(Issue::Negative {
            field: field.to_string(),
            value,
        });
    }
}

/// Push an [`Issue::InvalidCode`] unless `code` is one of `allowed`.
pub fn check_code(issues: &mut Vec<Issue>, field: &str, code: Option<char>, allowed: &str) {
    if let Some(code) = code
        && !allowed.contains(code)
    {
        issues.push(Issue::InvalidCode {
            field: field.to_string(),
            code,
            allowed: allowed.to_string(),
        });
    }
}

pub fn check_text(issues: &mut Vec<Issue>, field: &str, text: Option<&str>) {
    if text.is_none_or(|text| text.trim().is_empty()) {
        issues.push(Issue::EmptyText {
            field: field.to_string(),
        });
    }
}

pub fn require<T>(issues: &mut Vec<Issue>, field: &str, value: Option<&T>) {
    if value.is_none() {
        issues.push(Issue::MissingField {
            field: field.to_string(),
        });
    }
}

fn out_of_range(field: &str, value: f64, min: f64, max: f64) -> Issue {
    Issue::OutOfRange {
        field: field.to_string(),
        value,
        min,
        max,
    }
}
