//! Discrepancies found while decoding or validating a Nordic event.
//!
//! Each [`Issue`] variant carries only the data it needs; the
//! [`RecordLocation`] says which header or phase row it belongs to.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::header::HeaderKind;

/// Where in the event a discrepancy was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "lowercase")]
pub enum RecordLocation {
    /// The event as a whole.
    Event,
    /// Header at `index` in source order.
    Header { index: usize, kind: HeaderKind },
    /// Phase row at `index` in source order.
    Phase { index: usize },
}

impl fmt::Display for RecordLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordLocation::Event => write!(f, "event"),
            RecordLocation::Header { index, kind } => write!(f, "header {} ({kind})", index + 1),
            RecordLocation::Phase { index } => write!(f, "phase {}", index + 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    Structure,
    Presence,
    Range,
    Format,
    Terminology,
}

impl IssueCategory {
    pub fn label(&self) -> &'static str {
        match self {
            IssueCategory::Structure => "Structure",
            IssueCategory::Presence => "Presence",
            IssueCategory::Range => "Range",
            IssueCategory::Format => "Format",
            IssueCategory::Terminology => "Terminology",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Issue {
    /// The first header is not a type 1 line (`None` when there are no headers).
    FirstHeaderNotMain { found: Option<HeaderKind> },
    /// A required field is blank.
    MissingField { field: String },
    /// A numeric field lies outside its closed range.
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },
    /// A numeric field that must be non-negative is negative.
    Negative { field: String, value: f64 },
    /// A free-text field holds only whitespace.
    EmptyText { field: String },
    /// A single-character code outside its code table.
    InvalidCode {
        field: String,
        code: char,
        allowed: String,
    },
    /// The raw column text could not be decoded.
    MalformedField { field: String, raw: String },
}

impl Issue {
    pub fn code(&self) -> &'static str {
        match self {
            Issue::FirstHeaderNotMain { .. } => "NRD001",
            Issue::MissingField { .. } => "NRD002",
            Issue::OutOfRange { .. } => "NRD003",
            Issue::Negative { .. } => "NRD004",
            Issue::EmptyText { .. } => "NRD005",
            Issue::InvalidCode { .. } => "NRD006",
            Issue::MalformedField { .. } => "NRD007",
        }
    }

    pub fn field(&self) -> Option<&str> {
        match self {
            Issue::FirstHeaderNotMain { .. } => None,
            Issue::MissingField { field }
            | Issue::OutOfRange { field, .. }
            | Issue::Negative { field, .. }
            | Issue::EmptyText { field }
            | Issue::InvalidCode { field, .. }
            | Issue::MalformedField { field, .. } => Some(field),
        }
    }

    pub fn category(&self) -> IssueCategory {
        match self {
            Issue::FirstHeaderNotMain { .. } => IssueCategory::Structure,
            Issue::MissingField { .. } | Issue::EmptyText { .. } => IssueCategory::Presence,
            Issue::OutOfRange { .. } | Issue::Negative { .. } => IssueCategory::Range,
            Issue::MalformedField { .. } => IssueCategory::Format,
            Issue::InvalidCode { .. } => IssueCategory::Terminology,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Issue::FirstHeaderNotMain { found: Some(kind) } => {
                format!("first header is not of type 1 (found {kind})")
            }
            Issue::FirstHeaderNotMain { found: None } => "event has no headers".to_string(),
            Issue::MissingField { field } => format!("{field} is required"),
            Issue::OutOfRange {
                field,
                value,
                min,
                max,
            } => format!("{field} {value} outside [{min}, {max}]"),
            Issue::Negative { field, value } => format!("{field} {value} must not be negative"),
            Issue::EmptyText { field } => format!("{field} is empty"),
            Issue::InvalidCode {
                field,
                code,
                allowed,
            } => format!("{field} code '{code}' not one of {allowed}"),
            Issue::MalformedField { field, raw } => {
                format!("{field} value '{raw}' cannot be decoded")
            }
        }
    }
}

/// An [`Issue`] tied to its place in the event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discrepancy {
    pub location: RecordLocation,
    #[serde(flatten)]
    pub issue: Issue,
}

impl Discrepancy {
    pub fn new(location: RecordLocation, issue: Issue) -> Self {
        Self { location, issue }
    }

    pub fn message(&self) -> String {
        format!("{}: {}", self.location, self.issue.message())
    }
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.issue.code(), self.message())
    }
}

/// Every discrepancy collected for one event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub discrepancies: Vec<Discrepancy>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, discrepancy: Discrepancy) {
        self.discrepancies.push(discrepancy);
    }

    pub fn extend(&mut self, discrepancies: impl IntoIterator<Item = Discrepancy>) {
        self.discrepancies.extend(discrepancies);
    }

    /// True when nothing was collected.
    pub fn is_valid(&self) -> bool {
        self.discrepancies.is_empty()
    }

    pub fn len(&self) -> usize {
        self.discrepancies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discrepancies.is_empty()
    }

    pub fn count_in(&self, category: IssueCategory) -> usize {
        self.discrepancies
            .iter()
            .filter(|discrepancy| discrepancy.issue.category() == category)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts() {
        let mut report = ValidationReport::new();
        assert!(report.is_valid());
        report.add(Discrepancy::new(
            RecordLocation::Event,
            Issue::FirstHeaderNotMain {
                found: Some(HeaderKind::Comment),
            },
        ));
        report.add(Discrepancy::new(
            RecordLocation::Phase { index: 0 },
            Issue::MissingField {
                field: "station_code".to_string(),
            },
        ));
        assert!(!report.is_valid());
        assert_eq!(report.len(), 2);
        assert_eq!(report.count_in(IssueCategory::Structure), 1);
        assert_eq!(report.count_in(IssueCategory::Presence), 1);
    }

    #[test]
    fn test_discrepancy_display() {
        let discrepancy = Discrepancy::new(
            RecordLocation::Header {
                index: 1,
                kind: HeaderKind::Error,
            },
            Issue::Negative {
                field: "depth_error".to_string(),
                value: -1.5,
            },
        );
        assert_eq!(
            discrepancy.to_string(),
            "[NRD004] header 2 (error): depth_error -1.5 must not be negative"
        );
    }
}
