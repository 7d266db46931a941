//! Fixed-column access to Nordic lines.
//!
//! Columns are addressed 1-based and inclusive, the way the format
//! description lists them.

use std::str::FromStr;

use nor2qml_model::{Discrepancy, Issue, RecordLocation};

/// Width of every Nordic line.
pub const LINE_WIDTH: usize = 80;

/// One line padded to [`LINE_WIDTH`] columns.
#[derive(Debug, Clone)]
pub struct Columns {
    chars: Vec<char>,
}

impl Columns {
    /// Pad `line` with blanks up to the full width.
    ///
    /// Returns `None` when the line is wider than [`LINE_WIDTH`].
    pub fn new(line: &str) -> Option<Self> {
        let mut chars: Vec<char> = line.trim_end_matches(['\r', '\n']).chars().collect();
        if chars.len() > LINE_WIDTH {
            // Trailing blanks past column 80 are harmless.
            if chars[LINE_WIDTH..].iter().any(|c| !c.is_whitespace()) {
                return None;
            }
            chars.truncate(LINE_WIDTH);
        }
        chars.resize(LINE_WIDTH, ' ');
        Some(Self { chars })
    }

    /// Column 80.
    pub fn type_code(&self) -> char {
        self.chars[LINE_WIDTH - 1]
    }

    /// Raw text of columns `start..=end`.
    pub fn slice(&self, start: usize, end: usize) -> String {
        debug_assert!(start >= 1 && start <= end && end <= LINE_WIDTH);
        self.chars[start - 1..end].iter().collect()
    }

    /// Character at `column`, `None` when blank.
    pub fn char_at(&self, column: usize) -> Option<char> {
        let c = self.chars[column - 1];
        if c == ' ' { None } else { Some(c) }
    }

    /// Trimmed text of columns `start..=end`, `None` when blank.
    pub fn text(&self, start: usize, end: usize) -> Option<String> {
        let raw = self.slice(start, end);
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    pub fn is_blank(&self) -> bool {
        self.chars.iter().all(|c| c.is_whitespace())
    }
}

/// Decodes fields of one record and collects what fails to decode.
pub struct FieldReader<'a> {
    columns: &'a Columns,
    location: RecordLocation,
    discrepancies: &'a mut Vec<Discrepancy>,
}

impl<'a> FieldReader<'a> {
    pub fn new(
        columns: &'a Columns,
        location: RecordLocation,
        discrepancies: &'a mut Vec<Discrepancy>,
    ) -> Self {
        Self {
            columns,
            location,
            discrepancies,
        }
    }

    pub fn text(&self, start: usize, end: usize) -> Option<String> {
        self.columns.text(start, end)
    }

    pub fn char_at(&self, column: usize) -> Option<char> {
        self.columns.char_at(column)
    }

    /// Parse a numeric field; a blank field is `None`, an undecodable one is
    /// recorded as [`Issue::MalformedField`] and also `None`.
    pub fn number<T: FromStr>(&mut self, field: &str, start: usize, end: usize) -> Option<T> {
        let raw = self.columns.text(start, end)?;
        match parse_number::<T>(&raw) {
            Some(value) => Some(value),
            None => {
                self.malformed(field, &raw);
                None
            }
        }
    }

    pub fn malformed(&mut self, field: &str, raw: &str) {
        self.discrepancies.push(Discrepancy::new(
            self.location,
            Issue::MalformedField {
                field: field.to_string(),
                raw: raw.to_string(),
            },
        ));
    }
}

/// Parse a trimmed numeric value, accepting a leading `+` and a bare
/// trailing decimal point (`12.`). Only finite decimal notation is numeric;
/// `nan`, `inf` and the like are not.
fn parse_number<T: FromStr>(raw: &str) -> Option<T> {
    let value = raw.trim();
    if !is_decimal_notation(value) {
        return None;
    }
    let value = value.strip_prefix('+').unwrap_or(value);
    if let Ok(parsed) = value.parse::<T>() {
        return Some(parsed);
    }
    // Fortran F-format writes whole numbers as "12." which integer targets reject.
    let stripped = value.strip_suffix('.')?;
    if stripped.is_empty() || stripped.contains('.') {
        return None;
    }
    stripped.parse::<T>().ok()
}

/// Digits with optional sign, decimal point and exponent, and a finite value.
fn is_decimal_notation(value: &str) -> bool {
    let mut previous_digit = false;
    for c in value.chars() {
        match c {
            '0'..='9' => previous_digit = true,
            '+' | '-' | '.' => {}
            'e' | 'E' if previous_digit => previous_digit = false,
            _ => return false,
        }
    }
    value.chars().any(|c| c.is_ascii_digit())
        && value
            .strip_suffix('.')
            .unwrap_or(value)
            .parse::<f64>()
            .is_ok_and(f64::is_finite)
}
