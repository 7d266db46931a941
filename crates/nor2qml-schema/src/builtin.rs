//! Built-in XSD simple types.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Namespace of XML Schema itself.
pub const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    /// `xs:anyType`: any content, not checked further.
    AnyType,
    AnySimpleType,
    String,
    NormalizedString,
    Token,
    Boolean,
    Decimal,
    Double,
    Float,
    Integer,
    Long,
    Int,
    NonNegativeInteger,
    PositiveInteger,
    DateTime,
    Date,
    AnyUri,
}

impl Builtin {
    pub fn from_local_name(name: &str) -> Option<Self> {
        let builtin = match name {
            "anyType" => Builtin::AnyType,
            "anySimpleType" => Builtin::AnySimpleType,
            "string" => Builtin::String,
            "normalizedString" => Builtin::NormalizedString,
            "token" | "language" | "Name" | "NCName" | "NMTOKEN" | "ID" | "IDREF" => Builtin::Token,
            "boolean" => Builtin::Boolean,
            "decimal" => Builtin::Decimal,
            "double" => Builtin::Double,
            "float" => Builtin::Float,
            "integer" => Builtin::Integer,
            "long" => Builtin::Long,
            "int" => Builtin::Int,
            "nonNegativeInteger" | "unsignedLong" | "unsignedInt" => Builtin::NonNegativeInteger,
            "positiveInteger" => Builtin::PositiveInteger,
            "dateTime" => Builtin::DateTime,
            "date" => Builtin::Date,
            "anyURI" => Builtin::AnyUri,
            _ => return None,
        };
        Some(builtin)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Builtin::AnyType => "anyType",
            Builtin::AnySimpleType => "anySimpleType",
            Builtin::String => "string",
            Builtin::NormalizedString => "normalizedString",
            Builtin::Token => "token",
            Builtin::Boolean => "boolean",
            Builtin::Decimal => "decimal",
            Builtin::Double => "double",
            Builtin::Float => "float",
            Builtin::Integer => "integer",
            Builtin::Long => "long",
            Builtin::Int => "int",
            Builtin::NonNegativeInteger => "nonNegativeInteger",
            Builtin::PositiveInteger => "positiveInteger",
            Builtin::DateTime => "dateTime",
            Builtin::Date => "date",
            Builtin::AnyUri => "anyURI",
        }
    }

    /// Whether surrounding whitespace is part of the value.
    pub fn preserves_whitespace(&self) -> bool {
        matches!(
            self,
            Builtin::String | Builtin::AnySimpleType | Builtin::AnyType
        )
    }

    /// Check the lexical form of `value`.
    pub fn accepts(&self, value: &str) -> bool {
        let value = if self.preserves_whitespace() {
            value
        } else {
            value.trim()
        };
        match self {
            Builtin::AnyType
            | Builtin::AnySimpleType
            | Builtin::String
            | Builtin::NormalizedString
            | Builtin::Token => true,
            Builtin::AnyUri => !value.chars().any(char::is_whitespace),
            Builtin::Boolean => matches!(value, "true" | "false" | "1" | "0"),
            Builtin::Decimal => is_decimal(value),
            Builtin::Double | Builtin::Float => is_double(value),
            Builtin::Integer => parse_integer(value).is_some(),
            Builtin::Long => parse_integer(value).is_some_and(|n| i64::try_from(n).is_ok()),
            Builtin::Int => parse_integer(value).is_some_and(|n| i32::try_from(n).is_ok()),
            Builtin::NonNegativeInteger => parse_integer(value).is_some_and(|n| n >= 0),
            Builtin::PositiveInteger => parse_integer(value).is_some_and(|n| n > 0),
            Builtin::DateTime => is_date_time(value),
            Builtin::Date => is_date(value),
        }
    }
}

fn parse_integer(value: &str) -> Option<i128> {
    let digits = value.strip_prefix(['+', '-']).unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.strip_prefix('+').unwrap_or(value).parse().ok()
}

fn is_decimal(value: &str) -> bool {
    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
    let mut parts = unsigned.splitn(2, '.');
    let whole = parts.next().unwrap_or_default();
    let fraction = parts.next().unwrap_or_default();
    (!whole.is_empty() || !fraction.is_empty())
        && whole.bytes().all(|b| b.is_ascii_digit())
        && fraction.bytes().all(|b| b.is_ascii_digit())
}

fn is_double(value: &str) -> bool {
    if matches!(value, "INF" | "-INF" | "+INF" | "NaN") {
        return true;
    }
    // Rust also accepts "inf" and "nan" spellings which XSD does not.
    !value.bytes().any(|b| b.is_ascii_alphabetic() && b != b'e' && b != b'E')
        && value.parse::<f64>().is_ok()
}

fn is_date_time(value: &str) -> bool {
    DateTime::parse_from_rfc3339(value).is_ok()
        || NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").is_ok()
}

fn is_date(value: &str) -> bool {
    let naive = value.strip_suffix('Z').unwrap_or(value);
    NaiveDate::parse_from_str(naive, "%Y-%m-%d").is_ok()
}
