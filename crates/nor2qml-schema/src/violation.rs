//! Schema violations found in a document.

use std::fmt;

/// Broad area a violation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationDomain {
    Structure,
    Datatype,
    Attribute,
}

impl ViolationDomain {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationDomain::Structure => "structure",
            ViolationDomain::Datatype => "datatype",
            ViolationDomain::Attribute => "attribute",
        }
    }
}

impl fmt::Display for ViolationDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// No global declaration matches the element.
    UndeclaredElement,
    /// Child element not allowed by the content model.
    UnexpectedElement,
    MissingElement,
    TooManyElements,
    /// None of the alternatives of a required choice is present.
    ChoiceUnsatisfied,
    NamespaceMismatch,
    TextNotAllowed,
    ChildrenNotAllowed,
    MissingAttribute,
    UndeclaredAttribute,
    InvalidValue,
    EnumerationMismatch,
    PatternMismatch,
    LengthMismatch,
}

impl ViolationKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            ViolationKind::UndeclaredElement => "ELEMENT_UNDECLARED",
            ViolationKind::UnexpectedElement => "ELEMENT_CONTENT",
            ViolationKind::MissingElement => "ELEMENT_MISSING",
            ViolationKind::TooManyElements => "ELEMENT_TOO_MANY",
            ViolationKind::ChoiceUnsatisfied => "CHOICE_UNSATISFIED",
            ViolationKind::NamespaceMismatch => "ELEMENT_NAMESPACE",
            ViolationKind::TextNotAllowed => "TEXT_NOT_ALLOWED",
            ViolationKind::ChildrenNotAllowed => "CHILDREN_NOT_ALLOWED",
            ViolationKind::MissingAttribute => "ATTRIBUTE_MISSING",
            ViolationKind::UndeclaredAttribute => "ATTRIBUTE_UNDECLARED",
            ViolationKind::InvalidValue => "DATATYPE_INVALID",
            ViolationKind::EnumerationMismatch => "ENUMERATION_INVALID",
            ViolationKind::PatternMismatch => "PATTERN_INVALID",
            ViolationKind::LengthMismatch => "LENGTH_INVALID",
        }
    }
}

/// One reason a document fails the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    pub domain: ViolationDomain,
    pub kind: ViolationKind,
    /// Element path such as `/eventParameters/event/origin[2]/time`.
    pub path: String,
    pub message: String,
}

impl SchemaViolation {
    pub fn new(
        domain: ViolationDomain,
        kind: ViolationKind,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            domain,
            kind,
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} at {}: {}",
            self.domain,
            self.type_name(),
            self.path,
            self.message
        )
    }
}
