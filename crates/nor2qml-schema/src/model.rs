//! Resolved schema model.
//!
//! Content models are kept flattened: for every child element name the
//! effective minimum and maximum number of occurrences, plus the choices
//! that need at least one of their alternatives. Child order is not
//! checked.

use std::collections::HashMap;

use regex::Regex;

use crate::builtin::Builtin;

/// Reference to the type of an element or attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    Builtin(Builtin),
    /// Key into [`XsdSchema::simple_types`].
    Simple(String),
    /// Key into [`XsdSchema::complex_types`].
    Complex(String),
}

/// Occurrence bounds; `max == None` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurs {
    pub min: u32,
    pub max: Option<u32>,
}

impl Occurs {
    pub const ONCE: Occurs = Occurs {
        min: 1,
        max: Some(1),
    };

    /// Bounds of a particle nested inside a group with bounds `self`.
    pub fn times(self, inner: Occurs) -> Occurs {
        Occurs {
            min: self.min.saturating_mul(inner.min),
            max: self.max.zip(inner.max).map(|(a, b)| a.saturating_mul(b)),
        }
    }

    /// Bounds of a name declared in two places of one content model.
    pub fn plus(self, other: Occurs) -> Occurs {
        Occurs {
            min: self.min.saturating_add(other.min),
            max: self.max.zip(other.max).map(|(a, b)| a.saturating_add(b)),
        }
    }

    pub fn optional(self) -> Occurs {
        Occurs { min: 0, ..self }
    }
}

/// Where the type of a child element comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementType {
    Declared(TypeRef),
    /// `ref=` to a global element; resolved when validating.
    Global,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementUse {
    pub name: String,
    pub element_type: ElementType,
    pub occurs: Occurs,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentModel {
    pub elements: Vec<ElementUse>,
    /// Each entry lists the alternatives of a choice that must be taken.
    pub required_choices: Vec<Vec<String>>,
    /// An `xs:any` wildcard admits elements from other namespaces.
    pub any_element: bool,
}

impl ContentModel {
    pub fn element(&self, name: &str) -> Option<&ElementUse> {
        self.elements.iter().find(|element| element.name == name)
    }

    pub fn add(&mut self, element: ElementUse) {
        match self.elements.iter_mut().find(|e| e.name == element.name) {
            Some(existing) => existing.occurs = existing.occurs.plus(element.occurs),
            None => self.elements.push(element),
        }
    }

    pub fn extend(&mut self, other: ContentModel) {
        for element in other.elements {
            self.add(element);
        }
        self.required_choices.extend(other.required_choices);
        self.any_element |= other.any_element;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDecl {
    pub name: String,
    pub attribute_type: TypeRef,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Element-only (or mixed) content.
    Elements { model: ContentModel, mixed: bool },
    /// Text of a simple type, attributes allowed.
    Simple(TypeRef),
}

impl Default for Content {
    fn default() -> Self {
        Content::Elements {
            model: ContentModel::default(),
            mixed: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplexType {
    pub content: Content,
    pub attributes: Vec<AttributeDecl>,
    pub any_attribute: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Facets {
    pub enumeration: Vec<String>,
    pub patterns: Vec<Regex>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl Facets {
    pub fn is_empty(&self) -> bool {
        self.enumeration.is_empty()
            && self.patterns.is_empty()
            && self.min_length.is_none()
            && self.max_length.is_none()
    }
}

#[derive(Debug, Clone)]
pub enum SimpleType {
    Restriction { base: TypeRef, facets: Facets },
    List { item: TypeRef },
    Union { members: Vec<TypeRef> },
}

/// Global element declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementDecl {
    pub name: String,
    pub element_type: TypeRef,
}

/// A loaded schema ready for validation.
#[derive(Debug, Clone, Default)]
pub struct XsdSchema {
    pub target_namespace: Option<String>,
    /// `elementFormDefault="qualified"`: local elements are in the target namespace.
    pub qualified_elements: bool,
    pub elements: HashMap<String, ElementDecl>,
    pub complex_types: HashMap<String, ComplexType>,
    pub simple_types: HashMap<String, SimpleType>,
}

impl XsdSchema {
    pub fn global_element(&self, name: &str) -> Option<&ElementDecl> {
        self.elements.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occurs_arithmetic() {
        let unbounded = Occurs { min: 0, max: None };
        assert_eq!(Occurs::ONCE.times(unbounded), unbounded);
        let twice = Occurs {
            min: 2,
            max: Some(2),
        };
        assert_eq!(twice.times(twice), Occurs { min: 4, max: Some(4) });
        assert_eq!(Occurs::ONCE.plus(unbounded), Occurs { min: 1, max: None });
        assert_eq!(twice.optional().min, 0);
    }

    #[test]
    fn test_content_model_merges_names() {
        let mut model = ContentModel::default();
        let comment = ElementUse {
            name: "comment".to_string(),
            element_type: ElementType::Global,
            occurs: Occurs::ONCE,
        };
        model.add(comment.clone());
        model.add(comment);
        assert_eq!(model.elements.len(), 1);
        assert_eq!(model.element("comment").unwrap().occurs.min, 2);
    }
}
