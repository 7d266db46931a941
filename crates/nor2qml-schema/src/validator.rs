//! Validating a parsed document against a loaded [`XsdSchema`].

use std::collections::HashMap;

use roxmltree::{Document, Node};
use tracing::debug;

use crate::builtin::Builtin;
use crate::model::{
    ComplexType, Content, ContentModel, ElementDecl, ElementType, Facets, SimpleType, TypeRef,
    XsdSchema,
};
use crate::violation::{SchemaViolation, ViolationDomain, ViolationKind};

const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

impl XsdSchema {
    /// Collect every violation in `document`.
    ///
    /// A root element that is not declared by the schema is treated as a
    /// wrapper: each of its child elements must then match a global
    /// declaration.
    pub fn validate_document(&self, document: &Document<'_>) -> Vec<SchemaViolation> {
        let mut validator = Validator {
            schema: self,
            violations: Vec::new(),
        };
        let root = document.root_element();
        let root_path = format!("/{}", root.tag_name().name());

        if let Some(decl) = self.declared_global(root) {
            validator.element(root, &decl.element_type, &root_path);
        } else {
            let mut matched = false;
            for child in root.children().filter(Node::is_element) {
                let path = format!("{root_path}/{}", child.tag_name().name());
                match self.declared_global(child) {
                    Some(decl) => {
                        matched = true;
                        validator.element(child, &decl.element_type, &path);
                    }
                    None => validator.push(
                        ViolationDomain::Structure,
                        ViolationKind::UndeclaredElement,
                        &path,
                        format!("no global declaration for element '{}'", child.tag_name().name()),
                    ),
                }
            }
            if !matched && validator.violations.is_empty() {
                validator.push(
                    ViolationDomain::Structure,
                    ViolationKind::UndeclaredElement,
                    &root_path,
                    format!("no global declaration for element '{}'", root.tag_name().name()),
                );
            }
        }

        debug!(violations = validator.violations.len(), "validated document");
        validator.violations
    }

    fn declared_global(&self, node: Node<'_, '_>) -> Option<&ElementDecl> {
        if node.tag_name().namespace() != self.target_namespace.as_deref() {
            return None;
        }
        self.global_element(node.tag_name().name())
    }

    /// Check a simple value against `type_ref`; violations are reported at `path`.
    pub fn check_simple(
        &self,
        type_ref: &TypeRef,
        value: &str,
        path: &str,
        domain: ViolationDomain,
    ) -> Vec<SchemaViolation> {
        let mut violations = Vec::new();
        self.simple_into(type_ref, value, path, domain, &mut violations);
        violations
    }

    fn simple_into(
        &self,
        type_ref: &TypeRef,
        value: &str,
        path: &str,
        domain: ViolationDomain,
        violations: &mut Vec<SchemaViolation>,
    ) {
        match type_ref {
            TypeRef::Builtin(builtin) => {
                if !builtin.accepts(value) {
                    violations.push(SchemaViolation::new(
                        domain,
                        ViolationKind::InvalidValue,
                        path,
                        format!("'{value}' is not a valid {}", builtin.name()),
                    ));
                }
            }
            // Complex types never reach here from a well-formed schema.
            TypeRef::Complex(_) => {}
            TypeRef::Simple(key) => match self.simple_types.get(key) {
                None => {}
                Some(SimpleType::Restriction { base, facets }) => {
                    self.simple_into(base, value, path, domain, violations);
                    let lexical = if self.preserves_whitespace(base) {
                        value
                    } else {
                        value.trim()
                    };
                    check_facets(facets, lexical, path, domain, violations);
                }
                Some(SimpleType::List { item }) => {
                    for token in value.split_whitespace() {
                        self.simple_into(item, token, path, domain, violations);
                    }
                }
                Some(SimpleType::Union { members }) => {
                    let matches_member = members
                        .iter()
                        .any(|member| self.check_simple(member, value, path, domain).is_empty());
                    if !matches_member {
                        violations.push(SchemaViolation::new(
                            domain,
                            ViolationKind::InvalidValue,
                            path,
                            format!("'{value}' matches none of the member types of {key}"),
                        ));
                    }
                }
            },
        }
    }

    fn preserves_whitespace(&self, type_ref: &TypeRef) -> bool {
        match type_ref {
            TypeRef::Builtin(builtin) => builtin.preserves_whitespace(),
            TypeRef::Simple(key) => match self.simple_types.get(key) {
                Some(SimpleType::Restriction { base, .. }) => self.preserves_whitespace(base),
                _ => false,
            },
            TypeRef::Complex(_) => false,
        }
    }
}

fn check_facets(
    facets: &Facets,
    value: &str,
    path: &str,
    domain: ViolationDomain,
    violations: &mut Vec<SchemaViolation>,
) {
    if facets.is_empty() {
        return;
    }
    if !facets.enumeration.is_empty() && !facets.enumeration.iter().any(|allowed| allowed == value) {
        violations.push(SchemaViolation::new(
            domain,
            ViolationKind::EnumerationMismatch,
            path,
            format!("'{value}' is not one of the enumerated values"),
        ));
    }
    for pattern in &facets.patterns {
        if !pattern.is_match(value) {
            violations.push(SchemaViolation::new(
                domain,
                ViolationKind::PatternMismatch,
                path,
                format!("'{value}' does not match pattern {}", pattern.as_str()),
            ));
        }
    }
    let length = value.chars().count();
    if let Some(min) = facets.min_length
        && length < min
    {
        violations.push(SchemaViolation::new(
            domain,
            ViolationKind::LengthMismatch,
            path,
            format!("length {length} is shorter than {min}"),
        ));
    }
    if let Some(max) = facets.max_length
        && length > max
    {
        violations.push(SchemaViolation::new(
            domain,
            ViolationKind::LengthMismatch,
            path,
            format!("length {length} is longer than {max}"),
        ));
    }
}

struct Validator<'s> {
    schema: &'s XsdSchema,
    violations: Vec<SchemaViolation>,
}

impl Validator<'_> {
    fn push(
        &mut self,
        domain: ViolationDomain,
        kind: ViolationKind,
        path: &str,
        message: impl Into<String>,
    ) {
        self.violations
            .push(SchemaViolation::new(domain, kind, path, message));
    }

    fn element(&mut self, node: Node<'_, '_>, type_ref: &TypeRef, path: &str) {
        let schema = self.schema;
        match type_ref {
            TypeRef::Builtin(Builtin::AnyType) => {}
            TypeRef::Builtin(_) | TypeRef::Simple(_) => {
                self.undeclared_attributes(node, None, path);
                self.simple_content(node, type_ref, path);
            }
            TypeRef::Complex(key) => {
                let Some(complex) = schema.complex_types.get(key) else {
                    return;
                };
                self.undeclared_attributes(node, Some(complex), path);
                self.required_attributes(node, complex, path);
                match &complex.content {
                    Content::Simple(simple) => self.simple_content(node, simple, path),
                    Content::Elements { model, mixed } => self.children(node, model, *mixed, path),
                }
            }
        }
    }

    fn simple_content(&mut self, node: Node<'_, '_>, type_ref: &TypeRef, path: &str) {
        if node.children().any(|child| child.is_element()) {
            self.push(
                ViolationDomain::Structure,
                ViolationKind::ChildrenNotAllowed,
                path,
                "element of simple type has child elements",
            );
            return;
        }
        let text = text_of(node);
        let violations = self
            .schema
            .check_simple(type_ref, &text, path, ViolationDomain::Datatype);
        self.violations.extend(violations);
    }

    fn children(&mut self, node: Node<'_, '_>, model: &ContentModel, mixed: bool, path: &str) {
        let schema = self.schema;
        if !mixed && !text_of(node).trim().is_empty() {
            self.push(
                ViolationDomain::Structure,
                ViolationKind::TextNotAllowed,
                path,
                "text is not allowed in element-only content",
            );
        }

        let local_ns = if schema.qualified_elements {
            schema.target_namespace.as_deref()
        } else {
            None
        };
        let mut counts: HashMap<&str, u32> = HashMap::new();

        for child in node.children().filter(Node::is_element) {
            let name = child.tag_name().name();
            let namespace = child.tag_name().namespace();
            let Some(element) = model.element(name) else {
                let foreign = namespace != schema.target_namespace.as_deref();
                if !(model.any_element && foreign) {
                    self.push(
                        ViolationDomain::Structure,
                        ViolationKind::UnexpectedElement,
                        &format!("{path}/{name}"),
                        format!("element '{name}' is not allowed here"),
                    );
                }
                continue;
            };

            let count = counts.entry(element.name.as_str()).or_insert(0);
            *count += 1;
            let child_path = if *count > 1 {
                format!("{path}/{name}[{count}]")
            } else {
                format!("{path}/{name}")
            };

            let (expected_ns, child_type) = match &element.element_type {
                ElementType::Declared(type_ref) => (local_ns, Some(type_ref)),
                ElementType::Global => (
                    schema.target_namespace.as_deref(),
                    schema.global_element(name).map(|decl| &decl.element_type),
                ),
            };
            if namespace != expected_ns {
                self.push(
                    ViolationDomain::Structure,
                    ViolationKind::NamespaceMismatch,
                    &child_path,
                    format!(
                        "element '{name}' expected in namespace {}",
                        expected_ns.unwrap_or("(none)")
                    ),
                );
                continue;
            }
            if let Some(child_type) = child_type {
                self.element(child, child_type, &child_path);
            }
        }

        for element in &model.elements {
            let found = counts.get(element.name.as_str()).copied().unwrap_or(0);
            if found < element.occurs.min {
                let message = if element.occurs.min == 1 {
                    format!("missing required element '{}'", element.name)
                } else {
                    format!(
                        "expected at least {} '{}' elements, found {found}",
                        element.occurs.min, element.name
                    )
                };
                self.push(
                    ViolationDomain::Structure,
                    ViolationKind::MissingElement,
                    path,
                    message,
                );
            }
            if let Some(max) = element.occurs.max
                && found > max
            {
                self.push(
                    ViolationDomain::Structure,
                    ViolationKind::TooManyElements,
                    path,
                    format!("at most {max} '{}' elements allowed, found {found}", element.name),
                );
            }
        }

        for choice in &model.required_choices {
            if !choice.iter().any(|name| counts.contains_key(name.as_str())) {
                self.push(
                    ViolationDomain::Structure,
                    ViolationKind::ChoiceUnsatisfied,
                    path,
                    format!("expected one of: {}", choice.join(", ")),
                );
            }
        }
    }

    /// Report attributes the type does not declare and check declared values.
    fn undeclared_attributes(
        &mut self,
        node: Node<'_, '_>,
        complex: Option<&ComplexType>,
        path: &str,
    ) {
        let schema = self.schema;
        for attribute in node.attributes() {
            let name = attribute.name();
            let attribute_path = format!("{path}/@{name}");
            match attribute.namespace() {
                Some(XSI_NS | XML_NS) => {}
                Some(namespace) => {
                    let wildcard = complex.is_some_and(|c| c.any_attribute)
                        && Some(namespace) != schema.target_namespace.as_deref();
                    if !wildcard {
                        self.push(
                            ViolationDomain::Attribute,
                            ViolationKind::UndeclaredAttribute,
                            &attribute_path,
                            format!("attribute '{name}' is not declared"),
                        );
                    }
                }
                None => {
                    let declared = complex
                        .and_then(|c| c.attributes.iter().find(|decl| decl.name == name));
                    match declared {
                        Some(decl) => {
                            let violations = schema.check_simple(
                                &decl.attribute_type,
                                attribute.value(),
                                &attribute_path,
                                ViolationDomain::Attribute,
                            );
                            self.violations.extend(violations);
                        }
                        None => self.push(
                            ViolationDomain::Attribute,
                            ViolationKind::UndeclaredAttribute,
                            &attribute_path,
                            format!("attribute '{name}' is not declared"),
                        ),
                    }
                }
            }
        }
    }

    fn required_attributes(&mut self, node: Node<'_, '_>, complex: &ComplexType, path: &str) {
        for decl in complex.attributes.iter().filter(|decl| decl.required) {
            if node.attribute(decl.name.as_str()).is_none() {
                self.push(
                    ViolationDomain::Attribute,
                    ViolationKind::MissingAttribute,
                    path,
                    format!("missing required attribute '{}'", decl.name),
                );
            }
        }
    }
}

/// Concatenated text of the direct text children.
fn text_of(node: Node<'_, '_>) -> String {
    node.children()
        .filter(Node::is_text)
        .filter_map(|child| child.text())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema"
           xmlns:t="urn:test" targetNamespace="urn:test" elementFormDefault="qualified">
  <xs:element name="item" type="t:Item"/>
  <xs:complexType name="Item">
    <xs:sequence>
      <xs:element name="code" type="t:Code"/>
      <xs:element name="size" type="xs:double" minOccurs="0" maxOccurs="2"/>
      <xs:element name="tags" type="t:Tags" minOccurs="0"/>
    </xs:sequence>
    <xs:attribute name="id" type="xs:int" use="required"/>
  </xs:complexType>
  <xs:simpleType name="Code">
    <xs:restriction base="xs:string">
      <xs:enumeration value="on"/>
      <xs:enumeration value="off"/>
    </xs:restriction>
  </xs:simpleType>
  <xs:simpleType name="Tags">
    <xs:list itemType="xs:integer"/>
  </xs:simpleType>
</xs:schema>"#;

    fn violations(xml: &str) -> Vec<SchemaViolation> {
        let schema = XsdSchema::parse(SCHEMA, "test").unwrap();
        let document = Document::parse(xml).unwrap();
        schema.validate_document(&document)
    }

    fn kinds(xml: &str) -> Vec<ViolationKind> {
        violations(xml).into_iter().map(|v| v.kind).collect()
    }

    #[test]
    fn test_valid_document() {
        let xml = r#"<item xmlns="urn:test" id="3"><code>on</code><size>1.5</size><tags>1 2 3</tags></item>"#;
        assert!(violations(xml).is_empty());
    }

    #[test]
    fn test_structure_violations() {
        let xml = r#"<item xmlns="urn:test" id="3"><size>1</size><size>2</size><size>3</size><extra/></item>"#;
        let found = violations(xml);
        let kinds: Vec<ViolationKind> = found.iter().map(|v| v.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ViolationKind::UnexpectedElement,
                ViolationKind::MissingElement,
                ViolationKind::TooManyElements,
            ]
        );
        assert_eq!(found[0].path, "/item/extra");
    }

    #[test]
    fn test_value_violations() {
        let xml = r#"<item xmlns="urn:test" id="x"><code>maybe</code><tags>1 b</tags></item>"#;
        let found = violations(xml);
        assert_eq!(found.len(), 3);
        assert_eq!(found[0].domain, ViolationDomain::Attribute);
        assert_eq!(found[0].path, "/item/@id");
        assert_eq!(found[1].kind, ViolationKind::EnumerationMismatch);
        assert_eq!(found[2].kind, ViolationKind::InvalidValue);
        assert_eq!(found[2].path, "/item/tags");
    }

    #[test]
    fn test_missing_attribute_and_namespace() {
        assert_eq!(
            kinds(r#"<item xmlns="urn:test"><code xmlns="">on</code></item>"#),
            vec![
                ViolationKind::MissingAttribute,
                ViolationKind::NamespaceMismatch,
            ]
        );
    }

    #[test]
    fn test_wrapper_root() {
        let xml = r#"<w:wrap xmlns:w="urn:wrap" xmlns="urn:test"><item id="1"><code>off</code></item><other/></w:wrap>"#;
        let found = violations(xml);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, ViolationKind::UndeclaredElement);
        assert_eq!(found[0].path, "/wrap/other");
    }
}
