//! Loading an XSD document into an [`XsdSchema`].
//!
//! Named types are collected in a first pass so that references can be
//! resolved regardless of declaration order. Complex type derivations are
//! merged once every type is known.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use regex::Regex;
use roxmltree::{Document, Node};
use tracing::{debug, trace, warn};

use crate::builtin::{Builtin, XSD_NS};
use crate::error::{Result, SchemaError};
use crate::model::{
    AttributeDecl, ComplexType, Content, ContentModel, ElementDecl, ElementType, ElementUse,
    Facets, Occurs, SimpleType, TypeRef, XsdSchema,
};

impl XsdSchema {
    /// Read and load the schema at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let schema = Self::parse(&text, &path.display().to_string())?;
        debug!(
            path = %path.display(),
            elements = schema.elements.len(),
            complex_types = schema.complex_types.len(),
            simple_types = schema.simple_types.len(),
            "loaded schema"
        );
        Ok(schema)
    }

    /// Load a schema from its text. `origin` names it in error messages.
    pub fn parse(text: &str, origin: &str) -> Result<Self> {
        let document = Document::parse(text).map_err(|err| SchemaError::Parse {
            what: origin.to_string(),
            message: err.to_string(),
        })?;
        let root = document.root_element();
        if !is_xsd(root, "schema") {
            return Err(SchemaError::Parse {
                what: origin.to_string(),
                message: "root element is not xs:schema".to_string(),
            });
        }
        Loader::new(root)?.run(root)
    }
}

/// Complex type before its base type is merged in.
struct RawComplex {
    derivation: Option<Derivation>,
    own: ComplexType,
}

enum Derivation {
    Extension(TypeRef),
    Restriction(TypeRef),
    SimpleContent(TypeRef),
}

struct Loader<'a, 'input> {
    schema: XsdSchema,
    complex_names: HashSet<String>,
    simple_names: HashSet<String>,
    groups: HashMap<String, Node<'a, 'input>>,
    attribute_groups: HashMap<String, Node<'a, 'input>>,
    raw_complex: HashMap<String, RawComplex>,
}

impl<'a, 'input> Loader<'a, 'input> {
    /// First pass: names of every top-level type and group.
    fn new(root: Node<'a, 'input>) -> Result<Self> {
        let mut loader = Self {
            schema: XsdSchema {
                target_namespace: root.attribute("targetNamespace").map(str::to_string),
                qualified_elements: root.attribute("elementFormDefault") == Some("qualified"),
                ..XsdSchema::default()
            },
            complex_names: HashSet::new(),
            simple_names: HashSet::new(),
            groups: HashMap::new(),
            attribute_groups: HashMap::new(),
            raw_complex: HashMap::new(),
        };

        for child in xsd_children(root) {
            let name = child.attribute("name").map(str::to_string);
            match (child.tag_name().name(), name) {
                ("complexType", Some(name)) => {
                    loader.complex_names.insert(name);
                }
                ("simpleType", Some(name)) => {
                    loader.simple_names.insert(name);
                }
                ("group", Some(name)) => {
                    loader.groups.insert(name, child);
                }
                ("attributeGroup", Some(name)) => {
                    loader.attribute_groups.insert(name, child);
                }
                (construct @ ("import" | "include" | "redefine" | "override"), _) => {
                    return Err(SchemaError::Unsupported {
                        construct: format!("xs:{construct}"),
                    });
                }
                _ => {}
            }
        }
        Ok(loader)
    }

    /// Second pass: declarations, then derivation merging and reference checks.
    fn run(mut self, root: Node<'a, 'input>) -> Result<XsdSchema> {
        for child in xsd_children(root) {
            match child.tag_name().name() {
                "complexType" => {
                    let name = required_name(child)?;
                    let raw = self.complex_type(child, &name)?;
                    self.raw_complex.insert(name, raw);
                }
                "simpleType" => {
                    let name = required_name(child)?;
                    let simple = self.simple_type(child, &name)?;
                    self.schema.simple_types.insert(name, simple);
                }
                "element" => {
                    let name = required_name(child)?;
                    let element_type = self.element_type(child, &name)?;
                    self.schema
                        .elements
                        .insert(name.clone(), ElementDecl { name, element_type });
                }
                other => trace!(construct = other, "skipping top-level schema construct"),
            }
        }

        let mut resolved = HashMap::new();
        let keys: Vec<String> = self.raw_complex.keys().cloned().collect();
        for key in keys {
            let mut stack = Vec::new();
            self.resolve_complex(&key, &mut resolved, &mut stack)?;
        }
        self.schema.complex_types = resolved;
        self.check_element_refs()?;
        Ok(self.schema)
    }

    fn complex_type(&mut self, node: Node<'a, 'input>, key: &str) -> Result<RawComplex> {
        let mut own = ComplexType::default();
        let mut model = ContentModel::default();
        let mixed = node.attribute("mixed") == Some("true");
        let mut derivation = None;

        for child in xsd_children(node) {
            match child.tag_name().name() {
                "complexContent" | "simpleContent" => {
                    let simple = child.tag_name().name() == "simpleContent";
                    let Some(step) = xsd_children(child).next() else {
                        return Err(SchemaError::Parse {
                            what: key.to_string(),
                            message: "empty content derivation".to_string(),
                        });
                    };
                    let base = self.resolve_type(step, required_attr(step, "base")?)?;
                    derivation = Some(match (simple, step.tag_name().name()) {
                        (true, _) => Derivation::SimpleContent(base),
                        (false, "extension") => Derivation::Extension(base),
                        (false, _) => Derivation::Restriction(base),
                    });
                    for inner in xsd_children(step) {
                        self.complex_member(inner, key, &mut model, &mut own)?;
                    }
                }
                _ => self.complex_member(child, key, &mut model, &mut own)?,
            }
        }

        own.content = Content::Elements { model, mixed };
        Ok(RawComplex { derivation, own })
    }

    /// One child of a complex type body: a model group or an attribute.
    fn complex_member(
        &mut self,
        node: Node<'a, 'input>,
        owner: &str,
        model: &mut ContentModel,
        complex: &mut ComplexType,
    ) -> Result<()> {
        match node.tag_name().name() {
            "sequence" | "choice" | "all" | "group" => {
                self.particle(node, Occurs::ONCE, false, owner, model)
            }
            "attribute" | "attributeGroup" | "anyAttribute" => self.attribute(node, owner, complex),
            // Facets of a simpleContent restriction are not enforced.
            "enumeration" | "pattern" | "minLength" | "maxLength" | "length" | "simpleType" => {
                Ok(())
            }
            other => Err(SchemaError::Unsupported {
                construct: format!("xs:{other} in complex type {owner}"),
            }),
        }
    }

    /// Flatten one particle into `model`.
    fn particle(
        &mut self,
        node: Node<'a, 'input>,
        outer: Occurs,
        in_choice: bool,
        owner: &str,
        model: &mut ContentModel,
    ) -> Result<()> {
        let occurs = outer.times(occurs(node)?);
        match node.tag_name().name() {
            "element" => {
                let occurs = if in_choice { occurs.optional() } else { occurs };
                let element = if let Some(reference) = node.attribute("ref") {
                    ElementUse {
                        name: local_name(reference).to_string(),
                        element_type: ElementType::Global,
                        occurs,
                    }
                } else {
                    let name = required_name(node)?;
                    let key = format!("{owner}/{name}");
                    ElementUse {
                        element_type: ElementType::Declared(self.element_type(node, &key)?),
                        name,
                        occurs,
                    }
                };
                model.add(element);
            }
            "sequence" | "all" => {
                for child in xsd_children(node) {
                    self.particle(child, occurs, in_choice, owner, model)?;
                }
            }
            "choice" => {
                let branches: Vec<Node<'a, 'input>> = xsd_children(node).collect();
                let alternative = branches.len() > 1;
                if alternative
                    && !in_choice
                    && occurs.min >= 1
                    && let Some(names) = self.choice_requirement(&branches)?
                {
                    model.required_choices.push(names);
                }
                for branch in branches {
                    self.particle(branch, occurs, in_choice || alternative, owner, model)?;
                }
            }
            "group" => {
                let group = self.group(node)?;
                for child in xsd_children(group) {
                    self.particle(child, occurs, in_choice, owner, model)?;
                }
            }
            "any" => model.any_element = true,
            other => {
                return Err(SchemaError::Unsupported {
                    construct: format!("xs:{other} in content of {owner}"),
                });
            }
        }
        Ok(())
    }

    /// Names that can satisfy a required choice, or `None` when some branch
    /// can be taken without any element at all.
    fn choice_requirement(&self, branches: &[Node<'a, 'input>]) -> Result<Option<Vec<String>>> {
        let mut names = Vec::new();
        for branch in branches {
            if occurs(*branch)?.min == 0 {
                return Ok(None);
            }
            let mut branch_names = Vec::new();
            if !self.branch_names(*branch, &mut branch_names)? || branch_names.is_empty() {
                return Ok(None);
            }
            names.extend(branch_names);
        }
        Ok(Some(names))
    }

    /// Collect element names under `node`; false when a wildcard is reached.
    fn branch_names(&self, node: Node<'a, 'input>, names: &mut Vec<String>) -> Result<bool> {
        match node.tag_name().name() {
            "element" => {
                let name = node
                    .attribute("name")
                    .or_else(|| node.attribute("ref").map(local_name))
                    .unwrap_or_default();
                names.push(name.to_string());
                Ok(true)
            }
            "sequence" | "choice" | "all" => {
                for child in xsd_children(node) {
                    if !self.branch_names(child, names)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            "group" => {
                let group = self.group(node)?;
                for child in xsd_children(group) {
                    if !self.branch_names(child, names)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn group(&self, node: Node<'a, 'input>) -> Result<Node<'a, 'input>> {
        let reference = required_attr(node, "ref")?;
        self.groups
            .get(local_name(reference))
            .copied()
            .ok_or_else(|| SchemaError::UnknownReference {
                kind: "group",
                name: reference.to_string(),
            })
    }

    fn attribute(
        &mut self,
        node: Node<'a, 'input>,
        owner: &str,
        complex: &mut ComplexType,
    ) -> Result<()> {
        match node.tag_name().name() {
            "anyAttribute" => complex.any_attribute = true,
            "attributeGroup" => {
                let reference = required_attr(node, "ref")?;
                let group = self
                    .attribute_groups
                    .get(local_name(reference))
                    .copied()
                    .ok_or_else(|| SchemaError::UnknownReference {
                        kind: "attribute group",
                        name: reference.to_string(),
                    })?;
                for child in xsd_children(group) {
                    self.attribute(child, owner, complex)?;
                }
            }
            _ => {
                let usage = node.attribute("use").unwrap_or("optional");
                if usage == "prohibited" {
                    return Ok(());
                }
                let name = match node.attribute("ref") {
                    Some(reference) => local_name(reference).to_string(),
                    None => required_name(node)?,
                };
                let attribute_type = if let Some(type_name) = node.attribute("type") {
                    self.resolve_type(node, type_name)?
                } else if let Some(inline) = xsd_child(node, "simpleType") {
                    let key = format!("{owner}@{name}");
                    let simple = self.simple_type(inline, &key)?;
                    self.schema.simple_types.insert(key.clone(), simple);
                    TypeRef::Simple(key)
                } else {
                    TypeRef::Builtin(Builtin::AnySimpleType)
                };
                complex.attributes.push(AttributeDecl {
                    name,
                    attribute_type,
                    required: usage == "required",
                });
            }
        }
        Ok(())
    }

    /// Type of an element declaration: a `type` reference, an inline type
    /// registered under `key`, or `xs:anyType`.
    fn element_type(&mut self, node: Node<'a, 'input>, key: &str) -> Result<TypeRef> {
        if let Some(type_name) = node.attribute("type") {
            return self.resolve_type(node, type_name);
        }
        if let Some(inline) = xsd_child(node, "complexType") {
            let raw = self.complex_type(inline, key)?;
            self.raw_complex.insert(key.to_string(), raw);
            return Ok(TypeRef::Complex(key.to_string()));
        }
        if let Some(inline) = xsd_child(node, "simpleType") {
            let simple = self.simple_type(inline, key)?;
            self.schema.simple_types.insert(key.to_string(), simple);
            return Ok(TypeRef::Simple(key.to_string()));
        }
        Ok(TypeRef::Builtin(Builtin::AnyType))
    }

    fn simple_type(&mut self, node: Node<'a, 'input>, key: &str) -> Result<SimpleType> {
        let Some(step) = xsd_children(node).next() else {
            return Err(SchemaError::Parse {
                what: key.to_string(),
                message: "simple type without derivation".to_string(),
            });
        };
        match step.tag_name().name() {
            "restriction" => {
                let base = match step.attribute("base") {
                    Some(base) => self.resolve_type(step, base)?,
                    None => self.inline_simple(step, &format!("{key}#base"))?,
                };
                Ok(SimpleType::Restriction {
                    base,
                    facets: facets(step, key)?,
                })
            }
            "list" => {
                let item = match step.attribute("itemType") {
                    Some(item) => self.resolve_type(step, item)?,
                    None => self.inline_simple(step, &format!("{key}#item"))?,
                };
                Ok(SimpleType::List { item })
            }
            "union" => {
                let mut members = Vec::new();
                for member in step.attribute("memberTypes").unwrap_or_default().split_whitespace() {
                    members.push(self.resolve_type(step, member)?);
                }
                for (index, inline) in xsd_children(step).enumerate() {
                    let member_key = format!("{key}#member{index}");
                    let simple = self.simple_type(inline, &member_key)?;
                    self.schema.simple_types.insert(member_key.clone(), simple);
                    members.push(TypeRef::Simple(member_key));
                }
                Ok(SimpleType::Union { members })
            }
            other => Err(SchemaError::Unsupported {
                construct: format!("xs:{other} in simple type {key}"),
            }),
        }
    }

    fn inline_simple(&mut self, node: Node<'a, 'input>, key: &str) -> Result<TypeRef> {
        let inline = xsd_child(node, "simpleType").ok_or_else(|| SchemaError::Parse {
            what: key.to_string(),
            message: "missing base type".to_string(),
        })?;
        let simple = self.simple_type(inline, key)?;
        self.schema.simple_types.insert(key.to_string(), simple);
        Ok(TypeRef::Simple(key.to_string()))
    }

    /// Resolve a QName against the namespaces in scope at `node`.
    fn resolve_type(&self, node: Node<'a, 'input>, qname: &str) -> Result<TypeRef> {
        let (prefix, local) = match qname.split_once(':') {
            Some((prefix, local)) => (Some(prefix), local),
            None => (None, qname),
        };
        if node.lookup_namespace_uri(prefix) == Some(XSD_NS) {
            return Ok(TypeRef::Builtin(Builtin::from_local_name(local).unwrap_or_else(
                || {
                    warn!(type_name = local, "built-in type not checked, accepting any value");
                    Builtin::AnySimpleType
                },
            )));
        }
        if self.complex_names.contains(local) {
            Ok(TypeRef::Complex(local.to_string()))
        } else if self.simple_names.contains(local) {
            Ok(TypeRef::Simple(local.to_string()))
        } else {
            Err(SchemaError::UnknownReference {
                kind: "type",
                name: qname.to_string(),
            })
        }
    }

    fn resolve_complex(
        &self,
        key: &str,
        resolved: &mut HashMap<String, ComplexType>,
        stack: &mut Vec<String>,
    ) -> Result<ComplexType> {
        if let Some(done) = resolved.get(key) {
            return Ok(done.clone());
        }
        if stack.iter().any(|entry| entry == key) {
            return Err(SchemaError::Parse {
                what: key.to_string(),
                message: "circular type derivation".to_string(),
            });
        }
        let raw = self
            .raw_complex
            .get(key)
            .ok_or_else(|| SchemaError::UnknownReference {
                kind: "complex type",
                name: key.to_string(),
            })?;

        stack.push(key.to_string());
        let mut merged = raw.own.clone();
        match &raw.derivation {
            None => {}
            Some(Derivation::Extension(TypeRef::Complex(base))) => {
                let base = self.resolve_complex(base, resolved, stack)?;
                merged.content = match (base.content, merged.content) {
                    (
                        Content::Elements {
                            model: mut base_model,
                            mixed: base_mixed,
                        },
                        Content::Elements { model, mixed },
                    ) => {
                        base_model.extend(model);
                        Content::Elements {
                            model: base_model,
                            mixed: base_mixed || mixed,
                        }
                    }
                    (simple @ Content::Simple(_), _) => simple,
                    (_, own) => own,
                };
                merged.attributes = merge_attributes(base.attributes, merged.attributes);
                merged.any_attribute |= base.any_attribute;
            }
            Some(Derivation::Restriction(TypeRef::Complex(base))) => {
                let base = self.resolve_complex(base, resolved, stack)?;
                merged.attributes = merge_attributes(base.attributes, merged.attributes);
            }
            Some(Derivation::SimpleContent(TypeRef::Complex(base))) => {
                let base = self.resolve_complex(base, resolved, stack)?;
                merged.content = base.content;
                merged.attributes = merge_attributes(base.attributes, merged.attributes);
                merged.any_attribute |= base.any_attribute;
            }
            Some(Derivation::SimpleContent(simple)) => {
                merged.content = Content::Simple(simple.clone());
            }
            // Deriving from xs:anyType or a simple type through complexContent.
            Some(Derivation::Extension(_) | Derivation::Restriction(_)) => {}
        }
        stack.pop();

        resolved.insert(key.to_string(), merged.clone());
        Ok(merged)
    }

    fn check_element_refs(&self) -> Result<()> {
        for complex in self.schema.complex_types.values() {
            let Content::Elements { model, .. } = &complex.content else {
                continue;
            };
            for element in &model.elements {
                if element.element_type == ElementType::Global
                    && !self.schema.elements.contains_key(&element.name)
                {
                    return Err(SchemaError::UnknownReference {
                        kind: "element",
                        name: element.name.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Base attributes overridden by derived ones of the same name.
fn merge_attributes(base: Vec<AttributeDecl>, own: Vec<AttributeDecl>) -> Vec<AttributeDecl> {
    let mut merged: Vec<AttributeDecl> = base
        .into_iter()
        .filter(|attribute| own.iter().all(|o| o.name != attribute.name))
        .collect();
    merged.extend(own);
    merged
}

fn facets(step: Node<'_, '_>, key: &str) -> Result<Facets> {
    let mut facets = Facets::default();
    let mut patterns = Vec::new();
    for facet in xsd_children(step) {
        let value = facet.attribute("value");
        match (facet.tag_name().name(), value) {
            ("enumeration", Some(value)) => facets.enumeration.push(value.to_string()),
            ("pattern", Some(value)) => patterns.push(value),
            ("minLength", Some(value)) => facets.min_length = Some(parse_count(value, key)?),
            ("maxLength", Some(value)) => facets.max_length = Some(parse_count(value, key)?),
            ("length", Some(value)) => {
                let length = parse_count(value, key)?;
                facets.min_length = Some(length);
                facets.max_length = Some(length);
            }
            ("simpleType", _) => {}
            (other, _) => trace!(facet = other, simple_type = key, "facet not enforced"),
        }
    }

    // Patterns of one derivation step are alternatives.
    if !patterns.is_empty() {
        let alternatives: Vec<String> = patterns.iter().map(|p| format!("(?:{p})")).collect();
        let anchored = format!("^(?:{})$", alternatives.join("|"));
        match Regex::new(&anchored) {
            Ok(regex) => facets.patterns.push(regex),
            Err(err) => warn!(
                simple_type = key,
                error = %err,
                "pattern facet cannot be compiled and is ignored"
            ),
        }
    }
    Ok(facets)
}

fn parse_count(value: &str, key: &str) -> Result<usize> {
    value.trim().parse().map_err(|_| SchemaError::Parse {
        what: key.to_string(),
        message: format!("invalid length facet '{value}'"),
    })
}

fn occurs(node: Node<'_, '_>) -> Result<Occurs> {
    let parse = |name: &str, default: u32| -> Result<Option<u32>> {
        match node.attribute(name) {
            None => Ok(Some(default)),
            Some("unbounded") => Ok(None),
            Some(value) => value
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| SchemaError::Parse {
                    what: node.tag_name().name().to_string(),
                    message: format!("invalid {name} '{value}'"),
                }),
        }
    };
    Ok(Occurs {
        min: parse("minOccurs", 1)?.unwrap_or(0),
        max: parse("maxOccurs", 1)?,
    })
}

fn is_xsd(node: Node<'_, '_>, name: &str) -> bool {
    node.is_element() && node.tag_name().namespace() == Some(XSD_NS) && node.tag_name().name() == name
}

/// Element children in the XSD namespace, annotations excluded.
fn xsd_children<'a, 'input>(node: Node<'a, 'input>) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| {
        child.is_element()
            && child.tag_name().namespace() == Some(XSD_NS)
            && child.tag_name().name() != "annotation"
    })
}

fn xsd_child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    xsd_children(node).find(|child| child.tag_name().name() == name)
}

fn required_attr<'a>(node: Node<'a, '_>, name: &str) -> Result<&'a str> {
    node.attribute(name).ok_or_else(|| SchemaError::Parse {
        what: format!("xs:{}", node.tag_name().name()),
        message: format!("missing '{name}' attribute"),
    })
}

fn required_name(node: Node<'_, '_>) -> Result<String> {
    required_attr(node, "name").map(str::to_string)
}

fn local_name(qname: &str) -> &str {
    qname.split_once(':').map_or(qname, |(_, local)| local)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = r#"<?xml version="1.0"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema"
           xmlns:t="urn:test" targetNamespace="urn:test" elementFormDefault="qualified">
  <xs:element name="root" type="t:Root"/>
  <xs:complexType name="Base">
    <xs:sequence>
      <xs:element name="id" type="xs:int"/>
    </xs:sequence>
    <xs:attribute name="key" type="xs:string" use="required"/>
  </xs:complexType>
  <xs:complexType name="Root">
    <xs:complexContent>
      <xs:extension base="t:Base">
        <xs:choice>
          <xs:element name="a" type="t:Code"/>
          <xs:element name="b" type="xs:double" maxOccurs="unbounded"/>
        </xs:choice>
      </xs:extension>
    </xs:complexContent>
  </xs:complexType>
  <xs:simpleType name="Code">
    <xs:restriction base="xs:string">
      <xs:pattern value="[A-Z]{2}"/>
      <xs:pattern value="\d+"/>
    </xs:restriction>
  </xs:simpleType>
</xs:schema>"#;

    #[test]
    fn test_extension_merges_base() {
        let schema = XsdSchema::parse(SCHEMA, "test").unwrap();
        assert_eq!(schema.target_namespace.as_deref(), Some("urn:test"));
        assert!(schema.qualified_elements);

        let root = &schema.complex_types["Root"];
        assert_eq!(root.attributes.len(), 1);
        assert!(root.attributes[0].required);
        let Content::Elements { model, .. } = &root.content else {
            panic!("element content expected");
        };
        assert_eq!(model.element("id").unwrap().occurs, Occurs::ONCE);
        assert_eq!(model.element("a").unwrap().occurs.min, 0);
        assert_eq!(model.element("b").unwrap().occurs.max, None);
        assert_eq!(model.required_choices, vec![vec!["a".to_string(), "b".to_string()]]);
    }

    #[test]
    fn test_patterns_of_one_step_are_alternatives() {
        let schema = XsdSchema::parse(SCHEMA, "test").unwrap();
        let SimpleType::Restriction { facets, .. } = &schema.simple_types["Code"] else {
            panic!("restriction expected");
        };
        assert_eq!(facets.patterns.len(), 1);
        assert!(facets.patterns[0].is_match("AB"));
        assert!(facets.patterns[0].is_match("42"));
        assert!(!facets.patterns[0].is_match("AB1"));
    }

    #[test]
    fn test_unknown_type_reference() {
        let text = SCHEMA.replace("type=\"t:Code\"", "type=\"t:Missing\"");
        let err = XsdSchema::parse(&text, "test").unwrap_err();
        assert!(matches!(err, SchemaError::UnknownReference { kind: "type", .. }));
    }

    #[test]
    fn test_import_is_unsupported() {
        let text = SCHEMA.replace(
            "<xs:element name=\"root\"",
            "<xs:import namespace=\"urn:other\"/><xs:element name=\"root\"",
        );
        let err = XsdSchema::parse(&text, "test").unwrap_err();
        assert!(matches!(err, SchemaError::Unsupported { .. }));
    }

    #[test]
    fn test_not_a_schema() {
        let err = XsdSchema::parse("<root/>", "test").unwrap_err();
        assert!(matches!(err, SchemaError::Parse { .. }));
    }
}
