//! In-memory XML element tree.
//!
//! The mapper builds a plain tree first so that the same document can be
//! serialized, inspected in tests and checked against the schema.

/// One XML element with its attributes, optional text and children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// `<name>text</name>`
    pub fn text_element(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name).with_text(text)
    }

    /// `<name><value>text</value></name>`, the QuakeML quantity shape.
    pub fn value_element(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name).with_child(Self::text_element("value", value))
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    pub fn push(&mut self, child: XmlElement) {
        self.children.push(child);
    }

    pub fn push_opt(&mut self, child: Option<XmlElement>) {
        if let Some(child) = child {
            self.children.push(child);
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// First direct child named `name`.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Direct children named `name`.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Follow a `/`-separated path of child names and return the text found there.
    pub fn text_at(&self, path: &str) -> Option<&str> {
        path.split('/')
            .try_fold(self, |element, name| element.child(name))?
            .text
            .as_deref()
    }

    /// Number of elements named `name` anywhere below this one.
    pub fn count_descendants(&self, name: &str) -> usize {
        self.children
            .iter()
            .map(|child| usize::from(child.name == name) + child.count_descendants(name))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation() {
        let origin = XmlElement::new("origin")
            .with_attribute("publicID", "smi:x/origin")
            .with_child(XmlElement::value_element("latitude", "61.2"))
            .with_child(XmlElement::new("arrival"))
            .with_child(XmlElement::new("arrival"));
        let root = XmlElement::new("event").with_child(origin);

        assert_eq!(root.text_at("origin/latitude/value"), Some("61.2"));
        assert_eq!(root.text_at("origin/depth/value"), None);
        assert_eq!(root.count_descendants("arrival"), 2);
        let origin = root.child("origin").unwrap();
        assert_eq!(origin.attribute("publicID"), Some("smi:x/origin"));
        assert_eq!(origin.children_named("arrival").count(), 2);
    }
}
