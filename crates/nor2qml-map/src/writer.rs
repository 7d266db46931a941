//! Serialization of [`XmlElement`] trees with quick-xml.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::Result;
use crate::tree::XmlElement;

/// Write `root` as a complete document: standalone UTF-8 declaration,
/// two-space indentation.
pub fn write_document<W: Write>(root: &XmlElement, writer: W) -> Result<()> {
    let mut xml = Writer::new_with_indent(writer, b' ', 2);
    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), Some("yes"))))?;
    write_element(&mut xml, root)?;
    Ok(())
}

/// Serialize `root` into a document string.
pub fn to_xml_string(root: &XmlElement) -> Result<String> {
    let mut buffer = Vec::new();
    write_document(root, &mut buffer)?;
    buffer.push(b'\n');
    Ok(String::from_utf8(buffer)?)
}

fn write_element<W: Write>(xml: &mut Writer<W>, element: &XmlElement) -> Result<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (name, value) in &element.attributes {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    if element.text.is_none() && element.children.is_empty() {
        xml.write_event(Event::Empty(start))?;
        return Ok(());
    }

    xml.write_event(Event::Start(start))?;
    if let Some(text) = &element.text {
        xml.write_event(Event::Text(BytesText::new(text)))?;
    }
    for child in &element.children {
        write_element(xml, child)?;
    }
    xml.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
    Ok(())
}
