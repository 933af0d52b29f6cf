//! GPX writer: serializes a [`Document`] tree back to XML with quick-xml.

use crate::errors::{AppError, AppResult};
use crate::gpx::tree::{Document, Element, Node};
use quick_xml::Writer;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesPI, BytesStart, BytesText, Event};
use std::fs;
use std::path::Path;

fn write_node(w: &mut Writer<Vec<u8>>, node: &Node) -> AppResult<()> {
    match node {
        Node::Element(el) => write_element(w, el),
        Node::Text(t) => w
            .write_event(Event::Text(BytesText::new(t)))
            .map_err(AppError::xml),
        Node::CData(c) => w
            .write_event(Event::CData(BytesCData::new(c.as_str())))
            .map_err(AppError::xml),
        Node::Comment(c) => w
            .write_event(Event::Comment(BytesText::from_escaped(c.as_str())))
            .map_err(AppError::xml),
        Node::ProcessingInstruction(p) => w
            .write_event(Event::PI(BytesPI::new(p.as_str())))
            .map_err(AppError::xml),
        Node::DocType(d) => w
            .write_event(Event::DocType(BytesText::from_escaped(d.as_str())))
            .map_err(AppError::xml),
    }
}

fn write_element(w: &mut Writer<Vec<u8>>, el: &Element) -> AppResult<()> {
    let mut start = BytesStart::new(el.name.as_str());
    for (key, value) in &el.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if el.children.is_empty() {
        return w.write_event(Event::Empty(start)).map_err(AppError::xml);
    }

    w.write_event(Event::Start(start)).map_err(AppError::xml)?;
    for child in &el.children {
        write_node(w, child)?;
    }
    w.write_event(Event::End(BytesEnd::new(el.name.as_str())))
        .map_err(AppError::xml)
}

/// Serialize the document. `indent` is the number of spaces per level, 0 = compact.
pub fn to_string(doc: &Document, indent: usize) -> AppResult<String> {
    let mut w = if indent > 0 {
        Writer::new_with_indent(Vec::new(), b' ', indent)
    } else {
        Writer::new(Vec::new())
    };

    if let Some(decl) = &doc.declaration {
        w.write_event(Event::Decl(BytesDecl::new(
            &decl.version,
            decl.encoding.as_deref(),
            decl.standalone.as_deref(),
        )))
        .map_err(AppError::xml)?;
    }

    for node in &doc.prolog {
        write_node(&mut w, node)?;
    }
    write_element(&mut w, &doc.root)?;
    for node in &doc.epilog {
        write_node(&mut w, node)?;
    }

    let mut out = String::from_utf8(w.into_inner()).map_err(AppError::xml)?;
    out.push('\n');
    Ok(out)
}

/// Serialize the document and write it to `path`.
pub fn write_file<P: AsRef<Path>>(doc: &Document, path: P, indent: usize) -> AppResult<()> {
    let data = to_string(doc, indent)?;
    fs::write(path, data)?;
    Ok(())
}
