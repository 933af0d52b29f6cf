//! GPX reader: builds a [`Document`] tree from XML text with quick-xml.

use crate::errors::{AppError, AppResult};
use crate::gpx::ROOT;
use crate::gpx::tree::{Declaration, Document, Element, Node};
use quick_xml::Reader;
use quick_xml::events::{BytesDecl, BytesStart, Event};
use std::fs;
use std::path::Path;

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn element_from_start(e: &BytesStart<'_>) -> AppResult<Element> {
    let mut el = Element::new(lossy(e.name().as_ref()));
    for attr in e.attributes() {
        let attr = attr.map_err(AppError::xml)?;
        let value = attr.unescape_value().map_err(AppError::xml)?;
        el.attributes
            .push((lossy(attr.key.as_ref()), value.into_owned()));
    }
    Ok(el)
}

fn declaration_from(d: &BytesDecl<'_>) -> AppResult<Declaration> {
    let version = lossy(&d.version().map_err(AppError::xml)?);
    let encoding = match d.encoding() {
        Some(enc) => Some(lossy(&enc.map_err(AppError::xml)?)),
        None => None,
    };
    let standalone = match d.standalone() {
        Some(sa) => Some(lossy(&sa.map_err(AppError::xml)?)),
        None => None,
    };
    Ok(Declaration {
        version,
        encoding,
        standalone,
    })
}

/// Tree under construction: open elements plus whatever sits around the root.
#[derive(Default)]
struct Builder {
    stack: Vec<Element>,
    root: Option<Element>,
    prolog: Vec<Node>,
    epilog: Vec<Node>,
}

impl Builder {
    fn attach(&mut self, node: Node) -> AppResult<()> {
        if let Some(parent) = self.stack.last_mut() {
            parent.children.push(node);
            return Ok(());
        }

        match node {
            Node::Element(el) => {
                if self.root.is_some() {
                    return Err(AppError::InvalidDocument(
                        "more than one root element".into(),
                    ));
                }
                self.root = Some(el);
            }
            // Stray text outside the root is not well-formed XML; drop it.
            Node::Text(_) | Node::CData(_) => {}
            other if self.root.is_none() => self.prolog.push(other),
            other => self.epilog.push(other),
        }
        Ok(())
    }
}

/// Parse GPX text into a document tree.
pub fn parse_str(s: &str) -> AppResult<Document> {
    let mut reader = Reader::from_str(s);

    let mut declaration = None;
    let mut builder = Builder::default();

    loop {
        match reader.read_event().map_err(AppError::xml)? {
            Event::Decl(d) => declaration = Some(declaration_from(&d)?),
            Event::Start(e) => builder.stack.push(element_from_start(&e)?),
            Event::Empty(e) => builder.attach(Node::Element(element_from_start(&e)?))?,
            Event::End(_) => {
                let el = builder.stack.pop().ok_or_else(|| {
                    AppError::InvalidDocument("unexpected closing tag".into())
                })?;
                builder.attach(Node::Element(el))?;
            }
            Event::Text(t) => {
                let text = t.unescape().map_err(AppError::xml)?;
                // Indentation between elements; the writer re-indents.
                if !text.trim().is_empty() {
                    builder.attach(Node::Text(text.into_owned()))?;
                }
            }
            Event::CData(c) => builder.attach(Node::CData(lossy(&c)))?,
            Event::Comment(c) => builder.attach(Node::Comment(lossy(&c)))?,
            Event::PI(p) => builder.attach(Node::ProcessingInstruction(lossy(&p)))?,
            Event::DocType(d) => builder.attach(Node::DocType(lossy(&d)))?,
            Event::Eof => break,
        }
    }

    if let Some(open) = builder.stack.last() {
        return Err(AppError::InvalidDocument(format!(
            "element <{}> is never closed",
            open.name
        )));
    }

    let root = builder
        .root
        .ok_or_else(|| AppError::InvalidDocument("document has no root element".into()))?;

    if !root.is(ROOT) {
        return Err(AppError::InvalidDocument(format!(
            "root element is <{}>, expected <{}>",
            root.name, ROOT
        )));
    }

    Ok(Document {
        declaration,
        prolog: builder.prolog,
        root,
        epilog: builder.epilog,
    })
}

/// Read and parse a GPX file from disk.
pub fn read_file<P: AsRef<Path>>(path: P) -> AppResult<Document> {
    let s = fs::read_to_string(path)?;
    parse_str(&s)
}
