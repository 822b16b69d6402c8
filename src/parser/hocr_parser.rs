//! hOCR document parser using quick-xml.

use std::borrow::Cow;
use std::io::Read;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Error, Result};
use crate::model::{Document, Node, NodeKind};

/// hOCR document parser.
///
/// Pages, lines, words and characters are recognised by their hOCR class
/// names wherever they appear, as long as they nest in page, line, word,
/// char order. All other markup is walked through and ignored; its text is
/// credited to the innermost open node.
pub struct HocrParser {
    data: Vec<u8>,
}

impl HocrParser {
    /// Open a hOCR file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read(path)?;
        Ok(Self { data })
    }

    /// Parse hOCR from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Ok(Self {
            data: data.to_vec(),
        })
    }

    /// Parse hOCR from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Ok(Self { data })
    }

    /// Parse the document.
    pub fn parse(&self) -> Result<Document> {
        if self.data.iter().all(u8::is_ascii_whitespace) {
            return Err(Error::MalformedMarkup("empty document".to_string()));
        }

        let mut reader = Reader::from_reader(self.data.as_slice());
        reader.expand_empty_elements(true);
        reader.check_end_names(true);

        let mut builder = TreeBuilder::default();
        let mut buf = Vec::new();
        let mut seen_root = false;

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => {
                    seen_root = true;
                    builder.open(&e)?;
                }
                Event::End(_) => builder.close()?,
                Event::Text(e) => {
                    let text = match e.unescape() {
                        Ok(text) => text,
                        Err(err) => {
                            log::warn!("Keeping unescapable text raw: {}", err);
                            Cow::Owned(String::from_utf8_lossy(&e).into_owned())
                        }
                    };
                    builder.text(&text);
                }
                Event::CData(e) => builder.text(&String::from_utf8_lossy(&e)),
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if !seen_root {
            return Err(Error::MalformedMarkup("no root element".to_string()));
        }
        builder.finish()
    }
}

/// Incremental construction of the node tree from element events.
#[derive(Default)]
struct TreeBuilder {
    doc: Document,
    /// One entry per open element: whether it opened a node.
    elements: Vec<(String, bool)>,
    /// Nodes still being filled, outermost first.
    nodes: Vec<Node>,
}

impl TreeBuilder {
    fn open(&mut self, e: &BytesStart) -> Result<()> {
        let name = String::from_utf8_lossy(e.local_name().as_ref()).to_ascii_lowercase();

        let mut class = String::new();
        let mut id = String::new();
        let mut title = String::new();
        let mut meta_name = None;
        let mut meta_content = None;

        for attr in e.attributes() {
            let attr = attr?;
            let value = attr
                .unescape_value()
                .map(|value| normalize_line_ends(&value).into_owned())
                .unwrap_or_else(|_| {
                    normalize_line_ends(&String::from_utf8_lossy(&attr.value)).into_owned()
                });
            match attr.key.local_name().as_ref() {
                b"class" => class = value,
                b"id" => id = value,
                b"title" => title = value,
                b"name" => meta_name = Some(value),
                b"content" => meta_content = Some(value),
                _ => {}
            }
        }

        if name == "meta" && self.nodes.is_empty() {
            if let (Some(n), Some(c)) = (meta_name, meta_content) {
                self.doc.info.set(&n, &c);
            }
        }

        let kind = NodeKind::from_class_attr(&class).filter(|kind| self.accepts(*kind));
        if let Some(kind) = kind {
            self.nodes.push(Node {
                kind,
                class,
                id,
                title,
                text: String::new(),
                children: Vec::new(),
            });
        }
        self.elements.push((name, kind.is_some()));
        Ok(())
    }

    fn accepts(&self, kind: NodeKind) -> bool {
        match self.nodes.last() {
            Some(parent) => parent.kind.accepts(kind),
            None => kind == NodeKind::Page,
        }
    }

    fn close(&mut self) -> Result<()> {
        let (_, opened_node) = self
            .elements
            .pop()
            .ok_or_else(|| Error::MalformedMarkup("unexpected closing tag".to_string()))?;
        if !opened_node {
            return Ok(());
        }

        if let Some(node) = self.nodes.pop() {
            match self.nodes.last_mut() {
                Some(parent) => parent.children.push(node),
                None => self.doc.add_page(node),
            }
        }
        Ok(())
    }

    fn text(&mut self, text: &str) {
        if let Some(node) = self.nodes.last_mut() {
            node.text.push_str(&normalize_line_ends(text));
        }
    }

    fn finish(self) -> Result<Document> {
        if let Some((name, _)) = self.elements.last() {
            return Err(Error::MalformedMarkup(format!(
                "unexpected end of input inside <{}>",
                name
            )));
        }
        Ok(self.doc)
    }
}

/// Turn `\r\n` and lone `\r` into `\n`, as XML line-end handling requires.
fn normalize_line_ends(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}
