//! quick-xml event stream → [`Document`] tree.

use std::io::{self, BufRead, Read};

use checkxml_core::{ATTR_PREFIX, Document, Node, NodeMap, TEXT_KEY};
use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use crate::{cast::cast_scalar, error::LoadError};

/// Options controlling how character data is represented in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadOptions {
    /// Coerce scalar values to booleans or numbers where possible
    /// (see [`cast_scalar`]). Values stay strings otherwise.
    pub cast_values: bool,
}

/// Load a document from an in-memory buffer.
pub fn load_bytes(b: &[u8], options: LoadOptions) -> Result<Document, LoadError> {
    parse(b, options)
}

/// Load one document from a buffered stream.
///
/// Reading stops at the end tag of the root element. Bytes after it stay in
/// `r`, so pass `&mut reader` to read further documents from the same stream.
pub fn load_reader<R: BufRead>(r: R, options: LoadOptions) -> Result<Document, LoadError> {
    parse(r, options)
}

/// Like [`load_reader`], also returning the bytes consumed from `r`: the
/// document up to and including the end of the root element.
pub fn load_reader_raw<R: BufRead>(
    r: R,
    options: LoadOptions,
) -> Result<(Document, Vec<u8>), LoadError> {
    let mut recorder = Recorder {
        inner: r,
        consumed: Vec::new(),
    };
    let doc = parse(&mut recorder, options)?;
    Ok((doc, recorder.consumed))
}

/// Buffered reader that keeps a copy of every byte its consumer takes.
struct Recorder<R> {
    inner: R,
    consumed: Vec<u8>,
}

impl<R: BufRead> Read for Recorder<R> {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(out)?;
        self.consumed.extend_from_slice(&out[..n]);
        Ok(n)
    }
}

impl<R: BufRead> BufRead for Recorder<R> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.inner.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        // The buffer is already filled here, so this does no I/O.
        if let Ok(buf) = self.inner.fill_buf() {
            self.consumed.extend_from_slice(&buf[..amt.min(buf.len())]);
        }
        self.inner.consume(amt);
    }
}

/// An element whose end tag has not been seen yet.
struct Frame {
    name: String,
    children: NodeMap,
    text: String,
}

impl Frame {
    fn open(start: &BytesStart<'_>, options: LoadOptions) -> Result<Self, LoadError> {
        let name = std::str::from_utf8(start.local_name().as_ref())?.to_string();
        let mut children = NodeMap::new();
        for attr in start.attributes() {
            let attr = attr.map_err(quick_xml::Error::from)?;
            let qualified = std::str::from_utf8(attr.key.as_ref())?;
            let key = if qualified.starts_with("xmlns") {
                qualified
            } else {
                std::str::from_utf8(attr.key.local_name().into_inner())?
            };
            let value = attr.unescape_value()?;
            children.insert(format!("{ATTR_PREFIX}{key}"), scalar(&value, options));
        }
        Ok(Self {
            name,
            children,
            text: String::new(),
        })
    }

    fn into_node(mut self, options: LoadOptions) -> (String, Node) {
        if self.children.is_empty() {
            return (self.name, scalar(&self.text, options));
        }
        if !self.text.is_empty() {
            self.children.insert(TEXT_KEY, scalar(&self.text, options));
        }
        (self.name, Node::Mapping(self.children))
    }
}

fn scalar(text: &str, options: LoadOptions) -> Node {
    if options.cast_values {
        Node::Scalar(cast_scalar(text))
    } else {
        Node::string(text)
    }
}

/// Add a child element, turning repeated names into a sequence.
fn insert_child(map: &mut NodeMap, name: String, node: Node) {
    match map.get_mut(&name) {
        Some(Node::Sequence(items)) => items.push(node),
        Some(existing) => {
            let first = std::mem::replace(existing, Node::Sequence(Vec::new()));
            *existing = Node::Sequence(vec![first, node]);
        }
        None => {
            map.insert(name, node);
        }
    }
}

/// Close `frame`. Returns the finished document when `frame` was the root.
fn close(stack: &mut Vec<Frame>, frame: Frame, options: LoadOptions) -> Option<Document> {
    let (name, node) = frame.into_node(options);
    match stack.last_mut() {
        Some(parent) => {
            insert_child(&mut parent.children, name, node);
            None
        }
        None => Some(Document::new(name, node)),
    }
}

fn parse<R: BufRead>(input: R, options: LoadOptions) -> Result<Document, LoadError> {
    let mut reader = Reader::from_reader(input);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();
    loop {
        let finished = match reader.read_event_into(&mut buf)? {
            Event::Start(start) => {
                stack.push(Frame::open(&start, options)?);
                None
            }
            Event::Empty(start) => {
                let frame = Frame::open(&start, options)?;
                close(&mut stack, frame, options)
            }
            Event::End(_) => match stack.pop() {
                Some(frame) => close(&mut stack, frame, options),
                None => None,
            },
            Event::Text(text) => {
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&text.unescape()?);
                }
                None
            }
            Event::CData(cdata) => {
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&String::from_utf8_lossy(&cdata.into_inner()));
                }
                None
            }
            Event::Eof => {
                return Err(match stack.pop() {
                    Some(frame) => LoadError::Unclosed { name: frame.name },
                    None => LoadError::NoRoot,
                });
            }
            _ => None,
        };

        if let Some(doc) = finished {
            tracing::debug!(root = %doc.root, bytes = reader.buffer_position(), "loaded document");
            return Ok(doc);
        }
        buf.clear();
    }
}
