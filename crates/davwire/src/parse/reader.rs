//! Namespace-aware pull reader and the tag-dispatch parse engine.
//!
//! Every element type in the schema is parsed with the same protocol:
//! position the reader just inside a containing element, then dispatch
//! each direct child by its [`Tag`] to a handler that consumes the
//! child's whole subtree. Children no handler claims are skipped by
//! depth counting, so unknown or vendor-specific extensions never break
//! parsing of the known fields.

use quick_xml::NsReader;
use quick_xml::events::Event;
use quick_xml::name::ResolveResult;

use super::error::{ParseError, ParseResult};
use crate::core::Tag;

/// A namespace-resolved parse event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlEvent {
    /// Start of an element. Empty elements are expanded, so every
    /// start is paired with an end.
    Start(Tag),
    /// Text content, decoded and unescaped.
    Text(String),
    /// End of an element.
    End(Tag),
    /// End of the document.
    Eof,
}

/// Pull reader over an in-memory `WebDAV` XML document.
pub struct XmlReader<'a> {
    reader: NsReader<&'a [u8]>,
}

impl<'a> XmlReader<'a> {
    /// Creates a reader over `xml`.
    #[must_use]
    pub fn new(xml: &'a [u8]) -> Self {
        let mut reader = NsReader::from_reader(xml);
        reader.config_mut().trim_text(true);
        reader.config_mut().expand_empty_elements = true;
        Self { reader }
    }

    /// Advances past the next significant event.
    ///
    /// Comments, processing instructions, and the XML declaration are
    /// not significant and are consumed silently.
    ///
    /// ## Errors
    /// Returns an error if the XML is malformed or uses an undeclared
    /// namespace prefix.
    pub fn next_event(&mut self) -> ParseResult<XmlEvent> {
        loop {
            let (resolve, event) = self.reader.read_resolved_event()?;
            // The resolve result borrows the reader, so turn it into an
            // owned namespace before touching the reader again.
            let namespace = match resolve {
                ResolveResult::Bound(ns) => std::str::from_utf8(ns.as_ref())?.to_owned(),
                ResolveResult::Unbound => String::new(),
                ResolveResult::Unknown(prefix) => {
                    return Err(ParseError::xml(format!(
                        "undeclared namespace prefix: {}",
                        String::from_utf8_lossy(&prefix)
                    )));
                }
            };
            match event {
                Event::Start(e) => {
                    return Ok(XmlEvent::Start(owned_tag(namespace, e.local_name().as_ref())?));
                }
                Event::End(e) => {
                    return Ok(XmlEvent::End(owned_tag(namespace, e.local_name().as_ref())?));
                }
                Event::Text(e) => {
                    let decoded = self.reader.decoder().decode(e.as_ref())?;
                    let text = quick_xml::escape::unescape(&decoded)?.into_owned();
                    return Ok(XmlEvent::Text(text));
                }
                Event::CData(e) => {
                    let bytes = e.into_inner();
                    let decoded = self.reader.decoder().decode(&bytes)?;
                    return Ok(XmlEvent::Text(decoded.into_owned()));
                }
                Event::Eof => return Ok(XmlEvent::Eof),
                _ => {}
            }
        }
    }

    /// Advances to the document's first element and checks its tag.
    ///
    /// ## Errors
    /// Returns an error if the document ends first or the first element
    /// is not `expected`.
    pub fn expect_start(&mut self, expected: &Tag) -> ParseResult<()> {
        loop {
            match self.next_event()? {
                XmlEvent::Start(tag) => {
                    return if tag == *expected {
                        Ok(())
                    } else {
                        Err(ParseError::unexpected_event(format!(
                            "expected {expected}, found {tag}"
                        )))
                    };
                }
                XmlEvent::Text(_) => {}
                XmlEvent::End(tag) => {
                    return Err(ParseError::unexpected_event(format!(
                        "end of {tag} before any element started"
                    )));
                }
                XmlEvent::Eof => {
                    return Err(ParseError::unexpected_eof(format!(
                        "document ended before {expected}"
                    )));
                }
            }
        }
    }

    /// Dispatches the direct children of the current element.
    ///
    /// The reader must be positioned just past the start of `tag`. For
    /// each direct child, `handle` is called with the child's tag right
    /// after its start event. Returning `Ok(true)` asserts the handler
    /// consumed the child's entire subtree; returning `Ok(false)` makes
    /// the dispatcher skip the subtree itself. Returns once the end of
    /// `tag` is reached.
    ///
    /// ## Errors
    /// Returns an error if the document ends inside `tag`, if end tags
    /// do not nest correctly, or if `handle` fails.
    pub fn parse_children<F>(&mut self, tag: &Tag, mut handle: F) -> ParseResult<()>
    where
        F: FnMut(&mut Self, Tag) -> ParseResult<bool>,
    {
        loop {
            match self.next_event()? {
                XmlEvent::Start(child) => {
                    if !handle(self, child)? {
                        self.skip_element()?;
                    }
                }
                XmlEvent::Text(_) => {}
                XmlEvent::End(end) => {
                    return if end == *tag {
                        Ok(())
                    } else {
                        Err(ParseError::unexpected_event(format!(
                            "expected end of {tag}, found end of {end}"
                        )))
                    };
                }
                XmlEvent::Eof => {
                    return Err(ParseError::unexpected_eof(format!(
                        "document ended inside {tag}"
                    )));
                }
            }
        }
    }

    /// Skips the rest of the current element, however deep it nests.
    ///
    /// ## Errors
    /// Returns an error if the document ends first.
    pub fn skip_element(&mut self) -> ParseResult<()> {
        let mut depth = 1_usize;
        while depth > 0 {
            match self.next_event()? {
                XmlEvent::Start(_) => depth += 1,
                XmlEvent::End(_) => depth -= 1,
                XmlEvent::Text(_) => {}
                XmlEvent::Eof => {
                    return Err(ParseError::unexpected_eof(
                        "document ended inside a skipped element",
                    ));
                }
            }
        }
        Ok(())
    }

    /// Consumes the rest of the current element and returns its text.
    ///
    /// Returns `None` for an empty element. If the element somehow
    /// contains child elements, they are skipped and only the element's
    /// own first text node counts.
    ///
    /// ## Errors
    /// Returns an error if the document ends first.
    pub fn read_text(&mut self) -> ParseResult<Option<String>> {
        let mut text = None;
        let mut depth = 1_usize;
        while depth > 0 {
            match self.next_event()? {
                XmlEvent::Text(value) => {
                    if depth == 1 && text.is_none() {
                        text = Some(value);
                    }
                }
                XmlEvent::Start(_) => depth += 1,
                XmlEvent::End(_) => depth -= 1,
                XmlEvent::Eof => {
                    return Err(ParseError::unexpected_eof(
                        "document ended inside a text element",
                    ));
                }
            }
        }
        Ok(text)
    }
}

fn owned_tag(namespace: String, local_name: &[u8]) -> ParseResult<Tag> {
    let local_name = std::str::from_utf8(local_name)?.to_owned();
    Ok(Tag::new(namespace, local_name))
}
