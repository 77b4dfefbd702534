//! Recursive element-writer tree over the `quick-xml` serializer.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::core::Tag;
use crate::error::DavError;

/// Conventional prefix for the `DAV:` namespace.
const DAV_PREFIX: &str = "d";

/// Prefix used for a property tag outside the `DAV:` namespace.
const CUSTOM_PREFIX: &str = "x";

/// A child of a [`TagWriter`].
#[derive(Debug, Clone)]
pub enum Node {
    /// A nested element.
    Element(TagWriter),
    /// A text node; `None` emits nothing at all.
    Text(Option<String>),
}

/// A writer node that emits one element and its children, in insertion
/// order. The composition primitive for every request document.
#[derive(Debug, Clone)]
pub struct TagWriter {
    tag: Tag,
    children: Vec<Node>,
    declarations: Vec<(String, String)>,
}

impl TagWriter {
    /// Creates a writer for `tag` with no children.
    #[must_use]
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            children: Vec::new(),
            declarations: Vec::new(),
        }
    }

    /// Appends a child element.
    pub fn add_element(&mut self, child: TagWriter) {
        self.children.push(Node::Element(child));
    }

    /// Appends a text node. `None` emits nothing, so an element whose
    /// only content is an absent text node is written self-closing.
    pub fn add_text(&mut self, text: Option<String>) {
        self.children.push(Node::Text(text));
    }

    /// Declares a namespace prefix on this element.
    ///
    /// Document roots declare the `DAV:` prefix once; nested writers
    /// emit prefixed names without re-declaring it.
    pub fn declare(&mut self, prefix: impl Into<String>, uri: impl Into<String>) {
        self.declarations.push((prefix.into(), uri.into()));
    }

    /// Emits this element and its whole subtree.
    ///
    /// ## Errors
    /// Returns an error if the underlying serializer fails.
    pub fn write<W: std::io::Write>(&self, writer: &mut Writer<W>) -> Result<(), quick_xml::Error> {
        let name = self.qualified_name();
        let mut attrs: Vec<(String, String)> = self
            .declarations
            .iter()
            .map(|(prefix, uri)| (format!("xmlns:{prefix}"), uri.clone()))
            .collect();
        if !self.tag.is_dav() && !self.tag.namespace_uri().is_empty() {
            attrs.push((
                format!("xmlns:{CUSTOM_PREFIX}"),
                self.tag.namespace_uri().to_owned(),
            ));
        }

        let mut start = BytesStart::new(name.as_str());
        for (key, value) in &attrs {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        let has_content = self.children.iter().any(|child| match child {
            Node::Element(_) => true,
            Node::Text(text) => text.is_some(),
        });
        if !has_content {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        writer.write_event(Event::Start(start))?;
        for child in &self.children {
            match child {
                Node::Element(element) => element.write(writer)?,
                Node::Text(Some(text)) => {
                    writer.write_event(Event::Text(BytesText::new(text)))?;
                }
                Node::Text(None) => {}
            }
        }
        writer.write_event(Event::End(BytesEnd::new(name.as_str())))?;
        Ok(())
    }

    fn qualified_name(&self) -> String {
        if self.tag.is_dav() {
            format!("{DAV_PREFIX}:{}", self.tag.local_name())
        } else if self.tag.namespace_uri().is_empty() {
            self.tag.local_name().to_owned()
        } else {
            format!("{CUSTOM_PREFIX}:{}", self.tag.local_name())
        }
    }
}

/// Convenience for an element holding a single text node.
#[must_use]
pub fn text_element(tag: Tag, text: impl Into<String>) -> TagWriter {
    let mut element = TagWriter::new(tag);
    element.add_text(Some(text.into()));
    element
}

/// Serializes one request document: XML declaration, then the root
/// element with the `DAV:` prefix declared on it.
///
/// ## Errors
/// Returns an error if serialization fails or produces invalid UTF-8.
pub(crate) fn write_document(mut root: TagWriter) -> Result<String, DavError> {
    root.declare(DAV_PREFIX, crate::core::DAV_NS);

    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    root.write(&mut writer)?;
    Ok(String::from_utf8(writer.into_inner())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(root: &TagWriter) -> String {
        let mut writer = Writer::new(Vec::new());
        root.write(&mut writer).unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn children_emit_in_insertion_order() {
        let mut root = TagWriter::new(Tag::dav("from"));
        root.add_element(text_element(Tag::dav("href"), "/a"));
        root.add_element(text_element(Tag::dav("depth"), "0"));
        assert_eq!(
            render(&root),
            "<d:from><d:href>/a</d:href><d:depth>0</d:depth></d:from>"
        );
    }

    #[test]
    fn childless_element_is_self_closing() {
        let root = TagWriter::new(Tag::dav("displayname"));
        assert_eq!(render(&root), "<d:displayname/>");
    }

    #[test]
    fn absent_text_emits_nothing() {
        let mut root = TagWriter::new(Tag::dav("href"));
        root.add_text(None);
        assert_eq!(render(&root), "<d:href/>");
    }

    #[test]
    fn text_is_escaped() {
        let root = text_element(Tag::dav("literal"), "a<b&c");
        assert_eq!(render(&root), "<d:literal>a&lt;b&amp;c</d:literal>");
    }

    #[test]
    fn custom_namespace_declares_inline() {
        let root = TagWriter::new(Tag::new("http://owncloud.org/ns", "fileid"));
        assert_eq!(
            render(&root),
            r#"<x:fileid xmlns:x="http://owncloud.org/ns"/>"#
        );
    }

    #[test]
    fn document_declares_dav_prefix_once() {
        let mut root = TagWriter::new(Tag::dav("propfind"));
        root.add_element(TagWriter::new(Tag::dav("prop")));
        let document = write_document(root).unwrap();
        assert_eq!(
            document,
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\
             <d:propfind xmlns:d=\"DAV:\"><d:prop/></d:propfind>"
        );
    }
}
