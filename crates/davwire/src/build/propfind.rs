//! `propfind` request document encoding.

use super::writer::TagWriter;
use crate::core::{PropFind, Tag};
use crate::error::DavError;

/// Encodes a `PROPFIND` request body.
///
/// Each requested property is emitted as a bare empty element inside
/// `prop`.
///
/// ## Errors
/// Returns an error if serialization fails.
#[tracing::instrument(skip(request), fields(props = request.props.len()))]
pub fn propfind(request: &PropFind) -> Result<String, DavError> {
    let mut root = TagWriter::new(Tag::dav("propfind"));
    root.add_element(prop_element(&request.props));
    super::writer::write_document(root)
}

/// Builds a `prop` element naming `tags` as bare empty elements.
pub(crate) fn prop_element(tags: &[Tag]) -> TagWriter {
    let mut prop = TagWriter::new(Tag::dav("prop"));
    for tag in tags {
        prop.add_element(TagWriter::new(tag.clone()));
    }
    prop
}
