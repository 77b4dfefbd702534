//! `WebDAV` XML request encoding.
//!
//! Request bodies are built as a tree of writer nodes and emitted in
//! one recursive pass over the `quick-xml` serializer. The two document
//! functions are the only places the `DAV:` prefix is declared.

mod propfind;
mod search;
mod writer;

pub use propfind::propfind;
pub use search::search_request;
pub use writer::{Node, TagWriter, text_element};
