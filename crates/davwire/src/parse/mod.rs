//! `WebDAV` XML parsing.
//!
//! One streaming pass over a `quick-xml` event stream, dispatching each
//! element's direct children by tag and skipping everything unclaimed.

mod error;
mod multistatus;
mod reader;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use multistatus::multistatus;
pub use reader::{XmlEvent, XmlReader};
