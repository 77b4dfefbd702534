//! Typed codec for the `WebDAV` XML wire protocol.
//!
//! Decodes server `multistatus` responses into a structured property
//! model and encodes `propfind` / `searchrequest` bodies from builders.
//! Parsing is a single streaming pass: each element's direct children
//! are dispatched by [`Tag`](crate::core::Tag), and anything unclaimed is
//! skipped, so vendor extensions never break decoding of known fields.
//!
//! ```
//! use davwire::core::{PropFind, PropRegistry, dav_props};
//!
//! let registry = PropRegistry::default();
//! let body = br#"<d:multistatus xmlns:d="DAV:">
//!     <d:response>
//!         <d:href>/files/welcome.txt</d:href>
//!         <d:propstat>
//!             <d:prop><d:getcontentlength>163</d:getcontentlength></d:prop>
//!             <d:status>HTTP/1.1 200 OK</d:status>
//!         </d:propstat>
//!     </d:response>
//! </d:multistatus>"#;
//! let multistatus = davwire::parse::multistatus(body, &registry)?;
//! assert_eq!(multistatus.responses[0].propstats[0].content_length(), Some(163));
//!
//! let request = PropFind::new().prop(dav_props::getetag());
//! let xml = davwire::build::propfind(&request)?;
//! assert!(xml.contains("<d:getetag/>"));
//! # Ok::<(), davwire::DavError>(())
//! ```

pub mod build;
pub mod core;
mod error;
pub mod parse;

pub use error::{DavError, DavResult};
