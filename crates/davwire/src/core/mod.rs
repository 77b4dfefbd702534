//! `WebDAV` XML wire types.
//!
//! This module defines the element identity key, the property model,
//! and the read- and write-side document models.

mod depth;
mod multistatus;
mod namespace;
mod property;
mod search;

pub use depth::Depth;
pub use multistatus::{MultiStatus, PropStat, Response};
pub use namespace::{DAV_NS, Namespace, Tag, dav_props};
pub use property::{PropDecoder, PropRegistry, PropValue};
pub use search::{BasicSearch, Expr, PropFind, Scope, SearchRequest};
