//! Read-side `multistatus` domain model.

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};

use super::namespace::{Tag, dav_props};
use super::property::PropValue;

/// A group of decoded properties sharing one HTTP status outcome.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropStat {
    /// Decoded properties, at most one value per tag.
    pub props: HashMap<Tag, PropValue>,
    /// The raw HTTP status line, e.g. `HTTP/1.1 200 OK`.
    pub status: Option<String>,
}

impl PropStat {
    /// Returns the decoded value for `tag`, if present.
    #[must_use]
    pub fn prop(&self, tag: &Tag) -> Option<&PropValue> {
        self.props.get(tag)
    }

    /// Returns the decoded `displayname`.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.prop(&dav_props::displayname())?.as_text()
    }

    /// Returns the decoded `getcontenttype`.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.prop(&dav_props::getcontenttype())?.as_text()
    }

    /// Returns the decoded `getcontentlength`.
    #[must_use]
    pub fn content_length(&self) -> Option<i64> {
        self.prop(&dav_props::getcontentlength())?.as_integer()
    }

    /// Returns the decoded `getetag`.
    #[must_use]
    pub fn etag(&self) -> Option<&str> {
        self.prop(&dav_props::getetag())?.as_text()
    }

    /// Returns the decoded `getlastmodified`.
    #[must_use]
    pub fn last_modified(&self) -> Option<DateTime<FixedOffset>> {
        self.prop(&dav_props::getlastmodified())?.as_timestamp()
    }
}

/// One resource's entry in a `multistatus` document.
///
/// A resource may report success and failure propstats separately, so
/// the propstat order is document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response {
    /// The resource href.
    pub href: Option<String>,
    /// The propstats, in document order.
    pub propstats: Vec<PropStat>,
}

/// A parsed `multistatus` response document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiStatus {
    /// The per-resource responses, in document order.
    pub responses: Vec<Response>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn propstat_typed_accessors() {
        let mut props = HashMap::new();
        props.insert(
            dav_props::getcontenttype(),
            PropValue::ContentType(Some("text/plain".to_owned())),
        );
        props.insert(
            dav_props::getcontentlength(),
            PropValue::ContentLength(Some(163)),
        );
        let propstat = PropStat {
            props,
            status: Some("HTTP/1.1 200 OK".to_owned()),
        };

        assert_eq!(propstat.content_type(), Some("text/plain"));
        assert_eq!(propstat.content_length(), Some(163));
        assert_eq!(propstat.display_name(), None);
        assert_eq!(propstat.etag(), None);
    }

    #[test]
    fn empty_payload_reads_as_none() {
        let mut props = HashMap::new();
        props.insert(dav_props::displayname(), PropValue::DisplayName(None));
        let propstat = PropStat {
            props,
            status: None,
        };

        // Present in the map, but with no value.
        assert!(propstat.prop(&dav_props::displayname()).is_some());
        assert_eq!(propstat.display_name(), None);
    }
}
