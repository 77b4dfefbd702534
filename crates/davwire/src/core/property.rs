//! DAV property values and the decoder registry.

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};

use super::namespace::{Tag, dav_props};

/// A decoded property value.
///
/// The payload is optional in every variant: `None` means the element
/// was present but empty, or its text could not be decoded. That is
/// distinct from the tag being absent from the property map entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropValue {
    /// `displayname`.
    DisplayName(Option<String>),
    /// `getcontenttype`.
    ContentType(Option<String>),
    /// `getcontentlength`.
    ContentLength(Option<i64>),
    /// `getetag`.
    Etag(Option<String>),
    /// `getlastmodified`, an HTTP-date.
    LastModified(Option<DateTime<FixedOffset>>),
    /// Raw text of a caller-registered property.
    Raw(Option<String>),
}

impl PropValue {
    /// Returns the value as text if this is a text-carrying variant.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::DisplayName(Some(s))
            | Self::ContentType(Some(s))
            | Self::Etag(Some(s))
            | Self::Raw(Some(s)) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as an integer if applicable.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::ContentLength(n) => *n,
            _ => None,
        }
    }

    /// Returns the value as a timestamp if applicable.
    #[must_use]
    pub fn as_timestamp(&self) -> Option<DateTime<FixedOffset>> {
        match self {
            Self::LastModified(ts) => *ts,
            _ => None,
        }
    }
}

/// A property decode function.
///
/// Receives the element's text content, `None` for an empty element,
/// and must produce a value rather than fail: malformed text maps to a
/// `None` payload.
pub type PropDecoder = Box<dyn Fn(Option<&str>) -> PropValue + Send + Sync>;

/// Tag-to-decoder table used when parsing `prop` elements.
///
/// The registry is an explicit value owned by the caller and passed to
/// every decode call. `register` needs `&mut self` and decoding takes
/// `&self`, so registration is confined to setup before parsing starts.
/// `Default` seeds the built-in `WebDAV` properties.
pub struct PropRegistry {
    decoders: HashMap<Tag, PropDecoder>,
}

impl PropRegistry {
    /// Creates an empty registry with no decoders at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            decoders: HashMap::new(),
        }
    }

    /// Installs or replaces the decoder for `tag`.
    ///
    /// The last registration for a tag wins.
    pub fn register(
        &mut self,
        tag: Tag,
        decode: impl Fn(Option<&str>) -> PropValue + Send + Sync + 'static,
    ) {
        self.decoders.insert(tag, Box::new(decode));
    }

    /// Returns the decoder registered for `tag`, if any.
    #[must_use]
    pub fn decoder(&self, tag: &Tag) -> Option<&PropDecoder> {
        self.decoders.get(tag)
    }

    /// Returns whether any decoder is registered for `tag`.
    #[must_use]
    pub fn recognizes(&self, tag: &Tag) -> bool {
        self.decoders.contains_key(tag)
    }
}

impl Default for PropRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(dav_props::displayname(), |text| {
            PropValue::DisplayName(text.map(str::to_owned))
        });
        registry.register(dav_props::getcontenttype(), |text| {
            PropValue::ContentType(text.map(str::to_owned))
        });
        registry.register(dav_props::getetag(), |text| {
            PropValue::Etag(text.map(str::to_owned))
        });
        registry.register(dav_props::getcontentlength(), |text| {
            PropValue::ContentLength(text.and_then(decode_integer))
        });
        registry.register(dav_props::getlastmodified(), |text| {
            PropValue::LastModified(text.and_then(decode_http_date))
        });
        registry
    }
}

fn decode_integer(raw: &str) -> Option<i64> {
    match raw.trim().parse::<i64>() {
        Ok(n) => Some(n),
        Err(err) => {
            tracing::debug!(error = %err, value = %raw, "unparseable integer property text");
            None
        }
    }
}

fn decode_http_date(raw: &str) -> Option<DateTime<FixedOffset>> {
    // HTTP-date ("Tue, 13 Oct 2015 17:07:35 GMT") is an RFC 2822 profile.
    match DateTime::parse_from_rfc2822(raw.trim()) {
        Ok(ts) => Some(ts),
        Err(err) => {
            tracing::debug!(error = %err, value = %raw, "unparseable HTTP-date property text");
            None
        }
    }
}
