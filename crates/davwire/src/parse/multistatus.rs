//! `multistatus` response document parsing.

use std::collections::HashMap;

use super::error::{ParseError, ParseResult};
use super::reader::XmlReader;
use crate::core::{MultiStatus, PropRegistry, PropStat, PropValue, Response, Tag};

/// Parses a `multistatus` response document.
///
/// ## Summary
/// Advances to the document's first element, requires it to be
/// `DAV: multistatus`, and decodes it into a [`MultiStatus`] using the
/// property decoders in `registry`. Elements the schema or the registry
/// does not know are skipped at every nesting depth.
///
/// ## Errors
/// Returns an error if the XML is malformed, truncated, or the root
/// element is not `multistatus`.
#[tracing::instrument(skip(xml, registry), fields(xml_len = xml.len()))]
pub fn multistatus(xml: &[u8], registry: &PropRegistry) -> ParseResult<MultiStatus> {
    if xml.is_empty() {
        return Err(ParseError::unexpected_eof("empty multistatus body"));
    }

    tracing::debug!("Parsing multistatus response");

    let mut reader = XmlReader::new(xml);
    let root = Tag::dav("multistatus");
    reader.expect_start(&root)?;
    parse_multistatus(&mut reader, &root, registry)
}

fn parse_multistatus(
    reader: &mut XmlReader<'_>,
    tag: &Tag,
    registry: &PropRegistry,
) -> ParseResult<MultiStatus> {
    let mut responses = Vec::new();
    reader.parse_children(tag, |reader, child| {
        if child.is_dav() && child.local_name() == "response" {
            responses.push(parse_response(reader, &child, registry)?);
            Ok(true)
        } else {
            Ok(false)
        }
    })?;
    Ok(MultiStatus { responses })
}

fn parse_response(
    reader: &mut XmlReader<'_>,
    tag: &Tag,
    registry: &PropRegistry,
) -> ParseResult<Response> {
    let mut href = None;
    let mut propstats = Vec::new();
    reader.parse_children(tag, |reader, child| {
        if !child.is_dav() {
            return Ok(false);
        }
        match child.local_name() {
            "href" => {
                href = reader.read_text()?;
                Ok(true)
            }
            "propstat" => {
                propstats.push(parse_propstat(reader, &child, registry)?);
                Ok(true)
            }
            _ => Ok(false),
        }
    })?;
    Ok(Response { href, propstats })
}

fn parse_propstat(
    reader: &mut XmlReader<'_>,
    tag: &Tag,
    registry: &PropRegistry,
) -> ParseResult<PropStat> {
    let mut props = HashMap::new();
    let mut status = None;
    reader.parse_children(tag, |reader, child| {
        if !child.is_dav() {
            return Ok(false);
        }
        match child.local_name() {
            "status" => {
                status = reader.read_text()?;
                Ok(true)
            }
            "prop" => {
                props = parse_prop(reader, &child, registry)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    })?;
    Ok(PropStat { props, status })
}

/// Decodes a `prop` element's children through the registry.
///
/// Registered children decode into the map, one value per tag;
/// unregistered children are skipped, not errored.
fn parse_prop(
    reader: &mut XmlReader<'_>,
    tag: &Tag,
    registry: &PropRegistry,
) -> ParseResult<HashMap<Tag, PropValue>> {
    let mut props = HashMap::new();
    reader.parse_children(tag, |reader, child| {
        if let Some(decode) = registry.decoder(&child) {
            let text = reader.read_text()?;
            let value = decode(text.as_deref());
            props.insert(child, value);
            Ok(true)
        } else {
            Ok(false)
        }
    })?;
    Ok(props)
}
