//! `searchrequest` document encoding.

use super::propfind::prop_element;
use super::writer::{TagWriter, text_element};
use crate::core::{Expr, Scope, SearchRequest, Tag};
use crate::error::DavError;

/// Encodes a `SEARCH` request body.
///
/// ## Errors
/// Returns an error if serialization fails.
#[tracing::instrument(skip(request))]
pub fn search_request(request: &SearchRequest) -> Result<String, DavError> {
    let mut basicsearch = TagWriter::new(Tag::dav("basicsearch"));

    let mut select = TagWriter::new(Tag::dav("select"));
    select.add_element(prop_element(&request.search.select));
    basicsearch.add_element(select);

    let mut from = TagWriter::new(Tag::dav("from"));
    for scope in &request.search.from {
        from.add_element(scope_element(scope));
    }
    basicsearch.add_element(from);

    if let Some(filter) = &request.search.filter {
        let mut where_element = TagWriter::new(Tag::dav("where"));
        where_element.add_element(expr_element(filter));
        basicsearch.add_element(where_element);
    }

    let mut root = TagWriter::new(Tag::dav("searchrequest"));
    root.add_element(basicsearch);
    super::writer::write_document(root)
}

fn scope_element(scope: &Scope) -> TagWriter {
    let mut element = TagWriter::new(Tag::dav("scope"));
    element.add_element(text_element(Tag::dav("href"), scope.href.clone()));
    element.add_element(text_element(Tag::dav("depth"), scope.depth_token()));
    element
}

fn expr_element(expr: &Expr) -> TagWriter {
    match expr {
        Expr::And(children) => logical_element("and", children),
        Expr::Or(children) => logical_element("or", children),
        Expr::Not(child) => {
            let mut element = TagWriter::new(Tag::dav("not"));
            element.add_element(expr_element(child));
            element
        }
        Expr::Eq(prop, literal) => comparison_element("eq", prop, literal),
        Expr::Lt(prop, literal) => comparison_element("lt", prop, literal),
        Expr::Gt(prop, literal) => comparison_element("gt", prop, literal),
        Expr::Lte(prop, literal) => comparison_element("lte", prop, literal),
        Expr::Gte(prop, literal) => comparison_element("gte", prop, literal),
        Expr::Like(prop, literal) => comparison_element("like", prop, literal),
    }
}

fn logical_element(name: &'static str, children: &[Expr]) -> TagWriter {
    let mut element = TagWriter::new(Tag::dav(name));
    for child in children {
        element.add_element(expr_element(child));
    }
    element
}

fn comparison_element(name: &'static str, prop: &Tag, literal: &str) -> TagWriter {
    let mut element = TagWriter::new(Tag::dav(name));
    element.add_element(prop_element(std::slice::from_ref(prop)));
    element.add_element(text_element(Tag::dav("literal"), literal));
    element
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BasicSearch, Depth, dav_props};

    #[test]
    fn search_request_document() {
        let request = SearchRequest::new(
            BasicSearch::new()
                .select(dav_props::displayname())
                .scope(Scope::new("/files/USER"))
                .filter(Expr::eq(dav_props::getcontenttype(), "image/png")),
        );
        let document = search_request(&request).unwrap();
        assert_eq!(
            document,
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\
             <d:searchrequest xmlns:d=\"DAV:\">\
             <d:basicsearch>\
             <d:select><d:prop><d:displayname/></d:prop></d:select>\
             <d:from><d:scope>\
             <d:href>/files/USER</d:href>\
             <d:depth>infinity</d:depth>\
             </d:scope></d:from>\
             <d:where><d:eq>\
             <d:prop><d:getcontenttype/></d:prop>\
             <d:literal>image/png</d:literal>\
             </d:eq></d:where>\
             </d:basicsearch>\
             </d:searchrequest>"
        );
    }

    #[test]
    fn finite_depth_serializes_as_decimal() {
        let request = SearchRequest::new(
            BasicSearch::new().scope(Scope::new("/files/").depth(Depth::Finite(0))),
        );
        let document = search_request(&request).unwrap();
        assert!(document.contains("<d:depth>0</d:depth>"));
    }

    #[test]
    fn logical_operators_nest() {
        let filter = Expr::and(vec![
            Expr::gt(dav_props::getcontentlength(), "100"),
            Expr::not(Expr::eq(dav_props::getcontenttype(), "text/plain")),
        ]);
        let request = SearchRequest::new(BasicSearch::new().filter(filter));
        let document = search_request(&request).unwrap();
        assert!(document.contains(
            "<d:and>\
             <d:gt><d:prop><d:getcontentlength/></d:prop><d:literal>100</d:literal></d:gt>\
             <d:not><d:eq><d:prop><d:getcontenttype/></d:prop>\
             <d:literal>text/plain</d:literal></d:eq></d:not>\
             </d:and>"
        ));
    }

    #[test]
    fn like_comparison_serializes() {
        let request = SearchRequest::new(
            BasicSearch::new().filter(Expr::like(dav_props::displayname(), "%.png")),
        );
        let document = search_request(&request).unwrap();
        assert!(document.contains(
            "<d:like><d:prop><d:displayname/></d:prop><d:literal>%.png</d:literal></d:like>"
        ));
    }
}
