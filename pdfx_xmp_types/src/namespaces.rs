//! The well-known namespace table.
//!
//! XMP names everything with full namespace URIs, which are annoying to read
//! (and to type!). A handful of them show up in nearly every PDF, so we swap
//! those out for short aliases when building results.
//!
//! Anything not listed here keeps its raw URI.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

/// The namespace of RDF itself.
///
/// Containers (`rdf:Bag`, `rdf:Seq`, `rdf:Alt`), their items (`rdf:li`), and
/// the `rdf:RDF` and `rdf:Description` elements all live here.
pub const RDF_NAMESPACE: &str = r"http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// The reserved `xml:` namespace, home of the `xml:lang` attribute.
pub const XML_NAMESPACE: &str = r"http://www.w3.org/XML/1998/namespace";

/// A map, (key, value), where:
///
/// - `key` is a full namespace URI
/// - `value` is its short alias
pub static NAMESPACE_ALIASES: LazyLock<FxHashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        let mut m: FxHashMap<&'static str, &'static str> = FxHashMap::default();
        map(&mut m);
        m
    });

fn map(m: &mut FxHashMap<&'static str, &'static str>) {
    m.insert(RDF_NAMESPACE, "rdf");
    m.insert(r"http://purl.org/dc/elements/1.1/", "dc");
    m.insert(r"http://ns.adobe.com/xap/1.0/", "xap");
    m.insert(r"http://ns.adobe.com/pdf/1.3/", "pdf");
    m.insert(r"http://ns.adobe.com/xap/1.0/mm/", "xapmm");
    m.insert(r"http://ns.adobe.com/pdfx/1.3/", "pdfx");
    m.insert(r"http://prismstandard.org/namespaces/basic/2.0/", "prism");
    m.insert(r"http://crossref.org/crossmark/1.0/", "crossmark");
    m.insert(r"http://ns.adobe.com/xap/1.0/rights/", "rights");
    m.insert(XML_NAMESPACE, "xml");
}

/// Finds the alias for a namespace URI, if it's one we know.
pub fn alias_for(uri: &str) -> Option<&'static str> {
    NAMESPACE_ALIASES.get(uri).copied()
}

/// Finds the namespace URI behind an alias.
///
/// This is a linear scan, but the table is tiny.
pub fn uri_for(alias: &str) -> Option<&'static str> {
    NAMESPACE_ALIASES
        .iter()
        .find(|(_, a)| **a == alias)
        .map(|(uri, _)| *uri)
}
