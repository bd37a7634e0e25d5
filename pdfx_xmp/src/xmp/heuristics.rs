//! This module assists in recognizing the RDF structure around an element.
//!
//! XMP values are just XML elements, so we look at their children to figure
//! out which shape they've got.

use pdfx_xmp_types::namespaces::{RDF_NAMESPACE, XML_NAMESPACE};
use xmltree::{Element, XMLNode};

pub trait XmpElementHeuristicsExt {
    /// Checks if `self` is `rdf:{name}`.
    fn is_rdf(&self, name: &str) -> bool;

    /// Direct children of `self` that are `rdf:{name}`, in document order.
    fn rdf_children<'e>(&'e self, name: &'e str) -> impl Iterator<Item = &'e Element>;

    /// Finds the collection kind of `self`, if it has one.
    fn has_collection(&self) -> Option<CollectionKind>;

    /// The `xml:lang` attribute of `self`.
    fn lang(&self) -> Option<&str>;

    /// The text of `self` that comes before its first child element.
    ///
    /// Anything after a child element (the "tail" of that child) isn't part
    /// of the value. Comments and processing instructions are skipped.
    ///
    /// `xmltree` drops whitespace-only text, so elements that only hold
    /// other elements (like `rdf:Description` or `rdf:Bag`) have no text
    /// here, rather than the indentation between their children.
    fn text(&self) -> Option<String>;
}

impl XmpElementHeuristicsExt for Element {
    fn is_rdf(&self, name: &str) -> bool {
        // all of em have namespaces
        let Some(ref ns) = self.namespace else {
            return false;
        };

        ns == RDF_NAMESPACE && self.name == name
    }

    fn rdf_children<'e>(&'e self, name: &'e str) -> impl Iterator<Item = &'e Element> {
        self.children
            .iter()
            .flat_map(|c| c.as_element())
            .filter(move |c| c.is_rdf(name))
    }

    fn has_collection(&self) -> Option<CollectionKind> {
        // the order here matters!
        //
        // an element with both a `Bag` and a `Seq` is a bag, no matter which
        // one comes first in the document
        [
            CollectionKind::Unordered,
            CollectionKind::Ordered,
            CollectionKind::Alternatives,
        ]
        .into_iter()
        .find(|kind| self.rdf_children(kind.container_name()).next().is_some())
    }

    fn lang(&self) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| {
                if key.local_name != "lang" {
                    return false;
                }

                // `xml:` is bound by definition, but a parser may leave the
                // namespace off. the prefix is enough in that case
                match key.namespace.as_deref() {
                    Some(ns) => ns == XML_NAMESPACE,
                    None => key.prefix.as_deref() == Some("xml"),
                }
            })
            .map(|(_, value)| value.as_str())
    }

    fn text(&self) -> Option<String> {
        let leading: String = self
            .children
            .iter()
            .take_while(|c| c.as_element().is_none())
            .filter_map(|c| match c {
                XMLNode::Text(t) | XMLNode::CData(t) => Some(t.as_str()),
                _ => None,
            })
            .collect();

        (!leading.is_empty()).then_some(leading)
    }
}

/// The kind of collection we've detected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollectionKind {
    Alternatives,
    Unordered,
    Ordered,
}

impl CollectionKind {
    /// The local name of the RDF container for this kind.
    pub fn container_name(self) -> &'static str {
        match self {
            CollectionKind::Alternatives => "Alt",
            CollectionKind::Unordered => "Bag",
            CollectionKind::Ordered => "Seq",
        }
    }
}
