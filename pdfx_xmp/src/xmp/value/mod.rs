use pdfx_xmp_types::{NamespaceKey, XmpValue};
use xmltree::Element;

use crate::xmp::{
    heuristics::{CollectionKind, XmpElementHeuristicsExt as _},
    value::arrays::{value_alternatives, value_ordered_array, value_unordered_array},
};

pub mod arrays;

pub trait XmpElementExt {
    /// Finds the namespace key and local name of this element.
    fn classify(&self) -> (NamespaceKey, &str);

    /// Decodes the value held by this element.
    ///
    /// This can't fail. Anything that doesn't look like a collection is read
    /// as plain text, which might be missing.
    fn value(&self) -> XmpValue;
}

impl XmpElementExt for Element {
    fn classify(&self) -> (NamespaceKey, &str) {
        (
            NamespaceKey::from_uri(self.namespace.as_deref()),
            self.name.as_str(),
        )
    }

    fn value(&self) -> XmpValue {
        // the shapes are checked in this order:
        //
        // - `rdf:Bag` => unordered array
        // - `rdf:Seq` => ordered array
        // - `rdf:Alt` => alternatives (by language)
        // - otherwise, the element's own text
        match self.has_collection() {
            Some(CollectionKind::Unordered) => value_unordered_array(self),
            Some(CollectionKind::Ordered) => value_ordered_array(self),
            Some(CollectionKind::Alternatives) => value_alternatives(self),
            None => XmpValue::Scalar(self.text()),
        }
    }
}
