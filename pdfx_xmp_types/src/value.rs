//! Decoded XMP values.

use std::collections::BTreeMap;

/// The language tag XMP uses for the default entry of an `rdf:Alt`.
pub const DEFAULT_LANGUAGE: &str = "x-default";

/// All the shapes a decoded XMP value may have.
///
/// Every leaf is optional: elements can be empty, and `rdf:li` items can lack
/// an `xml:lang` attribute.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum XmpValue {
    /// The element's own text.
    Scalar(Option<String>),

    /// Items of an `rdf:Seq`.
    OrderedList(Vec<Option<String>>),

    /// Items of an `rdf:Bag`.
    ///
    /// Document order is kept, even though XMP doesn't promise any.
    UnorderedList(Vec<Option<String>>),

    /// Items of an `rdf:Alt`, keyed by their `xml:lang`.
    LanguageMap(BTreeMap<Option<String>, Option<String>>),
}

impl XmpValue {
    /// Returns the text of a scalar.
    ///
    /// This is `None` both for non-scalars and for scalars without text.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            XmpValue::Scalar(text) => text.as_deref(),
            _ => None,
        }
    }

    /// Returns the items of either list kind.
    pub fn as_list(&self) -> Option<&[Option<String>]> {
        match self {
            XmpValue::OrderedList(items) | XmpValue::UnorderedList(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_language_map(&self) -> Option<&BTreeMap<Option<String>, Option<String>>> {
        match self {
            XmpValue::LanguageMap(map) => Some(map),
            _ => None,
        }
    }

    /// Grabs the `x-default` entry of a language map.
    pub fn default_language(&self) -> Option<&str> {
        self.as_language_map()?
            .get(&Some(DEFAULT_LANGUAGE.to_string()))?
            .as_deref()
    }
}
