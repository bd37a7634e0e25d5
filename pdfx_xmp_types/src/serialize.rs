//! `serde` support, behind the `serde` feature.
//!
//! Values serialize "bare", so a JSON encoding of [`XmpMetadata`] looks like:
//!
//! ```json
//! {
//!   "dc": {
//!     "format": "application/pdf",
//!     "creator": ["Jane Doe"],
//!     "title": { "x-default": "A Title" }
//!   }
//! }
//! ```
//!
//! Map keys have to be strings, so [`NamespaceKey::Unqualified`] and missing
//! `xml:lang` tags both become `"null"`.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use crate::{key::NamespaceKey, metadata::XmpMetadata, value::XmpValue};

/// What we write for keys that don't exist.
///
/// Note that a namespace with the URI `null` will be written the same way.
const NULL_KEY: &str = "null";

impl Serialize for NamespaceKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str().unwrap_or(NULL_KEY))
    }
}

impl Serialize for XmpValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            XmpValue::Scalar(text) => text.serialize(serializer),
            XmpValue::OrderedList(items) | XmpValue::UnorderedList(items) => {
                serializer.collect_seq(items)
            }
            XmpValue::LanguageMap(map) => serializer.collect_map(
                map.iter()
                    .map(|(lang, text)| (lang.as_deref().unwrap_or(NULL_KEY), text)),
            ),
        }
    }
}

/// Namespaces are written by name, and different keys can share one.
///
/// `Alias("dc")` and `Uri("dc")` are both `"dc"`, and `Unqualified` is
/// `"null"` like `Uri("null")`. Those get merged into one object. On a tag
/// clash, the later key (in [`NamespaceKey`] order) wins.
impl Serialize for XmpMetadata {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut merged: BTreeMap<&str, BTreeMap<&str, &XmpValue>> = BTreeMap::new();

        for (key, tags) in self.iter() {
            merged
                .entry(key.as_str().unwrap_or(NULL_KEY))
                .or_default()
                .extend(tags.iter().map(|(tag, value)| (tag.as_str(), value)));
        }

        serializer.collect_map(merged)
    }
}
