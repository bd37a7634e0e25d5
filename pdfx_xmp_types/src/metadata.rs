//! The container for extracted metadata.

use std::collections::{BTreeMap, btree_map};

use crate::{key::NamespaceKey, value::XmpValue};

/// Tags (local names) to their values, all within one namespace.
pub type TagMap = BTreeMap<String, XmpValue>;

/// Metadata extracted from an XMP document, grouped by namespace.
///
/// Each `(namespace, tag)` pair holds at most one value. If a document
/// defines the same pair twice, whichever came last wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct XmpMetadata(BTreeMap<NamespaceKey, TagMap>);

impl XmpMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a value, replacing anything previously stored under the same
    /// namespace and tag.
    ///
    /// Returns the replaced value, if there was one.
    pub fn insert(
        &mut self,
        namespace: NamespaceKey,
        tag: impl Into<String>,
        value: XmpValue,
    ) -> Option<XmpValue> {
        self.0.entry(namespace).or_default().insert(tag.into(), value)
    }

    /// Returns all tags in a namespace.
    ///
    /// The namespace can be given as an alias (`"dc"`) or a URI.
    /// Aliases win over URIs of the same spelling.
    pub fn namespace(&self, alias_or_uri: &str) -> Option<&TagMap> {
        self.0.get(&NamespaceKey::resolve(alias_or_uri))
    }

    /// Returns all tags that had no namespace.
    pub fn unqualified(&self) -> Option<&TagMap> {
        self.0.get(&NamespaceKey::Unqualified)
    }

    /// Gets one value by namespace (alias or URI) and tag.
    ///
    /// Aliases take priority: `get("dc", ..)` looks in `Alias("dc")`, never
    /// in a namespace whose URI is literally `dc`. Use
    /// [`XmpMetadata::get_by_key`] to reach that one.
    pub fn get(&self, alias_or_uri: &str, tag: &str) -> Option<&XmpValue> {
        self.namespace(alias_or_uri)?.get(tag)
    }

    /// Gets one value by its Clark-notation name, like
    /// `{http://purl.org/dc/elements/1.1/}title`.
    pub fn get_qualified(&self, qualified_tag: &str) -> Option<&XmpValue> {
        let (key, local) = NamespaceKey::from_qualified(qualified_tag);
        self.0.get(&key)?.get(local)
    }

    /// Gets one value by its namespace key and tag.
    pub fn get_by_key(&self, key: &NamespaceKey, tag: &str) -> Option<&XmpValue> {
        self.0.get(key)?.get(tag)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, NamespaceKey, TagMap> {
        self.0.iter()
    }

    /// The number of namespaces.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> BTreeMap<NamespaceKey, TagMap> {
        self.0
    }
}

impl<'a> IntoIterator for &'a XmpMetadata {
    type Item = (&'a NamespaceKey, &'a TagMap);
    type IntoIter = btree_map::Iter<'a, NamespaceKey, TagMap>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
