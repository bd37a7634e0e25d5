//! Namespace keys and qualified tag names.

use crate::namespaces::{alias_for, uri_for};

/// The namespace half of a metadata entry's identity.
///
/// Results are grouped by this key.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NamespaceKey {
    /// A well-known namespace, named by its alias (ex: `dc`).
    Alias(&'static str),

    /// A namespace we don't have an alias for. Contains the URI verbatim.
    Uri(String),

    /// The element had no namespace at all.
    Unqualified,
}

impl NamespaceKey {
    /// Creates a key from an element's namespace URI.
    ///
    /// Known URIs become their alias. Others are kept as-is.
    pub fn from_uri(uri: Option<&str>) -> Self {
        match uri {
            Some(uri) => match alias_for(uri) {
                Some(alias) => NamespaceKey::Alias(alias),
                None => NamespaceKey::Uri(uri.to_string()),
            },
            None => NamespaceKey::Unqualified,
        }
    }

    /// Creates a key from user input, which might be an alias or a URI.
    ///
    /// Both `"dc"` and `"http://purl.org/dc/elements/1.1/"` resolve to
    /// `Alias("dc")`.
    pub fn resolve(alias_or_uri: &str) -> Self {
        match uri_for(alias_or_uri) {
            Some(uri) => NamespaceKey::from_uri(Some(uri)),
            None => NamespaceKey::from_uri(Some(alias_or_uri)),
        }
    }

    /// Splits a Clark-notation tag (`{uri}local`) into its namespace key and
    /// local name.
    pub fn from_qualified(tag: &str) -> (Self, &str) {
        let (uri, local) = split_qualified_tag(tag);
        (NamespaceKey::from_uri(uri), local)
    }

    /// Returns the alias or URI, or `None` for [`NamespaceKey::Unqualified`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            NamespaceKey::Alias(alias) => Some(alias),
            NamespaceKey::Uri(uri) => Some(uri.as_str()),
            NamespaceKey::Unqualified => None,
        }
    }
}

impl core::fmt::Display for NamespaceKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            NamespaceKey::Alias(alias) => f.write_str(alias),
            NamespaceKey::Uri(uri) => f.write_str(uri),
            NamespaceKey::Unqualified => f.write_str("(no namespace)"),
        }
    }
}

/// Splits a tag written in Clark notation, `{uri}local`, into
/// `(Some(uri), local)`.
///
/// Tags that don't start with `{` have no namespace and come back whole. The
/// same goes for a `{` that's never closed.
///
/// ```
/// use pdfx_xmp_types::key::split_qualified_tag;
///
/// assert_eq!(
///     split_qualified_tag("{http://purl.org/dc/elements/1.1/}title"),
///     (Some("http://purl.org/dc/elements/1.1/"), "title"),
/// );
/// assert_eq!(split_qualified_tag("title"), (None, "title"));
/// ```
pub fn split_qualified_tag(tag: &str) -> (Option<&str>, &str) {
    let Some(rest) = tag.strip_prefix('{') else {
        return (None, tag);
    };

    match rest.split_once('}') {
        Some((uri, local)) => (Some(uri), local),
        None => (None, tag),
    }
}
