use std::collections::BTreeMap;

use pdfx_xmp_types::XmpValue;
use xmltree::Element;

use crate::xmp::heuristics::{CollectionKind, XmpElementHeuristicsExt as _};

/// Parses an element's value as a list of alternatives.
///
/// These are generally represented by `rdf:Alt`, with each inner `rdf:li`
/// storing one possible display value.
///
/// Alternative collections usually look like the following:
///
/// ```xml
/// <ns:element>
///     <rdf:Alt>
///         <rdf:li xml:lang="x-default">XMP - Extensible Metadata Platform</rdf:li>
///         <rdf:li xml:lang="en-us">XMP - Extensible Metadata Platform</rdf:li>
///         <rdf:li xml:lang="fr-fr">XMP - Une Platforme Extensible pour les Métadonnées</rdf:li>
///     </rdf:Alt>
/// </ns:element>
/// ```
///
/// Items without `xml:lang` are stored under `None`. When two items share a
/// language, the later one is kept.
pub fn value_alternatives(element: &Element) -> XmpValue {
    let mut map = BTreeMap::new();

    for li in lis(element, CollectionKind::Alternatives) {
        let lang = li.lang().map(str::to_string);

        if lang.is_none() {
            log::trace!(
                "`rdf:li` in `{}` has no `xml:lang`. Storing it without one.",
                element.name
            );
        }

        if let Some(old) = map.insert(lang, li.text()) {
            log::debug!(
                "Replaced duplicate language in `{}`. old value: {old:?}",
                element.name
            );
        }
    }

    XmpValue::LanguageMap(map)
}

/// Parses an element's value as an unordered array.
///
/// An unordered array will look like the following:
///
/// ```xml
/// <ns:element>
///      <rdf:Bag>
///          <rdf:li>oswald</rdf:li>
///          <rdf:li>miranda</rdf:li>
///          <rdf:li> ... </rdf:li>
///      </rdf:Bag>
/// </ns:element>
/// ```
pub fn value_unordered_array(element: &Element) -> XmpValue {
    XmpValue::UnorderedList(value_array(element, CollectionKind::Unordered))
}

/// Parses an element's value as an ordered array.
///
/// An ordered array will look like the following:
///
/// ```xml
/// <ns:element>
///      <rdf:Seq>
///          <rdf:li>value1</rdf:li>
///          <rdf:li>value2</rdf:li>
///          <rdf:li> ... </rdf:li>
///      </rdf:Seq>
/// </ns:element>
/// ```
pub fn value_ordered_array(element: &Element) -> XmpValue {
    XmpValue::OrderedList(value_array(element, CollectionKind::Ordered))
}

/// Grabs the text of each item in an array.
fn value_array(element: &Element, kind: CollectionKind) -> Vec<Option<String>> {
    lis(element, kind).map(|li| li.text()).collect()
}

/// Finds every `rdf:li` in every matching container on `element`.
///
/// Elements normally hold a single container. If there are more, their items
/// are all collected, in document order.
fn lis(element: &Element, kind: CollectionKind) -> impl Iterator<Item = &Element> {
    let container = kind.container_name();

    element.rdf_children(container).flat_map(move |collection| {
        collection
            .children
            .iter()
            .flat_map(|c| c.as_element())
            .filter(move |maybe_li| {
                if maybe_li.is_rdf("li") {
                    return true;
                }

                log::warn!(
                    "sub-element of `rdf:{container}` was expected to be `rdf:li`, \
                        but wasn't. element name: `{}`, namespace: `{:?}`",
                    maybe_li.name,
                    maybe_li.namespace
                );
                false
            })
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pdfx_xmp_types::XmpValue;
    use xmltree::Element;

    use super::{value_alternatives, value_ordered_array, value_unordered_array};

    fn parse(xml: &str) -> Element {
        crate::util::logger();
        Element::parse(xml.as_bytes()).expect("valid XML should be parsed by `xmltree`")
    }

    /// Ensures we can parse a short array of alternatives.
    #[test]
    fn should_parse_alternatives() {
        let element = parse(
            r#"
<dc:title xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
    <rdf:Alt>
        <rdf:li xml:lang="x-default">The Default. Uh... hi!</rdf:li>
        <rdf:li xml:lang="de">German. Guten Tag!</rdf:li>
        <rdf:li xml:lang="ja">Japanese. こんにちは！</rdf:li>
        <rdf:li>No language at all</rdf:li>
        <rdf:li xml:lang="de">German, again. Moin!</rdf:li>
    </rdf:Alt>
</dc:title>"#,
        );

        assert_eq!(
            value_alternatives(&element),
            XmpValue::LanguageMap(BTreeMap::from([
                (
                    Some("x-default".to_string()),
                    Some("The Default. Uh... hi!".to_string())
                ),
                (Some("de".to_string()), Some("German, again. Moin!".to_string())),
                (Some("ja".to_string()), Some("Japanese. こんにちは！".to_string())),
                (None, Some("No language at all".to_string())),
            ])),
            "later duplicates should win, and missing langs should be kept as `None`"
        );
    }

    /// An ordered array should be parsed in the order it's in.
    #[test]
    fn should_parse_ordered_array() {
        let element = parse(
            r#"
<dc:creator xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
    <rdf:Seq>
        <rdf:li>Zed</rdf:li>
        <rdf:li/>
        <rdf:li>Alice</rdf:li>
    </rdf:Seq>
</dc:creator>"#,
        );

        assert_eq!(
            value_ordered_array(&element),
            XmpValue::OrderedList(vec![Some("Zed".into()), None, Some("Alice".into())])
        );
    }

    /// Items from every `rdf:Bag` are collected, and stray elements are
    /// skipped.
    #[test]
    fn should_parse_unordered_array_across_containers() {
        let element = parse(
            r#"
<dc:subject xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
    <rdf:Bag>
        <rdf:li>a</rdf:li>
        <dc:oops>not an item</dc:oops>
        <rdf:li>b</rdf:li>
    </rdf:Bag>
    <rdf:Bag>
        <rdf:li>c</rdf:li>
    </rdf:Bag>
</dc:subject>"#,
        );

        assert_eq!(
            value_unordered_array(&element),
            XmpValue::UnorderedList(vec![Some("a".into()), Some("b".into()), Some("c".into())])
        );
    }
}
