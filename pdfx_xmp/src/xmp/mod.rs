//! Implements an XMP metadata extractor.
//!
//! XMP (Extensible Metadata Platform) is an XML document that PDFs (and many
//! other formats) embed to describe themselves. The interesting parts live in
//! the `rdf:Description` blocks of its `rdf:RDF` element:
//!
//! ```xml
//! <x:xmpmeta xmlns:x="adobe:ns:meta/">
//!   <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
//!     <rdf:Description rdf:about="" xmlns:dc="http://purl.org/dc/elements/1.1/">
//!       <dc:format>application/pdf</dc:format>
//!     </rdf:Description>
//!   </rdf:RDF>
//! </x:xmpmeta>
//! ```
//!
//! Extraction walks every element inside each description, names it by its
//! namespace and tag, and decodes its value into an [`XmpValue`]. The results
//! are collected into an [`XmpMetadata`] map.
//!
//! Note that *every* element is visited - not just the properties directly
//! under a description. Containers like `rdf:Bag` and their `rdf:li` items
//! get entries of their own (under `rdf`), and so does `rdf:Description`
//! itself. Real properties never collide with those, so they're easy to
//! ignore.

use pdfx_xmp_types::{XmpMetadata, XmpValue, namespaces::RDF_NAMESPACE};
use xmltree::{Element, XMLNode};

use crate::xmp::{
    error::XmpError,
    heuristics::XmpElementHeuristicsExt as _,
    value::XmpElementExt as _,
    walk::Descendants,
};

pub mod error;
mod heuristics;
mod value;
mod walk;

/// Re-exports of the XMP types from `pdfx_xmp_types`.
pub mod types {
    pub use pdfx_xmp_types::{
        NamespaceKey, TagMap, XmpMetadata, XmpValue,
        key::split_qualified_tag,
        namespaces::{NAMESPACE_ALIASES, RDF_NAMESPACE, XML_NAMESPACE, alias_for, uri_for},
    };
}

/// Extracts metadata from an XMP document.
///
/// Only the document's `rdf:RDF` element is kept around after construction.
#[derive(Clone, Debug)]
pub struct XmpExtractor {
    rdf: Element,
}

impl XmpExtractor {
    /// Parses the given raw XML string and finds its `rdf:RDF` element.
    ///
    /// The `rdf:RDF` element has to be a direct child of the document's root
    /// element (usually `x:xmpmeta`).
    ///
    /// # Errors
    ///
    /// - [`XmpError::XmlParseError`] if the XML isn't well-formed.
    /// - [`XmpError::NoRdfElement`] if there's no `rdf:RDF` element under
    ///   the root.
    pub fn new(raw_xml: &str) -> Result<Self, XmpError> {
        // grab the document from XML
        let document: Element = Element::parse(raw_xml.as_bytes())
            .inspect_err(|e| log::error!("Failed to parse XMP as XML! err: {e}"))?;

        log::debug!("Parsed XML document with root `{}`.", document.name);

        let rdf = find_rdf(document).ok_or_else(|| {
            log::error!("Couldn't find an `rdf:RDF` element in the document.");
            XmpError::NoRdfElement
        })?;

        Ok(Self { rdf })
    }

    /// Like [`XmpExtractor::new`], but takes the XMP packet as bytes.
    ///
    /// # Errors
    ///
    /// In addition to those of [`XmpExtractor::new`], this returns
    /// [`XmpError::NotUtf8`] if the bytes aren't UTF-8.
    pub fn from_bytes(raw_xml: &[u8]) -> Result<Self, XmpError> {
        core::str::from_utf8(raw_xml)
            .map_err(|e| {
                log::error!("XMP was not in UTF-8 format! err: {e}");
                XmpError::NotUtf8
            })
            .and_then(Self::new)
    }

    /// Returns the document's `rdf:RDF` element.
    pub fn rdf(&self) -> &Element {
        &self.rdf
    }

    /// Extracts all metadata from the document.
    ///
    /// When a namespace and tag show up more than once, the last one in the
    /// document wins. That holds across separate `rdf:Description` blocks,
    /// too.
    pub fn extract(&self) -> XmpMetadata {
        let mut meta = XmpMetadata::new();

        // the `rdf:RDF` element should contain "one or more"
        // `rdf:Description` elements.
        //
        // we don't complain if there are none, though!
        let descriptions = self.rdf.rdf_children("Description");

        for (index, description) in descriptions.enumerate() {
            log::debug!("Extracting from `rdf:Description` #{index}.");

            for element in Descendants::new(description) {
                let (namespace, tag) = element.classify();
                let value: XmpValue = element.value();

                log::trace!("Found `{namespace}:{tag}` with value: {value:?}");

                if let Some(old) = meta.insert(namespace, tag, value) {
                    log::trace!("Replaced earlier value of `{tag}`. old value: {old:?}");
                }
            }
        }

        meta
    }
}

/// Takes the `rdf:RDF` element out of the document, if it's a direct child
/// of the root.
fn find_rdf(document: Element) -> Option<Element> {
    document.children.into_iter().find_map(|node| match node {
        XMLNode::Element(e) if e.is_rdf("RDF") => Some(e),
        XMLNode::Element(e) if e.name == "RDF" => {
            log::warn!(
                "Found `RDF` element, but with wrong namespace!
                    - expected: `{RDF_NAMESPACE}`
                    - got: `{:?}`",
                e.namespace
            );
            None
        }
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use pdfx_xmp_types::{NamespaceKey, XmpValue};

    use crate::xmp::{XmpExtractor, error::XmpError};

    /// We're fine with a blank description... right?
    #[test]
    fn blank_description_is_ok() {
        crate::util::logger();

        let xmp = XmpExtractor::new(
            r#"<x:xmpmeta xmlns:x="adobe:ns:meta/"><rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"><rdf:Description rdf:about="" xmlns:ns="ns:myName/" /></rdf:RDF></x:xmpmeta>"#,
        )
        .expect("`xmltree` should parse the XML correctly");

        let meta = xmp.extract();

        // only the description itself shows up
        assert_eq!(meta.len(), 1);
        assert_eq!(meta.get("rdf", "Description"), Some(&XmpValue::Scalar(None)));
    }

    /// No descriptions means no metadata, not an error.
    #[test]
    fn rdf_without_descriptions_is_empty() {
        crate::util::logger();

        let xmp = XmpExtractor::new(
            r#"<x:xmpmeta xmlns:x="adobe:ns:meta/"><rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"/></x:xmpmeta>"#,
        )
        .expect("`xmltree` should parse the XML correctly");

        assert!(xmp.extract().is_empty());
    }

    /// The `rdf:RDF` element must be a child of the root. Being the root
    /// doesn't count.
    #[test]
    fn rdf_must_be_under_the_root() {
        crate::util::logger();

        let err = XmpExtractor::new(
            r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"><rdf:Description/></rdf:RDF>"#,
        )
        .expect_err("root `rdf:RDF` shouldn't be found");
        assert!(matches!(err, XmpError::NoRdfElement));

        // and it must have the RDF namespace
        let err = XmpExtractor::new(
            r#"<x:xmpmeta xmlns:x="adobe:ns:meta/"><RDF><Description/></RDF></x:xmpmeta>"#,
        )
        .expect_err("`RDF` without a namespace shouldn't be found");
        assert!(matches!(err, XmpError::NoRdfElement));
    }

    #[test]
    fn malformed_xml_is_an_error() {
        crate::util::logger();

        let err = XmpExtractor::new(
            r#"<x:xmpmeta xmlns:x="adobe:ns:meta/"><rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">"#,
        )
        .expect_err("unclosed tags aren't XML");
        assert!(matches!(err, XmpError::XmlParseError(_)));
        assert!(core::error::Error::source(&err).is_some());
    }

    #[test]
    fn bytes_must_be_utf8() {
        crate::util::logger();

        let err = XmpExtractor::from_bytes(&[0x3c, 0xff, 0xfe, 0x3e])
            .expect_err("invalid UTF-8 should be rejected");
        assert!(matches!(err, XmpError::NotUtf8));

        let xmp = XmpExtractor::from_bytes(
            br#"<x:xmpmeta xmlns:x="adobe:ns:meta/"><rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"><rdf:Description xmlns:pdf="http://ns.adobe.com/pdf/1.3/"><pdf:Producer>pdfTeX</pdf:Producer></rdf:Description></rdf:RDF></x:xmpmeta>"#,
        )
        .expect("valid UTF-8 XMP should parse");
        assert_eq!(
            xmp.extract().get_by_key(&NamespaceKey::Alias("pdf"), "Producer"),
            Some(&XmpValue::Scalar(Some("pdfTeX".into())))
        );
    }

    /// Descriptions nested inside properties aren't top-level descriptions,
    /// but their contents are still walked as part of the outer one.
    #[test]
    fn nested_descriptions_are_walked() {
        crate::util::logger();

        let xmp = XmpExtractor::new(
            r#"<x:xmpmeta xmlns:x="adobe:ns:meta/"><rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"><rdf:Description xmlns:ns="urn:ns"><ns:Outer><rdf:Description><ns:Inner>deep</ns:Inner></rdf:Description></ns:Outer></rdf:Description></rdf:RDF></x:xmpmeta>"#,
        )
        .expect("`xmltree` should parse the XML correctly");

        let meta = xmp.extract();
        assert_eq!(meta.get("urn:ns", "Outer"), Some(&XmpValue::Scalar(None)));
        assert_eq!(
            meta.get("urn:ns", "Inner"),
            Some(&XmpValue::Scalar(Some("deep".into())))
        );
    }
}
