use std::sync::Arc;

/// This is an error that happened while we were reading XMP.
///
/// Once an [`XmpExtractor`](crate::xmp::XmpExtractor) exists, extraction
/// itself can't fail, so these all come from construction.
#[derive(Clone, Debug)]
pub enum XmpError {
    /// `xmltree` failed to parse the XML. It's probably malformed.
    XmlParseError(
        // note: `Arc` allows us to impl `Clone`
        Arc<xmltree::ParseError>,
    ),

    /// Initial XML scanning failed - no `rdf:RDF` element was found directly
    /// under the document's root element.
    NoRdfElement,

    /// The XMP was given as bytes, but they weren't UTF-8.
    NotUtf8,
}

impl core::fmt::Display for XmpError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            XmpError::XmlParseError(e) => {
                write!(f, "Encountered error while parsing XML. err: {}", e)
            }

            XmpError::NoRdfElement => f.write_str(
                "The XML is missing the `rdf:RDF` element, which is required \
                    as a child of the root element.",
            ),

            XmpError::NotUtf8 => f.write_str("The XMP packet was not valid UTF-8."),
        }
    }
}

impl core::error::Error for XmpError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            XmpError::XmlParseError(e) => Some(e.as_ref()),
            XmpError::NoRdfElement | XmpError::NotUtf8 => None,
        }
    }
}

impl From<xmltree::ParseError> for XmpError {
    fn from(value: xmltree::ParseError) -> Self {
        XmpError::XmlParseError(value.into())
    }
}
