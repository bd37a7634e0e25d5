//! # `pdfx_xmp`
//!
//! A library to pull XMP metadata out of PDFs (and anything else that embeds
//! an XMP packet) as plain, namespaced key-value maps.
//!
//! ## Usage
//!
//! ```
//! let meta = pdfx_xmp::xmp_to_map(
//!     r#"<x:xmpmeta xmlns:x="adobe:ns:meta/">
//!         <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
//!             <rdf:Description xmlns:dc="http://purl.org/dc/elements/1.1/">
//!                 <dc:format>application/pdf</dc:format>
//!             </rdf:Description>
//!         </rdf:RDF>
//!     </x:xmpmeta>"#,
//! )
//! .expect("this is valid XMP");
//!
//! let format = meta.get("dc", "format").and_then(|v| v.as_scalar());
//! assert_eq!(format, Some("application/pdf"));
//! ```
//!
//! Well-known namespaces are named by short aliases (`dc`, `pdf`, `xap`,
//! ...). Everything else keeps its full URI.
//!
//! Finding the XMP packet inside a PDF is up to you - this crate starts from
//! the packet's text.
//!
//! ## Features
//!
//! - `serde`: implements `serde::Serialize` for the extracted metadata, so
//!   it can be dumped straight to JSON.
//!
//! ## License
//!
//! This project is dual-licensed under either the Apache License 2.0 or the MIT License at your option.

#![forbid(unsafe_code)]

use crate::xmp::{XmpExtractor, error::XmpError, types::XmpMetadata};

pub mod xmp;

/// Shorthand to parse an XMP string and extract all of its metadata.
///
/// This is the same as calling [`XmpExtractor::new`], then
/// [`XmpExtractor::extract`].
pub fn xmp_to_map(raw_xml: &str) -> Result<XmpMetadata, XmpError> {
    XmpExtractor::new(raw_xml).map(|xmp| xmp.extract())
}

/// Internal utility methods.
pub(crate) mod util {
    /// Helper function to initialize the logger for testing.
    #[cfg(test)]
    pub fn logger() {
        _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::max())
            .format_file(true)
            .format_line_number(true)
            .try_init();
    }
}
