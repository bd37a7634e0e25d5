//! Types for XMP metadata extracted by `pdfx_xmp`.
//!
//! This is the "data" side of things. It knows nothing about XML: it only
//! holds the namespace table and the shapes that extracted values come in.

#![forbid(unsafe_code)]

pub mod key;
pub mod metadata;
pub mod namespaces;
pub mod value;

#[cfg(feature = "serde")]
mod serialize;

pub use key::NamespaceKey;
pub use metadata::{TagMap, XmpMetadata};
pub use value::XmpValue;
