//! # Storage XML
//!
//! Structured attribute writer used by storage status pages and tooling.
//!
//! This crate provides:
//! - **Attributes**: Ordered `name="value"` pairs with hex/decimal formatting flags
//! - **Output stream**: Nested element writer built on `quick-xml`
//! - **Configuration**: Indentation and declaration settings
//!
//! ## Example
//!
//! ```rust
//! use storage_xml::{XmlAttribute, XmlAttributeFlags, XmlOutputStream};
//!
//! let mut xos = XmlOutputStream::new(Vec::new());
//! xos.open_tag("bucket")?
//!     .add_attribute(XmlAttribute::with_flags("checksum", 0x2b, XmlAttributeFlags::HEX))?
//!     .close_tag()?;
//! let xml = String::from_utf8(xos.finish()?)?;
//! assert_eq!(xml, r#"<bucket checksum="0x2b"/>"#);
//! # Ok::<(), storage_xml::XmlError>(())
//! ```

pub mod attribute;
pub mod config;
pub mod error;
pub mod stream;

pub use attribute::{XmlAttribute, XmlAttributeFlags};
pub use config::XmlConfig;
pub use error::{Result, XmlError};
pub use stream::{to_xml_string, XmlOutputStream};

/// Trait for values that describe themselves as XML attributes
pub trait XmlSerializable {
    /// Write this value's attributes into the currently open tag
    fn print_xml<W: std::io::Write>(&self, xos: &mut XmlOutputStream<W>) -> Result<()>;
}
