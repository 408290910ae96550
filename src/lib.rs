//! # Storage API
//!
//! Bucket replica metadata and its renderings.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │   Distributor / storage node protocol   │
//! ├─────────────────────────────────────────┤
//! │     storage-bucket (BucketInfo)         │
//! ├─────────────────────────────────────────┤
//! │     storage-xml (attribute writer)      │
//! └─────────────────────────────────────────┘
//! ```

pub use storage_bucket::{BucketInfo, BucketInfoBuilder, Timestamp};
pub use storage_xml::{
    to_xml_string, XmlAttribute, XmlAttributeFlags, XmlConfig, XmlError, XmlOutputStream,
    XmlSerializable,
};

use tracing::debug;

/// Element name used for bucket info in status pages
pub const BUCKET_INFO_TAG: &str = "bucketinfo";

/// Render `info` as a standalone `<bucketinfo .../>` element
pub fn bucket_info_xml(info: &BucketInfo, config: &XmlConfig) -> storage_xml::Result<String> {
    let xml = to_xml_string(BUCKET_INFO_TAG, config, |xos| info.print_xml(xos))?;
    debug!(valid = info.valid(), bytes = xml.len(), "rendered bucket info");
    Ok(xml)
}
