//! Replica metadata for a single bucket
//!
//! A [`BucketInfo`] is a snapshot: it is built once by the storage engine (or
//! decoded from a protocol message), compared against other replicas' snapshots
//! and replaced wholesale when the bucket changes. Nothing mutates it in place.

use crate::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use storage_xml::{XmlAttribute, XmlAttributeFlags, XmlOutputStream, XmlSerializable};
use tracing::instrument;

/// Checksum, counts, sizes and serving state of one bucket replica
///
/// Equality ignores `last_modified`: two snapshots with the same content and
/// serving state are equal no matter when they were taken.
#[derive(Clone, Copy, Debug, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BucketInfo {
    checksum: u32,
    doc_count: u32,
    total_doc_size: u32,
    meta_count: u32,
    used_file_size: u32,
    ready: bool,
    active: bool,
    last_modified: Timestamp,
}

impl Default for BucketInfo {
    /// Unknown bucket. Sizes are 1 so this never looks like a real empty bucket.
    fn default() -> Self {
        Self {
            checksum: 0,
            doc_count: 0,
            total_doc_size: 1,
            meta_count: 0,
            used_file_size: 1,
            ready: false,
            active: false,
            last_modified: Timestamp::ZERO,
        }
    }
}

impl BucketInfo {
    /// Invalid bucket info with sentinel sizes
    pub fn new() -> Self {
        Self::default()
    }

    /// Bucket info where meta entries and disk usage equal the document stats
    pub fn with_counts(checksum: u32, doc_count: u32, total_doc_size: u32) -> Self {
        Self::with_meta(checksum, doc_count, total_doc_size, doc_count, total_doc_size)
    }

    /// Bucket info with explicit meta entry count and disk usage
    pub fn with_meta(
        checksum: u32,
        doc_count: u32,
        total_doc_size: u32,
        meta_count: u32,
        used_file_size: u32,
    ) -> Self {
        Self {
            checksum,
            doc_count,
            total_doc_size,
            meta_count,
            used_file_size,
            ready: false,
            active: false,
            last_modified: Timestamp::ZERO,
        }
    }

    /// Start a builder with no fields set
    pub fn builder() -> BucketInfoBuilder {
        BucketInfoBuilder::default()
    }

    /// Set the ready flag
    pub fn with_ready(mut self, ready: bool) -> Self {
        self.ready = ready;
        self
    }

    /// Set the active flag
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Set the last modification time
    pub fn with_last_modified(mut self, last_modified: impl Into<Timestamp>) -> Self {
        self.last_modified = last_modified.into();
        self
    }

    pub fn checksum(&self) -> u32 {
        self.checksum
    }

    pub fn doc_count(&self) -> u32 {
        self.doc_count
    }

    pub fn total_doc_size(&self) -> u32 {
        self.total_doc_size
    }

    pub fn meta_count(&self) -> u32 {
        self.meta_count
    }

    pub fn used_file_size(&self) -> u32 {
        self.used_file_size
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn last_modified(&self) -> Timestamp {
        self.last_modified
    }

    /// A zero checksum means the content is unknown
    pub fn valid(&self) -> bool {
        self.checksum != 0
    }

    /// Known bucket with neither documents nor meta entries
    pub fn empty(&self) -> bool {
        self.valid() && self.doc_count == 0 && self.meta_count == 0
    }

    /// Compare only the document set (checksum, count, logical size)
    pub fn equal_document_info(&self, other: &BucketInfo) -> bool {
        self.checksum == other.checksum
            && self.doc_count == other.doc_count
            && self.total_doc_size == other.total_doc_size
    }

    /// Write the single-line diagnostic form
    pub fn print<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        out.write_str("BucketInfo(")?;
        if self.valid() {
            write!(
                out,
                "crc 0x{:x}, docCount {}, totDocSize {}",
                self.checksum, self.doc_count, self.total_doc_size
            )?;
            if self.total_doc_size != self.used_file_size {
                write!(
                    out,
                    ", metaCount {}, usedFileSize {}",
                    self.meta_count, self.used_file_size
                )?;
            }
            write!(out, ", ready {}, active {}", self.ready, self.active)?;
            if !self.last_modified.is_zero() {
                write!(out, ", last modified {}", self.last_modified)?;
            }
        } else {
            out.write_str("invalid")?;
        }
        out.write_str(")")
    }

    /// All fields as ordered XML attributes, whether valid or not
    pub fn xml_attributes(&self) -> [XmlAttribute; 8] {
        [
            XmlAttribute::with_flags("checksum", u64::from(self.checksum), XmlAttributeFlags::HEX),
            XmlAttribute::new("docs", self.doc_count),
            XmlAttribute::new("size", self.total_doc_size),
            XmlAttribute::new("metacount", self.meta_count),
            XmlAttribute::new("usedfilesize", self.used_file_size),
            XmlAttribute::flag("ready", self.ready),
            XmlAttribute::flag("active", self.active),
            XmlAttribute::new("lastmodified", self.last_modified),
        ]
    }
}

impl PartialEq for BucketInfo {
    fn eq(&self, other: &Self) -> bool {
        self.checksum == other.checksum
            && self.doc_count == other.doc_count
            && self.total_doc_size == other.total_doc_size
            && self.meta_count == other.meta_count
            && self.used_file_size == other.used_file_size
            && self.ready == other.ready
            && self.active == other.active
    }
}

// Must agree with PartialEq, so last_modified stays out.
impl Hash for BucketInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.checksum.hash(state);
        self.doc_count.hash(state);
        self.total_doc_size.hash(state);
        self.meta_count.hash(state);
        self.used_file_size.hash(state);
        self.ready.hash(state);
        self.active.hash(state);
    }
}

impl fmt::Display for BucketInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print(f)
    }
}

impl XmlSerializable for BucketInfo {
    #[instrument(level = "trace", skip_all)]
    fn print_xml<W: std::io::Write>(&self, xos: &mut XmlOutputStream<W>) -> storage_xml::Result<()> {
        xos.add_attributes(self.xml_attributes())?;
        Ok(())
    }
}

/// Builder for [`BucketInfo`]
///
/// Unset meta count and disk usage fall back to the document count and
/// logical size, like [`BucketInfo::with_counts`]. With no counts set at all
/// the result is [`BucketInfo::default`].
#[derive(Clone, Debug, Default)]
pub struct BucketInfoBuilder {
    checksum: Option<u32>,
    doc_count: Option<u32>,
    total_doc_size: Option<u32>,
    meta_count: Option<u32>,
    used_file_size: Option<u32>,
    ready: bool,
    active: bool,
    last_modified: Timestamp,
}

impl BucketInfoBuilder {
    pub fn checksum(mut self, checksum: u32) -> Self {
        self.checksum = Some(checksum);
        self
    }

    pub fn doc_count(mut self, doc_count: u32) -> Self {
        self.doc_count = Some(doc_count);
        self
    }

    pub fn total_doc_size(mut self, total_doc_size: u32) -> Self {
        self.total_doc_size = Some(total_doc_size);
        self
    }

    pub fn meta_count(mut self, meta_count: u32) -> Self {
        self.meta_count = Some(meta_count);
        self
    }

    pub fn used_file_size(mut self, used_file_size: u32) -> Self {
        self.used_file_size = Some(used_file_size);
        self
    }

    pub fn ready(mut self, ready: bool) -> Self {
        self.ready = ready;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn last_modified(mut self, last_modified: impl Into<Timestamp>) -> Self {
        self.last_modified = last_modified.into();
        self
    }

    pub fn build(self) -> BucketInfo {
        let counts_given = self.checksum.is_some()
            || self.doc_count.is_some()
            || self.total_doc_size.is_some()
            || self.meta_count.is_some()
            || self.used_file_size.is_some();

        let base = if counts_given {
            let doc_count = self.doc_count.unwrap_or(0);
            let total_doc_size = self.total_doc_size.unwrap_or(0);
            BucketInfo::with_meta(
                self.checksum.unwrap_or(0),
                doc_count,
                total_doc_size,
                self.meta_count.unwrap_or(doc_count),
                self.used_file_size.unwrap_or(total_doc_size),
            )
        } else {
            BucketInfo::default()
        };

        base.with_ready(self.ready)
            .with_active(self.active)
            .with_last_modified(self.last_modified)
    }
}
