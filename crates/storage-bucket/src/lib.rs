//! # Storage Bucket
//!
//! Replica metadata exchanged between storage nodes and the distributor.
//!
//! This crate provides:
//! - **BucketInfo**: Checksum, document/meta counts, size accounting and
//!   ready/active state for one bucket replica
//! - **Timestamp**: Microsecond modification times
//! - **Rendering**: One-line diagnostic text and ordered XML attributes
//!
//! ## Example
//!
//! ```rust
//! use storage_bucket::{BucketInfo, Timestamp};
//!
//! let info = BucketInfo::with_meta(0x2b, 3, 50, 4, 60)
//!     .with_ready(true)
//!     .with_last_modified(Timestamp::new(77));
//!
//! assert!(info.valid());
//! assert_eq!(
//!     info.to_string(),
//!     "BucketInfo(crc 0x2b, docCount 3, totDocSize 50, metaCount 4, \
//!      usedFileSize 60, ready true, active false, last modified 77)"
//! );
//! ```

pub mod bucket_info;
pub mod timestamp;

pub use bucket_info::{BucketInfo, BucketInfoBuilder};
pub use timestamp::Timestamp;
