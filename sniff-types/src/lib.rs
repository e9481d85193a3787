//! Common scalar data types used in font files.
//!
//! These are the value types that appear in the binary layout of sfnt
//! containers: 4-byte table tags, fixed-point numbers, 24-bit integers, and
//! the packed version pairs used by collection headers.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod fixed;
mod name_id;
mod tag;
mod uint24;
mod version;

pub use fixed::{F2Dot14, Fixed};
pub use name_id::NameId;
pub use tag::{InvalidTag, Tag};
pub use uint24::Uint24;
pub use version::MajorMinor;

/// The header tag for a font collection file.
pub const TTC_HEADER_TAG: Tag = Tag::new(b"ttcf");

/// The tag of the digital signature table, optionally referenced by
/// version 2.0 collection headers.
pub const DSIG_TAG: Tag = Tag::new(b"DSIG");

/// The sfnt version for fonts containing TrueType outlines.
pub const TT_SFNT_VERSION: u32 = 0x00010000;

/// The sfnt version for fonts containing CFF outlines ("OTTO").
pub const CFF_SFNT_VERSION: u32 = 0x4F54544F;
