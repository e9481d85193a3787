//! Reading OpenType fonts and font collections from untrusted files.
//!
//! This crate parses the sfnt container format — the signature, the table
//! directory, and (on request) individual tables — through a seekable
//! reader over an open file or an in-memory buffer. It decodes only the
//! tables a caller asks for; currently the naming table has a decoder.
//!
//! The parser is built for scanning directories of files that may not be
//! fonts at all: a file that cannot be used is reported as
//! [`InvalidFont`], a normal outcome, and no read error ever escapes the
//! top-level entry point.
//!
//! # Example
//!
//! ```no_run
//! use sniff_fonts::{tables::name, FontFile, FontReader};
//!
//! let mut reader = FontReader::open("some-font.ttf")?;
//! let file = FontFile::read(&mut reader, &[name::TAG])?;
//! for font in file.fonts() {
//!     if let Some(name) = font.name() {
//!         for record in name.name_records() {
//!             println!("{:?}: {:?}", record.name_id(), record.decode());
//!         }
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod collection;
mod error;
mod font;
mod reader;
pub mod tables;

#[cfg(test)]
mod test_helpers;

pub use collection::{FontCollection, SignatureRecord};
pub use error::{InvalidFont, ReadError};
pub use font::{Font, TableRecord};
pub use reader::FontReader;

/// Public re-export of the scalar types crate.
pub extern crate sniff_types as types;

use std::io::{Read, Seek};

use log::debug;
use types::{Tag, CFF_SFNT_VERSION, TTC_HEADER_TAG, TT_SFNT_VERSION};

/// The parsed content of a font file.
#[derive(Clone, Debug)]
pub enum FontFile {
    /// A single font.
    Font(Font),
    /// A collection of fonts.
    Collection(FontCollection),
}

impl FontFile {
    /// Parse a font file, decoding the tables named in `tags` for every
    /// contained font. Requested tags without a decoder are ignored.
    ///
    /// Every failure — unknown signature, truncation, i/o trouble,
    /// anywhere in directory or table parsing — comes back as
    /// [`InvalidFont`]; the underlying cause is logged and attached as the
    /// error source, but the contract is simply "usable or not".
    pub fn read<R: Read + Seek>(
        reader: &mut FontReader<R>,
        tags: &[Tag],
    ) -> Result<FontFile, InvalidFont> {
        Self::read_inner(reader, tags).map_err(|cause| {
            debug!("rejecting input: {cause}");
            InvalidFont::new(cause)
        })
    }

    fn read_inner<R: Read + Seek>(
        reader: &mut FontReader<R>,
        tags: &[Tag],
    ) -> Result<FontFile, ReadError> {
        reader.seek(0)?;
        let signature = reader.read_u32()?;
        match signature {
            TT_SFNT_VERSION | CFF_SFNT_VERSION => {
                Font::read(reader, 0, tags).map(FontFile::Font)
            }
            sig if sig == TTC_HEADER_TAG.to_u32() => {
                FontCollection::read(reader, tags).map(FontFile::Collection)
            }
            other => Err(ReadError::UnknownSignature(other)),
        }
    }

    /// The fonts contained in the file, in order; a single font yields one
    /// item.
    pub fn fonts(&self) -> impl Iterator<Item = &Font> {
        let (single, members) = match self {
            FontFile::Font(font) => (Some(font), None),
            FontFile::Collection(collection) => (None, Some(collection.fonts())),
        };
        single.into_iter().chain(members.into_iter().flatten())
    }
}
