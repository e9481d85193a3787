//! Font collections ("ttcf" files)

use std::io::{Read, Seek};

use sniff_types::{MajorMinor, Tag, DSIG_TAG};

use crate::error::ReadError;
use crate::font::Font;
use crate::reader::FontReader;

/// The location of a digital signature named by a version 2.0 collection
/// header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignatureRecord {
    length: u32,
    offset: u32,
}

impl SignatureRecord {
    /// Length of the signature table in bytes.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Offset of the signature table from the beginning of the file.
    pub fn offset(&self) -> u32 {
        self.offset
    }
}

/// A font collection: the ttc header and the member fonts, in file order.
#[derive(Clone, Debug)]
pub struct FontCollection {
    ttc_tag: Tag,
    version: MajorMinor,
    num_fonts: u32,
    directory_offsets: Vec<u32>,
    signature: Option<SignatureRecord>,
    fonts: Vec<Font>,
}

impl FontCollection {
    /// Read a collection from the start of the source, decoding the tables
    /// named in `tags` for every member font.
    pub(crate) fn read<R: Read + Seek>(
        reader: &mut FontReader<R>,
        tags: &[Tag],
    ) -> Result<FontCollection, ReadError> {
        reader.seek(0)?;
        let ttc_tag = Tag::from_u32(reader.read_u32()?);
        let version = MajorMinor::new(reader.read_u16()?, reader.read_u16()?);
        let num_fonts = reader.read_u32()?;

        // num_fonts is untrusted; let the vec grow as the reads succeed
        let mut directory_offsets = Vec::new();
        for _ in 0..num_fonts {
            directory_offsets.push(reader.read_u32()?);
        }

        let signature = if version == MajorMinor::VERSION_2_0 {
            Self::read_signature(reader)?
        } else {
            None
        };

        // A read failure in any member aborts the whole collection; the
        // dispatcher then reports the file invalid.
        let mut fonts = Vec::new();
        for offset in &directory_offsets {
            fonts.push(Font::read(reader, *offset as u64, tags)?);
        }

        Ok(FontCollection {
            ttc_tag,
            version,
            num_fonts,
            directory_offsets,
            signature,
            fonts,
        })
    }

    /// The trailing signature fields of a version 2.0 header. The tag slot
    /// is read speculatively: when it does not hold `DSIG` the bytes are
    /// simply not interpreted (nothing else follows in the header, so no
    /// rewind is needed).
    fn read_signature<R: Read + Seek>(
        reader: &mut FontReader<R>,
    ) -> Result<Option<SignatureRecord>, ReadError> {
        if Tag::from_u32(reader.read_u32()?) != DSIG_TAG {
            return Ok(None);
        }
        let length = reader.read_u32()?;
        let offset = reader.read_u32()?;
        Ok((length > 0 && offset > 0).then_some(SignatureRecord { length, offset }))
    }

    /// The header tag, "ttcf".
    pub fn ttc_tag(&self) -> Tag {
        self.ttc_tag
    }

    /// The collection header version.
    pub fn version(&self) -> MajorMinor {
        self.version
    }

    /// The number of fonts in the collection.
    pub fn num_fonts(&self) -> u32 {
        self.num_fonts
    }

    /// The directory-start offset of each member font.
    pub fn directory_offsets(&self) -> &[u32] {
        &self.directory_offsets
    }

    /// The digital-signature descriptor, if the header carries a usable
    /// one (version 2.0, `DSIG` tag, positive length and offset).
    pub fn signature(&self) -> Option<SignatureRecord> {
        self.signature
    }

    /// The member fonts, in index order.
    pub fn fonts(&self) -> &[Font] {
        &self.fonts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{ttc_header, BeBuffer};
    use sniff_types::{CFF_SFNT_VERSION, TT_SFNT_VERSION};

    fn read_collection(data: &[u8]) -> Result<FontCollection, ReadError> {
        let mut reader = crate::FontReader::from_bytes(data);
        FontCollection::read(&mut reader, &[])
    }

    // a bare directory with zero tables is a complete member font here
    fn empty_font(buf: BeBuffer, version: u32) -> BeBuffer {
        buf.u32(version).u16(0).u16(0).u16(0).u16(0)
    }

    #[test]
    fn v1_collection() {
        // two empty member fonts right after the header
        let data = empty_font(
            empty_font(ttc_header(1, 0, &[20, 32], None), TT_SFNT_VERSION),
            CFF_SFNT_VERSION,
        )
        .to_vec();
        let ttc = read_collection(&data).unwrap();

        assert_eq!(ttc.ttc_tag(), Tag::new(b"ttcf"));
        assert_eq!(ttc.version(), MajorMinor::VERSION_1_0);
        assert_eq!(ttc.num_fonts(), 2);
        assert_eq!(ttc.directory_offsets(), [20, 32]);
        assert_eq!(ttc.signature(), None);
        assert_eq!(ttc.fonts().len(), 2);
        assert_eq!(ttc.fonts()[0].container_offset(), 20);
        assert!(!ttc.fonts()[0].contains_cff());
        assert_eq!(ttc.fonts()[1].container_offset(), 32);
        assert!(ttc.fonts()[1].contains_cff());
    }

    #[test]
    fn v2_with_signature() {
        let data = empty_font(
            ttc_header(2, 0, &[28], Some((b"DSIG", 64, 1000))),
            TT_SFNT_VERSION,
        )
        .to_vec();
        let ttc = read_collection(&data).unwrap();

        let signature = ttc.signature().unwrap();
        assert_eq!(signature.length(), 64);
        assert_eq!(signature.offset(), 1000);
    }

    #[test]
    fn v2_zero_fields_mean_no_signature() {
        for (length, offset) in [(0u32, 1000u32), (64, 0), (0, 0)] {
            let data = empty_font(
                ttc_header(2, 0, &[28], Some((b"DSIG", length, offset))),
                TT_SFNT_VERSION,
            )
            .to_vec();
            assert_eq!(read_collection(&data).unwrap().signature(), None);
        }
    }

    #[test]
    fn v2_other_trailing_tag_is_ignored() {
        let data = empty_font(
            ttc_header(2, 0, &[28], Some((b"XXXX", 64, 1000))),
            TT_SFNT_VERSION,
        )
        .to_vec();
        assert_eq!(read_collection(&data).unwrap().signature(), None);
    }

    #[test]
    fn member_failure_aborts_the_collection() {
        // second offset points past the end of the data
        let data = empty_font(ttc_header(1, 0, &[20, 4000], None), TT_SFNT_VERSION).to_vec();
        assert!(read_collection(&data).is_err());
    }
}
