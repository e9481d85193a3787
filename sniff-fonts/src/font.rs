//! A single font: sfnt header plus table directory

use std::collections::BTreeMap;
use std::io::{Read, Seek};

use log::warn;
use sniff_types::{Tag, CFF_SFNT_VERSION};

use crate::error::ReadError;
use crate::reader::FontReader;
use crate::tables::name::{self, Name};

/// One entry in a font's table directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableRecord {
    tag: Tag,
    checksum: u32,
    offset: u32,
    length: u32,
}

impl TableRecord {
    fn read<R: Read + Seek>(reader: &mut FontReader<R>) -> Result<TableRecord, ReadError> {
        Ok(TableRecord {
            tag: Tag::from_u32(reader.read_u32()?),
            checksum: reader.read_u32()?,
            offset: reader.read_u32()?,
            length: reader.read_u32()?,
        })
    }

    /// The table's tag.
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// The table's checksum, as stored; it is never verified here.
    pub fn checksum(&self) -> u32 {
        self.checksum
    }

    /// Offset of the table from the beginning of the file.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Length of the table in bytes.
    pub fn length(&self) -> u32 {
        self.length
    }
}

/// A single font: the sfnt header fields, the table directory, and any
/// tables that were decoded.
///
/// Built once by a parse and immutable afterwards.
#[derive(Clone, Debug)]
pub struct Font {
    container_offset: u64,
    sfnt_version: u32,
    num_tables: u16,
    search_range: u16,
    entry_selector: u16,
    range_shift: u16,
    tables: BTreeMap<Tag, TableRecord>,
    name: Option<Name>,
}

impl Font {
    /// Read the font whose directory starts at `container_offset` (0 for a
    /// standalone font file), then decode the tables named in `tags`.
    pub(crate) fn read<R: Read + Seek>(
        reader: &mut FontReader<R>,
        container_offset: u64,
        tags: &[Tag],
    ) -> Result<Font, ReadError> {
        reader.seek(container_offset)?;
        let sfnt_version = reader.read_u32()?;
        let num_tables = reader.read_u16()?;
        let search_range = reader.read_u16()?;
        let entry_selector = reader.read_u16()?;
        let range_shift = reader.read_u16()?;

        let mut tables = BTreeMap::new();
        for _ in 0..num_tables {
            let record = TableRecord::read(reader)?;
            // Tags are unique in a well-formed directory; on a repeat the
            // later entry wins, matching a plain map insert.
            if tables.insert(record.tag(), record).is_some() {
                warn!("duplicate table tag {} in directory, keeping the later entry", record.tag());
            }
        }

        let mut font = Font {
            container_offset,
            sfnt_version,
            num_tables,
            search_range,
            entry_selector,
            range_shift,
            tables,
            name: None,
        };
        font.decode_tables(reader, tags)?;
        Ok(font)
    }

    /// Decode each requested tag that is present in the directory and that
    /// we have a decoder for; other tags are silently ignored.
    fn decode_tables<R: Read + Seek>(
        &mut self,
        reader: &mut FontReader<R>,
        tags: &[Tag],
    ) -> Result<(), ReadError> {
        for tag in tags {
            if *tag == name::TAG {
                if let Some(record) = self.tables.get(tag) {
                    self.name = Some(Name::read(reader, record.offset() as u64)?);
                }
            }
        }
        Ok(())
    }

    /// The font's start offset inside its container file; 0 for a
    /// standalone font.
    pub fn container_offset(&self) -> u64 {
        self.container_offset
    }

    /// The sfnt version field.
    pub fn sfnt_version(&self) -> u32 {
        self.sfnt_version
    }

    /// The number of tables claimed by the header. For malformed fonts
    /// with repeated tags this can exceed the directory size.
    pub fn num_tables(&self) -> u16 {
        self.num_tables
    }

    pub fn search_range(&self) -> u16 {
        self.search_range
    }

    pub fn entry_selector(&self) -> u16 {
        self.entry_selector
    }

    pub fn range_shift(&self) -> u16 {
        self.range_shift
    }

    /// `true` if the font holds CFF outlines ("OTTO" flavor).
    pub fn contains_cff(&self) -> bool {
        self.sfnt_version == CFF_SFNT_VERSION
    }

    /// `true` if the directory has an entry for `tag`.
    pub fn contains_table(&self, tag: Tag) -> bool {
        self.tables.contains_key(&tag)
    }

    /// The directory entry for `tag`, if present.
    pub fn table_record(&self, tag: Tag) -> Option<&TableRecord> {
        self.tables.get(&tag)
    }

    /// All directory entries, ordered by tag.
    pub fn table_records(&self) -> impl Iterator<Item = &TableRecord> {
        self.tables.values()
    }

    /// The decoded naming table, if it was requested and present.
    pub fn name(&self) -> Option<&Name> {
        self.name.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::BeBuffer;
    use sniff_types::TT_SFNT_VERSION;

    fn directory(records: &[(&[u8; 4], u32, u32, u32)]) -> Vec<u8> {
        let mut buf = BeBuffer::new()
            .u32(TT_SFNT_VERSION)
            .u16(records.len() as u16)
            .u16(16) // search range
            .u16(0) // entry selector
            .u16(0); // range shift
        for (tag, checksum, offset, length) in records {
            buf = buf.tag(tag).u32(*checksum).u32(*offset).u32(*length);
        }
        buf.to_vec()
    }

    fn read_font(data: &[u8]) -> Font {
        let mut reader = crate::FontReader::from_bytes(data);
        Font::read(&mut reader, 0, &[]).unwrap()
    }

    #[test]
    fn directory_lookup() {
        let data = directory(&[
            (b"glyf", 0xAAAA, 120, 64),
            (b"head", 0x1234, 60, 54),
            (b"maxp", 0x5678, 200, 32),
        ]);
        let font = read_font(&data);

        assert_eq!(font.sfnt_version(), TT_SFNT_VERSION);
        assert!(!font.contains_cff());
        assert_eq!(font.num_tables(), 3);
        assert_eq!(font.table_records().count(), 3);
        for tag in [b"glyf", b"head", b"maxp"] {
            assert!(font.contains_table(Tag::new(tag)));
        }
        assert!(!font.contains_table(Tag::new(b"loca")));

        let head = font.table_record(Tag::new(b"head")).unwrap();
        assert_eq!(head.checksum(), 0x1234);
        assert_eq!(head.offset(), 60);
        assert_eq!(head.length(), 54);
        assert!(font.name().is_none());
    }

    #[test]
    fn duplicate_tag_keeps_later_entry() {
        let data = directory(&[(b"head", 1, 100, 10), (b"head", 2, 200, 20)]);
        let font = read_font(&data);

        // the header still claims two tables, the map holds one
        assert_eq!(font.num_tables(), 2);
        assert_eq!(font.table_records().count(), 1);
        let head = font.table_record(Tag::new(b"head")).unwrap();
        assert_eq!(head.checksum(), 2);
        assert_eq!(head.offset(), 200);
    }

    #[test]
    fn truncated_directory_is_an_error() {
        let data = directory(&[(b"head", 1, 100, 10)]);
        let mut reader = crate::FontReader::from_bytes(&data[..20]);
        assert!(Font::read(&mut reader, 0, &[]).is_err());
    }
}
