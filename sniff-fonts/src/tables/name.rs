//! The [name (Naming)](https://docs.microsoft.com/en-us/typography/opentype/spec/name) table

use std::io::{Read, Seek};

use sniff_types::{NameId, Tag};

use crate::error::ReadError;
use crate::reader::FontReader;

/// The naming table tag.
pub const TAG: Tag = Tag::new(b"name");

/// The decoded naming table (format 0 or 1).
///
/// Format 1 adds language-tag records between the name records and the
/// string storage; for format 0 the language-tag lists are always empty.
#[derive(Clone, Debug)]
pub struct Name {
    format: u16,
    count: u16,
    storage_offset: u16,
    name_records: Vec<NameRecord>,
    lang_tag_records: Vec<LangTagRecord>,
    lang_tags: Vec<String>,
}

/// One entry in the naming table.
///
/// The string payload is captured verbatim; which charset the bytes use is
/// determined by the platform and encoding ids, so interpretation is left
/// to the consumer (see [`NameRecord::decode`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameRecord {
    platform_id: u16,
    encoding_id: u16,
    language_id: u16,
    name_id: NameId,
    length: u16,
    offset: u16,
    raw: Vec<u8>,
}

/// A format 1 language-tag record, paired positionally with an entry in
/// [`Name::lang_tags`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LangTagRecord {
    length: u16,
    offset: u16,
}

impl Name {
    /// Decode the naming table that starts at `table_offset`.
    pub(crate) fn read<R: Read + Seek>(
        reader: &mut FontReader<R>,
        table_offset: u64,
    ) -> Result<Name, ReadError> {
        reader.seek(table_offset)?;
        let format = reader.read_u16()?;
        let count = reader.read_u16()?;
        let storage_offset = reader.read_u16()?;

        let mut name_records = Vec::with_capacity(count as usize);
        for _ in 0..count {
            name_records.push(NameRecord::read(reader, table_offset)?);
        }

        let mut lang_tag_records = Vec::new();
        let mut lang_tags = Vec::new();
        // The format 1 extension sits between the name records and the
        // string storage; it is only there if the cursor has not already
        // reached the storage.
        if format == 1 && reader.position() < table_offset + storage_offset as u64 {
            let lang_tag_count = reader.read_u16()?;
            for _ in 0..lang_tag_count {
                let length = reader.read_u16()?;
                let offset = reader.read_u16()?;
                lang_tag_records.push(LangTagRecord { length, offset });
            }
            for record in &lang_tag_records {
                reader.seek(table_offset + record.offset as u64)?;
                lang_tags.push(reader.read_string(record.length as usize, Encoding::Utf16Be)?);
            }
        }

        Ok(Name {
            format,
            count,
            storage_offset,
            name_records,
            lang_tag_records,
            lang_tags,
        })
    }

    /// The table format (0 or 1).
    pub fn format(&self) -> u16 {
        self.format
    }

    /// The number of name records.
    pub fn count(&self) -> u16 {
        self.count
    }

    /// Offset from the start of the table to the string storage area.
    pub fn storage_offset(&self) -> u16 {
        self.storage_offset
    }

    /// The name records, in table order.
    pub fn name_records(&self) -> &[NameRecord] {
        &self.name_records
    }

    /// The format 1 language-tag records; empty for format 0.
    pub fn lang_tag_records(&self) -> &[LangTagRecord] {
        &self.lang_tag_records
    }

    /// The decoded language tags, paired positionally with
    /// [`lang_tag_records`][Self::lang_tag_records].
    pub fn lang_tags(&self) -> &[String] {
        &self.lang_tags
    }

    /// Decode the first entry for `name_id` that uses a known encoding.
    pub fn string(&self, name_id: NameId) -> Option<String> {
        self.name_records
            .iter()
            .filter(|record| record.name_id() == name_id)
            .find_map(|record| record.decode())
    }
}

impl NameRecord {
    fn read<R: Read + Seek>(
        reader: &mut FontReader<R>,
        table_offset: u64,
    ) -> Result<NameRecord, ReadError> {
        let platform_id = reader.read_u16()?;
        let encoding_id = reader.read_u16()?;
        let language_id = reader.read_u16()?;
        let name_id = NameId::new(reader.read_u16()?);
        let length = reader.read_u16()?;
        let offset = reader.read_u16()?;

        // Detour to the string payload, then restore the cursor so the
        // next record header reads from where this one ended.
        let resume = reader.position();
        reader.seek(table_offset + offset as u64)?;
        let mut raw = vec![0u8; length as usize];
        reader.read_exact(&mut raw)?;
        reader.seek(resume)?;

        Ok(NameRecord {
            platform_id,
            encoding_id,
            language_id,
            name_id,
            length,
            offset,
            raw,
        })
    }

    pub fn platform_id(&self) -> u16 {
        self.platform_id
    }

    pub fn encoding_id(&self) -> u16 {
        self.encoding_id
    }

    pub fn language_id(&self) -> u16 {
        self.language_id
    }

    pub fn name_id(&self) -> NameId {
        self.name_id
    }

    /// The payload length in bytes, as stored in the record.
    pub fn length(&self) -> u16 {
        self.length
    }

    /// The payload offset from the start of the table, as stored in the
    /// record.
    pub fn offset(&self) -> u16 {
        self.offset
    }

    /// The raw string payload, exactly as it appears in the file.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// The charset implied by this record's platform and encoding ids.
    pub fn encoding(&self) -> Encoding {
        Encoding::new(self.platform_id, self.encoding_id)
    }

    /// Decode the payload, or `None` if the charset is not one we know.
    pub fn decode(&self) -> Option<String> {
        match self.encoding() {
            Encoding::Unknown => None,
            encoding => Some(encoding.decode(&self.raw)),
        }
    }
}

impl LangTagRecord {
    /// The tag length in bytes.
    pub fn length(&self) -> u16 {
        self.length
    }

    /// The tag offset from the start of the table.
    pub fn offset(&self) -> u16 {
        self.offset
    }
}

/// A charset used by naming-table entries.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Encoding {
    /// Big-endian UTF-16 (Unicode and Windows platforms).
    Utf16Be,
    /// Mac OS Roman (Macintosh platform, encoding 0).
    MacRoman,
    /// Anything else; left to the consumer.
    Unknown,
}

impl Encoding {
    /// Determine the charset from the platform and encoding ids.
    pub fn new(platform_id: u16, encoding_id: u16) -> Encoding {
        match (platform_id, encoding_id) {
            (0, _) => Encoding::Utf16Be,
            (1, 0) => Encoding::MacRoman,
            (3, 0 | 1 | 10) => Encoding::Utf16Be,
            _ => Encoding::Unknown,
        }
    }

    /// Decode `bytes`, substituting U+FFFD for anything ill-formed.
    ///
    /// An [`Unknown`][Encoding::Unknown] charset keeps printable ASCII and
    /// replaces the rest, which is as much as can be said without knowing
    /// the platform's character set.
    pub fn decode(&self, bytes: &[u8]) -> String {
        const REPLACEMENT: char = char::REPLACEMENT_CHARACTER;
        match self {
            Encoding::Utf16Be => {
                // a trailing odd byte cannot start a code unit and is dropped
                let units = bytes
                    .chunks_exact(2)
                    .map(|pair| u16::from_be_bytes([pair[0], pair[1]]));
                char::decode_utf16(units)
                    .map(|c| c.unwrap_or(REPLACEMENT))
                    .collect()
            }
            Encoding::MacRoman => bytes.iter().map(|&b| mac_roman(b)).collect(),
            Encoding::Unknown => bytes
                .iter()
                .map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { REPLACEMENT })
                .collect(),
        }
    }
}

/// Decode one Mac OS Roman byte.
fn mac_roman(raw: u8) -> char {
    if raw < 0x80 {
        raw as char
    } else {
        // the table covers 0x80..=0xFF and never maps to a surrogate
        char::from_u32(MAC_ROMAN_DECODE[(raw - 0x80) as usize] as u32).unwrap_or('\u{FFFD}')
    }
}

/// Unicode values for the Mac OS Roman bytes 128..=255.
#[rustfmt::skip]
static MAC_ROMAN_DECODE: [u16; 128] = [
    196, 197, 199, 201, 209, 214, 220, 225, 224, 226, 228, 227, 229, 231, 233,
    232, 234, 235, 237, 236, 238, 239, 241, 243, 242, 244, 246, 245, 250, 249,
    251, 252, 8224, 176, 162, 163, 167, 8226, 182, 223, 174, 169, 8482, 180,
    168, 8800, 198, 216, 8734, 177, 8804, 8805, 165, 181, 8706, 8721, 8719,
    960, 8747, 170, 186, 937, 230, 248, 191, 161, 172, 8730, 402, 8776, 8710,
    171, 187, 8230, 160, 192, 195, 213, 338, 339, 8211, 8212, 8220, 8221, 8216,
    8217, 247, 9674, 255, 376, 8260, 8364, 8249, 8250, 64257, 64258, 8225, 183,
    8218, 8222, 8240, 194, 202, 193, 203, 200, 205, 206, 207, 204, 211, 212,
    63743, 210, 218, 219, 217, 305, 710, 732, 175, 728, 729, 730, 184, 733,
    731, 711,
];
