//! A seekable cursor over raw font bytes

use std::fs::File;
use std::io::{self, Cursor, Read, Seek, SeekFrom};
use std::path::Path;

use sniff_types::{F2Dot14, Fixed, Uint24};

use crate::error::ReadError;
use crate::tables::name::Encoding;

/// Size of the reusable scratch buffer used for chunked string reads.
const SCRATCH_LEN: usize = 64;

/// A cursor over a finite byte source, decoding big-endian values.
///
/// The reader owns its source (an open file, or an in-memory buffer) and
/// releases it when dropped, on every exit path. It is a single mutable
/// cursor plus one scratch buffer, so it cannot be shared between threads;
/// use one reader per file.
///
/// Reads past the end of the source fail with
/// [`ReadError::UnexpectedEof`]. Seeking past the end is permitted; it is
/// the subsequent read that fails.
pub struct FontReader<R> {
    source: R,
    pos: u64,
    len: u64,
    scratch: [u8; SCRATCH_LEN],
}

macro_rules! scalar_read {
    ($method:ident, $ty:ty, $len:literal, $doc:literal) => {
        #[doc = concat!("Read a big-endian ", $doc, ".")]
        pub fn $method(&mut self) -> Result<$ty, ReadError> {
            let mut buf = [0u8; $len];
            self.read_exact(&mut buf)?;
            Ok(<$ty>::from_be_bytes(buf))
        }
    };
}

impl FontReader<File> {
    /// Open the file at `path`.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        FontReader::new(File::open(path)?)
    }
}

impl<'a> FontReader<Cursor<&'a [u8]>> {
    /// Wrap an in-memory buffer.
    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        FontReader {
            source: Cursor::new(bytes),
            pos: 0,
            len: bytes.len() as u64,
            scratch: [0; SCRATCH_LEN],
        }
    }
}

impl<R: Read + Seek> FontReader<R> {
    /// Wrap a byte source, measuring its length once up front.
    pub fn new(mut source: R) -> io::Result<Self> {
        let len = source.seek(SeekFrom::End(0))?;
        source.seek(SeekFrom::Start(0))?;
        Ok(FontReader {
            source,
            pos: 0,
            len,
            scratch: [0; SCRATCH_LEN],
        })
    }

    /// The total length of the source, in bytes.
    pub fn len(&self) -> u64 {
        self.len
    }

    /// `true` if the source holds no bytes at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The current cursor position.
    pub fn position(&self) -> u64 {
        self.pos
    }

    /// Move the cursor to an absolute position.
    pub fn seek(&mut self, pos: u64) -> Result<(), ReadError> {
        self.source
            .seek(SeekFrom::Start(pos))
            .map_err(|e| ReadError::Io(e.kind()))?;
        self.pos = pos;
        Ok(())
    }

    /// Skip forward `n` bytes, clamping at the end of the source; a
    /// negative `n` skips nothing. Returns the number of bytes actually
    /// skipped.
    pub fn skip(&mut self, n: i64) -> Result<u64, ReadError> {
        if n <= 0 {
            return Ok(0);
        }
        let target = self.pos.saturating_add(n as u64).min(self.len).max(self.pos);
        let skipped = target - self.pos;
        if skipped > 0 {
            self.seek(target)?;
        }
        Ok(skipped)
    }

    /// Read a single byte, or `None` if the source is exhausted.
    pub fn read_byte(&mut self) -> Result<Option<u8>, ReadError> {
        let mut buf = [0u8; 1];
        Ok(match self.read_into(&mut buf)? {
            0 => None,
            _ => Some(buf[0]),
        })
    }

    /// Read up to `buf.len()` bytes, returning the count actually read;
    /// 0 means the source is exhausted.
    pub fn read_into(&mut self, buf: &mut [u8]) -> Result<usize, ReadError> {
        let count = self
            .source
            .read(buf)
            .map_err(|e| ReadError::Io(e.kind()))?;
        self.pos += count as u64;
        Ok(count)
    }

    /// Fill `buf` completely, failing with [`ReadError::UnexpectedEof`] if
    /// the source ends first.
    pub fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), ReadError> {
        Self::read_exact_inner(&mut self.source, &mut self.pos, buf)
    }

    fn read_exact_inner(source: &mut R, pos: &mut u64, buf: &mut [u8]) -> Result<(), ReadError> {
        match source.read_exact(buf) {
            Ok(()) => {
                *pos += buf.len() as u64;
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                Err(ReadError::UnexpectedEof(*pos))
            }
            Err(e) => Err(ReadError::Io(e.kind())),
        }
    }

    scalar_read!(read_u8, u8, 1, "unsigned 8-bit integer");
    scalar_read!(read_i16, i16, 2, "signed 16-bit integer");
    scalar_read!(read_u16, u16, 2, "unsigned 16-bit integer");
    scalar_read!(read_i32, i32, 4, "signed 32-bit integer");
    scalar_read!(read_u32, u32, 4, "unsigned 32-bit integer");
    scalar_read!(read_i64, i64, 8, "signed 64-bit integer");

    /// Read a big-endian 24-bit unsigned integer; fails if any of the
    /// three bytes is missing.
    pub fn read_u24(&mut self) -> Result<Uint24, ReadError> {
        let mut buf = [0u8; 3];
        self.read_exact(&mut buf)?;
        Ok(Uint24::from_be_bytes(buf))
    }

    /// Read a 16.16 fixed-point value.
    pub fn read_fixed(&mut self) -> Result<Fixed, ReadError> {
        Ok(Fixed::from_bits(self.read_i32()?))
    }

    /// Read a 2.14 fixed-point value.
    pub fn read_f2dot14(&mut self) -> Result<F2Dot14, ReadError> {
        Ok(F2Dot14::from_bits(self.read_i16()?))
    }

    /// Read exactly `len` bytes through the scratch buffer and decode them
    /// with `encoding`. Ill-formed sequences decode to U+FFFD.
    pub fn read_string(&mut self, len: usize, encoding: Encoding) -> Result<String, ReadError> {
        let mut raw = Vec::with_capacity(len.min(SCRATCH_LEN));
        let mut remaining = len;
        while remaining > 0 {
            let take = remaining.min(SCRATCH_LEN);
            Self::read_exact_inner(&mut self.source, &mut self.pos, &mut self.scratch[..take])?;
            raw.extend_from_slice(&self.scratch[..take]);
            remaining -= take;
        }
        Ok(encoding.decode(&raw))
    }

    /// Consume the reader, handing back the underlying source.
    pub fn into_inner(self) -> R {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::name::Encoding;

    #[test]
    fn scalars() {
        let mut reader = FontReader::from_bytes(&[
            0x01, // u8
            0xFF, 0xFE, // i16 -2
            0x80, 0x00, // u16
            0x00, 0x00, 0x01, // u24
            0xFF, 0xFF, 0xFF, 0xFF, // i32 -1
            0x80, 0x00, 0x00, 0x00, // u32 (top bit set)
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x2A, // i64
        ]);
        assert_eq!(reader.read_u8().unwrap(), 1);
        assert_eq!(reader.read_i16().unwrap(), -2);
        assert_eq!(reader.read_u16().unwrap(), 0x8000);
        assert_eq!(reader.read_u24().unwrap().to_u32(), 1);
        assert_eq!(reader.read_i32().unwrap(), -1);
        // true unsigned semantics: the high bit widens, it does not wrap
        // through abs()
        assert_eq!(reader.read_u32().unwrap(), 0x8000_0000);
        assert_eq!(reader.read_i64().unwrap(), 42);
        assert_eq!(reader.position(), reader.len());
    }

    #[test]
    fn fixed_point() {
        let mut reader = FontReader::from_bytes(&[
            0x7F, 0xFF, // f2dot14 1 + 16383/16384
            0xC0, 0x00, // f2dot14 -1.0
            0x00, 0x01, 0x80, 0x00, // fixed 1.5
        ]);
        assert_eq!(reader.read_f2dot14().unwrap().to_f32(), 1.0 + 16383.0 / 16384.0);
        assert_eq!(reader.read_f2dot14().unwrap().to_f32(), -1.0);
        assert_eq!(reader.read_fixed().unwrap().to_f64(), 1.5);
    }

    #[test]
    fn eof_reports_offset() {
        let mut reader = FontReader::from_bytes(&[0x00, 0x01]);
        assert_eq!(reader.read_u16().unwrap(), 1);
        assert_eq!(reader.read_u16(), Err(ReadError::UnexpectedEof(2)));
    }

    #[test]
    fn u24_needs_all_three_bytes() {
        let mut reader = FontReader::from_bytes(&[0xAB, 0xCD]);
        assert_eq!(reader.read_u24(), Err(ReadError::UnexpectedEof(0)));
    }

    #[test]
    fn seek_past_end_is_allowed_but_reads_fail() {
        let mut reader = FontReader::from_bytes(&[0u8; 4]);
        reader.seek(100).unwrap();
        assert_eq!(reader.position(), 100);
        assert!(reader.read_u8().is_err());
        assert_eq!(reader.read_byte().unwrap(), None);
    }

    #[test]
    fn skip_clamps() {
        let mut reader = FontReader::from_bytes(&[0u8; 10]);
        assert_eq!(reader.skip(-4).unwrap(), 0);
        assert_eq!(reader.skip(6).unwrap(), 6);
        assert_eq!(reader.skip(100).unwrap(), 4);
        assert_eq!(reader.position(), 10);
        assert_eq!(reader.skip(1).unwrap(), 0);
    }

    #[test]
    fn read_into_returns_count() {
        let mut reader = FontReader::from_bytes(&[1, 2, 3]);
        let mut buf = [0u8; 8];
        assert_eq!(reader.read_into(&mut buf).unwrap(), 3);
        assert_eq!(&buf[..3], &[1, 2, 3]);
        assert_eq!(reader.read_into(&mut buf).unwrap(), 0);
    }

    #[test]
    fn string_longer_than_one_chunk() {
        // 100 'A's encoded as UTF-16BE is 200 bytes, several scratch chunks
        let mut bytes = Vec::new();
        for _ in 0..100 {
            bytes.extend_from_slice(&[0x00, 0x41]);
        }
        let mut reader = FontReader::from_bytes(&bytes);
        let decoded = reader.read_string(200, Encoding::Utf16Be).unwrap();
        assert_eq!(decoded, "A".repeat(100));
        assert_eq!(reader.position(), 200);
    }

    #[test]
    fn truncated_string_is_an_error() {
        let mut reader = FontReader::from_bytes(&[0x00, 0x41]);
        assert!(reader.read_string(4, Encoding::Utf16Be).is_err());
    }
}
