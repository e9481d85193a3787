//! Errors that occur when reading font data

use std::{fmt, io};

/// An error raised while reading font data.
///
/// These values circulate inside the crate; the top-level entry point
/// ([`FontFile::read`][crate::FontFile::read]) converts every one of them
/// into the coarse [`InvalidFont`] outcome at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    /// The source ended before the value at the given offset could be read.
    UnexpectedEof(u64),
    /// An I/O failure other than running out of data.
    Io(io::ErrorKind),
    /// The file does not begin with a recognized sfnt or collection
    /// signature.
    UnknownSignature(u32),
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::UnexpectedEof(at) => write!(f, "unexpected end of data at offset {at}"),
            ReadError::Io(kind) => write!(f, "i/o failure while reading font data: {kind}"),
            ReadError::UnknownSignature(sig) => {
                write!(f, "unrecognized file signature 0x{sig:08X}")
            }
        }
    }
}

impl std::error::Error for ReadError {}

/// The outcome for a file that could not be used as a font.
///
/// When scanning a directory of untrusted files, "this is not a font" is a
/// normal result rather than an exceptional one, so this type deliberately
/// exposes no structure to match on. The precise cause is still attached as
/// the error [`source`][std::error::Error::source] for logging.
#[derive(Debug, Clone)]
pub struct InvalidFont {
    cause: ReadError,
}

impl InvalidFont {
    pub(crate) fn new(cause: ReadError) -> Self {
        InvalidFont { cause }
    }
}

impl fmt::Display for InvalidFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a recognized or well-formed font file")
    }
}

impl std::error::Error for InvalidFont {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}
