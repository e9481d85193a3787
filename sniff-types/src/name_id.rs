//! Name identifiers
//!
//! The spec treats these as plain u16s; we give them a distinct type so a
//! record's name id cannot be confused with its other u16 fields.

use std::fmt;

/// Identifier for an entry in the naming table.
///
/// The well-known identifiers are provided as associated constants. IDs
/// 256..=32767 are font-specific.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct NameId(u16);

impl NameId {
    /// Copyright notice.
    pub const COPYRIGHT_NOTICE: Self = Self(0);
    /// Font family name.
    pub const FAMILY_NAME: Self = Self(1);
    /// Font subfamily (style) name.
    pub const SUBFAMILY_NAME: Self = Self(2);
    /// Unique font identifier.
    pub const UNIQUE_ID: Self = Self(3);
    /// Full font name.
    pub const FULL_NAME: Self = Self(4);
    /// Version string.
    pub const VERSION_STRING: Self = Self(5);
    /// PostScript name.
    pub const POSTSCRIPT_NAME: Self = Self(6);
    /// Trademark notice.
    pub const TRADEMARK: Self = Self(7);
    /// Manufacturer name.
    pub const MANUFACTURER: Self = Self(8);
    /// Typeface designer.
    pub const DESIGNER: Self = Self(9);
    /// Description of the typeface.
    pub const DESCRIPTION: Self = Self(10);
    /// Typographic family name.
    pub const TYPOGRAPHIC_FAMILY_NAME: Self = Self(16);
    /// Typographic subfamily name.
    pub const TYPOGRAPHIC_SUBFAMILY_NAME: Self = Self(17);

    /// Create a new identifier from a raw u16 value.
    #[inline]
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// The identifier as a u16.
    #[inline]
    pub const fn to_u16(self) -> u16 {
        self.0
    }
}

impl From<u16> for NameId {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl fmt::Display for NameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Debug for NameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Self::COPYRIGHT_NOTICE => "COPYRIGHT_NOTICE",
            Self::FAMILY_NAME => "FAMILY_NAME",
            Self::SUBFAMILY_NAME => "SUBFAMILY_NAME",
            Self::UNIQUE_ID => "UNIQUE_ID",
            Self::FULL_NAME => "FULL_NAME",
            Self::VERSION_STRING => "VERSION_STRING",
            Self::POSTSCRIPT_NAME => "POSTSCRIPT_NAME",
            Self::TRADEMARK => "TRADEMARK",
            Self::MANUFACTURER => "MANUFACTURER",
            Self::DESIGNER => "DESIGNER",
            Self::DESCRIPTION => "DESCRIPTION",
            Self::TYPOGRAPHIC_FAMILY_NAME => "TYPOGRAPHIC_FAMILY_NAME",
            Self::TYPOGRAPHIC_SUBFAMILY_NAME => "TYPOGRAPHIC_SUBFAMILY_NAME",
            _ => return write!(f, "NameId({})", self.0),
        };
        f.write_str(name)
    }
}
