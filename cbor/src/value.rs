use core::fmt;

pub(crate) const MINOR_MASK: u8 = 0x1F;

/// The top 3 bits of an item's initial byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MajorType {
    UnsignedInteger = 0,
    NegativeInteger = 1,
    ByteString = 2,
    TextString = 3,
    Array = 4,
    Map = 5,
    Tag = 6,
    Simple = 7,
}

impl MajorType {
    pub const fn from_initial_byte(b: u8) -> Self {
        match b >> 5 {
            0 => Self::UnsignedInteger,
            1 => Self::NegativeInteger,
            2 => Self::ByteString,
            3 => Self::TextString,
            4 => Self::Array,
            5 => Self::Map,
            6 => Self::Tag,
            _ => Self::Simple,
        }
    }

    /// Builds an initial byte from this major type and a 5-bit minor value.
    pub const fn initial_byte(self, minor: u8) -> u8 {
        ((self as u8) << 5) | (minor & MINOR_MASK)
    }
}

impl fmt::Display for MajorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::UnsignedInteger => "Unsigned Integer",
            Self::NegativeInteger => "Negative Integer",
            Self::ByteString => "Byte String",
            Self::TextString => "Text String",
            Self::Array => "Array",
            Self::Map => "Map",
            Self::Tag => "Tag",
            Self::Simple => "Simple Value",
        })
    }
}

/// Low 5 bits of the well-known simple values.
pub mod simple {
    pub const FALSE: u8 = 20;
    pub const TRUE: u8 = 21;
    pub const NULL: u8 = 22;
    pub const UNDEFINED: u8 = 23;
}

/// A counted region of the buffer whose contents have not been consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    /// Offset of the first byte after the item header.
    pub offset: usize,
    /// Child item count for arrays, pair count for maps, byte length otherwise.
    pub length: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    UnsignedInteger(u64),
    SignedInteger(i64),
    Bytes(&'a [u8]),
    /// Text string payload, not validated as UTF-8.
    Text(&'a [u8]),
    Array(Reference),
    Map(Reference),
    Simple(u8),
}

impl Value<'_> {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::UnsignedInteger(_) => "Unsigned Integer",
            Self::SignedInteger(v) if *v < 0 => "Negative Integer",
            Self::SignedInteger(_) => "Signed Integer",
            Self::Bytes(_) => "Byte String",
            Self::Text(_) => "Text String",
            Self::Array(_) => "Array",
            Self::Map(_) => "Map",
            Self::Simple(simple::FALSE) | Self::Simple(simple::TRUE) => "Boolean",
            Self::Simple(simple::NULL) => "Null",
            Self::Simple(simple::UNDEFINED) => "Undefined",
            Self::Simple(_) => "Simple Value",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Simple(simple::FALSE) => Some(false),
            Self::Simple(simple::TRUE) => Some(true),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Simple(simple::NULL))
    }
}

/// One decoded item header and the offset at which it started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item<'a> {
    pub start: usize,
    pub value: Value<'a>,
}
