use super::value::MINOR_MASK;
use core::convert::Infallible;

pub use super::error::Error;
pub use super::skip::{DEFAULT_MAX_RECURSION, skip_value};
pub use super::value::{Item, MajorType, Reference, Value, simple};

/// A read position within a borrowed CBOR buffer.
///
/// Every successful call advances the cursor by exactly the bytes it consumed.
/// After an error the position is unspecified, but never past the end of the
/// buffer, and decoding should not continue.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.offset..]
    }

    pub fn is_empty(&self) -> bool {
        self.offset >= self.data.len()
    }

    fn initial_byte(&self) -> Result<u8, Error> {
        match self.data.get(self.offset) {
            Some(b) => Ok(*b),
            None => Err(Error::Overrun.raise()),
        }
    }

    /// The major type of the item at the cursor, without consuming anything.
    pub fn major_type(&self) -> Result<MajorType, Error> {
        self.initial_byte().map(MajorType::from_initial_byte)
    }

    fn check_major_type(&self, expected: MajorType) -> Result<(), Error> {
        let major = self.major_type()?;
        if major != expected {
            return Err(Error::TypeMismatch(major).raise());
        }
        Ok(())
    }

    /// Reads the argument of the item header at the cursor.
    pub fn get_argument(&mut self) -> Result<u64, Error> {
        let minor = self.initial_byte()? & MINOR_MASK;
        let (value, len) = match minor {
            0..=23 => (minor as u64, 0),
            24..=27 => {
                let len = 1usize << (minor - 24);
                let start = self.offset + 1;
                let Some(bytes) = self.data.get(start..start + len) else {
                    return Err(Error::Overrun.raise());
                };
                (bytes.iter().fold(0u64, |n, b| (n << 8) | *b as u64), len)
            }
            _ => return Err(Error::IntegerEncoding(minor).raise()),
        };
        self.offset += 1 + len;
        Ok(value)
    }

    pub fn get_uint64(&mut self) -> Result<u64, Error> {
        self.check_major_type(MajorType::UnsignedInteger)?;
        self.get_argument()
    }

    /// Reads an unsigned or negative integer as an `i64`.
    pub fn get_int64(&mut self) -> Result<i64, Error> {
        let major = self.major_type()?;
        if !matches!(
            major,
            MajorType::UnsignedInteger | MajorType::NegativeInteger
        ) {
            return Err(Error::TypeMismatch(major).raise());
        }
        let Ok(v) = i64::try_from(self.get_argument()?) else {
            return Err(Error::IntegerDecodeOverflow.raise());
        };
        if major == MajorType::NegativeInteger {
            Ok(-1 - v)
        } else {
            Ok(v)
        }
    }

    /// Reads a string header and consumes its payload, returning the payload
    /// as a slice of the buffer.
    ///
    /// The major type is not checked: any header's argument is taken as the
    /// payload length.
    pub fn get_string_ref(&mut self) -> Result<&'a [u8], Error> {
        let length = self.get_argument()?;
        let start = self.offset;
        let payload = usize::try_from(length)
            .ok()
            .and_then(|len| self.data.get(start..start.checked_add(len)?));
        let Some(payload) = payload else {
            return Err(Error::Overrun.raise());
        };
        self.offset += payload.len();
        Ok(payload)
    }

    /// Reads a header argument as a count or length, leaving whatever follows
    /// the header unconsumed.
    pub fn get_ref(&mut self) -> Result<Reference, Error> {
        let length = self.get_argument()?;
        Ok(Reference {
            offset: self.offset,
            length,
        })
    }

    /// Tags are not supported: always fails.
    pub fn get_tag(&mut self) -> Result<Infallible, Error> {
        Err(Error::Unimplemented(MajorType::Tag).raise())
    }

    /// Consumes exactly one byte and returns its low 5 bits.
    pub fn get_primitive(&mut self) -> Result<u8, Error> {
        let minor = self.initial_byte()? & MINOR_MASK;
        self.offset += 1;
        Ok(minor)
    }

    /// Decodes the item header at the cursor according to its major type.
    ///
    /// Integers, strings and simple values are consumed whole; for arrays and
    /// maps only the header is consumed and the children follow the cursor.
    pub fn extract(&mut self) -> Result<Item<'a>, Error> {
        let start = self.offset;
        let value = match self.major_type()? {
            MajorType::UnsignedInteger => Value::UnsignedInteger(self.get_uint64()?),
            MajorType::NegativeInteger => Value::SignedInteger(self.get_int64()?),
            MajorType::ByteString => Value::Bytes(self.get_string_ref()?),
            MajorType::TextString => Value::Text(self.get_string_ref()?),
            MajorType::Array => Value::Array(self.get_ref()?),
            MajorType::Map => Value::Map(self.get_ref()?),
            MajorType::Tag => match self.get_tag()? {},
            MajorType::Simple => Value::Simple(self.get_primitive()?),
        };
        Ok(Item { start, value })
    }

    /// Checks the major type at the cursor, then reads the header as
    /// [`get_ref`](Self::get_ref) does.
    pub fn expect_ref(&mut self, expected: MajorType) -> Result<Reference, Error> {
        let major = self.major_type()?;
        if major != expected {
            tracing::debug!("Expected: {expected} Actual: {major}");
            return Err(Error::TypeMismatch(major).raise());
        }
        self.get_ref()
    }

    /// Reads an array header, returning the number of items that follow.
    pub fn expect_array(&mut self) -> Result<u64, Error> {
        self.expect_ref(MajorType::Array).map(|r| r.length)
    }

    /// Reads a map header, returning the number of key/value pairs that follow.
    pub fn expect_map(&mut self) -> Result<u64, Error> {
        self.expect_ref(MajorType::Map).map(|r| r.length)
    }

    pub fn expect_bytes(&mut self) -> Result<&'a [u8], Error> {
        self.check_major_type(MajorType::ByteString)?;
        self.get_string_ref()
    }

    pub fn expect_text(&mut self) -> Result<&'a [u8], Error> {
        self.check_major_type(MajorType::TextString)?;
        self.get_string_ref()
    }

    /// Reads an unsigned integer map key and checks it is `key`.
    pub fn expect_key(&mut self, key: u64) -> Result<(), Error> {
        let found = self.get_uint64()?;
        if found != key {
            return Err(Error::KeyMismatch(found).raise());
        }
        Ok(())
    }
}
