//! The 16-byte UUID value type.

use std::{fmt, ops, str};

use crate::{ByteOctet, ByteSource, Error, HexSource, ZeroSource};

/// Represents a Universally Unique IDentifier.
///
/// A value always holds exactly 16 bytes, laid out as
/// `time_low(4) | time_mid(2) | time_hi_and_version(2) |
/// clock_seq_hi_and_reserved(1) | clock_seq_low(1) | node(6)`. The version
/// nibble occupies the top four bits of byte 6 and the variant marker the
/// top one to three bits of byte 8.
///
/// # Examples
///
/// ```rust
/// use rfc4122::Uuid;
///
/// let x: Uuid = "69ec5f70-9a4f-11e4-bd06-0800200c9a66".parse()?;
/// assert_eq!(x.version(), 1);
/// assert_eq!(x.to_string(), "69ec5f70-9a4f-11e4-bd06-0800200c9a66");
/// # Ok::<(), rfc4122::Error>(())
/// ```
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Uuid {
    octet: ByteOctet,
}

/// The layout family encoded in the top bits of byte 8.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// Reserved for NCS backward compatibility (top bit `0`).
    Ncs,
    /// The RFC 4122 layout (top bits `10`).
    Rfc4122,
    /// Reserved for Microsoft compatibility (top bits `110`).
    Microsoft,
    /// Reserved for future definition (top bits `111`).
    Future,
}

impl Uuid {
    /// Creates the nil UUID (`00000000-0000-0000-0000-000000000000`).
    pub fn nil() -> Self {
        match Self::from_source(&mut ZeroSource) {
            Ok(uuid) => uuid,
            Err(_) => unreachable!("zero source always yields 16 bytes"),
        }
    }

    /// Creates a UUID from a 16-byte big-endian array.
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self {
            octet: ByteOctet::bounded_from(16, &bytes),
        }
    }

    /// Creates a UUID from a byte sequence of at most 16 bytes, right-padding
    /// shorter input with zero bytes.
    ///
    /// Fails with [`Error::CapacityExceeded`] past 16 bytes.
    pub fn from_octet(octet: &ByteOctet) -> Result<Self, Error> {
        if octet.len() > 16 {
            return Err(Error::CapacityExceeded(16));
        }
        let mut bytes = [0u8; 16];
        bytes[..octet.len()].copy_from_slice(octet.as_bytes());
        Ok(Self::from_bytes(bytes))
    }

    /// Materializes a [`ByteSource`] and adopts its bytes, which must number
    /// exactly 16.
    pub fn from_source<S: ByteSource + ?Sized>(source: &mut S) -> Result<Self, Error> {
        let octet = source.provide()?;
        if octet.len() != 16 {
            return Err(Error::WrongByteCount(octet.len()));
        }
        Self::from_octet(&octet)
    }

    /// Returns the 16 bytes as an array.
    pub fn to_bytes(&self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(self.octet.as_bytes());
        bytes
    }

    /// Returns the raw byte content.
    pub fn as_bytes(&self) -> &[u8] {
        self.octet.as_bytes()
    }

    /// Returns a reference to the underlying byte sequence.
    pub fn octet(&self) -> &ByteOctet {
        &self.octet
    }

    /// Returns `true` iff the value holds exactly 16 bytes.
    pub fn is_valid(&self) -> bool {
        self.octet.len() == 16
    }

    /// Overwrites the top nibble of byte 6 with `version`, preserving the
    /// low nibble.
    pub fn set_version(&mut self, version: u8) {
        let byte = self.octet.get(6).unwrap_or(0);
        // writes below offset 16 on a full value cannot fail
        let _ = self.octet.set(6, byte & 0x0f | version << 4);
    }

    /// Returns the version nibble.
    pub fn version(&self) -> u8 {
        self.octet.get(6).unwrap_or(0) >> 4
    }

    /// Overwrites the variant marker bits of byte 8 per `variant`, leaving
    /// the remaining bits untouched.
    pub fn set_variant(&mut self, variant: Variant) {
        let byte = self.octet.get(8).unwrap_or(0);
        let tagged = match variant {
            Variant::Ncs => byte & 0x7f,
            Variant::Rfc4122 => byte & 0x3f | 0x80,
            Variant::Microsoft => byte & 0x1f | 0xc0,
            Variant::Future => byte & 0x1f | 0xe0,
        };
        let _ = self.octet.set(8, tagged);
    }

    /// Returns the variant encoded in byte 8.
    pub fn variant(&self) -> Variant {
        let byte = self.octet.get(8).unwrap_or(0);
        if byte & 0x80 == 0 {
            Variant::Ncs
        } else if byte & 0x40 == 0 {
            Variant::Rfc4122
        } else if byte & 0x20 == 0 {
            Variant::Microsoft
        } else {
            Variant::Future
        }
    }

    /// Low-level single-byte write, for construction and test scaffolding.
    pub fn set_byte(&mut self, offset: usize, byte: u8) -> Result<(), Error> {
        self.octet.set(offset, byte)
    }

    /// Returns the byte at `offset`.
    pub fn get_byte(&self, offset: usize) -> Option<u8> {
        self.octet.get(offset)
    }

    /// The DNS namespace, `6ba7b810-9dad-11d1-80b4-00c04fd430c8`.
    pub fn namespace_dns() -> Self {
        Self::from_bytes([
            0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4,
            0x30, 0xc8,
        ])
    }

    /// The URL namespace, `6ba7b811-9dad-11d1-80b4-00c04fd430c8`.
    pub fn namespace_url() -> Self {
        Self::from_bytes([
            0x6b, 0xa7, 0xb8, 0x11, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4,
            0x30, 0xc8,
        ])
    }

    /// The OID namespace, `6ba7b812-9dad-11d1-80b4-00c04fd430c8`.
    pub fn namespace_oid() -> Self {
        Self::from_bytes([
            0x6b, 0xa7, 0xb8, 0x12, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4,
            0x30, 0xc8,
        ])
    }

    /// The X.500 namespace, `6ba7b814-9dad-11d1-80b4-00c04fd430c8`.
    pub fn namespace_x500() -> Self {
        Self::from_bytes([
            0x6b, 0xa7, 0xb8, 0x14, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4,
            0x30, 0xc8,
        ])
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a
    /// stack-allocated structure that can be dereferenced as `str` and
    /// [`Display`](fmt::Display)ed.
    pub fn encode(&self) -> impl ops::Deref<Target = str> + fmt::Display {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; 36];
        let mut buf_iter = buffer.iter_mut();
        for (i, &byte) in self.octet.as_bytes().iter().enumerate() {
            let e = byte as usize;
            if let Some(slot) = buf_iter.next() {
                *slot = DIGITS[e >> 4];
            }
            if let Some(slot) = buf_iter.next() {
                *slot = DIGITS[e & 15];
            }
            if i == 3 || i == 5 || i == 7 || i == 9 {
                if let Some(slot) = buf_iter.next() {
                    *slot = b'-';
                }
            }
        }
        debug_assert!(buffer.is_ascii());
        UuidStr(buffer)
    }
}

impl Default for Uuid {
    fn default() -> Self {
        Self::nil()
    }
}

impl fmt::Display for Uuid {
    /// Returns the canonical lower-case hyphenated representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = Error;

    /// Creates a UUID from any string carrying at least 32 hex digits.
    ///
    /// The hex scanner ignores separators such as hyphens or braces, so the
    /// canonical, braced, and compact notations all parse. The scan must
    /// yield exactly 16 bytes.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        if src.len() < 32 {
            return Err(Error::StringTooShort);
        }
        Self::from_source(&mut HexSource::new(src))
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self::from_bytes(src)
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.to_bytes()
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = Error;

    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; 16] = src
            .try_into()
            .map_err(|_| Error::WrongByteCount(src.len()))?;
        Ok(Self::from_bytes(bytes))
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl TryFrom<String> for Uuid {
    type Error = Error;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq<[u8; 16]> for Uuid {
    fn eq(&self, other: &[u8; 16]) -> bool {
        self.octet.as_bytes() == other
    }
}

/// Format-agnostic comparison: the string is hex-decoded first, so case and
/// separators are irrelevant; anything that does not decode to 16 bytes
/// compares unequal.
impl PartialEq<str> for Uuid {
    fn eq(&self, other: &str) -> bool {
        match HexSource::new(other).provide() {
            Ok(decoded) => decoded.as_bytes() == self.octet.as_bytes(),
            Err(_) => false,
        }
    }
}

impl PartialEq<&str> for Uuid {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

/// Concrete return type of [`Uuid::encode()`] containing the stack-allocated
/// 8-4-4-4-12 string representation.
struct UuidStr([u8; 36]);

impl ops::Deref for UuidStr {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        debug_assert!(self.0.is_ascii());
        unsafe { str::from_utf8_unchecked(&self.0) }
    }
}

impl fmt::Display for UuidStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

#[cfg(feature = "uuid")]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.to_bytes())
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self::from_bytes(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl de::Visitor<'_> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Self::Value::try_from(value).map_err(de::Error::custom)
        }
    }

}
