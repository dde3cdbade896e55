//! Bounded byte container underlying every UUID value.

use std::hash::{Hash, Hasher};

use crate::Error;

/// An ordered sequence of unsigned bytes with an optional capacity bound.
///
/// The element order is positional and semantically significant; bytes are
/// never reordered once written. A capacity of zero means the sequence is
/// unbounded.
///
/// # Examples
///
/// ```rust
/// use rfc4122::ByteOctet;
///
/// let mut octet = ByteOctet::bounded(2);
/// octet.push(0xde)?;
/// octet.push(0xad)?;
/// assert!(octet.push(0xbe).is_err());
/// assert_eq!(octet.to_u16()?, 0xdead);
/// # Ok::<(), rfc4122::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct ByteOctet {
    bytes: Vec<u8>,
    capacity: usize,
}

impl ByteOctet {
    /// Creates an empty, unbounded sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty sequence that can never grow past `capacity` bytes.
    pub fn bounded(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Creates an unbounded sequence holding a copy of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            capacity: 0,
        }
    }

    /// Creates a bounded sequence pre-filled with `bytes`, which must fit.
    pub(crate) fn bounded_from(capacity: usize, bytes: &[u8]) -> Self {
        debug_assert!(bytes.len() <= capacity);
        Self {
            bytes: bytes.to_vec(),
            capacity,
        }
    }

    /// Creates an unbounded sequence from wider integers, rejecting any value
    /// outside the unsigned byte range.
    pub fn from_ints<I>(values: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = u64>,
    {
        let mut octet = Self::new();
        for value in values {
            let byte = u8::try_from(value).map_err(|_| Error::ValueOutOfRange(value))?;
            octet.push(byte)?;
        }
        Ok(octet)
    }

    /// Returns the number of bytes currently held.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if no bytes are held.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the capacity bound, or zero if unbounded.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends one byte, failing if the sequence is at capacity.
    pub fn push(&mut self, byte: u8) -> Result<(), Error> {
        if self.capacity > 0 && self.bytes.len() >= self.capacity {
            return Err(Error::CapacityExceeded(self.capacity));
        }
        self.bytes.push(byte);
        Ok(())
    }

    /// Writes `byte` at `offset`, zero-filling any gap below it.
    ///
    /// Fails if `offset` lies at or beyond the capacity bound.
    pub fn set(&mut self, offset: usize, byte: u8) -> Result<(), Error> {
        if self.capacity > 0 && offset >= self.capacity {
            return Err(Error::CapacityExceeded(self.capacity));
        }
        if offset >= self.bytes.len() {
            self.bytes.resize(offset + 1, 0);
        }
        self.bytes[offset] = byte;
        Ok(())
    }

    /// Returns the byte at `offset`, or `None` past the end.
    pub fn get(&self, offset: usize) -> Option<u8> {
        self.bytes.get(offset).copied()
    }

    /// Appends every byte of `other`, each one capacity-checked.
    pub fn append(&mut self, other: &ByteOctet) -> Result<(), Error> {
        for &byte in &other.bytes {
            self.push(byte)?;
        }
        Ok(())
    }

    /// Appends several sequences in argument order.
    pub fn append_all<'a, I>(&mut self, others: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = &'a ByteOctet>,
    {
        for other in others {
            self.append(other)?;
        }
        Ok(())
    }

    /// Returns a new unbounded sequence copying `length` bytes from `start`,
    /// or everything to the end when `length` is `None`.
    pub fn slice(&self, start: usize, length: Option<usize>) -> ByteOctet {
        let start = start.min(self.bytes.len());
        let end = match length {
            Some(n) => (start + n).min(self.bytes.len()),
            None => self.bytes.len(),
        };
        Self::from_bytes(&self.bytes[start..end])
    }

    /// Packs the sequence into an unsigned integer, big-endian.
    ///
    /// Fails if more than 8 bytes are held.
    pub fn to_uint(&self) -> Result<u64, Error> {
        if self.bytes.len() > 8 {
            return Err(Error::WidthMismatch {
                expected: 8,
                found: self.bytes.len(),
            });
        }
        Ok(self
            .bytes
            .iter()
            .fold(0u64, |acc, &byte| acc << 8 | u64::from(byte)))
    }

    /// Packs exactly 4 bytes into a `u32`, big-endian.
    pub fn to_u32(&self) -> Result<u32, Error> {
        if self.bytes.len() != 4 {
            return Err(Error::WidthMismatch {
                expected: 4,
                found: self.bytes.len(),
            });
        }
        Ok(self.to_uint()? as u32)
    }

    /// Packs exactly 2 bytes into a `u16`, big-endian.
    pub fn to_u16(&self) -> Result<u16, Error> {
        if self.bytes.len() != 2 {
            return Err(Error::WidthMismatch {
                expected: 2,
                found: self.bytes.len(),
            });
        }
        Ok(self.to_uint()? as u16)
    }

    /// Returns the raw byte content.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the sequence and returns its bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }
}

/// Structural equality over the byte content; the capacity bound does not
/// take part in comparisons.
impl PartialEq for ByteOctet {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for ByteOctet {}

impl Hash for ByteOctet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

impl AsRef<[u8]> for ByteOctet {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
