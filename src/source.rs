//! Byte generators that feed UUID construction.

use rand::{rngs::OsRng, RngCore};

use crate::{ByteOctet, Error};

/// A generator producing an ordered byte sequence.
///
/// Implementors cover the construction paths of a UUID: fixed zero content,
/// hex-string decoding, platform randomness, and namespace hashing (see
/// [`ContentHashSource`](crate::hash::ContentHashSource)).
pub trait ByteSource {
    /// Produces the byte sequence of this source.
    fn provide(&mut self) -> Result<ByteOctet, Error>;
}

/// Produces the 16 zero bytes of the nil UUID.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroSource;

impl ByteSource for ZeroSource {
    fn provide(&mut self) -> Result<ByteOctet, Error> {
        Ok(ByteOctet::from_bytes(&[0u8; 16]))
    }
}

/// Decodes every run of two consecutive hex digits in a string, in scan
/// order and case-insensitively.
///
/// Characters that are not hex digits (hyphens, braces, colons in MAC
/// addresses) break a pair and are skipped, so any of the common UUID or
/// MAC notations decode without preprocessing. The source does not check
/// how many bytes come out; that is the consumer's concern.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{ByteSource, HexSource};
///
/// let bytes = HexSource::new("08:00:2B:e1-07").provide()?;
/// assert_eq!(bytes.as_bytes(), &[0x08, 0x00, 0x2b, 0xe1, 0x07]);
/// # Ok::<(), rfc4122::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct HexSource<'a> {
    text: &'a str,
}

impl<'a> HexSource<'a> {
    /// Creates a source scanning `text`.
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl ByteSource for HexSource<'_> {
    fn provide(&mut self) -> Result<ByteOctet, Error> {
        let mut octet = ByteOctet::new();
        let mut pending: Option<u8> = None;
        for c in self.text.chars() {
            match c.to_digit(16) {
                Some(nibble) => match pending.take() {
                    Some(hi) => octet.push(hi << 4 | nibble as u8)?,
                    None => pending = Some(nibble as u8),
                },
                // a non-hex character breaks the current pair
                None => pending = None,
            }
        }
        Ok(octet)
    }
}

/// Produces 16 bytes from the platform's secure random generator.
///
/// Draws from [`OsRng`]; an entropy failure propagates as
/// [`Error::Random`].
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomSource;

impl ByteSource for RandomSource {
    fn provide(&mut self) -> Result<ByteOctet, Error> {
        let mut bytes = [0u8; 16];
        OsRng.try_fill_bytes(&mut bytes)?;
        Ok(ByteOctet::from_bytes(&bytes))
    }
}
