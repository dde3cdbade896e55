//! Error types shared across the crate.

/// The error type for every fallible operation in this crate.
///
/// All failures are detected synchronously at the call site and are never
/// retried internally.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An integer outside the unsigned byte range was offered to a
    /// [`ByteOctet`](crate::ByteOctet).
    #[error("value {0} is outside the unsigned byte range")]
    ValueOutOfRange(u64),

    /// A write would grow a bounded [`ByteOctet`](crate::ByteOctet) past its
    /// capacity.
    #[error("octet capacity of {0} bytes exceeded")]
    CapacityExceeded(usize),

    /// Integer packing was requested on a sequence of the wrong width.
    #[error("integer packing expects exactly {expected} bytes, found {found}")]
    WidthMismatch { expected: usize, found: usize },

    /// The input string is too short to hold the 32 hex digits of a UUID.
    #[error("string is too short to contain a UUID")]
    StringTooShort,

    /// An imported byte sequence does not hold exactly 16 bytes.
    #[error("a UUID requires exactly 16 bytes, found {0}")]
    WrongByteCount(usize),

    /// More than 10000 time-based UUIDs were requested within a single
    /// millisecond tick.
    #[error("more than 10000 time-based UUIDs requested within one millisecond")]
    SequenceOverflow,

    /// A hash input could not be reduced to a string.
    #[error("hash input cannot be reduced to a string")]
    UnhashableValue,

    /// The platform's secure random generator was unavailable.
    #[error("platform random generator failed")]
    Random(#[from] rand::Error),

    /// A version-specific field interpretation was applied to a UUID with a
    /// different version nibble.
    #[error("UUID reports version {found}, expected version {expected}")]
    VersionMismatch { expected: u8, found: u8 },

    /// Formatting was requested on a value that does not hold 16 bytes.
    #[error("cannot format an incomplete UUID of {0} bytes")]
    IncompleteValue(usize),
}
