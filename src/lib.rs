//! An implementation of RFC 4122 UUID versions 1 through 5
//!
//! ```rust
//! // time-based
//! let uuid = rfc4122::uuid1("08:00:20:0c:9a:66")?;
//! println!("{}", uuid); // e.g. "8c197b64-9a4f-11e4-8c25-0800200c9a66"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! // random
//! let uuid = rfc4122::uuid4()?;
//! println!("{}", uuid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//!
//! // name-based
//! let uuid = rfc4122::uuid5("python.org", None)?;
//! assert_eq!(uuid, "886313e1-3b8a-5372-9b90-0c9aee199e5d");
//! # Ok::<(), rfc4122::Error>(())
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122).
//!
//! # Field and bit layout
//!
//! Every version shares the field layout of RFC 4122, section 4.1.2:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           time_low                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |           time_mid            |  ver  |       time_high       |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|  clk_seq_hi |  clk_seq_lo |             node              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             node                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - `time_low`, `time_mid`, and `time_high` together hold the 60-bit count
//!   of 100-nanosecond ticks since 1582-10-15 in versions 1 and 2; version 2
//!   replaces `time_low` with a little-endian local user ID, and the other
//!   versions fill the fields with digest or random bytes.
//! - The 4-bit `ver` field names the generation algorithm, `0001` through
//!   `0101`.
//! - The 2-bit `var` field is set at `10`.
//! - `clk_seq_hi` and `clk_seq_lo` carry the 14-bit clock sequence in the
//!   time-based versions. The sequence is randomly seeded once per process
//!   and incremented when the system clock is observed running backwards.
//! - The 6 `node` bytes hold the host MAC address in the time-based versions
//!   and digest or random bytes otherwise.
//!
//! The host clock offers only millisecond resolution, so the 100-nanosecond
//! digits of the timestamp are emulated by a counter that orders values
//! minted within one millisecond. The counter accommodates 10,000 draws per
//! tick; past that, generation fails with [`Error::SequenceOverflow`] until
//! the next tick.
//!
//! # Building values from other sources
//!
//! [`Uuid`] is a thin wrapper over a [`ByteOctet`], a bounded byte sequence,
//! and any [`ByteSource`] yielding 16 bytes can feed one. Hex text, the
//! operating system's entropy source, and namespaced digests are provided;
//! parsing a string is just the hex source in disguise:
//!
//! ```rust
//! use rfc4122::Uuid;
//!
//! let uuid: Uuid = "69ec5f70-9a4f-11e4-bd06-0800200c9a66".parse()?;
//! assert_eq!(uuid.version(), 1);
//! # Ok::<(), rfc4122::Error>(())
//! ```
//!
//! # Crate features
//!
//! - `serde` enables the serialization and deserialization of [`Uuid`]
//!   objects, as strings for human-readable formats and as 16-byte arrays
//!   otherwise.
//! - `uuid` enables lossless conversions to and from [`uuid::Uuid`].

mod clock;
mod error;
mod global;
mod hash;
mod octet;
mod source;
mod uuid;

pub mod fields;

pub use clock::{TimeSource, GREGORIAN_OFFSET_MS};
pub use error::Error;
pub use hash::{ContentHashSource, HashInput, Md5Source, Sha1Source};
pub use octet::ByteOctet;
pub use source::{ByteSource, HexSource, RandomSource, ZeroSource};
pub use uuid::{Uuid, Variant};

mod v1;
#[doc(inline)]
pub use v1::{new_v1, uuid1};

mod v2;
#[doc(inline)]
pub use v2::{new_v2, uuid2};

mod v3;
pub use v3::uuid3;

mod v4;
pub use v4::uuid4;

mod v5;
pub use v5::uuid5;
