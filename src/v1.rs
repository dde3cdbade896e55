//! Version 1 time-based UUID generation.

use rand::RngCore;

use crate::clock::TimeSource;
use crate::source::{ByteSource, HexSource};
use crate::{global, ByteOctet, Error, Uuid, Variant};

/// Generates a version 1 UUID from `clock` and a node given as hex text.
///
/// The node is scanned for pairs of hex digits, so a colon-separated MAC
/// address works as-is. Fewer than six node bytes leave the tail
/// zero-padded; more than six fail with [`Error::CapacityExceeded`].
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
/// use rfc4122::TimeSource;
///
/// let mut clock = TimeSource::new(OsRng);
/// let uuid = rfc4122::new_v1(&mut clock, "08:00:20:0c:9a:66")?;
/// assert_eq!(uuid.version(), 1);
/// # Ok::<(), rfc4122::Error>(())
/// ```
pub fn new_v1<R: RngCore>(clock: &mut TimeSource<R>, node: &str) -> Result<Uuid, Error> {
    let mut octet = ByteOctet::bounded(16);
    octet.append(&clock.provide()?)?;
    octet.append(&HexSource::new(node).provide()?)?;
    let mut uuid = Uuid::from_octet(&octet)?;
    uuid.set_version(1);
    uuid.set_variant(Variant::Rfc4122);
    Ok(uuid)
}

/// Generates a version 1 UUID object.
///
/// This function employs the process-wide time source, so UUIDs generated
/// within the same millisecond across threads draw from one tick counter and
/// one clock sequence. On Unix, the shared state is reset when the process ID
/// changes (i.e., upon process forks) to prevent collisions across processes.
///
/// Generating more than 10,000 values within a single millisecond exhausts
/// the tick counter and fails with [`Error::SequenceOverflow`]; the next
/// millisecond recovers.
///
/// # Examples
///
/// ```rust
/// let uuid = rfc4122::uuid1("08:00:20:0c:9a:66")?;
/// println!("{}", uuid); // e.g., "8c197b64-9a4f-11e4-8c25-0800200c9a66"
/// # Ok::<(), rfc4122::Error>(())
/// ```
pub fn uuid1(node: &str) -> Result<Uuid, Error> {
    global::with_global_clock(|clock| new_v1(clock, node))
}
