//! Version 2 time-based UUID generation with an embedded user ID.

use rand::RngCore;

use crate::clock::TimeSource;
use crate::source::{ByteSource, HexSource};
use crate::{global, ByteOctet, Error, Uuid, Variant};

/// Generates a version 2 UUID from `clock`, a node given as hex text, and a
/// local user ID.
///
/// The value is laid out like a version 1 UUID except that the first four
/// bytes carry `uid` in little-endian order instead of the low timestamp
/// bits. Two values minted for the same user within the same clock tick are
/// therefore identical up to the clock sequence.
pub fn new_v2<R: RngCore>(clock: &mut TimeSource<R>, node: &str, uid: u32) -> Result<Uuid, Error> {
    let mut octet = ByteOctet::bounded(16);
    octet.append(&clock.provide_with_uid(uid)?)?;
    octet.append(&HexSource::new(node).provide()?)?;
    let mut uuid = Uuid::from_octet(&octet)?;
    uuid.set_version(2);
    uuid.set_variant(Variant::Rfc4122);
    Ok(uuid)
}

/// Generates a version 2 UUID object.
///
/// This function shares the process-wide time source with [`uuid1`], so the
/// clock sequence and tick counter advance across both entry points.
///
/// # Examples
///
/// ```rust
/// let uuid = rfc4122::uuid2("08:00:20:0c:9a:66", 1000)?;
/// assert_eq!(uuid.version(), 2);
/// # Ok::<(), rfc4122::Error>(())
/// ```
///
/// [`uuid1`]: crate::uuid1
pub fn uuid2(node: &str, uid: u32) -> Result<Uuid, Error> {
    global::with_global_clock(|clock| new_v2(clock, node, uid))
}

#[cfg(test)]
mod tests {
    use super::uuid2;
    use crate::{Error, Uuid, Variant};

    const NODE: &str = "08:00:20:0c:9a:66";

    /// Draws one sample, waiting out tick counter exhaustion.
    fn sample(uid: u32) -> Uuid {
        loop {
            match uuid2(NODE, uid) {
                Ok(e) => return e,
                Err(Error::SequenceOverflow) => std::thread::yield_now(),
                Err(err) => panic!("{err}"),
            }
        }
    }

    /// Embeds the user id little endian in the first four bytes
    #[test]
    fn embeds_the_user_id_little_endian_in_the_first_four_bytes() {
        let e = sample(0x12345678);
        assert_eq!(&e.as_bytes()[..4], [0x78, 0x56, 0x34, 0x12]);
        let e = sample(1000);
        assert_eq!(&e.as_bytes()[..4], [0xe8, 0x03, 0x00, 0x00]);
    }

    /// Sets correct variant and version bits
    #[test]
    fn sets_correct_variant_and_version_bits() {
        for uid in 0..1_000 {
            let e = sample(uid);
            assert_eq!(e.variant(), Variant::Rfc4122);
            assert_eq!(e.version(), 2);
        }
    }

    /// Embeds the node in the last six bytes
    #[test]
    fn embeds_the_node_in_the_last_six_bytes() {
        let e = sample(42);
        assert_eq!(&e.as_bytes()[10..], [0x08, 0x00, 0x20, 0x0c, 0x9a, 0x66]);
    }

    /// Generates canonical string
    #[test]
    fn generates_canonical_string() {
        let pattern = r"^[0-9a-f]{8}-[0-9a-f]{4}-2[0-9a-f]{3}-[89ab][0-9a-f]{3}-0800200c9a66$";
        let re = regex::Regex::new(pattern).unwrap();
        for uid in [0, 1, 0xffff_ffff] {
            assert!(re.is_match(&sample(uid).encode()));
        }
    }
}
