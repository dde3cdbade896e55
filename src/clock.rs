//! Monotonic time source for the time-based UUID versions 1 and 2.

use rand::RngCore;

use crate::{ByteOctet, Error};

/// Milliseconds between the Gregorian reform (1582-10-15) and the Unix epoch.
pub const GREGORIAN_OFFSET_MS: u64 = 12_219_292_800_000;

/// Upper bound of the emulated sub-millisecond sequence.
const MAX_NANO_SEQ: u32 = 10_000;

/// Produces the 10-byte time portion of a version 1 or 2 UUID: the 60-bit
/// RFC 4122 timestamp split into its three fields, followed by the 14-bit
/// clock sequence.
///
/// The host clock only offers millisecond resolution, so ordering within a
/// millisecond is emulated by a counter that takes the place of the
/// 100-nanosecond digits; it resets whenever the millisecond tick advances
/// and hard-errors past 10000 draws in one tick. A clock regression
/// increments the clock sequence instead, as RFC 4122 prescribes.
///
/// The three state fields are coupled across one `provide` call, so a source
/// shared by several threads must sit behind a single lock; the
/// [`uuid1`](crate::uuid1)/[`uuid2`](crate::uuid2) entry functions use one
/// process-wide mutex-guarded instance for exactly that reason. The
/// following example does the same by hand:
///
/// ```rust
/// use rand::rngs::OsRng;
/// use std::{sync, thread};
/// use rfc4122::TimeSource;
///
/// let clock = sync::Arc::new(sync::Mutex::new(TimeSource::new(OsRng)));
/// thread::scope(|s| {
///     for _ in 0..4 {
///         let clock = sync::Arc::clone(&clock);
///         s.spawn(move || {
///             let bytes = clock.lock().unwrap().provide().unwrap();
///             assert_eq!(bytes.len(), 10);
///         });
///     }
/// });
/// ```
#[derive(Clone, Debug, Default)]
pub struct TimeSource<R> {
    last_ms: u64,
    nano_seq: u32,
    clock_seq: Option<u16>,

    /// Random number generator seeding the clock sequence.
    rng: R,
}

impl<R: RngCore> TimeSource<R> {
    /// Creates a source with an unseeded clock sequence.
    pub const fn new(rng: R) -> Self {
        Self {
            last_ms: 0,
            nano_seq: 0,
            clock_seq: None,
            rng,
        }
    }

    /// Produces the 10 time bytes for the current system time.
    pub fn provide(&mut self) -> Result<ByteOctet, Error> {
        use std::time;
        self.provide_at(
            time::SystemTime::now()
                .duration_since(time::UNIX_EPOCH)
                .expect("clock may have gone backwards")
                .as_millis() as u64,
        )
    }

    /// Produces the 10 time bytes for a given Unix millisecond timestamp.
    ///
    /// This is the stateful core: the sub-millisecond sequence advances while
    /// `now_ms` stands still, resets when it moves forward, and a move
    /// backwards bumps the clock sequence. Fails with
    /// [`Error::SequenceOverflow`] on the 10001st draw within one
    /// millisecond, leaving the state untouched.
    pub fn provide_at(&mut self, now_ms: u64) -> Result<ByteOctet, Error> {
        let mut clock_seq = match self.clock_seq {
            Some(seq) => seq,
            // seeded exactly once per source, from 14 random bits
            None => (self.rng.next_u32() & 0x3fff) as u16,
        };

        let mut nano_seq = self.nano_seq + 1;

        // The sign of this drift term decides regression handling. The
        // fractional sequence contribution is part of the contract; keep the
        // formula as is.
        let dt = (now_ms as f64 - self.last_ms as f64)
            + (nano_seq - self.nano_seq) as f64 / f64::from(MAX_NANO_SEQ);

        if dt < 0.0 {
            log::warn!("clock moved backwards; incrementing clock sequence");
            clock_seq = clock_seq.wrapping_add(1) & 0x3fff;
        }
        if dt < 0.0 || now_ms > self.last_ms {
            nano_seq = 0;
        }
        if nano_seq >= MAX_NANO_SEQ {
            return Err(Error::SequenceOverflow);
        }

        self.last_ms = now_ms;
        self.nano_seq = nano_seq;
        self.clock_seq = Some(clock_seq);

        let ts_ms = now_ms + GREGORIAN_OFFSET_MS;

        // time_low: least significant 32 bits of the 100ns tick count
        let time_low = ((ts_ms & 0xfff_ffff) * u64::from(MAX_NANO_SEQ) + u64::from(nano_seq))
            as u32;

        // time_mid and time_hi: the next 28 bits of the tick count; the top
        // nibble of time_hi is overwritten with the version tag later
        let ticks_high = ((u128::from(ts_ms) * u128::from(MAX_NANO_SEQ)) >> 32) as u64 & 0xfff_ffff;
        let time_mid = (ticks_high & 0xffff) as u16;
        let time_hi = (ticks_high >> 16) as u16;

        let mut octet = ByteOctet::bounded(10);
        for byte in time_low.to_be_bytes() {
            octet.push(byte)?;
        }
        for byte in time_mid.to_be_bytes() {
            octet.push(byte)?;
        }
        for byte in time_hi.to_be_bytes() {
            octet.push(byte)?;
        }
        octet.push((clock_seq >> 8) as u8)?;
        octet.push((clock_seq & 0xff) as u8)?;
        Ok(octet)
    }

    /// Produces the 10 time bytes with the low timestamp bits replaced by a
    /// numeric UID, as version 2 embeds it.
    ///
    /// The UID is packed little-endian regardless of the host byte order.
    pub fn provide_with_uid(&mut self, uid: u32) -> Result<ByteOctet, Error> {
        let mut octet = self.provide()?;
        embed_uid(&mut octet, uid)?;
        Ok(octet)
    }

    /// UID-embedding variant of [`provide_at`](Self::provide_at).
    pub fn provide_at_with_uid(&mut self, now_ms: u64, uid: u32) -> Result<ByteOctet, Error> {
        let mut octet = self.provide_at(now_ms)?;
        embed_uid(&mut octet, uid)?;
        Ok(octet)
    }

    /// Returns the current clock sequence, if already seeded.
    pub fn clock_seq(&self) -> Option<u16> {
        self.clock_seq
    }
}

fn embed_uid(octet: &mut ByteOctet, uid: u32) -> Result<(), Error> {
    for (offset, byte) in uid.to_le_bytes().into_iter().enumerate() {
        octet.set(offset, byte)?;
    }
    Ok(())
}
