//! Process-wide shared time source backing the version 1 and 2 entry points.

use std::sync;

use inner::GlobalClockInner;
pub(crate) use inner::GlobalClockRng;

use crate::clock::TimeSource;

/// Returns the lock handle of the process-wide time source, creating one if none exists.
fn lock_global_clock() -> sync::MutexGuard<'static, GlobalClockInner> {
    static G: sync::OnceLock<sync::Mutex<GlobalClockInner>> = sync::OnceLock::new();
    G.get_or_init(Default::default)
        .lock()
        .expect("rfc4122: could not lock global time source")
}

/// Runs `f` with exclusive access to the process-wide time source.
///
/// All time-based values produced through this handle draw from one clock
/// sequence, so concurrent callers within the same millisecond advance a
/// single tick counter instead of colliding.
pub(crate) fn with_global_clock<T>(f: impl FnOnce(&mut TimeSource<GlobalClockRng>) -> T) -> T {
    f(lock_global_clock().get_mut())
}

mod inner {
    use std::fmt;

    use rand::rngs::adapter::ReseedingRng;
    use rand::rngs::OsRng;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha12Core;

    use crate::clock::TimeSource;

    /// The random number generator seeding clock sequences of the global time source.
    ///
    /// It currently employs [`ChaCha12Core`] with the [`ReseedingRng`] wrapper to
    /// emulate the strategy used by [`rand::rngs::ThreadRng`].
    pub struct GlobalClockRng(ReseedingRng<ChaCha12Core, OsRng>);

    impl fmt::Debug for GlobalClockRng {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("GlobalClockRng(..)")
        }
    }

    impl RngCore for GlobalClockRng {
        fn next_u32(&mut self) -> u32 {
            self.0.next_u32()
        }

        fn next_u64(&mut self) -> u64 {
            self.0.next_u64()
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            self.0.fill_bytes(dest)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.0.try_fill_bytes(dest)
        }
    }

    /// A thin wrapper to reset the state when the process ID changes (i.e., upon Unix forks).
    #[derive(Debug)]
    pub struct GlobalClockInner {
        #[cfg(unix)]
        pid: u32,
        source: TimeSource<GlobalClockRng>,
    }

    impl Default for GlobalClockInner {
        fn default() -> Self {
            let core = ChaCha12Core::from_rng(OsRng)
                .expect("rfc4122: could not initialize global time source");
            Self {
                #[cfg(unix)]
                pid: std::process::id(),
                source: TimeSource::new(GlobalClockRng(ReseedingRng::new(
                    core,
                    1024 * 64,
                    OsRng,
                ))),
            }
        }
    }

    impl GlobalClockInner {
        /// Returns a mutable reference to the inner [`TimeSource`] instance, resetting the
        /// state on Unix if the process ID has changed.
        pub fn get_mut(&mut self) -> &mut TimeSource<GlobalClockRng> {
            #[cfg(unix)]
            if self.pid != std::process::id() {
                *self = Default::default();
            }
            &mut self.source
        }
    }
}
