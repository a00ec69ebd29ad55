//! Reading the platform's time-since-boot counter.

use crate::error::Result;

const MILLIS_PER_SEC: u64 = 1000;

/// Anything that can report milliseconds elapsed since the machine booted.
pub trait TickSource {
    fn millis(&self) -> Result<u64>;
}

/// Handle to the host's boot-tick counter.
///
/// On Windows this is `GetTickCount64`. On Linux and Android it is `CLOCK_BOOTTIME`, which, like the
/// Windows counter, keeps running while the machine is suspended. Other Unix targets read
/// `CLOCK_MONOTONIC`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BootClock;

impl BootClock {
    #[inline]
    pub fn new() -> Self {
        BootClock
    }
}

#[cfg(windows)]
impl TickSource for BootClock {
    #[inline]
    fn millis(&self) -> Result<u64> {
        Ok(unsafe { ffi::GetTickCount64() })
    }
}

#[cfg(unix)]
impl TickSource for BootClock {
    fn millis(&self) -> Result<u64> {
        let mut ts = core::mem::MaybeUninit::<ffi::timespec>::uninit();
        crate::error::Error::from_ffi_res(unsafe {
            ffi::clock_gettime(ffi::BOOT_CLOCK, ts.as_mut_ptr())
        })?;
        // clock_gettime fills the struct on success
        let ts = unsafe { ts.assume_init() };
        Ok(crate::utils::timespec_to_millis(&ts))
    }
}

/// Whole seconds in `millis`, rounded down.
///
/// Total over `u64`: `u64::MAX / 1000` is well below `i64::MAX`.
#[inline]
pub const fn millis_to_seconds(millis: u64) -> i64 {
    (millis / MILLIS_PER_SEC) as i64
}

pub fn uptime_seconds_from<T: TickSource + ?Sized>(source: &T) -> Result<i64> {
    source.millis().map(millis_to_seconds)
}

/// Whole seconds since boot, read from [`BootClock`].
#[inline]
pub fn uptime_seconds() -> Result<i64> {
    uptime_seconds_from(&BootClock)
}

/// Milliseconds since boot, read from [`BootClock`].
#[inline]
pub fn uptime_millis() -> Result<u64> {
    BootClock.millis()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    struct Fixed(u64);

    impl TickSource for Fixed {
        fn millis(&self) -> Result<u64> {
            Ok(self.0)
        }
    }

    struct Broken;

    impl TickSource for Broken {
        fn millis(&self) -> Result<u64> {
            Err(Error::Clock(22))
        }
    }

    #[test]
    fn test_millis_to_seconds() {
        assert_eq!(millis_to_seconds(1500), 1);
        assert_eq!(millis_to_seconds(999), 0);
        assert_eq!(millis_to_seconds(60_000), 60);
        assert_eq!(millis_to_seconds(0), 0);
    }

    #[test]
    fn test_millis_to_seconds_max() {
        assert_eq!(millis_to_seconds(u64::MAX), (u64::MAX / 1000) as i64);
        assert!(millis_to_seconds(u64::MAX) > 0);
    }

    #[test]
    fn test_uptime_seconds_from_fixed() {
        assert_eq!(uptime_seconds_from(&Fixed(1500)), Ok(1));
        assert_eq!(uptime_seconds_from(&Fixed(999)), Ok(0));
        assert_eq!(uptime_seconds_from(&Fixed(60_000)), Ok(60));
    }

    #[test]
    fn test_uptime_seconds_from_dyn() {
        let source: &dyn TickSource = &Fixed(3_600_250);
        assert_eq!(uptime_seconds_from(source), Ok(3600));
    }

    #[test]
    fn test_uptime_seconds_from_error() {
        assert_eq!(uptime_seconds_from(&Broken), Err(Error::Clock(22)));
    }

    #[test]
    fn test_boot_clock_reads() {
        assert!(BootClock::new().millis().is_ok());
    }

    #[test]
    fn test_boot_clock_non_decreasing() {
        let first = uptime_millis().unwrap();
        let second = uptime_millis().unwrap();
        assert!(second >= first);
    }

    #[test]
    fn test_uptime_seconds_matches_millis() {
        let millis = uptime_millis().unwrap();
        let secs = uptime_seconds().unwrap();
        assert!(secs >= millis_to_seconds(millis));
        assert!(secs >= 0);
    }
}
