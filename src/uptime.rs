use core::fmt;
use core::time::Duration;

use crate::clock::{millis_to_seconds, BootClock, TickSource};
use crate::error::Result;

/// Time elapsed since the machine booted, at millisecond resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uptime(Duration);

impl Uptime {
    /// Reads the boot clock.
    #[inline]
    pub fn now() -> Result<Self> {
        Self::read(&BootClock)
    }

    pub fn read<T: TickSource + ?Sized>(source: &T) -> Result<Self> {
        source.millis().map(Self::from_millis)
    }

    #[inline]
    pub const fn from_millis(millis: u64) -> Self {
        Uptime(Duration::from_millis(millis))
    }

    /// Whole seconds, rounded down.
    #[inline]
    pub fn as_secs(&self) -> i64 {
        millis_to_seconds(self.as_millis())
    }

    #[inline]
    pub fn as_millis(&self) -> u64 {
        // constructed from a u64 millisecond count, so this never truncates
        self.0.as_millis() as u64
    }

    #[inline]
    pub const fn as_duration(&self) -> Duration {
        self.0
    }
}

impl From<Uptime> for Duration {
    fn from(uptime: Uptime) -> Duration {
        uptime.0
    }
}

impl fmt::Display for Uptime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.0.as_secs();
        let (days, rem) = (secs / 86_400, secs % 86_400);
        let (hours, mins, secs) = (rem / 3600, rem % 3600 / 60, rem % 60);
        if days > 0 {
            write!(f, "{}d ", days)?;
        }
        write!(f, "{:02}:{:02}:{:02}", hours, mins, secs)
    }
}
