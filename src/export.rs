//! Symbols exported over the C ABI. Declared for C callers in `include/sysuptime.h`.

use crate::clock::{uptime_millis, uptime_seconds};

make_export!(
    /// Whole seconds since the operating system booted, `floor(ms / 1000)`. Never negative;
    /// returns 0 if the platform clock cannot be read.
    pub GetSystemUptimeSeconds: uptime_seconds() -> Result<i64> else 0
);

make_export!(
    /// Milliseconds since the operating system booted; 0 if the platform clock cannot be read.
    pub GetSystemUptimeMillis: uptime_millis() -> Result<u64> else 0
);
