#[cfg(unix)]
pub fn timespec_to_millis(ts: &ffi::timespec) -> u64 {
    timespec_parts_to_millis(ts.tv_sec as i64, ts.tv_nsec as i64)
}

/// Whole milliseconds in a `(seconds, nanoseconds)` pair, saturating at the ends of `u64`.
#[cfg_attr(not(unix), allow(dead_code))]
pub fn timespec_parts_to_millis(secs: i64, nanos: i64) -> u64 {
    if secs < 0 || nanos < 0 {
        return 0;
    }
    (secs as u64)
        .saturating_mul(1000)
        .saturating_add(nanos as u64 / 1_000_000)
}
