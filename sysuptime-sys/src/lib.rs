//! Raw declarations of the counters each platform keeps since boot.
//!
//! Nothing here interprets the readings; see the `sysuptime` crate for the safe wrappers.
#![no_std]
#![allow(non_snake_case)]

pub use cty::c_int;

#[cfg(windows)]
#[link(name = "kernel32")]
extern "system" {
    /// Milliseconds elapsed since the system was started. Never fails.
    pub fn GetTickCount64() -> u64;
}

#[cfg(unix)]
pub use libc::{clock_gettime, clockid_t, timespec};

/// The clock whose epoch is the last boot and which keeps running while suspended.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub const BOOT_CLOCK: clockid_t = libc::CLOCK_BOOTTIME;

// Darwin's CLOCK_MONOTONIC is mach_continuous_time and counts across sleep.
#[cfg(all(
    unix,
    not(any(target_os = "linux", target_os = "android"))
))]
pub const BOOT_CLOCK: clockid_t = libc::CLOCK_MONOTONIC;
