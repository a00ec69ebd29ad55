//! Seconds since boot, read from the host's boot-tick counter and exported over the C ABI as
//! `GetSystemUptimeSeconds`.
#[cfg(not(any(unix, windows)))]
compile_error!("sysuptime only knows the boot clocks of Unix and Windows targets");

#[macro_use]
mod macros;

pub mod clock;
pub mod error;
pub mod export;
pub mod uptime;
mod utils;

#[doc(hidden)]
pub use log;

pub use clock::{BootClock, TickSource};
pub use export::{GetSystemUptimeMillis, GetSystemUptimeSeconds};
pub use uptime::Uptime;
