use sysuptime::error::{Error, Result};

sysuptime::make_export!(
    /// Always fails.
    BrokenReading: broken() -> Result<i64> else -1
);
fn broken() -> Result<i64> {
    Err(Error::Clock(5))
}

fn main() {
    assert_eq!(BrokenReading(), -1);
}
