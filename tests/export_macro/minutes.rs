use sysuptime::error::Result;

sysuptime::make_export!(pub GetUptimeMinutes: uptime_minutes() -> Result<i64> else 0);
fn uptime_minutes() -> Result<i64> {
    sysuptime::clock::uptime_seconds().map(|secs| secs / 60)
}

fn main() {
    assert!(GetUptimeMinutes() >= 0);
}
