use sysuptime::{GetSystemUptimeSeconds, Uptime};

fn main() {
    env_logger::init();
    match Uptime::now() {
        Ok(uptime) => println!("up {} ({} ms)", uptime, uptime.as_millis()),
        Err(err) => eprintln!("{}", err),
    }
    println!("GetSystemUptimeSeconds() = {}", GetSystemUptimeSeconds());
}
