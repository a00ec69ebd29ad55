//! Public macros

/// A convenience macro for exporting a fallible, argument-less reading over the C ABI.
///
/// The generated function is `#[no_mangle] extern "C"`, so foreign callers bind to it by its
/// exact name. When the wrapped function errors, the error is logged and `$fallback` is returned.
///
/// # Example
///
/// ```ignore
/// sysuptime::make_export!(pub GetUptimeMinutes: uptime_minutes() -> Result<i64> else 0);
/// fn uptime_minutes() -> sysuptime::error::Result<i64> {
///     sysuptime::clock::uptime_seconds().map(|secs| secs / 60)
/// }
/// ```
#[macro_export]
macro_rules! make_export {
    ( $( #[$meta:meta] )* $wis:vis $export_name:ident: $original:ident() -> Result<$rtype:ty> else $fallback:expr ) => {
        $( #[$meta] )*
        #[no_mangle]
        #[allow(non_snake_case)]
        $wis extern "C" fn $export_name() -> $rtype {
            match $original() {
                Ok(ret) => ret,
                Err(err) => {
                    let fallback: $rtype = $fallback;
                    $crate::log::warn!(
                        target: "sysuptime",
                        "{}: {}, returning {:?}",
                        stringify!($export_name),
                        err,
                        fallback
                    );
                    fallback
                }
            }
        }
    };
}
