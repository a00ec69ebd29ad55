use core::fmt;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The platform clock rejected the read; carries the OS error number.
    Clock(i32),
}

impl Error {
    #[cfg_attr(not(unix), allow(dead_code))]
    pub(crate) fn from_ffi_res(res: ffi::c_int) -> Result<()> {
        if res == 0 {
            Ok(())
        } else {
            Err(Error::last_os_error())
        }
    }

    #[cfg_attr(not(unix), allow(dead_code))]
    fn last_os_error() -> Error {
        Error::Clock(std::io::Error::last_os_error().raw_os_error().unwrap_or(0))
    }
}

impl std::error::Error for Error {}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Clock(errno) => write!(
                f,
                "the boot clock could not be read: {}",
                std::io::Error::from_raw_os_error(*errno)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ffi_res_success() {
        assert_eq!(Error::from_ffi_res(0), Ok(()));
    }

    #[test]
    fn test_from_ffi_res_failure() {
        assert!(matches!(Error::from_ffi_res(-1), Err(Error::Clock(_))));
    }

    #[test]
    fn test_display_names_the_clock() {
        let msg = Error::Clock(22).to_string();
        assert!(msg.starts_with("the boot clock could not be read: "));
    }
}
