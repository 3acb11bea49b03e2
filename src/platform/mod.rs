//! Thin adapters over the host facilities that the detection strategies consume.

#[cfg(test)]
pub(crate) mod mock;
#[cfg(not(windows))]
mod unix;
#[cfg(windows)]
mod windows;

#[cfg(not(windows))]
pub use self::unix::UnixPlatform as NativePlatform;
#[cfg(windows)]
pub use self::windows::WindowsPlatform as NativePlatform;

use crate::{errors::QueryResult, os_version::OsVersion};
use std::{
    fmt::{self, Display, Formatter},
    fs, io,
    path::Path,
};

/// The `ERROR_INVALID_FUNCTION` code, returned by the firmware variable API on legacy BIOS.
pub const ERROR_INVALID_FUNCTION: u32 = 1;

/// Which family of operating system the adapter is running on.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Host {
    Windows,
    Linux,
    Other,
}

/// A firmware variable namespace identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Guid {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

/// The all-zero namespace, which no firmware variable lives in.
pub const NULL_GUID: Guid = Guid { data1: 0, data2: 0, data3: 0, data4: [0; 8] };

impl Display for Guid {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        let d = &self.data4;
        write!(
            fmt,
            "{{{:08x}-{:04x}-{:04x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}}}",
            self.data1, self.data2, self.data3, d[0], d[1], d[2], d[3], d[4], d[5], d[6], d[7]
        )
    }
}

/// Everything the strategies need from the host. Each method maps onto a single
/// read-only query; none of them write anything.
pub trait Platform {
    fn host(&self) -> Host;

    fn os_version(&self) -> QueryResult<OsVersion>;

    /// Reads a text log, decoding invalid UTF-8 lossily. `Ok(None)` if the file does not exist.
    fn read_log(&self, path: &Path) -> io::Result<Option<String>> {
        match fs::read(path) {
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(why) if why.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(why) => Err(why),
        }
    }

    fn directory_exists(&self, path: &Path) -> bool { path.is_dir() }

    fn path_exists(&self, path: &Path) -> bool { path.exists() }

    /// Attempts to read the firmware variable `name` in `namespace`, discarding any data,
    /// and returns the resulting system error code (0 if the read succeeded).
    fn probe_firmware_variable(&self, name: &str, namespace: &Guid) -> QueryResult<u32>;

    /// Asks the OS for its firmware type code. `Ok(None)` if the call itself reported failure.
    fn query_firmware_type(&self) -> QueryResult<Option<u32>>;
}

impl<P: Platform + ?Sized> Platform for &P {
    fn host(&self) -> Host { (**self).host() }

    fn os_version(&self) -> QueryResult<OsVersion> { (**self).os_version() }

    fn read_log(&self, path: &Path) -> io::Result<Option<String>> { (**self).read_log(path) }

    fn directory_exists(&self, path: &Path) -> bool { (**self).directory_exists(path) }

    fn path_exists(&self, path: &Path) -> bool { (**self).path_exists(path) }

    fn probe_firmware_variable(&self, name: &str, namespace: &Guid) -> QueryResult<u32> {
        (**self).probe_firmware_variable(name, namespace)
    }

    fn query_firmware_type(&self) -> QueryResult<Option<u32>> { (**self).query_firmware_type() }
}

/// The adapter for the host this binary was built for.
pub fn native() -> NativePlatform { NativePlatform::default() }
