use super::{Guid, Host, Platform};
use crate::{
    errors::{EnvironmentQueryError, QueryResult},
    os_version::OsVersion,
};

const NO_WINDOWS_API: &str = "the firmware query API is only available on Windows";
const NO_WINDOWS_VERSION: &str = "strategy gating needs a Windows version";

#[derive(Debug, Default)]
pub struct UnixPlatform;

impl Platform for UnixPlatform {
    fn host(&self) -> Host {
        if cfg!(target_os = "linux") {
            Host::Linux
        } else {
            Host::Other
        }
    }

    /// Only Windows releases gate the strategies; there is no version to report here.
    fn os_version(&self) -> QueryResult<OsVersion> {
        Err(EnvironmentQueryError::UnsupportedHost(NO_WINDOWS_VERSION))
    }

    fn probe_firmware_variable(&self, _name: &str, _namespace: &Guid) -> QueryResult<u32> {
        Err(EnvironmentQueryError::UnsupportedHost(NO_WINDOWS_API))
    }

    fn query_firmware_type(&self) -> QueryResult<Option<u32>> {
        Err(EnvironmentQueryError::UnsupportedHost(NO_WINDOWS_API))
    }
}
