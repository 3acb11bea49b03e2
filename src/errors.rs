use std::{io, path::PathBuf};
use thiserror::Error;

pub type QueryResult<T> = Result<T, EnvironmentQueryError>;

/// The host could not be queried at all. A legitimate "cannot determine" outcome is never
/// reported through this type; it is returned as `FirmwareType::Undetermined` instead.
#[derive(Debug, Error)]
pub enum EnvironmentQueryError {
    #[error("failed to read the OS version")]
    OsVersion(#[source] io::Error),

    #[error("failed to read the setup log at {path:?}")]
    SetupLog {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{symbol} is not exported by {module}")]
    MissingEntryPoint { module: &'static str, symbol: &'static str },

    #[error("firmware detection is not supported on this host: {}", _0)]
    UnsupportedHost(&'static str),
}

#[derive(Debug, Error, PartialEq)]
#[error(
    "unknown query mode `{0}`: expected Auto, SetupLog, GetFirmwareEnvironmentVariable \
     (LegacyProbe), GetFirmwareType (DirectQuery), or Sysfs"
)]
pub struct ModeParseError(pub String);
