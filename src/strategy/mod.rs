pub mod direct_query;
pub mod legacy_probe;
pub mod setup_log;
pub mod sysfs;

use crate::{
    errors::{EnvironmentQueryError, ModeParseError, QueryResult},
    firmware::{Detection, FirmwareType},
    os_version::{OsVersion, WINDOWS_7, WINDOWS_8},
    platform::{Host, Platform},
};
use serde_derive::Serialize;
use std::{
    fmt::{self, Display, Formatter},
    path::PathBuf,
    str::FromStr,
};

/// A single technique for determining the firmware type.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq, Serialize)]
pub enum Strategy {
    /// Search the Windows Setup log for the boot environment recorded at install time.
    SetupLog,
    /// Observe how `GetFirmwareEnvironmentVariable` fails. Windows 7 and later.
    #[serde(rename = "GetFirmwareEnvironmentVariable")]
    LegacyProbe,
    /// Ask `GetFirmwareType`. Windows 8 and later.
    #[serde(rename = "GetFirmwareType")]
    DirectQuery,
    /// Check for the EFI directory in Linux's sysfs.
    Sysfs,
}

impl Strategy {
    pub fn name(self) -> &'static str {
        match self {
            Strategy::SetupLog => "SetupLog",
            Strategy::LegacyProbe => "GetFirmwareEnvironmentVariable",
            Strategy::DirectQuery => "GetFirmwareType",
            Strategy::Sysfs => "Sysfs",
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result { fmt.write_str(self.name()) }
}

/// Windows releases, newest first, paired with the best strategy they support.
pub const VERSION_GATES: &[(OsVersion, Strategy)] =
    &[(WINDOWS_8, Strategy::DirectQuery), (WINDOWS_7, Strategy::LegacyProbe)];

/// Used on Windows releases older than every gate.
pub const FALLBACK: Strategy = Strategy::SetupLog;

/// Picks the strategy for a Windows release from `VERSION_GATES`.
pub fn strategy_for(version: OsVersion) -> Strategy {
    VERSION_GATES
        .iter()
        .find(|(minimum, _)| version >= *minimum)
        .map_or(FALLBACK, |&(_, strategy)| strategy)
}

/// How the caller wants detection to proceed.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Mode {
    /// Choose a strategy that the running OS supports.
    #[default]
    Auto,
    /// Run this strategy, whether or not the running OS supports it.
    Explicit(Strategy),
}

impl FromStr for Mode {
    type Err = ModeParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mode = match input.to_ascii_lowercase().as_str() {
            "auto" => Mode::Auto,
            "setuplog" => Mode::Explicit(Strategy::SetupLog),
            "getfirmwareenvironmentvariable" | "legacyprobe" => {
                Mode::Explicit(Strategy::LegacyProbe)
            }
            "getfirmwaretype" | "directquery" => Mode::Explicit(Strategy::DirectQuery),
            "sysfs" => Mode::Explicit(Strategy::Sysfs),
            _ => return Err(ModeParseError(input.to_owned())),
        };

        Ok(mode)
    }
}

impl Display for Mode {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match self {
            Mode::Auto => fmt.write_str("Auto"),
            Mode::Explicit(strategy) => strategy.fmt(fmt),
        }
    }
}

/// Selects and runs one strategy against a platform.
///
/// Exactly one strategy runs per detection, and its answer is final: an undetermined
/// result or an error is never retried through another strategy.
pub struct Detector<P> {
    platform:  P,
    setup_log: PathBuf,
}

impl<P: Platform> Detector<P> {
    pub fn new(platform: P) -> Self { Detector { platform, setup_log: setup_log::default_path() } }

    /// Reads the setup log from `path` instead of `%SystemRoot%\Panther\setupact.log`.
    pub fn with_setup_log<T: Into<PathBuf>>(mut self, path: T) -> Self {
        self.setup_log = path.into();
        self
    }

    pub fn detect(&self, mode: Mode) -> QueryResult<Detection> {
        let strategy = match mode {
            Mode::Auto => self.select()?,
            Mode::Explicit(strategy) => {
                info!("using the {} strategy as requested", strategy);
                strategy
            }
        };

        self.run(strategy)
    }

    /// The strategy that `Mode::Auto` would run on this host.
    pub fn select(&self) -> QueryResult<Strategy> {
        match self.platform.host() {
            Host::Windows => {
                let version = self.platform.os_version()?;
                let strategy = strategy_for(version);
                info!("Windows {} detected: using the {} strategy", version, strategy);
                Ok(strategy)
            }
            Host::Linux => {
                info!("Linux detected: using the {} strategy", Strategy::Sysfs);
                Ok(Strategy::Sysfs)
            }
            Host::Other => Err(EnvironmentQueryError::UnsupportedHost(
                "no detection strategy is known for this operating system",
            )),
        }
    }

    pub fn run(&self, strategy: Strategy) -> QueryResult<Detection> {
        let firmware: FirmwareType = match strategy {
            Strategy::SetupLog => setup_log::detect(&self.platform, &self.setup_log)?,
            Strategy::LegacyProbe => legacy_probe::detect(&self.platform)?,
            Strategy::DirectQuery => direct_query::detect(&self.platform)?,
            Strategy::Sysfs => sysfs::detect(&self.platform),
        };

        Ok(Detection::new(firmware, strategy))
    }
}
