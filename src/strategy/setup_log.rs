//! Reads the boot environment that Windows Setup recorded when the OS was installed.
//!
//! This works on every release, but only reflects the firmware mode at install time, and
//! the log may have been cleaned up since.

use crate::{
    errors::{EnvironmentQueryError, QueryResult},
    firmware::FirmwareType,
    platform::Platform,
};
use regex::Regex;
use std::{
    env,
    path::{Path, PathBuf},
    sync::OnceLock,
};

/// Precedes the firmware classification in the setup log.
pub const MARKER: &str = "Detected boot environment:";

const LOG_PATH: &str = r"Panther\setupact.log";
const SYSTEM_ROOT: &str = r"C:\Windows";

/// `%SystemRoot%\Panther\setupact.log`.
pub fn default_path() -> PathBuf {
    env::var_os("SystemRoot")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(SYSTEM_ROOT))
        .join(LOG_PATH)
}

pub fn detect<P: Platform>(platform: &P, path: &Path) -> QueryResult<FirmwareType> {
    let log = match platform.read_log(path) {
        Ok(Some(log)) => log,
        Ok(None) => {
            info!("setup log {} does not exist", path.display());
            return Ok(FirmwareType::Undetermined);
        }
        Err(source) => {
            return Err(EnvironmentQueryError::SetupLog { path: path.to_path_buf(), source })
        }
    };

    Ok(classify(&log))
}

/// Classifies the token on the first marker line that carries one. Marker lines with
/// nothing after the marker are skipped.
pub fn classify(log: &str) -> FirmwareType {
    let token = log.lines().find_map(|line| {
        line.find(MARKER)
            .map(|pos| line[pos + MARKER.len()..].trim())
            .filter(|token| !token.is_empty())
    });

    match token {
        Some(token) => {
            debug!("setup log recorded boot environment `{}`", token);
            classify_token(token)
        }
        None => {
            info!("setup log does not record a boot environment");
            FirmwareType::Undetermined
        }
    }
}

fn classify_token(token: &str) -> FirmwareType {
    static PATTERN: OnceLock<Regex> = OnceLock::new();

    let pattern = PATTERN.get_or_init(|| {
        Regex::new("^(?:(?P<bios>BIOS)|(?P<efi>U?EFI))$").expect("bad regex for boot environment")
    });

    match pattern.captures(token) {
        Some(captures) if captures.name("bios").is_some() => FirmwareType::Bios,
        Some(_) => FirmwareType::Uefi,
        None => FirmwareType::Undetermined,
    }
}
