#![deny(clippy::all)]

#[macro_use]
extern crate fomat_macros;

#[macro_use]
extern crate log;

/// Errors raised when the host cannot be queried.
pub mod errors;

/// The detected firmware type, and its serialized report.
pub mod firmware;

/// Miscellaneous functions used throughout the crate.
pub mod misc;

/// Comparable operating system versions.
pub mod os_version;

/// Adapters over the host's firmware query facilities.
pub mod platform;

/// Detection strategies, and the selector which picks one for the running OS.
pub mod strategy;

pub use self::{
    errors::{EnvironmentQueryError, ModeParseError},
    firmware::{Detection, FirmwareType, Report},
    os_version::OsVersion,
    platform::{native, Platform},
    strategy::{Detector, Mode, Strategy},
};
