//! Asks the OS for the firmware type it recorded at boot.

use crate::{errors::QueryResult, firmware::FirmwareType, platform::Platform};

pub const FIRMWARE_TYPE_UNKNOWN: u32 = 0;
pub const FIRMWARE_TYPE_BIOS: u32 = 1;
pub const FIRMWARE_TYPE_UEFI: u32 = 2;
pub const FIRMWARE_TYPE_MAX: u32 = 3;

pub fn detect<P: Platform>(platform: &P) -> QueryResult<FirmwareType> {
    match platform.query_firmware_type()? {
        Some(code) => {
            debug!("firmware type query returned {}", code);
            Ok(classify(code))
        }
        None => {
            info!("firmware type query failed; firmware type is undetermined");
            Ok(FirmwareType::Undetermined)
        }
    }
}

pub fn classify(code: u32) -> FirmwareType {
    match code {
        FIRMWARE_TYPE_BIOS => FirmwareType::Bios,
        FIRMWARE_TYPE_UEFI => FirmwareType::Uefi,
        FIRMWARE_TYPE_UNKNOWN => FirmwareType::Undetermined,
        other => {
            warn!("unrecognized firmware type code {} (max is {})", other, FIRMWARE_TYPE_MAX);
            FirmwareType::Undetermined
        }
    }
}
