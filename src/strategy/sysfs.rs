//! Linux exposes the EFI runtime services under `/sys/firmware/efi` only when the kernel
//! was booted through UEFI.

use crate::{firmware::FirmwareType, platform::Platform};
use std::path::Path;

pub const SYSFS_FIRMWARE: &str = "/sys/firmware";
pub const SYSFS_EFI: &str = "/sys/firmware/efi";

pub fn detect<P: Platform>(platform: &P) -> FirmwareType {
    if platform.directory_exists(Path::new(SYSFS_EFI)) {
        FirmwareType::Uefi
    } else if platform.path_exists(Path::new(SYSFS_FIRMWARE)) {
        FirmwareType::Bios
    } else {
        info!("{} is missing; sysfs may not be mounted", SYSFS_FIRMWARE);
        FirmwareType::Undetermined
    }
}
