use crate::strategy::Strategy;
use serde_derive::Serialize;
use std::fmt::{self, Display, Formatter};

/// The firmware interface the host booted through.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq, Serialize)]
pub enum FirmwareType {
    #[serde(rename = "BIOS")]
    Bios,
    #[serde(rename = "UEFI")]
    Uefi,
    Undetermined,
}

impl FirmwareType {
    pub fn is_uefi(self) -> bool { self == FirmwareType::Uefi }

    pub fn is_bios(self) -> bool { self == FirmwareType::Bios }

    /// `true` when the strategy that ran could not tell the two apart.
    pub fn undetermined(self) -> bool { self == FirmwareType::Undetermined }
}

impl Display for FirmwareType {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        fmt.write_str(match self {
            FirmwareType::Bios => "BIOS",
            FirmwareType::Uefi => "UEFI",
            FirmwareType::Undetermined => "Undetermined",
        })
    }
}

/// The outcome of a single detection: what was found, and which strategy found it.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Detection {
    pub firmware: FirmwareType,
    pub strategy: Strategy,
}

impl Detection {
    pub fn new(firmware: FirmwareType, strategy: Strategy) -> Self {
        Detection { firmware, strategy }
    }

    pub fn report(&self) -> Report {
        Report {
            is_uefi:       self.firmware.is_uefi(),
            is_bios:       self.firmware.is_bios(),
            undetermined:  self.firmware.undetermined(),
            firmware_type: self.firmware,
            strategy:      self.strategy,
        }
    }
}

/// Flattened view of a detection, with both the boolean flags and the enum, as it is
/// serialized for scripts.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(rename = "isUEFI")]
    pub is_uefi:       bool,
    #[serde(rename = "isBIOS")]
    pub is_bios:       bool,
    pub undetermined:  bool,
    pub firmware_type: FirmwareType,
    pub strategy:      Strategy,
}

#[cfg(test)]
pub(crate) fn assert_consistent(firmware: FirmwareType) {
    let flags = [firmware.is_uefi(), firmware.is_bios(), firmware.undetermined()];
    assert_eq!(1, flags.iter().filter(|&&set| set).count(), "{:?}: {:?}", firmware, flags);
    assert_eq!(firmware.undetermined(), !firmware.is_uefi() && !firmware.is_bios());

    let report = Detection::new(firmware, Strategy::SetupLog).report();
    assert_eq!(report.is_uefi, firmware.is_uefi());
    assert_eq!(report.is_bios, firmware.is_bios());
    assert_eq!(report.undetermined, firmware.undetermined());
    assert_eq!(report.firmware_type, firmware);
}
