//! Infers the firmware type from how a firmware variable read fails.
//!
//! On legacy BIOS the firmware variable API is not implemented at all and fails with
//! `ERROR_INVALID_FUNCTION`. On UEFI the call is serviced, so a read of a nonexistent
//! variable fails with some other code, typically `ERROR_NOACCESS` for the null namespace.
//! Any code besides `ERROR_INVALID_FUNCTION`, including success, is taken to mean UEFI.

use crate::{
    errors::QueryResult,
    firmware::FirmwareType,
    platform::{Platform, ERROR_INVALID_FUNCTION, NULL_GUID},
};

pub fn detect<P: Platform>(platform: &P) -> QueryResult<FirmwareType> {
    let code = platform.probe_firmware_variable("", &NULL_GUID)?;
    debug!("firmware variable probe returned error code {}", code);
    Ok(classify(code))
}

pub fn classify(code: u32) -> FirmwareType {
    if code == ERROR_INVALID_FUNCTION {
        FirmwareType::Bios
    } else {
        FirmwareType::Uefi
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{firmware::assert_consistent, platform::mock::MockPlatform};
    use test_case::test_case;

    #[test_case(1 => FirmwareType::Bios ; "invalid function")]
    #[test_case(998 => FirmwareType::Uefi ; "no access")]
    #[test_case(203 => FirmwareType::Uefi ; "envvar not found")]
    #[test_case(1314 => FirmwareType::Uefi ; "privilege not held")]
    #[test_case(0 => FirmwareType::Uefi ; "success")]
    fn classify_code(code: u32) -> FirmwareType {
        let firmware = classify(code);
        assert_consistent(firmware);
        firmware
    }

    #[test]
    fn never_undetermined() {
        assert!((0..=2000).chain(Some(u32::MAX)).all(|code| !classify(code).undetermined()));
    }

    #[test]
    fn probes_the_null_namespace_with_an_empty_name() {
        let platform = MockPlatform { probe_code: 1, ..MockPlatform::default() };

        assert_eq!(FirmwareType::Bios, detect(&platform).unwrap());
        assert_eq!(vec![(String::new(), NULL_GUID)], *platform.probes.borrow());
    }
}
