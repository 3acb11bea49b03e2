//! Windows adapter. Every entry point is looked up at runtime so that the binary still
//! loads on releases which do not export it; a missing export becomes an error for the
//! strategy that needs it rather than a loader failure at startup.

use super::{Guid, Host, Platform};
use crate::{
    errors::{EnvironmentQueryError, QueryResult},
    os_version::OsVersion,
};
use std::{ffi::c_void, io, mem, ptr};
use windows_sys::Win32::{
    Foundation::{GetLastError, BOOL, FARPROC},
    System::{
        LibraryLoader::{GetModuleHandleW, GetProcAddress},
        SystemInformation::{FIRMWARE_TYPE, OSVERSIONINFOW},
    },
};

type RtlGetVersion = unsafe extern "system" fn(*mut OSVERSIONINFOW) -> i32;
type GetFirmwareEnvironmentVariableW =
    unsafe extern "system" fn(*const u16, *const u16, *mut c_void, u32) -> u32;
type GetFirmwareType = unsafe extern "system" fn(*mut FIRMWARE_TYPE) -> BOOL;

const KERNEL32: &str = "kernel32.dll";
const NTDLL: &str = "ntdll.dll";

#[derive(Debug, Default)]
pub struct WindowsPlatform;

impl Platform for WindowsPlatform {
    fn host(&self) -> Host { Host::Windows }

    /// `RtlGetVersion` is used instead of `GetVersionExW`, which reports 6.2 to any
    /// executable without a compatibility manifest.
    fn os_version(&self) -> QueryResult<OsVersion> {
        let proc = lookup(NTDLL, "RtlGetVersion\0")?;
        let rtl_get_version: RtlGetVersion = unsafe { mem::transmute(proc) };

        let mut info: OSVERSIONINFOW = unsafe { mem::zeroed() };
        info.dwOSVersionInfoSize = mem::size_of::<OSVERSIONINFOW>() as u32;

        let status = unsafe { rtl_get_version(&mut info) };
        if status != 0 {
            return Err(EnvironmentQueryError::OsVersion(io::Error::new(
                io::ErrorKind::Other,
                format!("RtlGetVersion returned NTSTATUS {:#010x}", status),
            )));
        }

        Ok(OsVersion::new(info.dwMajorVersion, info.dwMinorVersion, info.dwBuildNumber, 0))
    }

    fn probe_firmware_variable(&self, name: &str, namespace: &Guid) -> QueryResult<u32> {
        let proc = lookup(KERNEL32, "GetFirmwareEnvironmentVariableW\0")?;
        let get_variable: GetFirmwareEnvironmentVariableW = unsafe { mem::transmute(proc) };

        let name = wide(name);
        let namespace = wide(&namespace.to_string());

        // A zero-sized buffer: only the failure mode is of interest.
        let read = unsafe { get_variable(name.as_ptr(), namespace.as_ptr(), ptr::null_mut(), 0) };
        if read != 0 {
            return Ok(0);
        }

        Ok(unsafe { GetLastError() })
    }

    fn query_firmware_type(&self) -> QueryResult<Option<u32>> {
        let proc = lookup(KERNEL32, "GetFirmwareType\0")?;
        let get_firmware_type: GetFirmwareType = unsafe { mem::transmute(proc) };

        let mut firmware: FIRMWARE_TYPE = 0;
        if unsafe { get_firmware_type(&mut firmware) } == 0 {
            debug!("GetFirmwareType failed: {}", io::Error::last_os_error());
            return Ok(None);
        }

        Ok(Some(firmware as u32))
    }
}

/// Resolves `symbol` (NUL-terminated) from a module that is already mapped into every process.
fn lookup(
    module: &'static str,
    symbol: &'static str,
) -> QueryResult<unsafe extern "system" fn() -> isize> {
    let missing = || EnvironmentQueryError::MissingEntryPoint {
        module,
        symbol: symbol.trim_end_matches('\0'),
    };

    let handle = unsafe { GetModuleHandleW(wide(module).as_ptr()) };
    if handle == 0 {
        return Err(missing());
    }

    let proc: FARPROC = unsafe { GetProcAddress(handle, symbol.as_ptr()) };
    proc.ok_or_else(missing)
}

fn wide(input: &str) -> Vec<u16> { input.encode_utf16().chain(Some(0)).collect() }
