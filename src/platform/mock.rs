use super::{Guid, Host, Platform};
use crate::{
    errors::{EnvironmentQueryError, QueryResult},
    os_version::OsVersion,
};
use std::{
    cell::{Cell, RefCell},
    collections::HashSet,
    io,
    path::{Path, PathBuf},
};

/// Scripted answers for every platform query, with counters for the calls made.
pub(crate) struct MockPlatform {
    pub host:          Host,
    pub version:       Option<OsVersion>,
    pub log:           Option<String>,
    pub log_error:     Option<io::ErrorKind>,
    pub directories:   HashSet<PathBuf>,
    pub probe_code:    u32,
    pub probe_error:   Option<&'static str>,
    pub firmware_code: Option<u32>,
    pub query_error:   Option<&'static str>,

    pub version_calls: Cell<u32>,
    pub log_reads:     RefCell<Vec<PathBuf>>,
    pub probes:        RefCell<Vec<(String, Guid)>>,
    pub queries:       Cell<usize>,
}

impl Default for MockPlatform {
    fn default() -> Self {
        MockPlatform {
            host:          Host::Windows,
            version:       None,
            log:           None,
            log_error:     None,
            directories:   HashSet::new(),
            probe_code:    0,
            probe_error:   None,
            firmware_code: None,
            query_error:   None,
            version_calls: Cell::new(0),
            log_reads:     RefCell::new(Vec::new()),
            probes:        RefCell::new(Vec::new()),
            queries:       Cell::new(0),
        }
    }
}

impl MockPlatform {
    pub fn windows(version: OsVersion) -> Self {
        MockPlatform { version: Some(version), ..MockPlatform::default() }
    }

    pub fn with_directory<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.directories.insert(path.into());
        self
    }

    /// Which strategy-facing queries were made, in a compact form for assertions.
    pub fn calls(&self) -> (usize, usize, usize) {
        (self.log_reads.borrow().len(), self.probes.borrow().len(), self.queries.get())
    }
}

impl Platform for MockPlatform {
    fn host(&self) -> Host { self.host }

    fn os_version(&self) -> QueryResult<OsVersion> {
        self.version_calls.set(self.version_calls.get() + 1);
        self.version.ok_or_else(|| {
            EnvironmentQueryError::OsVersion(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "version query denied",
            ))
        })
    }

    fn read_log(&self, path: &Path) -> io::Result<Option<String>> {
        self.log_reads.borrow_mut().push(path.to_path_buf());
        match self.log_error {
            Some(kind) => Err(io::Error::new(kind, "scripted read failure")),
            None => Ok(self.log.clone()),
        }
    }

    fn directory_exists(&self, path: &Path) -> bool { self.directories.contains(path) }

    fn path_exists(&self, path: &Path) -> bool {
        self.directories.iter().any(|directory| directory.starts_with(path))
    }

    fn probe_firmware_variable(&self, name: &str, namespace: &Guid) -> QueryResult<u32> {
        self.probes.borrow_mut().push((name.to_owned(), *namespace));
        match self.probe_error {
            Some(symbol) => Err(missing_entry_point(symbol)),
            None => Ok(self.probe_code),
        }
    }

    fn query_firmware_type(&self) -> QueryResult<Option<u32>> {
        self.queries.set(self.queries.get() + 1);
        match self.query_error {
            Some(symbol) => Err(missing_entry_point(symbol)),
            None => Ok(self.firmware_code),
        }
    }
}

fn missing_entry_point(symbol: &'static str) -> EnvironmentQueryError {
    EnvironmentQueryError::MissingEntryPoint { module: "kernel32.dll", symbol }
}
