use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum VersionParseError {
    #[error("version component was not a number: found {}", _0)]
    VersionNaN(String),
    #[error("major version does not exist")]
    NoMajor,
    #[error("version has more than four components")]
    TooManyComponents,
    #[error("version is empty")]
    NoVersion,
}

/// Windows 7 / Server 2008 R2.
pub const WINDOWS_7: OsVersion = OsVersion::new(6, 1, 0, 0);

/// Windows 8 / Server 2012.
pub const WINDOWS_8: OsVersion = OsVersion::new(6, 2, 0, 0);

/// The version of the running operating system.
///
/// Field order matters: the derived `Ord` compares major, then minor, then build, then
/// revision, which is the order used for the strategy gates.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct OsVersion {
    pub major:    u32,
    pub minor:    u32,
    pub build:    u32,
    pub revision: u32,
}

impl OsVersion {
    pub const fn new(major: u32, minor: u32, build: u32, revision: u32) -> Self {
        OsVersion { major, minor, build, revision }
    }
}

impl Display for OsVersion {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        write!(fmt, "{}.{}.{}", self.major, self.minor, self.build)?;

        if self.revision != 0 {
            write!(fmt, ".{}", self.revision)?;
        }

        Ok(())
    }
}

impl FromStr for OsVersion {
    type Err = VersionParseError;

    /// Accepts `major[.minor[.build[.revision]]]`, ignoring anything after the first
    /// whitespace (`"10.0.19045 Build 19045"`). Missing components are zero.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let version = input.split_whitespace().next().ok_or(VersionParseError::NoVersion)?;

        let mut components = [0u32; 4];
        let mut iter = version.split('.');

        let major =
            iter.next().filter(|major| !major.is_empty()).ok_or(VersionParseError::NoMajor)?;
        components[0] = parse_component(major)?;

        for slot in components.iter_mut().skip(1) {
            match iter.next() {
                Some(component) => *slot = parse_component(component)?,
                None => break,
            }
        }

        if iter.next().is_some() {
            return Err(VersionParseError::TooManyComponents);
        }

        let [major, minor, build, revision] = components;
        Ok(OsVersion { major, minor, build, revision })
    }
}

fn parse_component(component: &str) -> Result<u32, VersionParseError> {
    component.parse::<u32>().map_err(|_| VersionParseError::VersionNaN(component.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("10.0.17763" => OsVersion::new(10, 0, 17763, 0) ; "windows 10 1809")]
    #[test_case("6.1.7601.24000" => OsVersion::new(6, 1, 7601, 24000) ; "four components")]
    #[test_case("6.0.6002 Service Pack 2" => OsVersion::new(6, 0, 6002, 0) ; "trailing text")]
    #[test_case("22.04" => OsVersion::new(22, 4, 0, 0) ; "two components")]
    #[test_case("11" => OsVersion::new(11, 0, 0, 0) ; "major only")]
    fn parse(input: &str) -> OsVersion { input.parse().unwrap() }

    #[test_case("" => VersionParseError::NoVersion ; "empty")]
    #[test_case(".1" => VersionParseError::NoMajor ; "missing major")]
    #[test_case("6.x" => VersionParseError::VersionNaN("x".into()) ; "not a number")]
    #[test_case("1.2.3.4.5" => VersionParseError::TooManyComponents ; "five components")]
    fn parse_error(input: &str) -> VersionParseError { input.parse::<OsVersion>().unwrap_err() }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(OsVersion::new(10, 0, 17763, 0) >= WINDOWS_8);
        assert!(OsVersion::new(6, 2, 9200, 0) >= WINDOWS_8);
        assert!(OsVersion::new(6, 1, 7601, 0) < WINDOWS_8);
        assert!(OsVersion::new(6, 1, 7601, 0) >= WINDOWS_7);
        assert!(OsVersion::new(6, 0, 6002, 0) < WINDOWS_7);
        assert!(OsVersion::new(6, 1, 0, 1) > OsVersion::new(6, 1, 0, 0));
        assert!(OsVersion::new(5, 99, 99, 99) < WINDOWS_7);
    }

    #[test]
    fn display() {
        assert_eq!("6.1.7601", OsVersion::new(6, 1, 7601, 0).to_string());
        assert_eq!("6.1.7601.24000", OsVersion::new(6, 1, 7601, 24000).to_string());
    }
}
