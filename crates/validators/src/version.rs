use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A `major.minor.patch` version with numeric ordering.
///
/// Ordering compares the numeric components, so `9.9.9` sorts below
/// `11.5.1` where a string comparison would not. An optional leading `v`
/// and pre-release or build suffixes are accepted on parse; suffixes are
/// ignored for ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid version string \"{0}\"")]
pub struct ParseVersionError(String);

impl FromStr for Version {
    type Err = ParseVersionError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim().trim_start_matches('v');
        let core = trimmed
            .split(|c| c == '-' || c == '+')
            .next()
            .unwrap_or_default();
        if core.is_empty() {
            return Err(ParseVersionError(input.to_string()));
        }

        let mut components = [0u64; 3];
        let mut count = 0;
        for part in core.split('.') {
            if count == components.len() {
                return Err(ParseVersionError(input.to_string()));
            }
            components[count] = part
                .parse()
                .map_err(|_| ParseVersionError(input.to_string()))?;
            count += 1;
        }

        Ok(Version::new(components[0], components[1], components[2]))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_versions() {
        assert_eq!("11.5.1".parse::<Version>().unwrap(), Version::new(11, 5, 1));
        assert_eq!("0.0.0".parse::<Version>().unwrap(), Version::new(0, 0, 0));
    }

    #[test]
    fn parses_v_prefix_and_whitespace() {
        assert_eq!(
            " v20.11.0\n".parse::<Version>().unwrap(),
            Version::new(20, 11, 0)
        );
    }

    #[test]
    fn missing_components_default_to_zero() {
        assert_eq!("18".parse::<Version>().unwrap(), Version::new(18, 0, 0));
        assert_eq!("11.5".parse::<Version>().unwrap(), Version::new(11, 5, 0));
    }

    #[test]
    fn prerelease_and_build_suffixes_are_ignored() {
        assert_eq!(
            "11.5.1-beta.2".parse::<Version>().unwrap(),
            Version::new(11, 5, 1)
        );
        assert_eq!(
            "11.5.1+build.7".parse::<Version>().unwrap(),
            Version::new(11, 5, 1)
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!("".parse::<Version>().is_err());
        assert!("v".parse::<Version>().is_err());
        assert!("not-a-version".parse::<Version>().is_err());
        assert!("1.2.3.4".parse::<Version>().is_err());
        assert!("1..3".parse::<Version>().is_err());
    }

    #[test]
    fn orders_numerically_not_lexically() {
        let min = Version::new(11, 5, 1);

        // Lexically "9.9.9" > "11.5.1"; numerically it is far below.
        assert!("9.9.9".parse::<Version>().unwrap() < min);
        assert!("10.8.1".parse::<Version>().unwrap() < min);
        assert!("11.5.0".parse::<Version>().unwrap() < min);
        assert!("11.5.1".parse::<Version>().unwrap() >= min);
        assert!("11.5.2".parse::<Version>().unwrap() > min);
        assert!("11.10.0".parse::<Version>().unwrap() > min);
        assert!("12.0.0".parse::<Version>().unwrap() > min);
    }
}
