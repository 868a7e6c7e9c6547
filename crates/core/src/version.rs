//! Semantic versions and compatibility ranges
//!
//! Implementations declare which versions of their owning system they
//! support with a small range language:
//!
//! | Range | Matches |
//! |-------|---------|
//! | `^X.Y.Z` | same major `X`, and `(minor, patch) >= (Y, Z)` |
//! | `>=X.Y.Z` | any version ordered at or after `X.Y.Z` |
//! | `=X.Y.Z` or `X.Y.Z` | exactly `X.Y.Z` |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error parsing a version or range expression
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("invalid version '{0}': expected MAJOR.MINOR.PATCH")]
    InvalidVersion(String),
    #[error("empty version range")]
    Empty,
}

/// A `major.minor.patch` version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RangeError::InvalidVersion(s.to_string());
        let mut parts = s.trim().split('.');
        let mut next = || -> Result<u32, RangeError> {
            parts
                .next()
                .and_then(|p| p.parse::<u32>().ok())
                .ok_or_else(invalid)
        };
        let version = Version::new(next()?, next()?, next()?);
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(version)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A set of versions an implementation declares support for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionRange {
    /// `^X.Y.Z`
    Caret(Version),
    /// `>=X.Y.Z`
    AtLeast(Version),
    /// `=X.Y.Z`
    Exact(Version),
}

impl VersionRange {
    pub const fn caret(major: u32, minor: u32, patch: u32) -> Self {
        VersionRange::Caret(Version::new(major, minor, patch))
    }

    /// Whether `version` falls inside this range
    ///
    /// # Examples
    ///
    /// ```
    /// use game_slots_core::version::{Version, VersionRange};
    ///
    /// let range: VersionRange = "^1.2.0".parse().unwrap();
    /// assert!(range.matches(Version::new(1, 4, 0)));
    /// assert!(!range.matches(Version::new(1, 1, 9)));
    /// assert!(!range.matches(Version::new(2, 0, 0)));
    /// ```
    pub fn matches(&self, version: Version) -> bool {
        match *self {
            VersionRange::Caret(base) => {
                version.major == base.major
                    && (version.minor, version.patch) >= (base.minor, base.patch)
            }
            VersionRange::AtLeast(base) => version >= base,
            VersionRange::Exact(base) => version == base,
        }
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionRange::Caret(v) => write!(f, "^{}", v),
            VersionRange::AtLeast(v) => write!(f, ">={}", v),
            VersionRange::Exact(v) => write!(f, "={}", v),
        }
    }
}

impl FromStr for VersionRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(RangeError::Empty);
        }
        if let Some(rest) = s.strip_prefix('^') {
            return Ok(VersionRange::Caret(rest.parse()?));
        }
        if let Some(rest) = s.strip_prefix(">=") {
            return Ok(VersionRange::AtLeast(rest.parse()?));
        }
        let exact = s.strip_prefix('=').unwrap_or(s);
        Ok(VersionRange::Exact(exact.parse()?))
    }
}

impl Serialize for VersionRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for VersionRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// One declared compatibility entry: "works with `system_id` at `range`"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Compatibility {
    pub system_id: &'static str,
    pub range: VersionRange,
}

impl Compatibility {
    pub const fn new(system_id: &'static str, range: VersionRange) -> Self {
        Self { system_id, range }
    }
}
