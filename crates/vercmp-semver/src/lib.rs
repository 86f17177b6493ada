//! Semantic versions in the pbr flavour: `MAJOR.MINOR.PATCH`, optionally
//! followed by a pre-release (`a4`, `b2`, `rc1`) and a dev build (`dev3`),
//! all dot separated.
//!
//! ```
//! use vercmp_semver::Version;
//!
//! let dev: Version = "1.2.3.dev6".parse().unwrap();
//! let alpha: Version = "1.2.3.a4".parse().unwrap();
//! let release: Version = "1.2.3".parse().unwrap();
//! assert!(dev < alpha && alpha < release);
//! ```

use std::str::FromStr;

#[cfg(test)]
use proptest_derive::Arbitrary;
#[cfg(feature = "serde")]
use serde_with::{DeserializeFromStr, SerializeDisplay};

pub type VersionPart = u64;

/// Ways a semantic version can fail to be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseVersionError {
    #[error("Invalid semantic version {0}: expected at least MAJOR.MINOR.PATCH")]
    TooFewParts(String),
    #[error("Invalid semantic version {0}: empty part")]
    EmptyPart(String),
    #[error("Invalid major version: {0}")]
    InvalidMajor(String),
    #[error("Invalid minor version: {0}")]
    InvalidMinor(String),
    #[error("Invalid patch version: {0}")]
    InvalidPatch(String),
    #[error("Invalid pre-release version: {0}")]
    InvalidPreRelease(String),
    #[error("Invalid dev version: {0}")]
    InvalidDev(String),
    #[error("Invalid semantic version {0}: unexpected trailing parts")]
    TrailingParts(String),
}

/// The kind of pre-release, in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum PreReleaseKind {
    Alpha,
    Beta,
    ReleaseCandidate,
}

impl PreReleaseKind {
    pub fn all() -> [Self; 3] {
        [Self::Alpha, Self::Beta, Self::ReleaseCandidate]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alpha => "a",
            Self::Beta => "b",
            Self::ReleaseCandidate => "rc",
        }
    }

    /// Position in the ordering key. A release without pre-release ranks 4.
    fn rank(&self) -> VersionPart {
        match self {
            Self::Alpha => 1,
            Self::Beta => 2,
            Self::ReleaseCandidate => 3,
        }
    }
}

impl std::fmt::Display for PreReleaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreRelease {
    pub kind: PreReleaseKind,
    pub number: VersionPart,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(DeserializeFromStr, SerializeDisplay))]
pub struct Version {
    pub major: VersionPart,
    pub minor: VersionPart,
    pub patch: VersionPart,
    pub pre_release: Option<PreRelease>,
    pub dev: Option<VersionPart>,
}

impl Version {
    pub fn new(major: VersionPart, minor: VersionPart, patch: VersionPart) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release: None,
            dev: None,
        }
    }

    pub fn is_prerelease(&self) -> bool {
        self.pre_release.is_some() || self.dev_count().is_some()
    }

    /// The dev build number. `dev0` counts as no dev build at all.
    fn dev_count(&self) -> Option<VersionPart> {
        self.dev.filter(|count| *count != 0)
    }

    /// Seven-field ordering key. Dev builds of a final release sort before
    /// every pre-release of it; within the same pre-release, dev builds sort
    /// before the pre-release itself.
    fn key(&self) -> [VersionPart; 7] {
        let dev_only = self.dev_count().is_some() && self.pre_release.is_none();
        let (kind_rank, pre_number) = self
            .pre_release
            .map_or((4, 0), |pre| (pre.kind.rank(), pre.number));

        [
            self.major,
            self.minor,
            self.patch,
            if dev_only { 0 } else { 1 },
            kind_rank,
            pre_number,
            self.dev_count().unwrap_or(VersionPart::MAX),
        ]
    }
}

fn parse_part(part: &str) -> Option<VersionPart> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

fn parse_pre_release(part: &str) -> Option<PreRelease> {
    let (kind, number) = if let Some(number) = part.strip_prefix("rc") {
        (PreReleaseKind::ReleaseCandidate, number)
    } else if let Some(number) = part.strip_prefix('a') {
        (PreReleaseKind::Alpha, number)
    } else if let Some(number) = part.strip_prefix('b') {
        (PreReleaseKind::Beta, number)
    } else {
        return None;
    };

    Some(PreRelease {
        kind,
        number: parse_part(number)?,
    })
}

impl FromStr for Version {
    type Err = ParseVersionError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let lowered = input.trim().to_lowercase();
        let parts: Vec<&str> = lowered.split('.').collect();
        let &[major, minor, patch, ref rest @ ..] = parts.as_slice() else {
            return Err(ParseVersionError::TooFewParts(input.to_string()));
        };

        let number = |part: &str, err: fn(String) -> ParseVersionError| {
            parse_part(part).ok_or_else(|| err(input.to_string()))
        };
        let mut version = Version::new(
            number(major, ParseVersionError::InvalidMajor)?,
            number(minor, ParseVersionError::InvalidMinor)?,
            number(patch, ParseVersionError::InvalidPatch)?,
        );
        let mut rest = rest.iter().copied().peekable();

        if let Some(part) = rest.peek()
            && part.starts_with(['a', 'b', 'r'])
        {
            version.pre_release = Some(
                parse_pre_release(part)
                    .ok_or_else(|| ParseVersionError::InvalidPreRelease(input.to_string()))?,
            );
            rest.next();
        }

        if let Some(part) = rest.next() {
            if part.is_empty() {
                return Err(ParseVersionError::EmptyPart(input.to_string()));
            }
            let count = part
                .strip_prefix("dev")
                .and_then(parse_part)
                .ok_or_else(|| ParseVersionError::InvalidDev(input.to_string()))?;
            version.dev = Some(count);
        }

        if rest.next().is_some() {
            return Err(ParseVersionError::TrailingParts(input.to_string()));
        }

        Ok(version)
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;

        if let Some(pre) = self.pre_release {
            write!(f, ".{}{}", pre.kind, pre.number)?;
        }

        if let Some(dev) = self.dev_count() {
            write!(f, ".dev{dev}")?;
        }

        Ok(())
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Version {}

impl std::hash::Hash for Version {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
