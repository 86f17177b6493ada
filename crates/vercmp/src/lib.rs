//! Compares two version strings.
//!
//! [`vercmp`] reads both strings as semantic versions when it can and falls
//! back to the Maven ordering otherwise, so it accepts any input.
//! [`compare_with`] lets the caller pin the scheme instead.
//!
//! ```
//! use std::cmp::Ordering;
//!
//! assert_eq!(vercmp::vercmp("1.2.3.rc1", "1.2.3"), Ordering::Less);
//! assert_eq!(vercmp::vercmp("1.0-SNAPSHOT", "1.0"), Ordering::Less);
//! ```

use std::cmp::Ordering;
use std::str::FromStr;

use tracing::{debug, instrument};

pub use vercmp_maven as maven;
pub use vercmp_semver as semver;

/// Which ordering rules to compare with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Scheme {
    /// Semantic versions if both sides parse as one, Maven otherwise.
    #[default]
    Auto,
    Maven,
    #[cfg_attr(feature = "serde", serde(rename = "semver"))]
    Semantic,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Auto => "auto",
            Scheme::Maven => "maven",
            Scheme::Semantic => "semver",
        }
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Scheme::Auto),
            "maven" => Ok(Scheme::Maven),
            "semver" | "semantic" => Ok(Scheme::Semantic),
            _ => Err(Error::UnknownScheme(s.to_string())),
        }
    }
}

/// Which side of a comparison an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Unknown version scheme {0:?}, expected one of auto, maven, semver")]
    UnknownScheme(String),
    #[error("The {side} version is not a semantic version")]
    NotSemantic {
        side: Side,
        #[source]
        source: semver::ParseVersionError,
    },
}

/// Compares `a` and `b`: `Less` if `a` is older than `b`.
pub fn vercmp(a: &str, b: &str) -> Ordering {
    match (semver::Version::from_str(a), semver::Version::from_str(b)) {
        (Ok(a), Ok(b)) => {
            debug!(%a, %b, "Comparing as semantic versions");
            a.cmp(&b)
        }
        (Err(err), _) | (_, Err(err)) => {
            debug!(a, b, %err, "Not semantic versions, comparing as Maven versions");
            maven::compare_str(a, b)
        }
    }
}

/// Compares `a` and `b` using the given scheme. Only [`Scheme::Semantic`]
/// can fail, when either side is not a semantic version.
#[instrument(level = "trace")]
pub fn compare_with(scheme: Scheme, a: &str, b: &str) -> Result<Ordering, Error> {
    match scheme {
        Scheme::Auto => Ok(vercmp(a, b)),
        Scheme::Maven => Ok(maven::compare_str(a, b)),
        Scheme::Semantic => {
            let a = semver::Version::from_str(a).map_err(|source| Error::NotSemantic {
                side: Side::Left,
                source,
            })?;
            let b = semver::Version::from_str(b).map_err(|source| Error::NotSemantic {
                side: Side::Right,
                source,
            })?;
            Ok(a.cmp(&b))
        }
    }
}
