//! Maven-style version parsing and ordering.
//!
//! Any string is a version. It is split into numbers and qualifiers on `.`
//! and `-` and on every switch between digits and letters; a `-` or a
//! switch opens a nested segment. Trailing zeros and GA qualifiers are
//! insignificant, so `1`, `1.0.0` and `1-ga` are all equal.
//!
//! ```
//! use vercmp_maven::Version;
//!
//! assert!(Version::new("1.0-alpha-1") < Version::new("1.0-beta"));
//! assert!(Version::new("1.0-SNAPSHOT") < Version::new("1.0"));
//! assert!(Version::new("1.0") < Version::new("1.0-sp"));
//! assert_eq!(Version::new("1.0.0"), Version::new("1"));
//! ```

mod component;
mod qualifier;
mod tokenizer;

use std::cmp::Ordering;

pub use component::Component;

#[cfg(feature = "serde")]
use serde_with::{DeserializeFromStr, SerializeDisplay};

/// A parsed version: the input as given plus its normalized component tree.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(DeserializeFromStr, SerializeDisplay))]
pub struct Version {
    version: String,
    components: Vec<Component>,
}

impl Version {
    pub fn new(version: impl Into<String>) -> Self {
        let version = version.into();
        let components = tokenizer::tokenize(&version);
        Self {
            version,
            components,
        }
    }

    /// The string this version was parsed from, unchanged.
    pub fn as_str(&self) -> &str {
        &self.version
    }

    /// The normalized component tree.
    pub fn components(&self) -> &[Component] {
        &self.components
    }
}

/// Parses `version`. Never fails.
pub fn parse(version: &str) -> Version {
    Version::new(version)
}

/// Orders two versions: `Less` if `a` is older than `b`.
pub fn compare(a: &Version, b: &Version) -> Ordering {
    component::compare_sequences(&a.components, &b.components)
}

/// Parses both strings and orders them.
pub fn compare_str(a: &str, b: &str) -> Ordering {
    compare(&parse(a), &parse(b))
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.version)
    }
}

impl std::str::FromStr for Version {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Version::new(s))
    }
}

impl From<&str> for Version {
    fn from(s: &str) -> Self {
        Version::new(s)
    }
}

impl From<String> for Version {
    fn from(s: String) -> Self {
        Version::new(s)
    }
}

/// Equal only when the comparison says so in both directions. An embedded
/// zero ties with a qualifier or segment in one direction only, so this is
/// not an equivalence and `Version` is not `Eq`.
impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other) == Ordering::Equal && compare(other, self) == Ordering::Equal
    }
}

/// `None` when the two directions of [`compare`] disagree. There is no `Ord`
/// impl; sort with `sort_by(compare)` over versions without embedded zeros.
impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let forward = compare(self, other);
        (forward == compare(other, self).reverse()).then_some(forward)
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use proptest::prelude::*;

    use super::*;

    #[track_caller]
    fn v(version: &str) -> Version {
        Version::new(version)
    }

    #[track_caller]
    fn assert_equal(a: &str, b: &str) {
        assert_eq!(compare_str(a, b), Ordering::Equal, "{a} == {b}");
        assert_eq!(compare_str(b, a), Ordering::Equal, "{b} == {a}");
    }

    #[track_caller]
    fn assert_older(low: &str, high: &str) {
        assert_eq!(compare_str(low, high), Ordering::Less, "{low} < {high}");
        assert_eq!(compare_str(high, low), Ordering::Greater, "{high} > {low}");
    }

    #[track_caller]
    fn assert_ascending(versions: &[&str]) {
        for (i, low) in versions.iter().enumerate() {
            for high in &versions[i + 1..] {
                assert_older(low, high);
            }
        }
    }

    #[test]
    fn test_render_keeps_input() {
        assert_eq!(v("1.0-SNAPSHOT").to_string(), "1.0-SNAPSHOT");
        assert_eq!(v(" 1.0 ").as_str(), " 1.0 ");
        assert_eq!(v("").as_str(), "");
    }

    #[test]
    fn test_components() {
        assert_eq!(
            v("1.2-rc").components(),
            &[
                Component::Number(1),
                Component::Number(2),
                Component::Segment(vec![Component::Qualifier("rc".to_string())]),
            ]
        );
        assert!(v("").components().is_empty());
    }

    #[test]
    fn test_qualifier_order() {
        assert_ascending(&[
            "1-alpha",
            "1-beta",
            "1-milestone",
            "1-rc",
            "1-snapshot",
            "1",
            "1-sp",
        ]);
    }

    #[test]
    fn test_qualifiers() {
        assert_ascending(&[
            "1-alpha2snapshot",
            "1-alpha2",
            "1-alpha-123",
            "1-beta-2",
            "1-beta123",
            "1-m2",
            "1-m11",
            "1-rc",
            "1-cr2",
            "1-rc123",
            "1-SNAPSHOT",
            "1",
            "1-sp",
            "1-sp2",
            "1-sp123",
            "1-abc",
            "1-def",
            "1-pom-1",
            "1-1-snapshot",
            "1-1",
            "1-2",
            "1-123",
        ]);
    }

    #[test]
    fn test_numbers() {
        assert_ascending(&[
            "2.0", "2-1", "2.0.a", "2.0.0.a", "2.0.2", "2.0.123", "2.1.0", "2.1-a", "2.1b",
            "2.1-x", "2.1-1", "2.1.0.1", "2.2", "2.123", "11.a2", "11.a11", "11.b2", "11.b11",
            "11.m2", "11.m11", "11", "11.a", "11b", "11c", "11m",
        ]);
    }

    #[test]
    fn test_equality() {
        let pairs = [
            ("1", "1"),
            ("1", "1.0"),
            ("1", "1.0.0"),
            ("1.0", "1.0.0"),
            ("1", "1-0"),
            ("1", "1.0-0"),
            ("1.0", "1.0-0"),
            // no separator between number and character
            ("1a", "1-a"),
            ("1a", "1.0-a"),
            ("1a", "1.0.0-a"),
            ("1.0a", "1-a"),
            ("1.0.0a", "1-a"),
            ("1x", "1-x"),
            ("1x", "1.0-x"),
            ("1x", "1.0.0-x"),
            ("1.0x", "1-x"),
            ("1.0.0x", "1-x"),
            // aliases
            ("1ga", "1"),
            ("1-ga", "1"),
            ("1final", "1"),
            ("1cr", "1rc"),
            // one-letter shorthands, only when a digit follows
            ("1a1", "1-alpha-1"),
            ("1b2", "1-beta-2"),
            ("1m3", "1-milestone-3"),
            // case insensitive
            ("1X", "1x"),
            ("1A", "1a"),
            ("1B", "1b"),
            ("1M", "1m"),
            ("1Ga", "1"),
            ("1GA", "1"),
            ("1Final", "1"),
            ("1FinaL", "1"),
            ("1FINAL", "1"),
            ("1Cr", "1Rc"),
            ("1cR", "1rC"),
            ("1m3", "1Milestone3"),
            ("1m3", "1MileStone3"),
            ("1m3", "1MILESTONE3"),
        ];

        for (a, b) in pairs {
            assert_equal(a, b);
        }
    }

    #[test]
    fn test_ordering() {
        let pairs = [
            ("1", "2"),
            ("1.5", "2"),
            ("1", "2.5"),
            ("1.0", "1.1"),
            ("1.1", "1.2"),
            ("1.0.0", "1.1"),
            ("1.0.1", "1.1"),
            ("1.1", "1.2.0"),
            ("1.0-alpha-1", "1.0"),
            ("1.0-alpha-1", "1.0-alpha-2"),
            ("1.0-alpha-1", "1.0-beta-1"),
            ("1.0-beta-1", "1.0-SNAPSHOT"),
            ("1.0-SNAPSHOT", "1.0"),
            ("1.0-alpha-1-SNAPSHOT", "1.0-alpha-1"),
            ("1.0", "1.0-1"),
            ("1.0-1", "1.0-2"),
            ("1.0.0", "1.0-1"),
            ("2.0-1", "2.0.1"),
            ("2.0.1-klm", "2.0.1-lmn"),
            ("2.0.1", "2.0.1-xyz"),
            ("2.0.1", "2.0.1-123"),
            ("2.0.1-xyz", "2.0.1-123"),
        ];

        for (low, high) in pairs {
            assert_older(low, high);
        }
    }

    #[test]
    fn test_partial_ord_and_eq_agree() {
        assert_eq!(v("1.0"), v("1"));
        assert_ne!(v("1.0.0"), v("1.0-1"));
        assert_eq!(v("1.0").partial_cmp(&v("1.0-1")), Some(Ordering::Less));
        assert!(v("1.0-1") > v("1.0"));
        assert_eq!(v("1A"), v("1a"));

        let mut versions = vec![v("1.0"), v("1.0-rc1"), v("0.9"), v("1.0-sp")];
        versions.sort_by(compare);
        let sorted: Vec<_> = versions.iter().map(Version::as_str).collect();
        assert_eq!(sorted, ["0.9", "1.0-rc1", "1.0", "1.0-sp"]);
    }

    #[test]
    fn test_embedded_zero_is_unordered() {
        for (a, b) in [("1.0.rc", "1.rc"), ("1.0.5", "1.rc.5"), ("1.0.alpha", "1.alpha")] {
            let (a, b) = (v(a), v(b));
            assert_eq!(a == b, b == a, "{a} == {b}");
            assert_ne!(a, b);
            assert_eq!(a.partial_cmp(&b), None, "{a} vs {b}");
            assert_eq!(b.partial_cmp(&a), None, "{b} vs {a}");
            assert!(!(a < b) && !(a > b));
        }
    }

    #[test]
    fn test_embedded_zero_quirk() {
        // The zero in "1.0.1" survives normalization and ties with the "-1"
        // segment, so only the third position decides in that direction.
        assert_older("1-1", "1.0.1");

        // With a qualifier in that position both directions say "older".
        assert_eq!(compare_str("1.0.rc", "1.rc"), Ordering::Less);
        assert_eq!(compare_str("1.rc", "1.0.rc"), Ordering::Less);
    }

    #[test]
    fn test_from_str() {
        let version: Version = "1.2.3".parse().unwrap();
        assert_eq!(version.as_str(), "1.2.3");
        assert_eq!(Version::from("1.2"), Version::from("1.2.0".to_string()));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_original_string() {
        let version = v("1.0-SNAPSHOT");
        let json = serde_json::to_string(&version).unwrap();
        assert_eq!(json, r#""1.0-SNAPSHOT""#);

        let back: Version = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_str(), "1.0-SNAPSHOT");
        assert_eq!(back.components(), version.components());
    }

    #[test]
    fn test_version_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Version>();

        let version = std::sync::Arc::new(v("1.0-rc1"));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let version = std::sync::Arc::clone(&version);
                std::thread::spawn(move || compare(&version, &Version::new("1.0")))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Ordering::Less);
        }
    }

    proptest! {
        #[test]
        fn parse_accepts_anything(s in any::<String>()) {
            let version = parse(&s);
            prop_assert_eq!(version.as_str(), s.as_str());
        }

        #[test]
        fn compare_is_reflexive(s in "[0-9a-zA-Z.-]{0,16}") {
            prop_assert_eq!(compare_str(&s, &s), Ordering::Equal);
        }

        // Versions without embedded zeros, which would hit the quirk above.
        #[test]
        fn compare_is_antisymmetric(
            a in "[1-9]{1,2}(\\.[1-9]{1,2}){0,3}(-(alpha|beta|m|rc|cr|snapshot|ga|sp|xyz|[1-9]{1,2})){0,3}",
            b in "[1-9]{1,2}(\\.[1-9]{1,2}){0,3}(-(alpha|beta|m|rc|cr|snapshot|ga|sp|xyz|[1-9]{1,2})){0,3}"
        ) {
            prop_assert_eq!(compare_str(&a, &b), compare_str(&b, &a).reverse());
        }

        #[test]
        fn normalization_is_idempotent(s in "[0-9a-z.-]{0,16}") {
            let version = parse(&s);
            let mut again = version.components().to_vec();
            component::normalize(&mut again);
            prop_assert_eq!(again.as_slice(), version.components());
        }

        #[test]
        fn trailing_zeros_are_insignificant(s in "[1-9][0-9]{0,2}(\\.[0-9]{1,3}){0,3}", zeros in 1usize..4) {
            let padded = format!("{s}{}", ".0".repeat(zeros));
            prop_assert_eq!(compare_str(&s, &padded), Ordering::Equal);
        }

        #[test]
        fn partial_ord_and_eq_are_consistent(a in "[0-9a-z.-]{0,12}", b in "[0-9a-z.-]{0,12}") {
            let (a, b) = (parse(&a), parse(&b));
            prop_assert_eq!(a == b, b == a);
            prop_assert_eq!(a.partial_cmp(&b), b.partial_cmp(&a).map(Ordering::reverse));
            prop_assert_eq!(a.partial_cmp(&b) == Some(Ordering::Equal), a == b);
        }
    }
}
