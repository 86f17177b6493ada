use std::cmp::Ordering;

/// Known qualifiers, lowest to highest. The empty string is the GA release.
const RANKED: [&str; 7] = ["alpha", "beta", "milestone", "rc", "snapshot", "", "sp"];

/// Rank given to every qualifier not listed in [`RANKED`].
const UNKNOWN_RANK: usize = RANKED.len() + 1;

/// Resolves a non-numeric token into the qualifier it stands for.
///
/// `digit_follows` is set when the token was cut short by a digit, which is
/// the only place the one-letter shorthands `a`, `b` and `m` are expanded.
pub(crate) fn resolve(token: &str, digit_follows: bool) -> String {
    let token = match token {
        "a" if digit_follows => "alpha",
        "b" if digit_follows => "beta",
        "m" if digit_follows => "milestone",
        other => other,
    };
    match token {
        "ga" | "final" => String::new(),
        "cr" => "rc".to_string(),
        other => other.to_string(),
    }
}

fn rank(qualifier: &str) -> usize {
    RANKED
        .iter()
        .position(|known| *known == qualifier)
        .map_or(UNKNOWN_RANK, |idx| idx + 1)
}

/// Orders two resolved qualifiers. Unknown qualifiers sort after every known
/// one and among themselves by their text.
pub(crate) fn compare(a: &str, b: &str) -> Ordering {
    match (rank(a), rank(b)) {
        (UNKNOWN_RANK, UNKNOWN_RANK) => a.cmp(b),
        (rank_a, rank_b) => rank_a.cmp(&rank_b),
    }
}
