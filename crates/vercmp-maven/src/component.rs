use std::cmp::Ordering;

use crate::qualifier;

/// One element of a parsed version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    Number(u64),
    /// A non-numeric token after alias resolution. The empty string is GA.
    Qualifier(String),
    /// Everything after a `-`, or after a switch between digits and letters.
    Segment(Vec<Component>),
}

impl Component {
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    pub fn is_qualifier(&self) -> bool {
        matches!(self, Self::Qualifier(_))
    }

    pub fn is_segment(&self) -> bool {
        matches!(self, Self::Segment(_))
    }

    /// True for values that mean nothing at the end of a sequence.
    fn is_null(&self) -> bool {
        match self {
            Self::Number(n) => *n == 0,
            Self::Qualifier(q) => q.is_empty(),
            Self::Segment(items) => items.is_empty(),
        }
    }

    /// Compares `self` against the element at the same position of the other
    /// version, or against nothing when the other version is shorter.
    pub(crate) fn compare_to(&self, other: Option<&Component>) -> Ordering {
        use Component::*;

        match (self, other) {
            (Number(a), Some(Number(b))) => a.cmp(b),
            // A number stands in for its own sign here, so a zero that
            // survived normalization ties with a qualifier or a segment.
            (Number(a), _) => a.cmp(&0),

            (Qualifier(a), None) => qualifier::compare(a, ""),
            (Qualifier(a), Some(Qualifier(b))) => qualifier::compare(a, b),
            (Qualifier(_), Some(Number(_) | Segment(_))) => Ordering::Less,

            (Segment(items), None) => items
                .first()
                .map_or(Ordering::Equal, |first| first.compare_to(None)),
            (Segment(_), Some(Number(_))) => Ordering::Less,
            (Segment(_), Some(Qualifier(_))) => Ordering::Greater,
            (Segment(a), Some(Segment(b))) => compare_sequences(a, b),
        }
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Component::Number(n) => write!(f, "{n}"),
            Component::Qualifier(q) => write!(f, "{q:?}"),
            Component::Segment(items) => {
                f.write_str("[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    item.fmt(f)?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Compares two sequences position by position. A missing element on the
/// left is handled by comparing the right element against nothing and
/// flipping the result.
pub(crate) fn compare_sequences(a: &[Component], b: &[Component]) -> Ordering {
    let max_len = a.len().max(b.len());

    for i in 0..max_len {
        let ordering = match (a.get(i), b.get(i)) {
            (Some(left), right) => left.compare_to(right),
            (None, Some(right)) => right.compare_to(None).reverse(),
            (None, None) => Ordering::Equal,
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    Ordering::Equal
}

/// Trims null values off the end of `items`, normalizing nested segments
/// first. A kept segment does not end the walk; a non-null number or
/// qualifier does.
pub(crate) fn normalize(items: &mut Vec<Component>) {
    let mut i = items.len();
    while i > 0 {
        i -= 1;
        if let Component::Segment(inner) = &mut items[i] {
            normalize(inner);
        }
        if items[i].is_null() {
            items.remove(i);
        } else if !items[i].is_segment() {
            break;
        }
    }
}
