use std::cmp::Ordering;

use crate::domain::services::normalize::normalize_group;

/// Officially defined pay-group order. New codes go here, not into the comparator.
pub const CANONICAL_GROUPS: &[&str] = &[
    "E 1", "E 2", "E 2Ü", "E 3", "E 4", "E 5", "E 6", "E 7", "E 8", "E 9a", "E 9b", "E 10",
    "E 11", "E 12", "E 13", "E 13Ü", "E 14", "E 15", "E 15Ü",
];

pub fn canonical_position(label: &str) -> Option<usize> {
    let normalized = normalize_group(label);
    CANONICAL_GROUPS.iter().position(|known| *known == normalized)
}

/// First run of ASCII digits, leading zeros stripped.
fn first_number(label: &str) -> Option<&str> {
    let start = label.find(|c: char| c.is_ascii_digit())?;
    let rest = &label[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(rest[..end].trim_start_matches('0'))
}

// Digit strings without leading zeros: shorter is smaller, equal length compares bytewise.
fn compare_digits(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Canonical labels first in canonical order, then unknown labels by their first
/// integer, then unknown labels without digits. Remaining ties fall back to the raw
/// text, so only identical labels compare equal.
pub fn compare_groups(a: &str, b: &str) -> Ordering {
    let rank = match (canonical_position(a), canonical_position(b)) {
        (Some(pa), Some(pb)) => pa.cmp(&pb),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => match (first_number(a), first_number(b)) {
            (Some(na), Some(nb)) => compare_digits(na, nb),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    };
    rank.then_with(|| a.cmp(b))
}

pub fn sort_groups<S: AsRef<str>>(groups: &mut [S]) {
    groups.sort_by(|a, b| compare_groups(a.as_ref(), b.as_ref()));
}
