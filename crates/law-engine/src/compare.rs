//! Value comparison used when diffing matched laws

/// Decides whether two law values count as different
pub trait ValueComparator: Send + Sync {
    fn differs(&self, from_value: &str, to_value: &str) -> bool;
}

/// Exact string comparison with no normalization
///
/// "$16.00/hour" and "$16/hr" differ, as do values that differ only in
/// case or whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatch;

impl ValueComparator for ExactMatch {
    fn differs(&self, from_value: &str, to_value: &str) -> bool {
        from_value != to_value
    }
}
