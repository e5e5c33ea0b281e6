//! Depletable resources (health, sanity).
//!
//! A stat is a value clamped to `0..=max`. Deltas never push it outside
//! that range, however large.

use std::fmt;

use serde::Serialize;

/// A clamped numeric resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stat {
    current: i32,
    max: i32,
}

impl Stat {
    /// A stat starting at its maximum. A negative `max` is treated as zero.
    pub fn full(max: i32) -> Self {
        let max = max.max(0);
        Self { current: max, max }
    }

    /// A stat starting at `current`, clamped into range.
    pub fn with_value(current: i32, max: i32) -> Self {
        let max = max.max(0);
        Self {
            current: current.clamp(0, max),
            max,
        }
    }

    /// Current value.
    pub fn value(&self) -> i32 {
        self.current
    }

    /// The stat after applying `delta`, clamped to bounds.
    pub fn adjusted(self, delta: i32) -> Self {
        Self {
            current: self.current.saturating_add(delta).clamp(0, self.max),
            max: self.max,
        }
    }

    /// Whether the stat has hit zero.
    pub fn is_depleted(&self) -> bool {
        self.current <= 0
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_starts_at_max() {
        let s = Stat::full(100);
        assert_eq!(s.value(), 100);
        assert!(!s.is_depleted());
    }

    #[test]
    fn adjust_clamps_to_max() {
        assert_eq!(Stat::full(100).adjusted(25).value(), 100);
    }

    #[test]
    fn adjust_clamps_to_zero() {
        let s = Stat::full(100).adjusted(-250);
        assert_eq!(s.value(), 0);
        assert!(s.is_depleted());
    }

    #[test]
    fn adjust_saturates_on_extreme_deltas() {
        assert_eq!(Stat::full(100).adjusted(i32::MAX).value(), 100);
        assert_eq!(Stat::with_value(1, 100).adjusted(i32::MIN).value(), 0);
    }

    #[test]
    fn with_value_clamps_initial() {
        assert_eq!(Stat::with_value(140, 100).value(), 100);
        assert_eq!(Stat::with_value(-3, 100).value(), 0);
    }

    #[test]
    fn negative_max_floors_at_zero() {
        let s = Stat::full(-5);
        assert_eq!(s.to_string(), "0/0");
        assert_eq!(s.adjusted(-10).value(), 0);
        assert_eq!(s.adjusted(10).value(), 0);
        assert_eq!(Stat::with_value(3, -5).value(), 0);
    }

    #[test]
    fn display() {
        assert_eq!(Stat::with_value(35, 100).to_string(), "35/100");
    }
}
