use std::fmt;

/// A closed interval `[start, end]` over `i32`.
///
/// `start <= end` is expected of callers but not enforced; an interval with
/// `start > end` covers no points, and merging such intervals gives an unspecified
/// (though well-defined and panic-free) result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Interval {
    pub start: i32,
    pub end: i32,
}

impl Interval {
    #[inline]
    pub const fn new(start: i32, end: i32) -> Interval {
        Interval { start, end }
    }

    /// Returns `true` if `point` lies within `[start, end]`.
    #[inline]
    pub fn contains(&self, point: i32) -> bool {
        self.start <= point && point <= self.end
    }

    /// Returns `true` if `next`, assumed to start no earlier than `self`, overlaps
    /// or touches `self` and can therefore be folded into it.
    ///
    /// Touching intervals such as `[1, 3]` and `[3, 5]` count as overlapping.
    #[inline]
    pub fn overlaps_or_touches(&self, next: &Interval) -> bool {
        next.start <= self.end
    }
}

impl From<(i32, i32)> for Interval {
    fn from((start, end): (i32, i32)) -> Self {
        Interval { start, end }
    }
}

impl From<[i32; 2]> for Interval {
    fn from([start, end]: [i32; 2]) -> Self {
        Interval { start, end }
    }
}

impl From<Interval> for (i32, i32) {
    fn from(interval: Interval) -> Self {
        (interval.start, interval.end)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
