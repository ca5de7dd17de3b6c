/// Behavior of a [`BoundedSequence`](crate::BoundedSequence) when an insertion is
/// attempted while `len() == capacity()`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum GrowthPolicy {
    /// Capacity never changes; the insertion fails with `CapacityExceeded`.
    #[default]
    Fixed,
    /// Storage is reallocated to twice its current capacity before inserting.
    Doubling,
}

impl GrowthPolicy {
    /// Returns the capacity to grow to from `current`, or `None` when growth
    /// is not permitted.
    #[inline]
    pub fn next_capacity(self, current: usize) -> Option<usize> {
        match self {
            GrowthPolicy::Fixed => None,
            GrowthPolicy::Doubling => current.checked_mul(2),
        }
    }
}
