/// Primitive-operation tallies for a single calculator run.
///
/// A fresh counter is created per invocation and read once when the
/// [`MstResult`](crate::MstResult) is assembled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperationCounter {
    comparisons: u64,
    updates: u64,
    unions: u64,
}

impl OperationCounter {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Membership tests, root comparisons and sort comparisons
    #[inline]
    pub fn record_comparison(&mut self) {
        self.comparisons += 1;
    }

    /// Frontier pushes/pops and representative lookups
    #[inline]
    pub fn record_update(&mut self) {
        self.updates += 1;
    }

    #[inline]
    pub fn record_union(&mut self) {
        self.unions += 1;
    }

    #[inline]
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    #[inline]
    pub fn updates(&self) -> u64 {
        self.updates
    }

    #[inline]
    pub fn unions(&self) -> u64 {
        self.unions
    }

    #[inline]
    pub fn total(&self) -> u64 {
        self.comparisons + self.updates + self.unions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_are_independent() {
        let mut counter = OperationCounter::new();
        counter.record_comparison();
        counter.record_comparison();
        counter.record_update();
        counter.record_union();
        counter.record_union();
        counter.record_union();

        assert_eq!(counter.comparisons(), 2);
        assert_eq!(counter.updates(), 1);
        assert_eq!(counter.unions(), 3);
        assert_eq!(counter.total(), 6);
    }

    #[test]
    fn test_fresh_counter_is_zero() {
        assert_eq!(OperationCounter::new().total(), 0);
    }
}
