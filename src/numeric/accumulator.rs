// ============================================================================
// Numeric Accumulator
// Running total over any sequence of summable values
// ============================================================================

use super::kind::Number;
use std::iter::Sum;

/// Running total of a single summation pass.
///
/// Seeded at `V::ZERO`; each value is folded in exactly once with the
/// member type's native addition. Container-agnostic: anything that yields
/// `V` or `&V` can be collected or extended into it.
///
/// # Example
/// ```
/// use generic_sums::numeric::NumericAccumulator;
/// use std::collections::BTreeMap;
///
/// let m = BTreeMap::from([("a", 3i64), ("b", 4)]);
/// let acc: NumericAccumulator<i64> = m.values().collect();
/// assert_eq!(acc.total(), 7);
/// assert_eq!(acc.count(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericAccumulator<V: Number> {
    total: V,
    count: usize,
}

impl<V: Number> NumericAccumulator<V> {
    /// Create an accumulator holding `V::ZERO`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            total: V::ZERO,
            count: 0,
        }
    }

    /// Fold one value into the total.
    #[inline]
    pub fn add(&mut self, value: V) {
        self.total = self.total.accumulate(value);
        self.count += 1;
    }

    /// The sum so far.
    #[inline]
    pub fn total(&self) -> V {
        self.total
    }

    /// Number of values folded in.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl<V: Number> Default for NumericAccumulator<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Number> Extend<V> for NumericAccumulator<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<'a, V: Number> Extend<&'a V> for NumericAccumulator<V> {
    fn extend<I: IntoIterator<Item = &'a V>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<V: Number> FromIterator<V> for NumericAccumulator<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}

impl<'a, V: Number> FromIterator<&'a V> for NumericAccumulator<V> {
    fn from_iter<I: IntoIterator<Item = &'a V>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}

impl<V: Number> Sum<V> for NumericAccumulator<V> {
    fn sum<I: Iterator<Item = V>>(iter: I) -> Self {
        iter.collect()
    }
}
