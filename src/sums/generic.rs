// ============================================================================
// Generic Sums
// One implementation for every member of the numeric set
// ============================================================================
//
// Two equivalent ways of stating the same restriction:
// - sum_ints_or_floats: the member set `Int64OrFloat64` written inline
// - sum_numbers:        the named constraint `Number`, shared crate-wide

use crate::numeric::{Int64OrFloat64, Number, NumericAccumulator};
use std::collections::HashMap;
use std::hash::Hash;

/// Sum the values of `m`, for `V` either `i64` or `f64`.
///
/// Type parameters may be given explicitly or left to inference:
///
/// ```
/// use generic_sums::sums::sum_ints_or_floats;
/// use std::collections::HashMap;
///
/// let ints = HashMap::from([("first".to_string(), 34i64), ("second".to_string(), 12)]);
/// assert_eq!(sum_ints_or_floats::<String, i64>(&ints), 46);
/// assert_eq!(sum_ints_or_floats(&ints), 46);
/// ```
pub fn sum_ints_or_floats<K, V>(m: &HashMap<K, V>) -> V
where
    K: Eq + Hash,
    V: Int64OrFloat64,
{
    tracing::trace!(kind = %V::KIND, entries = m.len(), "summing map values");

    let mut s = V::ZERO;
    for v in m.values() {
        s = s.accumulate(*v);
    }
    s
}

/// Sum the values of `m`, for any `V` satisfying [`Number`].
///
/// ```
/// use generic_sums::sums::sum_numbers;
/// use std::collections::HashMap;
///
/// let floats = HashMap::from([("first", 35.98f64), ("second", 26.99)]);
/// assert!((sum_numbers(&floats) - 62.97).abs() < 1e-9);
/// ```
pub fn sum_numbers<K, V>(m: &HashMap<K, V>) -> V
where
    K: Eq + Hash,
    V: Number,
{
    tracing::trace!(kind = %V::KIND, entries = m.len(), "summing map values");

    m.values().collect::<NumericAccumulator<V>>().total()
}
