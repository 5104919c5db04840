// ============================================================================
// Non-Generic Sums
// One hand-written function per value type
// ============================================================================

use std::collections::HashMap;

/// Sum the values of a `String -> i64` map. Overflow wraps.
pub fn sum_ints(m: &HashMap<String, i64>) -> i64 {
    let mut s: i64 = 0;
    for v in m.values() {
        s = s.wrapping_add(*v);
    }
    s
}

/// Sum the values of a `String -> f64` map.
pub fn sum_floats(m: &HashMap<String, f64>) -> f64 {
    let mut s: f64 = 0.0;
    for v in m.values() {
        s += *v;
    }
    s
}
