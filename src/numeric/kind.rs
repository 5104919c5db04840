// ============================================================================
// Numeric Kinds
// The closed set of value types a map can be summed over
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Runtime tag for the member types of the summable set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumericKind {
    /// 64-bit signed integer (`i64`)
    Int64,
    /// 64-bit IEEE-754 floating point (`f64`)
    Float64,
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericKind::Int64 => write!(f, "i64"),
            NumericKind::Float64 => write!(f, "f64"),
        }
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for i64 {}
    impl Sealed for f64 {}
}

/// The member set `i64 | f64`.
///
/// Sealed: no type outside this crate can implement it, so the set is
/// closed and a generic instantiated with anything else fails to compile.
///
/// ```compile_fail
/// use generic_sums::sums::sum_ints_or_floats;
/// use std::collections::HashMap;
///
/// let m: HashMap<&str, i32> = HashMap::from([("a", 1), ("b", 2)]);
/// let _ = sum_ints_or_floats(&m);
/// ```
pub trait Int64OrFloat64: sealed::Sealed + Copy + 'static {
    /// Additive identity, the seed of every sum.
    const ZERO: Self;

    /// Which member of the set this is.
    const KIND: NumericKind;

    /// Adds `rhs` using the type's native arithmetic.
    ///
    /// Integers wrap on overflow; floats round per IEEE-754.
    fn accumulate(self, rhs: Self) -> Self;
}

impl Int64OrFloat64 for i64 {
    const ZERO: Self = 0;
    const KIND: NumericKind = NumericKind::Int64;

    #[inline]
    fn accumulate(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }
}

impl Int64OrFloat64 for f64 {
    const ZERO: Self = 0.0;
    const KIND: NumericKind = NumericKind::Float64;

    #[inline]
    fn accumulate(self, rhs: Self) -> Self {
        self + rhs
    }
}

/// Named numeric constraint, reused by every generic operation in the crate.
///
/// Admits exactly the types admitted by [`Int64OrFloat64`]; the extra bounds
/// are ones both members already satisfy, so the blanket impl below covers
/// the whole set and nothing more.
///
/// ```compile_fail
/// use generic_sums::sums::sum_numbers;
/// use std::collections::HashMap;
///
/// let m: HashMap<&str, u64> = HashMap::from([("a", 1)]);
/// let _ = sum_numbers(&m);
/// ```
pub trait Number:
    Int64OrFloat64 + PartialEq + PartialOrd + fmt::Debug + fmt::Display + Send + Sync
{
}

impl<T> Number for T where
    T: Int64OrFloat64 + PartialEq + PartialOrd + fmt::Debug + fmt::Display + Send + Sync
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of<V: Number>() -> NumericKind {
        V::KIND
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(NumericKind::Int64.to_string(), "i64");
        assert_eq!(NumericKind::Float64.to_string(), "f64");
    }

    #[test]
    fn test_both_members_satisfy_number() {
        assert_eq!(kind_of::<i64>(), NumericKind::Int64);
        assert_eq!(kind_of::<f64>(), NumericKind::Float64);
    }

    #[test]
    fn test_zero_values() {
        assert_eq!(<i64 as Int64OrFloat64>::ZERO, 0);
        assert_eq!(<f64 as Int64OrFloat64>::ZERO, 0.0);
    }

    #[test]
    fn test_integer_accumulate_wraps() {
        assert_eq!(i64::MAX.accumulate(1), i64::MIN);
        assert_eq!(i64::MIN.accumulate(-1), i64::MAX);
    }

    #[test]
    fn test_float_accumulate() {
        assert_eq!(1.5f64.accumulate(2.25), 3.75);
        assert!(f64::INFINITY.accumulate(1.0).is_infinite());
    }
}
