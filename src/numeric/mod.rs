// ============================================================================
// Numeric Module
// The summable value types and the accumulator that sums them
// ============================================================================
//
// This module provides:
// - NumericKind: runtime tag for the two member types
// - Int64OrFloat64: the closed member set `i64 | f64` (sealed)
// - Number: named constraint over the same set, reused crate-wide
// - NumericAccumulator<V>: running total seeded at V::ZERO
//
// Design principles:
// - The set is closed at compile time; no runtime type inspection
// - One algorithm, monomorphised per member type
// - Native arithmetic: integers wrap, floats round

mod accumulator;
mod kind;

pub use accumulator::NumericAccumulator;
pub use kind::{Int64OrFloat64, Number, NumericKind};
