// ============================================================================
// Sums Module
// Summation over the values of a HashMap, in four calling styles
// ============================================================================

mod generic;
mod non_generic;

pub use generic::{sum_ints_or_floats, sum_numbers};
pub use non_generic::{sum_floats, sum_ints};
