// ============================================================================
// Report Module
// Console report comparing the summation call styles
// ============================================================================

mod call_style;
mod summary;

pub use call_style::CallStyle;
pub use summary::{ReportLine, SumReport};
