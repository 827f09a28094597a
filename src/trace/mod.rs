mod formatter;

pub use formatter::{AxisSummary, ClauseTraceFormatter};
