use crate::compiler::{Axis, Clause, ClauseSet};
use itertools::Itertools;
use std::fmt::Write;

/// Clause counts contributed by one axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisSummary {
    pub axis: Axis,
    pub positive: usize,
    pub negative: usize,
}

/// Formats an un-assembled `ClauseSet` into a per-axis explanation.
pub struct ClauseTraceFormatter;

impl ClauseTraceFormatter {
    /// One entry per axis, in the order the axes first contributed.
    pub fn summarize(clauses: &ClauseSet) -> Vec<AxisSummary> {
        let axes = clauses
            .positive()
            .iter()
            .chain(clauses.negative())
            .map(|clause| clause.axis)
            .unique();

        // Positive clauses come first, so negatives-only axes land at the end.
        axes.map(|axis| AxisSummary {
            axis,
            positive: Self::count(clauses.positive(), axis),
            negative: Self::count(clauses.negative(), axis),
        })
        .collect()
    }

    /// Renders the full breakdown: each axis header followed by its `+`/`-` clauses.
    pub fn format(clauses: &ClauseSet) -> String {
        let mut out = String::new();
        for summary in Self::summarize(clauses) {
            // Writing to a String cannot fail.
            let _ = writeln!(
                out,
                "[{}] +{} -{}",
                summary.axis, summary.positive, summary.negative
            );
            for clause in Self::of_axis(clauses.positive(), summary.axis) {
                let _ = writeln!(out, "  + {}", clause.text);
            }
            for clause in Self::of_axis(clauses.negative(), summary.axis) {
                let _ = writeln!(out, "  - {}", clause.text);
            }
        }
        out
    }

    fn of_axis(clauses: &[Clause], axis: Axis) -> impl Iterator<Item = &Clause> {
        clauses.iter().filter(move |clause| clause.axis == axis)
    }

    fn count(clauses: &[Clause], axis: Axis) -> usize {
        Self::of_axis(clauses, axis).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_clauses_by_axis() {
        let mut set = ClauseSet::new();
        set.push(Axis::BaseStyle, "photorealistic");
        set.negate(Axis::SafetyNet, "anime");
        set.push(Axis::Lighting, "soft natural lighting");
        set.negate(Axis::Lighting, "glow effect");

        let summary = ClauseTraceFormatter::summarize(&set);
        assert_eq!(
            summary,
            vec![
                AxisSummary { axis: Axis::BaseStyle, positive: 1, negative: 0 },
                AxisSummary { axis: Axis::Lighting, positive: 1, negative: 1 },
                AxisSummary { axis: Axis::SafetyNet, positive: 0, negative: 1 },
            ]
        );

        let text = ClauseTraceFormatter::format(&set);
        assert!(text.starts_with("[base style] +1 -0\n  + photorealistic\n"));
        assert!(text.contains("[lighting] +1 -1\n  + soft natural lighting\n  - glow effect\n"));
        assert!(text.ends_with("[safety net] +0 -1\n  - anime\n"));
    }
}
