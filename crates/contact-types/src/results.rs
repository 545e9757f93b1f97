use serde::{Deserialize, Serialize};

/// The verdict for one unordered component pair.
///
/// Immutable once created. Exactly one of these exists per unordered pair
/// drawn from the enumerated component list, so a run over `n` components
/// produces `n * (n - 1) / 2` records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentPairResult {
    /// Label of the first component (enumeration order).
    pub component1: String,
    /// Label of the second component.
    pub component2: String,
    /// True iff at least one solid body pair between the two is touching.
    pub touching: bool,
    /// Human-readable detail: touching body-pair count, or why the pair
    /// was skipped without consulting the oracle.
    pub detail: String,
}

/// Summary statistics over a full run, derived from the result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// Total component pairs checked.
    pub total: usize,
    /// Pairs with a touching verdict.
    pub touching: usize,
    /// Pairs with a not-touching verdict.
    pub not_touching: usize,
}

impl AnalysisSummary {
    /// Compute the summary in a single pass. `touching + not_touching`
    /// always equals `total`.
    pub fn of(results: &[ComponentPairResult]) -> Self {
        let touching = results.iter().filter(|r| r.touching).count();
        Self {
            total: results.len(),
            touching,
            not_touching: results.len() - touching,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(touching: bool) -> ComponentPairResult {
        ComponentPairResult {
            component1: "a".to_string(),
            component2: "b".to_string(),
            touching,
            detail: String::new(),
        }
    }

    #[test]
    fn test_summary_counts() {
        let results = vec![pair(true), pair(false), pair(true)];
        let summary = AnalysisSummary::of(&results);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.touching, 2);
        assert_eq!(summary.not_touching, 1);
    }

    #[test]
    fn test_summary_partition_invariant() {
        let results = vec![pair(true), pair(false), pair(false), pair(true)];
        let summary = AnalysisSummary::of(&results);
        assert_eq!(
            summary.touching + summary.not_touching,
            summary.total,
            "touching and not-touching must partition the total"
        );
    }

    #[test]
    fn test_summary_empty() {
        let summary = AnalysisSummary::of(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.touching, 0);
        assert_eq!(summary.not_touching, 0);
    }
}
