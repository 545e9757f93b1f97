use contact_types::{AnalysisSummary, ComponentPairResult};
use serde::{Deserialize, Serialize};

/// How deep component enumeration descends into the assembly tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TraversalDepth {
    /// Immediate children of the root only.
    DirectChildren,
    /// Recurse into sub-assemblies, depth-first, each component before its
    /// own children.
    Full,
}

impl Default for TraversalDepth {
    fn default() -> Self {
        TraversalDepth::DirectChildren
    }
}

/// Options for one analysis run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisOptions {
    pub traversal: TraversalDepth,
}

/// Errors that abort an analysis run. The component-count precondition is
/// the only one; everything past it degrades per pair instead of failing.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EngineError {
    #[error("need at least 2 components to check interference (found {found})")]
    TooFewComponents { found: usize },
}

/// The engine's primary output: one record per unordered component pair,
/// the derived summary, and any recoverable degradations encountered.
#[derive(Debug, Clone)]
pub struct AnalysisRun {
    /// Results in pair-enumeration order.
    pub results: Vec<ComponentPairResult>,
    pub summary: AnalysisSummary,
    /// Diagnostics for degraded checks (unresolved components, faulted
    /// oracle calls). Never fatal.
    pub warnings: Vec<String>,
}

/// Streaming observation of a run as each pair verdict is produced.
///
/// Reporting is incremental: the observer hears about a pair the moment
/// its probe finishes, not after the run completes.
pub trait ProgressObserver {
    /// Called once, after enumeration and the precondition check pass.
    fn on_analysis_started(&mut self, _component_count: usize, _total_pairs: usize) {}

    /// Called per component pair, in enumeration order. `index` counts
    /// from 1 up to `total`.
    fn on_pair_checked(&mut self, _index: usize, _total: usize, _result: &ComponentPairResult) {}
}

/// Observer that ignores everything. For headless runs and tests.
pub struct SilentObserver;

impl ProgressObserver for SilentObserver {}
