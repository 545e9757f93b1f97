//! Assembly-wide touch/interference detection engine.
//!
//! Flattens an assembly into a component list, probes every unordered
//! component pair through an injected geometry oracle under a
//! checkpoint/release transaction discipline, aggregates body-level
//! verdicts into component-level results, and streams progress to an
//! observer. The engine holds no state across runs.

pub mod aggregate;
pub mod bodies;
pub mod enumerate;
pub mod probe;
pub mod transaction;
pub mod types;

use assembly_model::AssemblyModel;
use contact_types::AnalysisSummary;
use interference_oracle::InterferenceOracle;

pub use crate::aggregate::AggregateState;
pub use crate::bodies::{solid_bodies_of, BodyExtraction};
pub use crate::enumerate::enumerate_components;
pub use crate::probe::{probe_pair, PairProbe, DETAIL_NO_INTERFERENCE, DETAIL_NO_SOLID_BODIES};
pub use crate::transaction::{transacted_check, CheckOutcome, CheckTransaction};
pub use crate::types::{
    AnalysisOptions, AnalysisRun, EngineError, ProgressObserver, SilentObserver, TraversalDepth,
};

/// Run a full interference analysis over the assembly.
///
/// The one user-facing abort condition is fewer than two enumerated
/// components; every failure past that point degrades per body pair or per
/// component and is reported through `AnalysisRun::warnings`. Checks run
/// strictly sequentially, one transaction fully closed before the next
/// opens.
pub fn run_analysis(
    model: &dyn AssemblyModel,
    oracle: &mut dyn InterferenceOracle,
    options: &AnalysisOptions,
    observer: &mut dyn ProgressObserver,
) -> Result<AnalysisRun, EngineError> {
    let components = enumerate_components(model, options.traversal);
    if components.len() < 2 {
        return Err(EngineError::TooFewComponents {
            found: components.len(),
        });
    }

    let total = components.len() * (components.len() - 1) / 2;
    observer.on_analysis_started(components.len(), total);

    let state = aggregate::aggregate(model, oracle, &components, observer);
    let summary = AnalysisSummary::of(&state.results);
    Ok(AnalysisRun {
        results: state.results,
        summary,
        warnings: state.warnings,
    })
}
