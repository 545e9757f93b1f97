use assembly_model::{AssemblyModel, ComponentHandle};
use contact_types::ComponentPairResult;
use interference_oracle::InterferenceOracle;

use crate::probe::probe_pair;
use crate::types::ProgressObserver;

/// Accumulated output of the pairwise loop.
#[derive(Debug, Clone)]
pub struct AggregateState {
    pub results: Vec<ComponentPairResult>,
    pub warnings: Vec<String>,
}

/// Probe every unordered component pair and collect one result per pair.
///
/// Standard upper-triangular enumeration: `(i, j)` with `i < j` over the
/// component list, `n * (n - 1) / 2` records, enumeration order preserved.
/// The observer is notified as each result is produced, not afterwards.
pub fn aggregate(
    model: &dyn AssemblyModel,
    oracle: &mut dyn InterferenceOracle,
    components: &[ComponentHandle],
    observer: &mut dyn ProgressObserver,
) -> AggregateState {
    let total = components.len() * components.len().saturating_sub(1) / 2;
    let mut results = Vec::with_capacity(total);
    let mut warnings = Vec::new();

    for i in 0..components.len() {
        for j in (i + 1)..components.len() {
            let probe = probe_pair(model, oracle, components[i], components[j]);
            let result = ComponentPairResult {
                component1: model.component_name(components[i]).label().to_string(),
                component2: model.component_name(components[j]).label().to_string(),
                touching: probe.touching,
                detail: probe.detail,
            };
            warnings.extend(probe.warnings);
            results.push(result);
            let index = results.len();
            observer.on_pair_checked(index, total, &results[index - 1]);
        }
    }

    AggregateState { results, warnings }
}
