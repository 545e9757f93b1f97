use assembly_model::{AssemblyModel, ComponentHandle};
use interference_oracle::InterferenceOracle;

use crate::bodies::{solid_bodies_of, BodyExtraction};
use crate::transaction::{transacted_check, CheckOutcome};

/// Checkpoint label used for every body-pair transaction.
pub const CHECKPOINT_LABEL: &str = "Interference Check";

/// Detail string for pairs skipped without consulting the oracle.
pub const DETAIL_NO_SOLID_BODIES: &str = "one or both components have no solid bodies";

/// Detail string for pairs where no body pair touched.
pub const DETAIL_NO_INTERFERENCE: &str = "no interference detected";

/// Result of probing one component pair.
#[derive(Debug, Clone)]
pub struct PairProbe {
    /// True iff at least one body pair touched.
    pub touching: bool,
    /// Human-readable outcome summary.
    pub detail: String,
    /// Labels of every touching body pair, in check order.
    pub touching_bodies: Vec<(String, String)>,
    /// Recoverable degradations: unresolved components, faulted checks.
    pub warnings: Vec<String>,
}

/// Evaluate whether any solid body of `c1` touches any solid body of `c2`.
///
/// Runs the full cross product of body pairs without short-circuiting, so
/// the detail reflects the true touching count. A faulted oracle call
/// degrades that one body pair to not-touching and the loop continues.
pub fn probe_pair(
    model: &dyn AssemblyModel,
    oracle: &mut dyn InterferenceOracle,
    c1: ComponentHandle,
    c2: ComponentHandle,
) -> PairProbe {
    let mut warnings = Vec::new();
    let bodies1 = extract(model, c1, &mut warnings);
    let bodies2 = extract(model, c2, &mut warnings);

    if bodies1.is_empty() || bodies2.is_empty() {
        return PairProbe {
            touching: false,
            detail: DETAIL_NO_SOLID_BODIES.to_string(),
            touching_bodies: Vec::new(),
            warnings,
        };
    }

    let mut touching_bodies = Vec::new();
    for &b1 in &bodies1 {
        for &b2 in &bodies2 {
            match transacted_check(oracle, CHECKPOINT_LABEL, b1, b2) {
                CheckOutcome::Touching => {
                    touching_bodies.push((
                        model.body_name(b1).label().to_string(),
                        model.body_name(b2).label().to_string(),
                    ));
                }
                CheckOutcome::Clear => {}
                CheckOutcome::Failed(err) => {
                    warnings.push(format!(
                        "check skipped for {} vs {}: {}",
                        model.body_name(b1).label(),
                        model.body_name(b2).label(),
                        err,
                    ));
                }
            }
        }
    }

    let detail = if touching_bodies.is_empty() {
        DETAIL_NO_INTERFERENCE.to_string()
    } else {
        format!("found {} touching body pair(s)", touching_bodies.len())
    };

    PairProbe {
        touching: !touching_bodies.is_empty(),
        detail,
        touching_bodies,
        warnings,
    }
}

fn extract(
    model: &dyn AssemblyModel,
    component: ComponentHandle,
    warnings: &mut Vec<String>,
) -> Vec<assembly_model::BodyHandle> {
    match solid_bodies_of(model, component) {
        BodyExtraction::Solids(bodies) => bodies,
        BodyExtraction::Unresolved(reason) => {
            warnings.push(format!(
                "bodies of {} treated as empty: {}",
                model.component_name(component).label(),
                reason,
            ));
            Vec::new()
        }
    }
}
