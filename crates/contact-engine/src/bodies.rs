use assembly_model::{AssemblyModel, BodyHandle, ComponentHandle};

/// Outcome of resolving a component's solid bodies.
///
/// Both arms mean "nothing to check" when the body list is empty, but an
/// unresolved definition is kept distinguishable from "has bodies, none
/// solid" so the degradation can be surfaced as a diagnostic.
#[derive(Debug, Clone)]
pub enum BodyExtraction {
    /// The component resolved; only bodies passing `is_solid` are kept,
    /// in model order.
    Solids(Vec<BodyHandle>),
    /// The component's underlying definition could not be resolved.
    /// Treated as zero bodies, never as a fatal error.
    Unresolved(String),
}

/// Resolve a component to its solid bodies.
pub fn solid_bodies_of(model: &dyn AssemblyModel, component: ComponentHandle) -> BodyExtraction {
    match model.bodies(component) {
        Ok(bodies) => BodyExtraction::Solids(
            bodies
                .into_iter()
                .filter(|body| model.is_solid(*body))
                .collect(),
        ),
        Err(err) => BodyExtraction::Unresolved(err.to_string()),
    }
}
