use std::path::PathBuf;

use contact_types::NameSource;

use crate::types::{BodyHandle, ComponentHandle, ModelError};

/// Read-only view of a hierarchical assembly.
///
/// The engine consumes this as an injected `&dyn AssemblyModel`, never as
/// ambient session state, so every caller can run against a host-backed
/// implementation or against [`MockAssembly`](crate::MockAssembly).
/// The engine only reads references; it never mutates the assembly.
pub trait AssemblyModel {
    /// The root component of the assembly, if the assembly has one.
    fn root_component(&self) -> Option<ComponentHandle>;

    /// Immediate children of a component, in the order the model reports
    /// them (insertion order, not sorted).
    fn children(&self, component: ComponentHandle) -> Vec<ComponentHandle>;

    /// All geometric bodies owned by a component's underlying definition,
    /// solid or not. Fails when the definition is unresolved or broken.
    fn bodies(&self, component: ComponentHandle) -> Result<Vec<BodyHandle>, ModelError>;

    /// Closedness/manifoldness predicate from the geometry kernel. Only
    /// bodies reporting true participate in interference checks.
    fn is_solid(&self, body: BodyHandle) -> bool;

    /// The component's label source (display name, or internal identifier).
    fn component_name(&self, component: ComponentHandle) -> NameSource;

    /// The body's label source. Bodies frequently have no display name.
    fn body_name(&self, body: BodyHandle) -> NameSource;

    /// Location of the assembly's source file, when it has been saved.
    /// Drives placement of the persisted results artifact.
    fn source_path(&self) -> Option<PathBuf>;
}
