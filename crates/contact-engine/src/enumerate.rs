use assembly_model::{AssemblyModel, ComponentHandle};

use crate::types::TraversalDepth;

/// Flatten the assembly into an order-stable component list.
///
/// The order is whatever the model reports for each component's children;
/// it determines pair enumeration order and therefore report ordering. An
/// absent root is not an error, just zero components.
pub fn enumerate_components(
    model: &dyn AssemblyModel,
    traversal: TraversalDepth,
) -> Vec<ComponentHandle> {
    let Some(root) = model.root_component() else {
        return Vec::new();
    };

    match traversal {
        TraversalDepth::DirectChildren => model.children(root),
        TraversalDepth::Full => {
            let mut components = Vec::new();
            collect_descendants(model, root, &mut components);
            components
        }
    }
}

fn collect_descendants(
    model: &dyn AssemblyModel,
    parent: ComponentHandle,
    out: &mut Vec<ComponentHandle>,
) {
    for child in model.children(parent) {
        out.push(child);
        collect_descendants(model, child, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assembly_model::MockAssembly;

    #[test]
    fn test_no_root_yields_empty_list() {
        let assembly = MockAssembly::without_root();
        let components = enumerate_components(&assembly, TraversalDepth::DirectChildren);
        assert!(components.is_empty());
    }

    #[test]
    fn test_direct_children_only() {
        let mut assembly = MockAssembly::new();
        let a = assembly.add_component("a");
        let b = assembly.add_component("b");
        // A nested sub-assembly must not appear at the default depth.
        assembly.add_child(a, Some("a_sub"));

        let components = enumerate_components(&assembly, TraversalDepth::DirectChildren);
        assert_eq!(components, vec![a, b]);
    }

    #[test]
    fn test_full_traversal_is_depth_first_preorder() {
        let mut assembly = MockAssembly::new();
        let a = assembly.add_component("a");
        let a1 = assembly.add_child(a, Some("a1"));
        let a1x = assembly.add_child(a1, Some("a1x"));
        let b = assembly.add_component("b");

        let components = enumerate_components(&assembly, TraversalDepth::Full);
        assert_eq!(components, vec![a, a1, a1x, b]);
    }
}
