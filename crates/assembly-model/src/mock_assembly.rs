//! MockAssembly — deterministic in-memory test double for AssemblyModel.
//!
//! Builds small assembly trees with scripted body ownership, solid flags,
//! and broken component definitions. Used by contact-engine and
//! contact-report for unit and integration testing.

use std::collections::HashMap;
use std::path::PathBuf;

use contact_types::NameSource;
use uuid::Uuid;

use crate::traits::AssemblyModel;
use crate::types::{BodyHandle, ComponentHandle, ModelError};

#[derive(Debug, Clone)]
struct MockComponent {
    instance_id: Uuid,
    display_name: Option<String>,
    children: Vec<ComponentHandle>,
    bodies: Vec<BodyHandle>,
    /// When set, `bodies()` fails as an unresolved definition.
    unresolved: bool,
}

#[derive(Debug, Clone)]
struct MockBody {
    instance_id: Uuid,
    display_name: Option<String>,
    solid: bool,
}

/// Deterministic test double for the assembly model.
pub struct MockAssembly {
    next_handle: u64,
    root: Option<ComponentHandle>,
    components: HashMap<u64, MockComponent>,
    bodies: HashMap<u64, MockBody>,
    source_path: Option<PathBuf>,
}

impl MockAssembly {
    /// Create an assembly with an empty root component.
    pub fn new() -> Self {
        let mut assembly = Self::without_root();
        let root = assembly.alloc_component(Some("root"));
        assembly.root = Some(root);
        assembly
    }

    /// Create an assembly with no root at all (an empty session).
    pub fn without_root() -> Self {
        Self {
            next_handle: 1,
            root: None,
            components: HashMap::new(),
            bodies: HashMap::new(),
            source_path: None,
        }
    }

    fn alloc_component(&mut self, display_name: Option<&str>) -> ComponentHandle {
        let handle = ComponentHandle(self.next_handle);
        self.next_handle += 1;
        self.components.insert(
            handle.0,
            MockComponent {
                instance_id: Uuid::new_v4(),
                display_name: display_name.map(str::to_string),
                children: Vec::new(),
                bodies: Vec::new(),
                unresolved: false,
            },
        );
        handle
    }

    /// Add a child component under the root, with a display name.
    pub fn add_component(&mut self, display_name: &str) -> ComponentHandle {
        let root = match self.root {
            Some(root) => root,
            None => {
                let root = self.alloc_component(Some("root"));
                self.root = Some(root);
                root
            }
        };
        self.add_child(root, Some(display_name))
    }

    /// Add a child under an arbitrary parent. `None` leaves the component
    /// without a display name, so its label falls back to the instance id.
    pub fn add_child(
        &mut self,
        parent: ComponentHandle,
        display_name: Option<&str>,
    ) -> ComponentHandle {
        let child = self.alloc_component(display_name);
        if let Some(p) = self.components.get_mut(&parent.0) {
            p.children.push(child);
        }
        child
    }

    /// Attach a body to a component. Non-solid bodies (sheets, wireframes)
    /// are created with `solid = false`.
    pub fn add_body(
        &mut self,
        component: ComponentHandle,
        display_name: Option<&str>,
        solid: bool,
    ) -> BodyHandle {
        let handle = BodyHandle(self.next_handle);
        self.next_handle += 1;
        self.bodies.insert(
            handle.0,
            MockBody {
                instance_id: Uuid::new_v4(),
                display_name: display_name.map(str::to_string),
                solid,
            },
        );
        if let Some(c) = self.components.get_mut(&component.0) {
            c.bodies.push(handle);
        }
        handle
    }

    /// Shorthand for a named solid body.
    pub fn add_solid(&mut self, component: ComponentHandle, name: &str) -> BodyHandle {
        self.add_body(component, Some(name), true)
    }

    /// Script the component's definition as unresolved, so `bodies()` fails.
    pub fn mark_unresolved(&mut self, component: ComponentHandle) {
        if let Some(c) = self.components.get_mut(&component.0) {
            c.unresolved = true;
        }
    }

    /// Set the assembly's saved location.
    pub fn set_source_path(&mut self, path: impl Into<PathBuf>) {
        self.source_path = Some(path.into());
    }
}

impl Default for MockAssembly {
    fn default() -> Self {
        Self::new()
    }
}

impl AssemblyModel for MockAssembly {
    fn root_component(&self) -> Option<ComponentHandle> {
        self.root
    }

    fn children(&self, component: ComponentHandle) -> Vec<ComponentHandle> {
        self.components
            .get(&component.0)
            .map(|c| c.children.clone())
            .unwrap_or_default()
    }

    fn bodies(&self, component: ComponentHandle) -> Result<Vec<BodyHandle>, ModelError> {
        let c = self
            .components
            .get(&component.0)
            .ok_or(ModelError::UnknownComponent { handle: component })?;
        if c.unresolved {
            return Err(ModelError::UnresolvedComponent {
                reason: format!("prototype for instance {} is not loaded", c.instance_id),
            });
        }
        Ok(c.bodies.clone())
    }

    fn is_solid(&self, body: BodyHandle) -> bool {
        self.bodies.get(&body.0).map(|b| b.solid).unwrap_or(false)
    }

    fn component_name(&self, component: ComponentHandle) -> NameSource {
        match self.components.get(&component.0) {
            Some(c) => match &c.display_name {
                Some(name) => NameSource::Display { name: name.clone() },
                None => NameSource::from_uuid(c.instance_id),
            },
            None => NameSource::Anonymous,
        }
    }

    fn body_name(&self, body: BodyHandle) -> NameSource {
        match self.bodies.get(&body.0) {
            Some(b) => match &b.display_name {
                Some(name) => NameSource::Display { name: name.clone() },
                None => NameSource::from_uuid(b.instance_id),
            },
            None => NameSource::Anonymous,
        }
    }

    fn source_path(&self) -> Option<PathBuf> {
        self.source_path.clone()
    }
}
