use serde::{Deserialize, Serialize};

/// Opaque handle to a placed component instance in the assembly tree.
/// Valid only for the current model session. NEVER persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentHandle(pub u64);

/// Opaque handle to a geometric body owned by a component.
/// Valid only for the current model session. NEVER persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyHandle(pub u64);

/// Errors from the assembly model collaborator.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ModelError {
    #[error("component definition could not be resolved: {reason}")]
    UnresolvedComponent { reason: String },

    #[error("unknown component handle: {handle:?}")]
    UnknownComponent { handle: ComponentHandle },

    #[error("assembly model error: {message}")]
    Other { message: String },
}

// Handles serialize as bare integers, same as other session identifiers.
impl Serialize for ComponentHandle {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ComponentHandle {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u64::deserialize(deserializer).map(ComponentHandle)
    }
}

impl Serialize for BodyHandle {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BodyHandle {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u64::deserialize(deserializer).map(BodyHandle)
    }
}
