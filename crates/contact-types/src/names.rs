use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where an entity's user-visible label comes from.
///
/// Assembly models may or may not carry an explicit display name for a
/// component or body. Rather than probing attributes at runtime, the model
/// reports which source it actually has and `label()` applies the fixed
/// resolution order: display name, then internal identifier, then a
/// canonical placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NameSource {
    /// An explicit display name set in the assembly model.
    Display { name: String },
    /// Fallback to the entity's internal identifier.
    Identifier { id: String },
    /// No name of any kind is available.
    Anonymous,
}

impl NameSource {
    /// Build an identifier-sourced name from a session UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        NameSource::Identifier { id: id.to_string() }
    }

    /// Resolve to the label used in progress lines and reports.
    pub fn label(&self) -> &str {
        match self {
            NameSource::Display { name } => name,
            NameSource::Identifier { id } => id,
            NameSource::Anonymous => "Unknown Component",
        }
    }
}
