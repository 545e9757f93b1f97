/// Opaque handle to an open checkpoint (undo mark) in the host session.
/// Every opened checkpoint must be matched by exactly one release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckpointHandle(pub u64);

/// Opaque handle to a live interference query object.
/// Must be destroyed after execution, on success and failure alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueryHandle(pub u64);

/// What kind of geometry a query compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterferenceMethod {
    /// Solid-vs-solid, whole-body contact.
    Solid,
}

/// How many face pairs the oracle examines before answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacePairing {
    /// Stop at the first contacting pair. Cheapest configuration; the
    /// verdict is boolean anyway.
    FirstPairOnly,
}

/// Raw verdict code returned by a query execution.
///
/// The host reports an integer; only the canonical positive sentinel means
/// touching, every other code maps to not-touching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerdictCode(pub i32);

impl VerdictCode {
    /// The canonical "bodies are touching" sentinel.
    pub const TOUCHING: VerdictCode = VerdictCode(1);
    /// The usual "no contact" code.
    pub const CLEAR: VerdictCode = VerdictCode(0);

    /// Map the raw code to the boolean verdict.
    pub fn is_touching(self) -> bool {
        self == Self::TOUCHING
    }
}

/// Errors from oracle operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum OracleError {
    #[error("failed to open checkpoint: {reason}")]
    CheckpointFailed { reason: String },

    #[error("failed to create interference query: {reason}")]
    QueryCreationFailed { reason: String },

    #[error("unknown query handle: {handle:?}")]
    UnknownQuery { handle: QueryHandle },

    #[error("query executed before operands were bound")]
    QueryNotConfigured,

    #[error("interference check failed: {reason}")]
    ExecuteFailed { reason: String },

    #[error("teardown failed: {reason}")]
    TeardownFailed { reason: String },
}
