use assembly_model::BodyHandle;

use crate::types::{
    CheckpointHandle, FacePairing, InterferenceMethod, OracleError, QueryHandle, VerdictCode,
};

/// Host capability that evaluates zero-clearance contact between two solid
/// bodies.
///
/// The oracle mutates shared host-session state (checkpoints, query
/// objects, selection), so it is not safe for concurrent invocation and is
/// taken as `&mut` throughout. Callers are responsible for the transaction
/// discipline: open a checkpoint, create and execute the query, then
/// destroy the query and release the checkpoint on every exit path.
/// Implemented by host bindings and by [`MockOracle`](crate::MockOracle).
pub trait InterferenceOracle {
    /// Open a named checkpoint (undo mark) so transient state created by
    /// the query can be discarded afterwards.
    fn open_checkpoint(&mut self, label: &str) -> Result<CheckpointHandle, OracleError>;

    /// Create an interference query configured for the given method and
    /// face pairing.
    fn create_query(
        &mut self,
        method: InterferenceMethod,
        pairing: FacePairing,
    ) -> Result<QueryHandle, OracleError>;

    /// Bind the two bodies the query compares.
    fn set_operands(
        &mut self,
        query: QueryHandle,
        first: BodyHandle,
        second: BodyHandle,
    ) -> Result<(), OracleError>;

    /// Run the query and return the raw verdict code.
    fn execute(&mut self, query: QueryHandle) -> Result<VerdictCode, OracleError>;

    /// Destroy a query object. Teardown failures are reported but callers
    /// swallow them.
    fn destroy_query(&mut self, query: QueryHandle) -> Result<(), OracleError>;

    /// Release a checkpoint, discarding transient state back to it.
    /// Teardown failures are reported but callers swallow them.
    fn release_checkpoint(&mut self, checkpoint: CheckpointHandle) -> Result<(), OracleError>;
}
