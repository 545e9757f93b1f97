//! MockOracle — scriptable spy double for the interference oracle.
//!
//! Tests script which body pairs touch and which calls fault, then assert
//! against the recorded call history: executed pairs, checkpoint pairing,
//! query lifecycle counts.

use std::collections::{HashMap, HashSet};

use assembly_model::BodyHandle;

use crate::traits::InterferenceOracle;
use crate::types::{
    CheckpointHandle, FacePairing, InterferenceMethod, OracleError, QueryHandle, VerdictCode,
};

#[derive(Debug, Clone)]
struct QueryState {
    method: InterferenceMethod,
    pairing: FacePairing,
    operands: Option<(BodyHandle, BodyHandle)>,
}

/// Deterministic spy double for the geometry oracle.
pub struct MockOracle {
    next_handle: u64,
    /// Unordered body pairs scripted as touching.
    touching: HashSet<(u64, u64)>,
    live_queries: HashMap<u64, QueryState>,
    open_checkpoints: HashSet<u64>,

    // Fault scripting
    fail_execute_calls: HashSet<usize>,
    fail_pairs: HashSet<(u64, u64)>,
    fail_checkpoint_open: bool,
    fail_teardown: bool,

    // Call recording
    executed_pairs: Vec<(BodyHandle, BodyHandle)>,
    execute_calls: usize,
    checkpoints_opened: usize,
    checkpoints_released: usize,
    queries_created: usize,
    queries_destroyed: usize,
}

fn unordered(a: BodyHandle, b: BodyHandle) -> (u64, u64) {
    if a.0 <= b.0 {
        (a.0, b.0)
    } else {
        (b.0, a.0)
    }
}

impl MockOracle {
    pub fn new() -> Self {
        Self {
            next_handle: 1,
            touching: HashSet::new(),
            live_queries: HashMap::new(),
            open_checkpoints: HashSet::new(),
            fail_execute_calls: HashSet::new(),
            fail_pairs: HashSet::new(),
            fail_checkpoint_open: false,
            fail_teardown: false,
            executed_pairs: Vec::new(),
            execute_calls: 0,
            checkpoints_opened: 0,
            checkpoints_released: 0,
            queries_created: 0,
            queries_destroyed: 0,
        }
    }

    /// Script the unordered pair `(a, b)` as touching.
    pub fn script_touching(&mut self, a: BodyHandle, b: BodyHandle) {
        self.touching.insert(unordered(a, b));
    }

    /// Fault the nth `execute` call (0-based).
    pub fn fail_execute_call(&mut self, call_index: usize) {
        self.fail_execute_calls.insert(call_index);
    }

    /// Fault every execution that compares the unordered pair `(a, b)`.
    pub fn fail_pair(&mut self, a: BodyHandle, b: BodyHandle) {
        self.fail_pairs.insert(unordered(a, b));
    }

    /// Fault all checkpoint opens.
    pub fn fail_checkpoint_open(&mut self) {
        self.fail_checkpoint_open = true;
    }

    /// Fault all teardown calls (destroy/release). State is still cleaned
    /// up so balance accounting stays meaningful.
    pub fn fail_teardown(&mut self) {
        self.fail_teardown = true;
    }

    // ── Recorded history ────────────────────────────────────────────────

    /// Every pair that reached `execute`, in call order.
    pub fn executed_pairs(&self) -> &[(BodyHandle, BodyHandle)] {
        &self.executed_pairs
    }

    /// Total `execute` invocations, including faulted ones.
    pub fn execute_count(&self) -> usize {
        self.execute_calls
    }

    pub fn checkpoints_opened(&self) -> usize {
        self.checkpoints_opened
    }

    pub fn checkpoints_released(&self) -> usize {
        self.checkpoints_released
    }

    pub fn queries_created(&self) -> usize {
        self.queries_created
    }

    pub fn queries_destroyed(&self) -> usize {
        self.queries_destroyed
    }

    /// True when every checkpoint and query was torn down.
    pub fn is_clean(&self) -> bool {
        self.open_checkpoints.is_empty() && self.live_queries.is_empty()
    }
}

impl Default for MockOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl InterferenceOracle for MockOracle {
    fn open_checkpoint(&mut self, label: &str) -> Result<CheckpointHandle, OracleError> {
        if self.fail_checkpoint_open {
            return Err(OracleError::CheckpointFailed {
                reason: format!("scripted failure opening '{}'", label),
            });
        }
        let handle = CheckpointHandle(self.next_handle);
        self.next_handle += 1;
        self.open_checkpoints.insert(handle.0);
        self.checkpoints_opened += 1;
        Ok(handle)
    }

    fn create_query(
        &mut self,
        method: InterferenceMethod,
        pairing: FacePairing,
    ) -> Result<QueryHandle, OracleError> {
        let handle = QueryHandle(self.next_handle);
        self.next_handle += 1;
        self.live_queries.insert(
            handle.0,
            QueryState {
                method,
                pairing,
                operands: None,
            },
        );
        self.queries_created += 1;
        Ok(handle)
    }

    fn set_operands(
        &mut self,
        query: QueryHandle,
        first: BodyHandle,
        second: BodyHandle,
    ) -> Result<(), OracleError> {
        let state = self
            .live_queries
            .get_mut(&query.0)
            .ok_or(OracleError::UnknownQuery { handle: query })?;
        state.operands = Some((first, second));
        Ok(())
    }

    fn execute(&mut self, query: QueryHandle) -> Result<VerdictCode, OracleError> {
        let call_index = self.execute_calls;
        self.execute_calls += 1;

        let state = self
            .live_queries
            .get(&query.0)
            .ok_or(OracleError::UnknownQuery { handle: query })?;
        let (first, second) = state.operands.ok_or(OracleError::QueryNotConfigured)?;
        debug_assert_eq!(state.method, InterferenceMethod::Solid);
        debug_assert_eq!(state.pairing, FacePairing::FirstPairOnly);

        self.executed_pairs.push((first, second));

        let key = unordered(first, second);
        if self.fail_execute_calls.contains(&call_index) || self.fail_pairs.contains(&key) {
            return Err(OracleError::ExecuteFailed {
                reason: format!("scripted fault for {:?} vs {:?}", first, second),
            });
        }

        if self.touching.contains(&key) {
            Ok(VerdictCode::TOUCHING)
        } else {
            Ok(VerdictCode::CLEAR)
        }
    }

    fn destroy_query(&mut self, query: QueryHandle) -> Result<(), OracleError> {
        if self.live_queries.remove(&query.0).is_none() {
            return Err(OracleError::UnknownQuery { handle: query });
        }
        self.queries_destroyed += 1;
        if self.fail_teardown {
            return Err(OracleError::TeardownFailed {
                reason: "scripted destroy failure".to_string(),
            });
        }
        Ok(())
    }

    fn release_checkpoint(&mut self, checkpoint: CheckpointHandle) -> Result<(), OracleError> {
        if !self.open_checkpoints.remove(&checkpoint.0) {
            return Err(OracleError::TeardownFailed {
                reason: format!("checkpoint {:?} is not open", checkpoint),
            });
        }
        self.checkpoints_released += 1;
        if self.fail_teardown {
            return Err(OracleError::TeardownFailed {
                reason: "scripted release failure".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_one_check(
        oracle: &mut MockOracle,
        a: BodyHandle,
        b: BodyHandle,
    ) -> Result<VerdictCode, OracleError> {
        let cp = oracle.open_checkpoint("test")?;
        let query = oracle.create_query(InterferenceMethod::Solid, FacePairing::FirstPairOnly)?;
        oracle.set_operands(query, a, b)?;
        let verdict = oracle.execute(query);
        let _ = oracle.destroy_query(query);
        let _ = oracle.release_checkpoint(cp);
        verdict
    }

    #[test]
    fn test_scripted_pair_is_touching_both_orders() {
        let mut oracle = MockOracle::new();
        let a = BodyHandle(10);
        let b = BodyHandle(20);
        oracle.script_touching(a, b);

        assert!(run_one_check(&mut oracle, a, b).unwrap().is_touching());
        assert!(run_one_check(&mut oracle, b, a).unwrap().is_touching());
    }

    #[test]
    fn test_unscripted_pair_is_clear() {
        let mut oracle = MockOracle::new();
        let verdict = run_one_check(&mut oracle, BodyHandle(1), BodyHandle(2)).unwrap();
        assert!(!verdict.is_touching());
    }

    #[test]
    fn test_execute_without_operands_fails() {
        let mut oracle = MockOracle::new();
        let query = oracle
            .create_query(InterferenceMethod::Solid, FacePairing::FirstPairOnly)
            .unwrap();
        assert!(matches!(
            oracle.execute(query),
            Err(OracleError::QueryNotConfigured)
        ));
    }

    #[test]
    fn test_fault_scripting_by_call_index() {
        let mut oracle = MockOracle::new();
        oracle.fail_execute_call(0);

        let first = run_one_check(&mut oracle, BodyHandle(1), BodyHandle(2));
        let second = run_one_check(&mut oracle, BodyHandle(1), BodyHandle(2));
        assert!(first.is_err(), "first call should fault");
        assert!(second.is_ok(), "second call should succeed");
    }

    #[test]
    fn test_call_recording_and_balance() {
        let mut oracle = MockOracle::new();
        run_one_check(&mut oracle, BodyHandle(1), BodyHandle(2)).unwrap();
        run_one_check(&mut oracle, BodyHandle(3), BodyHandle(4)).unwrap();

        assert_eq!(oracle.execute_count(), 2);
        assert_eq!(oracle.executed_pairs().len(), 2);
        assert_eq!(oracle.checkpoints_opened(), oracle.checkpoints_released());
        assert_eq!(oracle.queries_created(), oracle.queries_destroyed());
        assert!(oracle.is_clean());
    }

    #[test]
    fn test_teardown_faults_still_clean_up() {
        let mut oracle = MockOracle::new();
        oracle.fail_teardown();
        let cp = oracle.open_checkpoint("t").unwrap();
        assert!(oracle.release_checkpoint(cp).is_err());
        assert!(oracle.is_clean(), "state is discarded even when the call faults");
    }

    #[test]
    fn test_double_release_is_reported() {
        let mut oracle = MockOracle::new();
        let cp = oracle.open_checkpoint("t").unwrap();
        oracle.release_checkpoint(cp).unwrap();
        assert!(oracle.release_checkpoint(cp).is_err());
    }
}
