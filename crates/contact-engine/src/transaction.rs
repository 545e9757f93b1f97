use assembly_model::BodyHandle;
use interference_oracle::{
    CheckpointHandle, FacePairing, InterferenceMethod, InterferenceOracle, OracleError,
    QueryHandle,
};

/// Scoped checkpoint envelope around oracle invocations.
///
/// Opening the transaction opens a named checkpoint in the host session;
/// dropping it destroys any live query and releases the checkpoint, on
/// every exit path. Teardown errors are swallowed so a failing release can
/// never mask the verdict or abort the caller. Every opened checkpoint is
/// matched by exactly one release.
pub struct CheckTransaction<'a> {
    oracle: &'a mut dyn InterferenceOracle,
    checkpoint: Option<CheckpointHandle>,
    query: Option<QueryHandle>,
}

impl<'a> CheckTransaction<'a> {
    /// Open a checkpoint and take custody of the oracle for its duration.
    pub fn open(
        oracle: &'a mut dyn InterferenceOracle,
        label: &str,
    ) -> Result<Self, OracleError> {
        let checkpoint = oracle.open_checkpoint(label)?;
        Ok(Self {
            oracle,
            checkpoint: Some(checkpoint),
            query: None,
        })
    }

    /// Run one solid-vs-solid, first-pair-only interference query between
    /// the two bodies and map its verdict code to a boolean.
    pub fn check(&mut self, first: BodyHandle, second: BodyHandle) -> Result<bool, OracleError> {
        let query = self
            .oracle
            .create_query(InterferenceMethod::Solid, FacePairing::FirstPairOnly)?;
        self.query = Some(query);
        self.oracle.set_operands(query, first, second)?;
        let verdict = self.oracle.execute(query)?;
        Ok(verdict.is_touching())
    }
}

impl Drop for CheckTransaction<'_> {
    fn drop(&mut self) {
        if let Some(query) = self.query.take() {
            let _ = self.oracle.destroy_query(query);
        }
        if let Some(checkpoint) = self.checkpoint.take() {
            let _ = self.oracle.release_checkpoint(checkpoint);
        }
    }
}

/// Outcome of one fully transacted body-pair check.
///
/// `Clear` and `Failed` both fold to "not touching" at the probe level,
/// but stay distinguishable here for diagnostics.
#[derive(Debug)]
pub enum CheckOutcome {
    Touching,
    Clear,
    Failed(OracleError),
}

impl CheckOutcome {
    pub fn is_touching(&self) -> bool {
        matches!(self, CheckOutcome::Touching)
    }
}

/// One complete open-check-teardown cycle for a single body pair.
pub fn transacted_check(
    oracle: &mut dyn InterferenceOracle,
    label: &str,
    first: BodyHandle,
    second: BodyHandle,
) -> CheckOutcome {
    let mut txn = match CheckTransaction::open(oracle, label) {
        Ok(txn) => txn,
        Err(err) => return CheckOutcome::Failed(err),
    };
    match txn.check(first, second) {
        Ok(true) => CheckOutcome::Touching,
        Ok(false) => CheckOutcome::Clear,
        Err(err) => CheckOutcome::Failed(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interference_oracle::MockOracle;

    #[test]
    fn test_successful_check_tears_down() {
        let mut oracle = MockOracle::new();
        let a = BodyHandle(1);
        let b = BodyHandle(2);
        oracle.script_touching(a, b);

        let outcome = transacted_check(&mut oracle, "check", a, b);
        assert!(outcome.is_touching());
        assert!(oracle.is_clean(), "checkpoint and query must be released");
        assert_eq!(oracle.checkpoints_opened(), 1);
        assert_eq!(oracle.checkpoints_released(), 1);
        assert_eq!(oracle.queries_created(), 1);
        assert_eq!(oracle.queries_destroyed(), 1);
    }

    #[test]
    fn test_execute_fault_still_tears_down() {
        let mut oracle = MockOracle::new();
        oracle.fail_execute_call(0);

        let outcome = transacted_check(&mut oracle, "check", BodyHandle(1), BodyHandle(2));
        assert!(matches!(outcome, CheckOutcome::Failed(_)));
        assert!(oracle.is_clean(), "teardown must run on the failure path");
        assert_eq!(oracle.checkpoints_opened(), oracle.checkpoints_released());
        assert_eq!(oracle.queries_created(), oracle.queries_destroyed());
    }

    #[test]
    fn test_checkpoint_open_fault_reports_failed() {
        let mut oracle = MockOracle::new();
        oracle.fail_checkpoint_open();

        let outcome = transacted_check(&mut oracle, "check", BodyHandle(1), BodyHandle(2));
        assert!(matches!(outcome, CheckOutcome::Failed(_)));
        assert_eq!(oracle.execute_count(), 0, "no query runs without a checkpoint");
    }

    #[test]
    fn test_teardown_faults_are_swallowed() {
        let mut oracle = MockOracle::new();
        oracle.fail_teardown();

        let outcome = transacted_check(&mut oracle, "check", BodyHandle(1), BodyHandle(2));
        assert!(
            matches!(outcome, CheckOutcome::Clear),
            "a failing release must not change the verdict"
        );
        assert!(oracle.is_clean());
    }

    #[test]
    fn test_clear_and_failed_are_distinguishable() {
        let mut oracle = MockOracle::new();
        oracle.fail_pair(BodyHandle(3), BodyHandle(4));

        let clear = transacted_check(&mut oracle, "check", BodyHandle(1), BodyHandle(2));
        let failed = transacted_check(&mut oracle, "check", BodyHandle(3), BodyHandle(4));
        assert!(matches!(clear, CheckOutcome::Clear));
        assert!(matches!(failed, CheckOutcome::Failed(_)));
        assert!(!clear.is_touching());
        assert!(!failed.is_touching());
    }
}
