//! Full-pipeline driver: analyze, stream progress, persist the artifact.

use std::io::Write;
use std::path::PathBuf;

use assembly_model::AssemblyModel;
use contact_engine::{run_analysis, AnalysisOptions, AnalysisRun};
use interference_oracle::InterferenceOracle;

use crate::artifact::write_artifact;
use crate::errors::ReportError;
use crate::stream::StreamReporter;

/// Run the analysis with streaming progress on `out`, then persist the
/// text artifact.
///
/// A failed precondition (fewer than two components) is reported on the
/// stream and yields `Ok(None)`: the run terminates early and no results
/// file is produced. Everything else returns the run and the artifact
/// path.
pub fn analyze_and_report<W: Write>(
    model: &dyn AssemblyModel,
    oracle: &mut dyn InterferenceOracle,
    options: &AnalysisOptions,
    out: &mut W,
) -> Result<Option<(AnalysisRun, PathBuf)>, ReportError> {
    let mut reporter = StreamReporter::new(&mut *out);
    reporter.print_banner();

    let run = match run_analysis(model, oracle, options, &mut reporter) {
        Ok(run) => run,
        Err(err) => {
            reporter.print_error(&err);
            return Ok(None);
        }
    };

    reporter.print_summary(&run);

    let source = model.source_path();
    let path = write_artifact(&run, source.as_deref())?;
    reporter.print_artifact_path(&path);
    reporter.print_completion();

    Ok(Some((run, path)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assembly_model::MockAssembly;
    use interference_oracle::MockOracle;

    fn three_part_assembly(dir: &std::path::Path) -> (MockAssembly, MockOracle) {
        let mut assembly = MockAssembly::new();
        let a = assembly.add_component("A");
        let a1 = assembly.add_solid(a, "a1");
        let b = assembly.add_component("B");
        let b1 = assembly.add_solid(b, "b1");
        assembly.add_component("C");
        assembly.set_source_path(dir.join("rig.prt"));

        let mut oracle = MockOracle::new();
        oracle.script_touching(a1, b1);
        (assembly, oracle)
    }

    #[test]
    fn test_end_to_end_stream_and_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let (assembly, mut oracle) = three_part_assembly(dir.path());

        let mut out = Vec::new();
        let (run, path) = analyze_and_report(
            &assembly,
            &mut oracle,
            &AnalysisOptions::default(),
            &mut out,
        )
        .unwrap()
        .expect("run should complete");

        let stream = String::from_utf8(out).unwrap();
        assert!(stream.contains("Component Interference Analysis"));
        assert!(stream.contains("Found 3 components in assembly"));
        assert!(stream.contains("Checking (1/3): A vs B"));
        assert!(stream.contains("Results written to:"));
        assert!(stream.contains("Analysis complete!"));

        assert_eq!(path, dir.path().join("rig_interference_results.txt"));
        assert_eq!(run.summary.total, 3);
        assert_eq!(run.summary.touching, 1);
    }

    #[test]
    fn test_artifact_counts_match_stream_counts() {
        let dir = tempfile::tempdir().unwrap();
        let (assembly, mut oracle) = three_part_assembly(dir.path());

        let mut out = Vec::new();
        let (_, path) = analyze_and_report(
            &assembly,
            &mut oracle,
            &AnalysisOptions::default(),
            &mut out,
        )
        .unwrap()
        .unwrap();

        let stream = String::from_utf8(out).unwrap();
        let artifact = std::fs::read_to_string(&path).unwrap();
        for line in [
            "Total component pairs checked: 3",
            "Touching pairs: 1",
            "Non-touching pairs: 2",
        ] {
            assert!(stream.contains(line), "stream missing {:?}", line);
            assert!(artifact.contains(line), "artifact missing {:?}", line);
        }
    }

    #[test]
    fn test_precondition_failure_writes_no_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let mut assembly = MockAssembly::new();
        let only = assembly.add_component("only");
        assembly.add_solid(only, "body");
        assembly.set_source_path(dir.path().join("single.prt"));

        let mut oracle = MockOracle::new();
        let mut out = Vec::new();
        let outcome = analyze_and_report(
            &assembly,
            &mut oracle,
            &AnalysisOptions::default(),
            &mut out,
        )
        .unwrap();

        assert!(outcome.is_none());
        let stream = String::from_utf8(out).unwrap();
        assert!(stream.contains("Error: need at least 2 components"));
        assert!(
            !dir.path().join("single_interference_results.txt").exists(),
            "no results file on early termination"
        );
    }
}
