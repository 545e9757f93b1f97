//! Incremental progress and summary rendering for an interactive stream.

use std::io::Write;

use contact_engine::{AnalysisRun, EngineError, ProgressObserver};
use contact_types::ComponentPairResult;

const HEAVY_RULE: &str =
    "================================================================================";
const LIGHT_RULE: &str =
    "--------------------------------------------------------------------------------";

/// Line-oriented reporter over any writer.
///
/// Progress is best-effort: write failures on the interactive stream are
/// ignored so a broken pipe can never abort the analysis.
pub struct StreamReporter<W: Write> {
    out: W,
}

impl<W: Write> StreamReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// The opening banner, printed before enumeration.
    pub fn print_banner(&mut self) {
        let _ = writeln!(self.out, "{}", HEAVY_RULE);
        let _ = writeln!(self.out, "Component Interference Analysis");
        let _ = writeln!(self.out, "{}", HEAVY_RULE);
    }

    /// The precondition failure, the run's only user-facing abort.
    pub fn print_error(&mut self, err: &EngineError) {
        let _ = writeln!(self.out, "Error: {}", err);
    }

    /// The summary block and the touching-pairs detail block.
    pub fn print_summary(&mut self, run: &AnalysisRun) {
        let _ = writeln!(self.out);
        let _ = writeln!(self.out, "{}", HEAVY_RULE);
        let _ = writeln!(self.out, "SUMMARY OF RESULTS");
        let _ = writeln!(self.out, "{}", HEAVY_RULE);
        let _ = writeln!(self.out);
        let _ = writeln!(
            self.out,
            "Total component pairs checked: {}",
            run.summary.total
        );
        let _ = writeln!(self.out, "Touching pairs: {}", run.summary.touching);
        let _ = writeln!(self.out, "Non-touching pairs: {}", run.summary.not_touching);

        if run.summary.touching > 0 {
            let _ = writeln!(self.out);
            let _ = writeln!(self.out, "{}", LIGHT_RULE);
            let _ = writeln!(self.out, "TOUCHING COMPONENTS:");
            let _ = writeln!(self.out, "{}", LIGHT_RULE);
            for result in run.results.iter().filter(|r| r.touching) {
                let _ = writeln!(
                    self.out,
                    "  {} <-> {}",
                    result.component1, result.component2
                );
                let _ = writeln!(self.out, "    Details: {}", result.detail);
            }
        }

        if !run.warnings.is_empty() {
            let _ = writeln!(self.out);
            let _ = writeln!(self.out, "Warnings ({}):", run.warnings.len());
            for warning in &run.warnings {
                let _ = writeln!(self.out, "  {}", warning);
            }
        }
    }

    /// Where the persisted artifact landed.
    pub fn print_artifact_path(&mut self, path: &std::path::Path) {
        let _ = writeln!(self.out);
        let _ = writeln!(self.out, "Results written to: {}", path.display());
    }

    pub fn print_completion(&mut self) {
        let _ = writeln!(self.out);
        let _ = writeln!(self.out, "Analysis complete!");
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ProgressObserver for StreamReporter<W> {
    fn on_analysis_started(&mut self, component_count: usize, _total_pairs: usize) {
        let _ = writeln!(self.out);
        let _ = writeln!(
            self.out,
            "Found {} components in assembly",
            component_count
        );
        let _ = writeln!(self.out);
    }

    fn on_pair_checked(&mut self, index: usize, total: usize, result: &ComponentPairResult) {
        let _ = writeln!(
            self.out,
            "Checking ({}/{}): {} vs {}",
            index, total, result.component1, result.component2
        );
        if result.touching {
            let _ = writeln!(self.out, "  >> TOUCHING: {}", result.detail);
        } else {
            let _ = writeln!(self.out, "  >> NOT TOUCHING");
        }
        let _ = writeln!(self.out);
    }
}
