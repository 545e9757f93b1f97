//! Versioned structured rendering of a run, for tooling that prefers data
//! over text.

use chrono::{DateTime, Utc};
use contact_engine::AnalysisRun;
use contact_types::{AnalysisSummary, ComponentPairResult};
use serde::Serialize;

/// Current structured-results format version.
pub const FORMAT_VERSION: u32 = 1;

/// The top-level structure of the JSON rendering.
#[derive(Debug, Clone, Serialize)]
pub struct ResultsFile {
    /// Format identifier.
    pub format: String,
    /// Format version number.
    pub version: u32,
    /// When the rendering was produced.
    pub generated: DateTime<Utc>,
    /// Label of the analyzed assembly.
    pub assembly: String,
    pub summary: AnalysisSummary,
    pub results: Vec<ComponentPairResult>,
    /// Recoverable degradations encountered during the run.
    pub warnings: Vec<String>,
}

/// Serialize a run to a pretty-printed JSON string.
pub fn render_json(run: &AnalysisRun, assembly: &str) -> String {
    let file = ResultsFile {
        format: "contact-check".to_string(),
        version: FORMAT_VERSION,
        generated: Utc::now(),
        assembly: assembly.to_string(),
        summary: run.summary,
        results: run.results.clone(),
        warnings: run.warnings.clone(),
    };
    serde_json::to_string_pretty(&file).expect("results serialization should never fail")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_run() -> AnalysisRun {
        let results = vec![ComponentPairResult {
            component1: "A".to_string(),
            component2: "B".to_string(),
            touching: true,
            detail: "found 2 touching body pair(s)".to_string(),
        }];
        AnalysisRun {
            summary: AnalysisSummary::of(&results),
            results,
            warnings: vec!["check skipped for a1 vs b1: fault".to_string()],
        }
    }

    #[test]
    fn test_json_round_trips_counts() {
        let text = render_json(&sample_run(), "gearbox");
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["format"], "contact-check");
        assert_eq!(value["version"], FORMAT_VERSION);
        assert_eq!(value["assembly"], "gearbox");
        assert_eq!(value["summary"]["total"], 1);
        assert_eq!(value["summary"]["touching"], 1);
        assert_eq!(value["results"][0]["component1"], "A");
        assert_eq!(value["results"][0]["touching"], true);
        assert_eq!(value["warnings"][0], "check skipped for a1 vs b1: fault");
    }
}
