//! The persisted text artifact.
//!
//! Written once at the end of a run: banner, per-pair detailed section,
//! summary, and a touching-pairs-only listing. The file lands next to the
//! assembly's source file as `{base}_interference_results.txt`; when the
//! assembly has no saved location it falls back silently to the process
//! temp directory.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use contact_engine::AnalysisRun;

use crate::errors::ReportError;

const HEAVY_RULE: &str =
    "================================================================================";
const LIGHT_RULE: &str =
    "--------------------------------------------------------------------------------";

/// File name used when the assembly's own location is unavailable.
pub const FALLBACK_FILE_NAME: &str = "interference_results.txt";

/// Derive the artifact path from the assembly's source location.
/// Resolution failure is not an error; it selects the temp-dir fallback.
pub fn derive_output_path(source_path: Option<&Path>) -> PathBuf {
    let fallback = || std::env::temp_dir().join(FALLBACK_FILE_NAME);
    match source_path {
        Some(path) => match (path.parent(), path.file_stem()) {
            (Some(dir), Some(base)) => dir.join(format!(
                "{}_interference_results.txt",
                base.to_string_lossy()
            )),
            _ => fallback(),
        },
        None => fallback(),
    }
}

/// Render the full artifact text.
pub fn render_artifact(run: &AnalysisRun, generated: DateTime<Utc>) -> String {
    let mut out = String::new();
    out.push_str(HEAVY_RULE);
    out.push('\n');
    out.push_str("Component Interference Analysis Results\n");
    out.push_str(HEAVY_RULE);
    out.push('\n');
    out.push_str(&format!("Generated: {}\n\n", generated.to_rfc3339()));

    out.push_str("DETAILED RESULTS:\n");
    out.push_str(LIGHT_RULE);
    out.push('\n');
    for result in &run.results {
        let status = if result.touching {
            "TOUCHING"
        } else {
            "NOT TOUCHING"
        };
        out.push_str(&format!(
            "\n{} <-> {}\n",
            result.component1, result.component2
        ));
        out.push_str(&format!("  Status: {}\n", status));
        out.push_str(&format!("  Details: {}\n", result.detail));
    }

    out.push('\n');
    out.push_str(HEAVY_RULE);
    out.push('\n');
    out.push_str("SUMMARY:\n");
    out.push_str(HEAVY_RULE);
    out.push('\n');
    out.push_str(&format!(
        "Total component pairs checked: {}\n",
        run.summary.total
    ));
    out.push_str(&format!("Touching pairs: {}\n", run.summary.touching));
    out.push_str(&format!(
        "Non-touching pairs: {}\n",
        run.summary.not_touching
    ));

    if run.summary.touching > 0 {
        out.push('\n');
        out.push_str(LIGHT_RULE);
        out.push('\n');
        out.push_str("TOUCHING COMPONENTS:\n");
        out.push_str(LIGHT_RULE);
        out.push('\n');
        for result in run.results.iter().filter(|r| r.touching) {
            out.push_str(&format!(
                "  {} <-> {}\n",
                result.component1, result.component2
            ));
        }
    }

    out
}

/// Render and persist the artifact, returning the path written.
pub fn write_artifact(
    run: &AnalysisRun,
    source_path: Option<&Path>,
) -> Result<PathBuf, ReportError> {
    let path = derive_output_path(source_path);
    std::fs::write(&path, render_artifact(run, Utc::now()))?;
    Ok(path)
}
