//! Rendering and persistence for interference analysis results.
//!
//! Three surfaces over one `AnalysisRun`:
//!
//! - [`StreamReporter`] — incremental line-oriented progress and summary
//!   for an interactive stream
//! - [`artifact`] — the persisted text artifact, placed next to the
//!   assembly's source file (temp-directory fallback)
//! - [`json`] — a versioned structured rendering of the same results

pub mod artifact;
pub mod errors;
pub mod json;
pub mod run;
pub mod stream;

pub use artifact::{derive_output_path, render_artifact, write_artifact};
pub use errors::ReportError;
pub use json::{render_json, ResultsFile};
pub use run::analyze_and_report;
pub use stream::StreamReporter;
