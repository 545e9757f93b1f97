/// Errors from report persistence.
///
/// Output-path resolution is never an error (it falls back to the temp
/// directory); only the actual write can fail.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to write results artifact: {0}")]
    Io(#[from] std::io::Error),
}
