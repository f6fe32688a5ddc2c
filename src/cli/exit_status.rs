use std::process::ExitCode;

use crate::report::OverlayReport;

/// Exit status of the CLI.
///
/// - `Success` (0): the run completed and every file parsed
/// - `Failure` (1): the run completed but some files were skipped as unparseable
/// - `Error` (2): the run could not start (bad config, unreadable snapshot, ...)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    /// Status for a run that completed.
    pub fn from_report(report: &OverlayReport) -> Self {
        if report.failed_files() > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
