//! Exit code logic for the sync3c process.

use std::process::ExitCode;

/// Final process status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProcessExit {
    /// Everything attempted succeeded (or nothing needed doing).
    Success,
    /// The run aborted, or every attempted download failed.
    Failure,
    /// Some downloads failed, others succeeded.
    Partial,
}

impl ProcessExit {
    pub(crate) fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
            Self::Partial => 2,
        }
    }
}

impl From<ProcessExit> for ExitCode {
    fn from(value: ProcessExit) -> Self {
        ExitCode::from(value.code())
    }
}

/// Determines the process exit outcome from completed and failed download counts.
pub(crate) fn determine_exit_outcome(completed: usize, failed: usize) -> ProcessExit {
    if failed == 0 {
        ProcessExit::Success
    } else if completed > 0 {
        ProcessExit::Partial
    } else {
        ProcessExit::Failure
    }
}
