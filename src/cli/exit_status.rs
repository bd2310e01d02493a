use std::process::ExitCode;

/// Exit status of the CLI.
///
/// - `Success` (0): The action ran to completion
/// - `Failure` (1): The action stopped on an error (I/O, unparsable catalog, bad config)
///
/// Argument errors never reach this point; clap exits with its own status.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// The action ran to completion.
    Success,
    /// The action stopped on an error.
    Failure,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
        }
    }
}
