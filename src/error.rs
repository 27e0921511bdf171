use thiserror::Error;

/// Shown inline when submit is clicked with no resume selected.
pub const NO_FILE_MESSAGE: &str = "Please select a resume file.";

/// Shown for any non-success answer from the analysis service. The actual
/// status and body are logged, never surfaced.
pub const ANALYSIS_FAILED_MESSAGE: &str = "Analysis failed. Please try again.";

/// Everything that can go wrong between clicking submit and a rendered
/// result. `Display` yields the exact user-facing message.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// No resume was selected. Non-fatal, the user corrects and retries.
    #[error("Please select a resume file.")]
    Validation,

    /// Network failure or a non-2xx status from the service.
    #[error("{message}")]
    Transport { message: String },

    /// The service answered 2xx but the body was not a valid analysis
    /// result. Surfaced like a transport failure, never a crash.
    #[error("Analysis failed. Please try again.")]
    Parse(#[source] serde_json::Error),
}

impl SubmitError {
    /// Transport error carrying the fixed message for non-2xx statuses.
    pub fn failed_status() -> Self {
        Self::Transport {
            message: ANALYSIS_FAILED_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_matches_ui_copy() {
        assert_eq!(SubmitError::Validation.to_string(), NO_FILE_MESSAGE);
    }

    #[test]
    fn non_success_status_maps_to_fixed_message() {
        assert_eq!(
            SubmitError::failed_status().to_string(),
            ANALYSIS_FAILED_MESSAGE
        );
    }

    #[test]
    fn transport_error_surfaces_its_own_message() {
        let err = SubmitError::Transport {
            message: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn parse_error_reads_like_a_transport_failure() {
        let cause = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(SubmitError::Parse(cause).to_string(), ANALYSIS_FAILED_MESSAGE);
    }
}
