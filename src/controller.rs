use tracing::{info, warn};

use crate::error::SubmitError;
use crate::service::AnalysisService;
use crate::types::{AnalysisResult, ResumeFile};

/// Lifecycle of a submission. No terminal state: a finished submission can
/// always be followed by another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success,
    Failed,
}

/// Everything the presentation layer renders. `result` is set only on
/// `Success`, `error_message` only on a validation or submission failure,
/// and never both at once.
#[derive(Debug, Default)]
pub struct SubmissionState {
    pub resume: Option<ResumeFile>,
    pub job_description: String,
    pub phase: Phase,
    pub result: Option<AnalysisResult>,
    pub error_message: Option<String>,
}

/// Owns the submission state and drives it through
/// `Idle → Loading → Success | Failed`. The presentation layer only reads.
pub struct SubmissionController<S> {
    service: S,
    state: SubmissionState,
}

impl<S: AnalysisService> SubmissionController<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: SubmissionState::default(),
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.state.result.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.state.error_message.as_deref()
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Store the resume and discard any previous outcome, so a stale result
    /// is never shown against the new file. No phase change, no network.
    pub fn select_file(&mut self, resume: ResumeFile) {
        info!("Resume selected: {}", resume.name);
        self.state.resume = Some(resume);
        self.state.result = None;
        self.state.error_message = None;
    }

    /// Stored verbatim; an empty job description is permitted.
    pub fn set_job_description(&mut self, text: impl Into<String>) {
        self.state.job_description = text.into();
    }

    /// Issue one analysis request and leave `Loading` exactly once, into
    /// `Success` or `Failed`. Without a selected resume no request is made:
    /// the validation message is set and the phase stays where it was.
    /// Re-entrant calls while a submission is in flight are ignored.
    pub async fn submit(&mut self) {
        if self.state.phase == Phase::Loading {
            warn!("Submit ignored, a submission is already in flight");
            return;
        }

        let Some(resume) = self.state.resume.clone() else {
            self.state.result = None;
            self.state.error_message = Some(SubmitError::Validation.to_string());
            return;
        };

        self.state.phase = Phase::Loading;
        self.state.result = None;
        self.state.error_message = None;

        let outcome = self
            .service
            .analyze(&resume, &self.state.job_description)
            .await;

        match outcome {
            Ok(result) => {
                info!("Submission succeeded: score {:.0}", result.score);
                self.state.phase = Phase::Success;
                self.state.result = Some(result);
            }
            Err(err) => {
                warn!("Submission failed: {}", err);
                self.state.phase = Phase::Failed;
                self.state.error_message = Some(err.to_string());
            }
        }
    }

    /// Back to a fresh page-load equivalent.
    pub fn reset(&mut self) {
        self.state = SubmissionState::default();
    }

    #[cfg(test)]
    fn force_phase(&mut self, phase: Phase) {
        self.state.phase = phase;
    }
}
