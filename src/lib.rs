pub mod config;
pub mod controller;
pub mod error;
pub mod highlight;
pub mod service;
pub mod types;

pub use config::ClientConfig;
pub use controller::{Phase, SubmissionController, SubmissionState};
pub use error::SubmitError;
pub use highlight::{highlight_keywords, Segment};
pub use service::{AnalysisService, HttpAnalysisService};
pub use types::{AnalysisResult, ContactInfo, ResumeFile, ACCEPTED_EXTENSIONS};
