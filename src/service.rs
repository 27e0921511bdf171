use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};
use std::path::Path;
use tracing::{error, info, trace};

use crate::config::ClientConfig;
use crate::error::SubmitError;
use crate::types::{AnalysisResult, ResumeFile};

const ANALYZE_ENDPOINT: &str = "/analyze";

/// Seam to the analysis backend. The controller is generic over this so
/// tests can substitute a fake without a network.
pub trait AnalysisService {
    fn analyze(
        &self,
        resume: &ResumeFile,
        job_description: &str,
    ) -> impl std::future::Future<Output = Result<AnalysisResult, SubmitError>>;
}

/// HTTP client for the analysis service.
pub struct HttpAnalysisService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAnalysisService {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn content_type(extension: Option<&str>) -> &'static str {
        match extension {
            Some("pdf") => "application/pdf",
            Some("docx") => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Some("txt") => "text/plain",
            _ => "application/octet-stream",
        }
    }

    /// Absolute download URL for a `report_url` returned by the service.
    pub fn report_link(&self, relative: &str) -> String {
        if relative.starts_with('/') {
            format!("{}{}", self.base_url, relative)
        } else {
            format!("{}/{}", self.base_url, relative)
        }
    }

    /// Fetch the PDF report behind `report_url` and write it to `dest`.
    pub async fn download_report(&self, relative: &str, dest: &Path) -> Result<()> {
        let url = self.report_link(relative);
        info!("Downloading report: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch report")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Report download failed with status {}", status);
        }

        let bytes = response.bytes().await.context("Failed to read report body")?;
        tokio::fs::write(dest, &bytes)
            .await
            .with_context(|| format!("Failed to write report: {}", dest.display()))?;

        Ok(())
    }
}

impl AnalysisService for HttpAnalysisService {
    /// One multipart POST with parts `resume` and `job_description`. The
    /// job description may be empty, matching the form's behavior.
    async fn analyze(
        &self,
        resume: &ResumeFile,
        job_description: &str,
    ) -> Result<AnalysisResult, SubmitError> {
        let url = format!("{}{}", self.base_url, ANALYZE_ENDPOINT);
        let mime = Self::content_type(resume.extension().as_deref());

        let form = Form::new()
            .part(
                "resume",
                Part::bytes(resume.bytes.clone())
                    .file_name(resume.name.clone())
                    .mime_str(mime)
                    .map_err(|e| SubmitError::Transport {
                        message: e.to_string(),
                    })?,
            )
            .text("job_description", job_description.to_string());

        info!("Calling analysis service: {}", url);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| SubmitError::Transport {
                message: e.to_string(),
            })?;

        let status = response.status();
        trace!("Response status: {}", status);

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Analysis service error {}: {}", status, error_text);
            return Err(SubmitError::failed_status());
        }

        let body = response.text().await.map_err(|e| SubmitError::Transport {
            message: e.to_string(),
        })?;

        let result: AnalysisResult = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse analysis response: {}. Raw response: {}", e, body);
            SubmitError::Parse(e)
        })?;

        info!("Analysis complete, score: {:.0}", result.score);
        Ok(result)
    }
}
