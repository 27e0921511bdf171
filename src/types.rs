use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Extensions the upload form accepts. Client-side filter only, the service
/// does its own validation.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "docx", "txt"];

/// Resume document held in memory, ready for upload.
#[derive(Debug, Clone)]
pub struct ResumeFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl ResumeFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Load a resume from disk. Only the file name, not the full path, is
    /// sent to the service.
    pub async fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| anyhow::anyhow!("Invalid resume path: {}", path.display()))?;

        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(Self { name, bytes })
    }

    /// File extension in lowercase, if any.
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
    }

    /// Whether the file matches the upload form's accept list.
    pub fn has_accepted_extension(&self) -> bool {
        self.extension()
            .is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext.as_str()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Response body of `POST /analyze`. Everything beyond `score`, `contact`
/// and `skills` is additive: older service versions omit those fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub filename: Option<String>,
    /// Resume-to-JD match score, 0-100.
    pub score: f64,
    #[serde(default)]
    pub contact: ContactInfo,
    #[serde(default)]
    pub skills: Vec<String>,
    pub missing_skills: Option<Vec<String>>,
    pub education: Option<Vec<String>>,
    /// Years of experience.
    pub experience: Option<f64>,
    pub category: Option<String>,
    /// Resume text preview, fed to keyword highlighting.
    pub summary: Option<String>,
    /// Download path for the PDF report, relative to the service origin.
    pub report_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_service_response() {
        let body = r#"{
            "filename": "jane_doe.pdf",
            "score": 72.5,
            "skills": ["python", "react"],
            "contact": {"email": "jane@example.com", "phone": "+41791234567"},
            "category": "Data Science",
            "education": ["MSc Computer Science"],
            "experience": 4,
            "missing_skills": ["kubernetes"],
            "report_url": "/report/Report_jane_doe.pdf.pdf",
            "summary": "Jane Doe. Python and React developer..."
        }"#;

        let result: AnalysisResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.score, 72.5);
        assert_eq!(result.skills, vec!["python", "react"]);
        assert_eq!(result.contact.email.as_deref(), Some("jane@example.com"));
        assert_eq!(result.category.as_deref(), Some("Data Science"));
        assert_eq!(result.experience, Some(4.0));
        assert_eq!(
            result.missing_skills,
            Some(vec!["kubernetes".to_string()])
        );
        assert_eq!(
            result.report_url.as_deref(),
            Some("/report/Report_jane_doe.pdf.pdf")
        );
    }

    #[test]
    fn parses_minimal_response_without_additive_fields() {
        let body = r#"{
            "score": 10,
            "skills": [],
            "contact": {"email": null, "phone": null}
        }"#;

        let result: AnalysisResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.score, 10.0);
        assert!(result.skills.is_empty());
        assert!(result.missing_skills.is_none());
        assert!(result.education.is_none());
        assert!(result.experience.is_none());
        assert!(result.summary.is_none());
        assert!(result.report_url.is_none());
    }

    #[test]
    fn ignores_unknown_fields() {
        let body = r#"{"score": 50, "skills": [], "contact": {}, "debug_info": {"x": 1}}"#;
        assert!(serde_json::from_str::<AnalysisResult>(body).is_ok());
    }

    #[test]
    fn extension_is_lowercased() {
        let file = ResumeFile::new("Resume.PDF", vec![]);
        assert_eq!(file.extension().as_deref(), Some("pdf"));
        assert!(file.has_accepted_extension());
    }

    #[test]
    fn unsupported_extension_is_flagged() {
        assert!(!ResumeFile::new("resume.exe", vec![]).has_accepted_extension());
        assert!(!ResumeFile::new("resume", vec![]).has_accepted_extension());
    }

    #[tokio::test]
    async fn loads_resume_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        tokio::fs::write(&path, b"plain text resume").await.unwrap();

        let file = ResumeFile::from_path(&path).await.unwrap();
        assert_eq!(file.name, "resume.txt");
        assert_eq!(file.bytes, b"plain text resume");
    }

    #[tokio::test]
    async fn missing_resume_file_is_an_error() {
        let err = ResumeFile::from_path(Path::new("/nonexistent/resume.pdf"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
