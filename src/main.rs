use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use rescreen::{
    highlight_keywords, ClientConfig, HttpAnalysisService, Phase, ResumeFile,
    SubmissionController,
};

#[derive(Parser)]
#[command(name = "rescreen")]
#[command(about = "Submit a resume and job description for automated screening")]
struct Cli {
    /// Resume file to analyze (.pdf, .docx or .txt)
    resume: PathBuf,

    /// Job description text
    #[arg(long, conflicts_with = "jd_file")]
    jd: Option<String>,

    /// Read the job description from a file
    #[arg(long)]
    jd_file: Option<PathBuf>,

    /// Analysis service URL (overrides ANALYZE_SERVICE_URL)
    #[arg(long)]
    service_url: Option<String>,

    /// Download the PDF report to this path when the service provides one
    #[arg(long)]
    report_out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env();
    if let Some(url) = cli.service_url {
        config = config.with_base_url(url);
    }

    let service = HttpAnalysisService::new(&config)?;
    let mut controller = SubmissionController::new(service);

    let resume = ResumeFile::from_path(&cli.resume).await?;
    if !resume.has_accepted_extension() {
        tracing::warn!(
            "Unexpected resume extension (accepted: .pdf, .docx, .txt): {}",
            resume.name
        );
    }
    controller.select_file(resume);

    let job_description = match (cli.jd, cli.jd_file) {
        (Some(text), _) => text,
        (None, Some(path)) => tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read job description: {}", path.display()))?,
        (None, None) => String::new(),
    };
    controller.set_job_description(job_description);

    controller.submit().await;

    if controller.phase() != Phase::Success {
        let message = controller
            .error_message()
            .unwrap_or("Analysis failed. Please try again.");
        anyhow::bail!("{message}");
    }

    let Some(result) = controller.result() else {
        anyhow::bail!("Analysis returned no result");
    };

    println!("Match score: {:.0}%", result.score);
    if let Some(category) = &result.category {
        println!("Detected field: {category}");
    }
    println!("Email: {}", result.contact.email.as_deref().unwrap_or("N/A"));
    println!("Phone: {}", result.contact.phone.as_deref().unwrap_or("N/A"));

    if let Some(education) = result.education.as_deref().filter(|e| !e.is_empty()) {
        println!("Education: {}", education.join(", "));
    }
    if let Some(years) = result.experience {
        println!("Experience: {years} years");
    }

    if result.skills.is_empty() {
        println!("No specific skills detected.");
    } else {
        println!("Skills: {}", result.skills.join(", "));
    }
    if let Some(missing) = result.missing_skills.as_deref().filter(|m| !m.is_empty()) {
        println!("Missing skills from JD: {}", missing.join(", "));
    }

    if let Some(summary) = &result.summary {
        println!("\nResume preview (keywords highlighted):");
        for segment in highlight_keywords(summary, &result.skills) {
            if segment.emphasized {
                print!("\x1b[1;33m{}\x1b[0m", segment.text);
            } else {
                print!("{}", segment.text);
            }
        }
        println!();
    }

    if let Some(report) = &result.report_url {
        match &cli.report_out {
            Some(dest) => {
                controller.service().download_report(report, dest).await?;
                println!("\nReport saved to {}", dest.display());
            }
            None => {
                println!("\nReport available at {}", controller.service().report_link(report));
            }
        }
    }

    Ok(())
}
