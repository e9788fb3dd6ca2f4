use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::ValidatedSubmission;
use crate::audit::engine::AuditResult;

/// Row persisted for every completed quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub name: String,
    pub phone: String,
    pub business_name: String,
    pub tribe: String,
    pub sector: String,
    pub business_size: String,
    pub tech_level: String,
    pub budget: String,
    pub pain_points: Vec<String>,
    pub overall_score: u8,
    pub estimated_savings: String,
    pub top_solutions: Vec<String>,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl SubmissionRecord {
    pub fn from_submission(
        submission: &ValidatedSubmission,
        result: &AuditResult,
        source: &str,
        created_at: DateTime<Utc>,
    ) -> Self {
        let answers = submission.answers();
        Self {
            name: answers.name.clone(),
            phone: answers.phone.clone(),
            business_name: answers.business_name.clone(),
            tribe: answers.tribe.clone(),
            sector: answers.sector.clone(),
            business_size: answers.business_size.clone(),
            tech_level: answers.tech_level.clone(),
            budget: answers.budget.clone(),
            pain_points: answers.pain_points.clone(),
            overall_score: result.overall_score,
            estimated_savings: result.estimated_monthly_savings.to_string(),
            top_solutions: result.solution_titles(),
            source: source.to_string(),
            created_at: Some(created_at),
        }
    }
}

/// Durable storage for quiz submissions.
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn save(&self, record: &SubmissionRecord) -> Result<(), SinkError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("submission store unreachable: {0}")]
    Transport(String),
    #[error("submission store rejected the row with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Outbound channel for the HTML audit report.
#[async_trait]
pub trait ReportMailer: Send + Sync {
    /// Hand the message to the provider and return its message id.
    async fn send(&self, email: OutboundEmail) -> Result<String, MailerError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

#[derive(Debug, thiserror::Error)]
pub enum MailerError {
    #[error("Email service not configured")]
    NotConfigured,
    #[error("email provider unreachable: {0}")]
    Transport(String),
    #[error("email provider rejected the message with status {status}: {message}")]
    Rejected { status: u16, message: String },
}
