use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::domain::{IntakeError, QuizSubmission};
use super::repository::{
    MailerError, OutboundEmail, ReportMailer, SubmissionRecord, SubmissionSink,
};
use crate::audit::engine::{AuditRequest, AuditResult};
use crate::audit::report::{
    render_report_html, report_subject, AuditHighlights, ReportContext, ShareLinks,
};
use crate::config::CampaignConfig;

/// Result screen payload for one quiz run.
#[derive(Debug, Clone, Serialize)]
pub struct AuditOutcome {
    pub result: AuditResult,
    pub highlights: AuditHighlights,
    pub share: ShareLinks,
}

/// Request to email the report for an audit.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub business_name: String,
    #[serde(flatten)]
    pub audit: AuditRequest,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportReceipt {
    pub id: String,
}

/// Ties the engine to storage and email delivery for one campaign.
pub struct AuditService<S, M> {
    sink: Arc<S>,
    mailer: Arc<M>,
    campaign: CampaignConfig,
}

impl<S, M> AuditService<S, M>
where
    S: SubmissionSink + 'static,
    M: ReportMailer + 'static,
{
    pub fn new(sink: Arc<S>, mailer: Arc<M>, campaign: CampaignConfig) -> Self {
        Self {
            sink,
            mailer,
            campaign,
        }
    }

    pub fn campaign(&self) -> &CampaignConfig {
        &self.campaign
    }

    /// Score an audit without side effects.
    pub fn compute(&self, request: &AuditRequest) -> (AuditResult, AuditHighlights) {
        let result = request.evaluate();
        let highlights = result.highlights(request);
        (result, highlights)
    }

    /// Validate a finished quiz, score it, and record the lead.
    ///
    /// The save runs on a detached task: the result returns without waiting on
    /// storage, and storage failures are only logged.
    pub async fn submit(
        &self,
        submission: QuizSubmission,
    ) -> Result<AuditOutcome, AuditServiceError> {
        let validated = submission.validate()?;
        let request = validated.audit_request();
        let (result, highlights) = self.compute(&request);

        let record = SubmissionRecord::from_submission(
            &validated,
            &result,
            &self.campaign.lead_source,
            Utc::now(),
        );
        self.record_in_background(record);

        let share = ShareLinks::build(
            &result,
            &validated.answers().business_name,
            &self.campaign.brand_name,
            &self.campaign.contact_number,
            self.campaign.public_url.as_deref(),
        );

        Ok(AuditOutcome {
            result,
            highlights,
            share,
        })
    }

    fn record_in_background(&self, record: SubmissionRecord) {
        let sink = Arc::clone(&self.sink);
        tokio::spawn(async move {
            match sink.save(&record).await {
                Ok(()) => info!(
                    sector = %record.sector,
                    score = record.overall_score,
                    "audit submission recorded"
                ),
                Err(error) => warn!(
                    %error,
                    sector = %record.sector,
                    "failed to persist audit submission"
                ),
            }
        });
    }

    /// Render the report and hand it to the mailer.
    pub async fn send_report(
        &self,
        request: ReportRequest,
    ) -> Result<ReportReceipt, AuditServiceError> {
        let to = request.email.trim();
        if to.is_empty() || !to.contains('@') {
            return Err(IntakeError::InvalidEmail.into());
        }

        let result = request.audit.evaluate();
        let email = OutboundEmail {
            to: to.to_string(),
            subject: report_subject(&request.business_name, result.overall_score),
            html: self.render(&request, &result),
        };

        let id = self.mailer.send(email).await?;
        info!(
            message_id = %id,
            score = result.overall_score,
            "audit report emailed"
        );
        Ok(ReportReceipt { id })
    }

    /// Report HTML exactly as it would be emailed.
    pub fn preview_report(&self, request: &ReportRequest) -> String {
        let result = request.audit.evaluate();
        self.render(request, &result)
    }

    fn render(&self, request: &ReportRequest, result: &AuditResult) -> String {
        render_report_html(&ReportContext {
            user_name: &request.user_name,
            business_name: &request.business_name,
            brand_name: &self.campaign.brand_name,
            contact_number: &self.campaign.contact_number,
            result,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuditServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Mailer(#[from] MailerError),
}
