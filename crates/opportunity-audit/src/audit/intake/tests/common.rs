use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;
use tokio::sync::Notify;

use crate::audit::intake::repository::{
    MailerError, OutboundEmail, ReportMailer, SinkError, SubmissionRecord, SubmissionSink,
};
use crate::audit::intake::{audit_router, AuditService, QuizSubmission, ReportRequest};
use crate::audit::engine::AuditRequest;
use crate::config::CampaignConfig;

pub(super) fn submission() -> QuizSubmission {
    QuizSubmission {
        name: "Asha Verma".to_string(),
        phone: "+91 98765 43210".to_string(),
        business_name: "Spice Route Kitchens".to_string(),
        tribe: "franchisee".to_string(),
        sector: "food-restaurant".to_string(),
        business_size: "small".to_string(),
        pain_points: vec!["inventory".to_string()],
        tech_level: "intermediate".to_string(),
        budget: "growing".to_string(),
        pain_intensities: None,
    }
}

pub(super) fn report_request() -> ReportRequest {
    ReportRequest {
        email: "asha@example.com".to_string(),
        user_name: "Asha".to_string(),
        business_name: "Spice Route Kitchens".to_string(),
        audit: AuditRequest {
            sector: "food-restaurant".to_string(),
            pain_points: vec!["inventory".to_string()],
            business_size: "small".to_string(),
            tech_level: "intermediate".to_string(),
            budget: "growing".to_string(),
            pain_intensities: None,
        },
    }
}

pub(super) fn campaign() -> CampaignConfig {
    CampaignConfig {
        brand_name: "Sol8um".to_string(),
        lead_source: "fro-jaipur-2026".to_string(),
        contact_number: "919468688354".to_string(),
        public_url: Some("https://audit.example.com".to_string()),
    }
}

pub(super) fn build_service() -> (
    AuditService<MemorySink, MemoryMailer>,
    Arc<MemorySink>,
    Arc<MemoryMailer>,
) {
    let sink = Arc::new(MemorySink::default());
    let mailer = Arc::new(MemoryMailer::default());
    let service = AuditService::new(sink.clone(), mailer.clone(), campaign());
    (service, sink, mailer)
}

#[derive(Default)]
pub(super) struct MemorySink {
    records: Mutex<Vec<SubmissionRecord>>,
    saved: Notify,
}

impl MemorySink {
    pub(super) fn records(&self) -> Vec<SubmissionRecord> {
        self.records.lock().expect("sink mutex poisoned").clone()
    }

    /// Wait until the background save has stored `count` records.
    pub(super) async fn wait_for_records(&self, count: usize) -> Vec<SubmissionRecord> {
        loop {
            let records = self.records();
            if records.len() >= count {
                return records;
            }
            tokio::time::timeout(Duration::from_secs(1), self.saved.notified())
                .await
                .expect("submission saved in background");
        }
    }
}

#[async_trait]
impl SubmissionSink for MemorySink {
    async fn save(&self, record: &SubmissionRecord) -> Result<(), SinkError> {
        self.records
            .lock()
            .expect("sink mutex poisoned")
            .push(record.clone());
        self.saved.notify_one();
        Ok(())
    }
}

/// Sink that stalls before failing.
pub(super) struct StalledSink {
    pub(super) delay: Duration,
}

#[async_trait]
impl SubmissionSink for StalledSink {
    async fn save(&self, _record: &SubmissionRecord) -> Result<(), SinkError> {
        tokio::time::sleep(self.delay).await;
        Err(SinkError::Transport("connection timed out".to_string()))
    }
}

pub(super) struct FailingSink;

#[async_trait]
impl SubmissionSink for FailingSink {
    async fn save(&self, _record: &SubmissionRecord) -> Result<(), SinkError> {
        Err(SinkError::Rejected {
            status: 401,
            body: "invalid api key".to_string(),
        })
    }
}

#[derive(Default)]
pub(super) struct MemoryMailer {
    sent: Mutex<Vec<OutboundEmail>>,
}

impl MemoryMailer {
    pub(super) fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().expect("mailer mutex poisoned").clone()
    }
}

#[async_trait]
impl ReportMailer for MemoryMailer {
    async fn send(&self, email: OutboundEmail) -> Result<String, MailerError> {
        let mut guard = self.sent.lock().expect("mailer mutex poisoned");
        guard.push(email);
        Ok(format!("email-{:03}", guard.len()))
    }
}

pub(super) struct UnconfiguredMailer;

#[async_trait]
impl ReportMailer for UnconfiguredMailer {
    async fn send(&self, _email: OutboundEmail) -> Result<String, MailerError> {
        Err(MailerError::NotConfigured)
    }
}

pub(super) struct RejectingMailer;

#[async_trait]
impl ReportMailer for RejectingMailer {
    async fn send(&self, _email: OutboundEmail) -> Result<String, MailerError> {
        Err(MailerError::Rejected {
            status: 403,
            message: "The sending domain is not verified".to_string(),
        })
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) async fn read_text_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}

pub(super) fn intensities(pairs: &[(&str, u8)]) -> BTreeMap<String, u8> {
    pairs
        .iter()
        .map(|(id, value)| (id.to_string(), *value))
        .collect()
}

pub(super) fn audit_router_with_service(
    service: AuditService<MemorySink, MemoryMailer>,
) -> axum::Router {
    audit_router(Arc::new(service))
}
