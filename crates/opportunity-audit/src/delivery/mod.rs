//! Outbound adapters: Supabase for submission rows, Resend for report emails.

mod resend;
mod supabase;

use std::time::Duration;

use async_trait::async_trait;

use crate::audit::intake::{
    MailerError, OutboundEmail, ReportMailer, SinkError, SubmissionRecord, SubmissionSink,
};
use crate::config::{EmailConfig, StorageConfig};

pub use resend::ResendMailer;
pub use supabase::SupabaseSink;

/// Shared connection pool for every adapter.
pub fn http_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()
}

/// Submission storage selected from configuration.
pub enum SubmissionStore {
    Supabase(SupabaseSink),
    Disabled,
}

impl SubmissionStore {
    pub fn from_config(config: &StorageConfig, http_client: reqwest::Client) -> Self {
        match (&config.url, &config.anon_key) {
            (Some(url), Some(key)) => Self::Supabase(SupabaseSink::new(
                http_client,
                url,
                &config.table,
                key.clone(),
            )),
            _ => Self::Disabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Supabase(_))
    }
}

#[async_trait]
impl SubmissionSink for SubmissionStore {
    async fn save(&self, record: &SubmissionRecord) -> Result<(), SinkError> {
        match self {
            Self::Supabase(sink) => sink.save(record).await,
            Self::Disabled => {
                tracing::info!(sector = %record.sector, "storage not configured; skipping save");
                Ok(())
            }
        }
    }
}

/// Report email channel selected from configuration.
pub enum ReportTransport {
    Resend(ResendMailer),
    Unconfigured,
}

impl ReportTransport {
    pub fn from_config(config: &EmailConfig, http_client: reqwest::Client) -> Self {
        match &config.api_key {
            Some(key) => Self::Resend(ResendMailer::new(
                http_client,
                &config.api_url,
                key.clone(),
                config.from_address.clone(),
            )),
            None => Self::Unconfigured,
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Resend(_))
    }
}

#[async_trait]
impl ReportMailer for ReportTransport {
    async fn send(&self, email: OutboundEmail) -> Result<String, MailerError> {
        match self {
            Self::Resend(mailer) => mailer.send(email).await,
            Self::Unconfigured => {
                tracing::warn!("report requested but RESEND_API_KEY is not set");
                Err(MailerError::NotConfigured)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn client() -> reqwest::Client {
        http_client(Duration::from_secs(1)).expect("client builds")
    }

    fn storage(url: Option<&str>, key: Option<&str>) -> StorageConfig {
        StorageConfig {
            url: url.map(str::to_string),
            anon_key: key.map(|key| SecretString::new(key.to_string())),
            table: "audit_submissions".to_string(),
        }
    }

    #[test]
    fn storage_needs_both_url_and_key() {
        assert!(!SubmissionStore::from_config(&storage(None, Some("anon")), client()).is_enabled());
        assert!(
            !SubmissionStore::from_config(&storage(Some("https://x.supabase.co"), None), client())
                .is_enabled()
        );

        match SubmissionStore::from_config(
            &storage(Some("https://x.supabase.co/"), Some("anon")),
            client(),
        ) {
            SubmissionStore::Supabase(sink) => {
                assert_eq!(sink.endpoint(), "https://x.supabase.co/rest/v1/audit_submissions");
            }
            SubmissionStore::Disabled => panic!("expected supabase sink"),
        }
    }

    #[tokio::test]
    async fn disabled_store_accepts_records() {
        let record = SubmissionRecord {
            name: "Asha".to_string(),
            phone: "9876543210".to_string(),
            business_name: "Spice Route".to_string(),
            tribe: "franchisee".to_string(),
            sector: "food-restaurant".to_string(),
            business_size: "small".to_string(),
            tech_level: "basic".to_string(),
            budget: "bootstrap".to_string(),
            pain_points: vec!["inventory".to_string()],
            overall_score: 50,
            estimated_savings: "₹25K–1L".to_string(),
            top_solutions: Vec::new(),
            source: "fro-jaipur-2026".to_string(),
            created_at: None,
        };
        SubmissionStore::Disabled
            .save(&record)
            .await
            .expect("disabled store succeeds");
    }

    #[tokio::test]
    async fn unconfigured_transport_reports_not_configured() {
        let email_config = EmailConfig {
            api_key: None,
            api_url: "https://api.resend.com".to_string(),
            from_address: "Audit <audit@example.com>".to_string(),
        };
        let transport = ReportTransport::from_config(&email_config, client());
        assert!(!transport.is_enabled());

        let error = transport
            .send(OutboundEmail {
                to: "owner@example.com".to_string(),
                subject: "Report".to_string(),
                html: "<p>hi</p>".to_string(),
            })
            .await
            .expect_err("unconfigured transport fails");
        assert!(matches!(error, MailerError::NotConfigured));
        assert_eq!(error.to_string(), "Email service not configured");
    }
}
