use async_trait::async_trait;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use secrecy::{ExposeSecret, SecretString};

use crate::audit::intake::{SinkError, SubmissionRecord, SubmissionSink};

/// Inserts submission rows through the Supabase PostgREST endpoint.
#[derive(Clone)]
pub struct SupabaseSink {
    http_client: reqwest::Client,
    endpoint: String,
    anon_key: SecretString,
}

impl SupabaseSink {
    pub fn new(
        http_client: reqwest::Client,
        project_url: &str,
        table: &str,
        anon_key: SecretString,
    ) -> Self {
        Self {
            http_client,
            endpoint: format!("{}/rest/v1/{}", project_url.trim_end_matches('/'), table),
            anon_key,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmissionSink for SupabaseSink {
    async fn save(&self, record: &SubmissionRecord) -> Result<(), SinkError> {
        let key = self.anon_key.expose_secret();
        let bearer = HeaderValue::from_str(&format!("Bearer {key}"))
            .map_err(|e| SinkError::Transport(format!("invalid anon key: {e}")))?;

        let response = self
            .http_client
            .post(&self.endpoint)
            .header("apikey", key.as_str())
            .header(AUTHORIZATION, bearer)
            .header("Prefer", "return=minimal")
            .json(&[record])
            .send()
            .await
            .map_err(|e| SinkError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), error = %body, "Supabase insert failed");
            return Err(SinkError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(table_endpoint = %self.endpoint, "submission row inserted");
        Ok(())
    }
}
