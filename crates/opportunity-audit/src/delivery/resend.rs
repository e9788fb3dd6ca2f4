use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::audit::intake::{MailerError, OutboundEmail, ReportMailer};

#[derive(Debug, Serialize)]
struct SendEmailBody<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ResendErrorBody {
    message: Option<String>,
}

/// Sends report emails through the Resend HTTP API.
#[derive(Clone)]
pub struct ResendMailer {
    http_client: reqwest::Client,
    api_base_url: String,
    api_key: SecretString,
    from_address: String,
}

impl ResendMailer {
    pub fn new(
        http_client: reqwest::Client,
        api_base_url: &str,
        api_key: SecretString,
        from_address: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            api_key,
            from_address: from_address.into(),
        }
    }
}

#[async_trait]
impl ReportMailer for ResendMailer {
    async fn send(&self, email: OutboundEmail) -> Result<String, MailerError> {
        let url = format!("{}/emails", self.api_base_url);
        let body = SendEmailBody {
            from: &self.from_address,
            to: [email.to.as_str()],
            subject: &email.subject,
            html: &email.html,
        };

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| MailerError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ResendErrorBody>(&text)
                .ok()
                .and_then(|body| body.message)
                .unwrap_or(text);
            tracing::error!(status = status.as_u16(), error = %message, "Resend send failed");
            return Err(MailerError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let sent: SendEmailResponse = response
            .json()
            .await
            .map_err(|e| MailerError::Transport(format!("Failed to parse Resend response: {e}")))?;
        Ok(sent.id)
    }
}
