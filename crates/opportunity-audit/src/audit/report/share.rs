use serde::Serialize;
use url::form_urlencoded::byte_serialize;

use super::super::engine::AuditResult;

const WHATSAPP_BASE: &str = "https://wa.me/";

/// Prefilled WhatsApp links offered next to a finished audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLinks {
    pub share_url: String,
    pub contact_url: String,
}

impl ShareLinks {
    pub fn build(
        result: &AuditResult,
        business_name: &str,
        brand_name: &str,
        contact_number: &str,
        public_url: Option<&str>,
    ) -> Self {
        let mut share_text = format!(
            "Just took the AI Opportunity Audit by {brand_name} for {business_name}! 🚀 Scored {}/100 on AI readiness with {} potential monthly savings.",
            result.overall_score, result.estimated_monthly_savings
        );
        if let Some(url) = public_url.filter(|url| !url.trim().is_empty()) {
            share_text.push_str(" Get yours free: ");
            share_text.push_str(url.trim());
        }

        Self {
            share_url: whatsapp_link(None, &share_text),
            contact_url: whatsapp_link(
                Some(contact_number),
                &contact_message(business_name, result.overall_score),
            ),
        }
    }
}

pub(crate) fn contact_message(business_name: &str, score: u8) -> String {
    format!(
        "Hi, I just completed the AI Opportunity Audit for {business_name}. My AI readiness score is {score}/100. I'd like to discuss implementing the recommended solutions."
    )
}

pub(crate) fn whatsapp_link(number: Option<&str>, text: &str) -> String {
    let digits: String = number
        .unwrap_or_default()
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    let encoded: String = byte_serialize(text.as_bytes()).collect();
    format!("{WHATSAPP_BASE}{digits}?text={encoded}")
}
