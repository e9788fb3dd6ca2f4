use metrics_exporter_prometheus::PrometheusHandle;
use opportunity_audit::audit::engine::PainIntensities;
use opportunity_audit::audit::intake::AuditService;
use opportunity_audit::audit::intake::MAX_INTENSITY;
use opportunity_audit::config::AppConfig;
use opportunity_audit::delivery::{http_client, ReportTransport, SubmissionStore};
use opportunity_audit::error::AppError;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type LiveAuditService = AuditService<SubmissionStore, ReportTransport>;

/// Wire the delivery adapters named by `config` into an audit service.
pub(crate) fn build_audit_service(config: &AppConfig) -> Result<Arc<LiveAuditService>, AppError> {
    let client = http_client(config.delivery_timeout)?;

    let store = SubmissionStore::from_config(&config.storage, client.clone());
    if !store.is_enabled() {
        warn!("SUPABASE_URL or SUPABASE_ANON_KEY missing; submissions will not be stored");
    }

    let transport = ReportTransport::from_config(&config.email, client);
    if !transport.is_enabled() {
        warn!("RESEND_API_KEY missing; report emails are disabled");
    }

    Ok(Arc::new(AuditService::new(
        Arc::new(store),
        Arc::new(transport),
        config.campaign.clone(),
    )))
}

/// Parses `pain_point=rating` pairs given on the command line.
pub(crate) fn parse_intensity(raw: &str) -> Result<(String, u8), String> {
    let (id, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected PAIN_POINT=RATING, got '{raw}'"))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(format!("missing pain point id in '{raw}'"));
    }
    let rating = value
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|rating| *rating <= MAX_INTENSITY)
        .ok_or_else(|| format!("rating in '{raw}' must be an integer 0-{MAX_INTENSITY}"))?;
    Ok((id.to_string(), rating))
}

pub(crate) fn collect_intensities(pairs: Vec<(String, u8)>) -> Option<PainIntensities> {
    if pairs.is_empty() {
        None
    } else {
        Some(pairs.into_iter().collect())
    }
}
