use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use opportunity_audit::audit::intake::{
    audit_router, AuditService, ReportMailer, SubmissionSink,
};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_audit_routes<S, M>(service: Arc<AuditService<S, M>>) -> axum::Router
where
    S: SubmissionSink + 'static,
    M: ReportMailer + 'static,
{
    audit_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use opportunity_audit::config::CampaignConfig;
    use opportunity_audit::delivery::{ReportTransport, SubmissionStore};
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;

    fn app(ready: bool) -> axum::Router {
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        let service = Arc::new(AuditService::new(
            Arc::new(SubmissionStore::Disabled),
            Arc::new(ReportTransport::Unconfigured),
            CampaignConfig::default(),
        ));
        with_audit_routes(service).layer(Extension(state))
    }

    async fn get(app: axum::Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::get(uri).body(Body::empty()).expect("request builds"))
            .await
            .expect("route executes")
    }

    #[tokio::test]
    async fn health_is_always_ok() {
        let response = get(app(false), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn readiness_tracks_flag() {
        assert_eq!(
            get(app(false), "/ready").await.status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(get(app(true), "/ready").await.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn audit_routes_are_mounted() {
        let response = get(app(true), "/api/v1/catalog/food-restaurant").await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = get(app(true), "/api/v1/catalog/unknown").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unconfigured_mailer_yields_server_error() {
        let body = json!({
            "email": "owner@example.com",
            "sector": "food-restaurant",
            "pain_points": ["inventory"],
            "business_size": "small",
            "tech_level": "intermediate",
            "budget": "growing",
        });
        let response = app(true)
            .oneshot(
                Request::post("/api/v1/audit/report")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .expect("request builds"),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
