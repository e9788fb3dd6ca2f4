use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{IntakeError, QuizSubmission};
use super::repository::{MailerError, ReportMailer, SubmissionSink};
use super::service::{AuditService, AuditServiceError, ReportRequest};
use crate::audit::engine::AuditRequest;
use crate::audit::knowledge::{catalog, sector_detail};

/// HTTP surface for the catalog, scoring, quiz submissions, and report delivery.
pub fn audit_router<S, M>(service: Arc<AuditService<S, M>>) -> Router
where
    S: SubmissionSink + 'static,
    M: ReportMailer + 'static,
{
    Router::new()
        .route("/api/v1/catalog", get(catalog_handler))
        .route("/api/v1/catalog/:sector_id", get(sector_handler))
        .route("/api/v1/audit/compute", post(compute_handler::<S, M>))
        .route("/api/v1/audit/submissions", post(submit_handler::<S, M>))
        .route("/api/v1/audit/report", post(report_handler::<S, M>))
        .route(
            "/api/v1/audit/report/preview",
            post(preview_handler::<S, M>),
        )
        .with_state(service)
}

pub(crate) async fn catalog_handler() -> Response {
    (StatusCode::OK, axum::Json(catalog())).into_response()
}

pub(crate) async fn sector_handler(Path(sector_id): Path<String>) -> Response {
    match sector_detail(&sector_id) {
        Some(detail) => (StatusCode::OK, axum::Json(detail)).into_response(),
        None => {
            let payload = json!({
                "error": IntakeError::UnknownSector(sector_id).to_string(),
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn compute_handler<S, M>(
    State(service): State<Arc<AuditService<S, M>>>,
    axum::Json(request): axum::Json<AuditRequest>,
) -> Response
where
    S: SubmissionSink + 'static,
    M: ReportMailer + 'static,
{
    let (result, highlights) = service.compute(&request);
    let payload = json!({
        "result": result,
        "highlights": highlights,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn submit_handler<S, M>(
    State(service): State<Arc<AuditService<S, M>>>,
    axum::Json(submission): axum::Json<QuizSubmission>,
) -> Response
where
    S: SubmissionSink + 'static,
    M: ReportMailer + 'static,
{
    match service.submit(submission).await {
        Ok(outcome) => (StatusCode::CREATED, axum::Json(outcome)).into_response(),
        Err(AuditServiceError::Intake(error)) => {
            let payload = json!({
                "error": error.to_string(),
                "step": error.step(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn report_handler<S, M>(
    State(service): State<Arc<AuditService<S, M>>>,
    axum::Json(request): axum::Json<ReportRequest>,
) -> Response
where
    S: SubmissionSink + 'static,
    M: ReportMailer + 'static,
{
    match service.send_report(request).await {
        Ok(receipt) => {
            let payload = json!({
                "success": true,
                "id": receipt.id,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(AuditServiceError::Intake(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(AuditServiceError::Mailer(MailerError::NotConfigured)) => {
            let payload = json!({
                "error": MailerError::NotConfigured.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
        Err(AuditServiceError::Mailer(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_GATEWAY, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn preview_handler<S, M>(
    State(service): State<Arc<AuditService<S, M>>>,
    axum::Json(request): axum::Json<ReportRequest>,
) -> Response
where
    S: SubmissionSink + 'static,
    M: ReportMailer + 'static,
{
    let html = service.preview_report(&request);
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, mime::TEXT_HTML_UTF_8.as_ref())],
        html,
    )
        .into_response()
}
