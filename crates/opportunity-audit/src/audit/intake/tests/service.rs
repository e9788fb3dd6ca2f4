use super::common::*;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::audit::intake::{
    AuditService, AuditServiceError, IntakeError, MailerError, QuizStep,
};
use crate::audit::report::ScoreZone;

#[tokio::test]
async fn submit_scores_and_records_the_lead() {
    let (service, sink, mailer) = build_service();

    let outcome = service.submit(submission()).await.expect("submission succeeds");
    assert_eq!(outcome.result.overall_score, 67);
    assert_eq!(outcome.result.top_solutions[0].title, "AI Demand Forecasting");
    assert_eq!(outcome.highlights.score_zone, ScoreZone::OnTrack);
    assert!(outcome
        .share
        .contact_url
        .starts_with("https://wa.me/919468688354?text="));

    let records = sink.wait_for_records(1).await;
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.name, "Asha Verma");
    assert_eq!(record.sector, "food-restaurant");
    assert_eq!(record.overall_score, 67);
    assert_eq!(record.estimated_savings, outcome.result.estimated_monthly_savings);
    assert_eq!(
        record.top_solutions,
        vec!["AI Demand Forecasting".to_string(), "Smart Auto-Reordering".to_string()]
    );
    assert_eq!(record.source, "fro-jaipur-2026");
    assert!(record.created_at.is_some());

    assert!(mailer.sent().is_empty(), "submission should not send email");
}

#[tokio::test]
async fn submit_rejects_invalid_answers_without_storing() {
    let (service, sink, _) = build_service();
    let mut answers = submission();
    answers.pain_points.clear();

    let error = service.submit(answers).await.expect_err("invalid submission");
    match error {
        AuditServiceError::Intake(error) => assert_eq!(error.step(), Some(QuizStep::PainPoints)),
        other => panic!("unexpected error: {other}"),
    }
    assert!(sink.records().is_empty());
}

#[tokio::test]
async fn storage_failure_does_not_block_the_result() {
    let service = AuditService::new(
        Arc::new(FailingSink),
        Arc::new(MemoryMailer::default()),
        campaign(),
    );

    let outcome = service
        .submit(submission())
        .await
        .expect("result survives storage failure");
    assert_eq!(outcome.result.overall_score, 67);
}

#[tokio::test]
async fn slow_storage_does_not_delay_the_result() {
    let service = AuditService::new(
        Arc::new(StalledSink {
            delay: Duration::from_secs(2),
        }),
        Arc::new(MemoryMailer::default()),
        campaign(),
    );

    let started = Instant::now();
    let outcome = service
        .submit(submission())
        .await
        .expect("result returns before storage settles");
    assert!(
        started.elapsed() < Duration::from_millis(500),
        "submit waited {:?} on storage",
        started.elapsed()
    );
    assert_eq!(outcome.result.overall_score, 67);
}

#[tokio::test]
async fn send_report_mails_rendered_html() {
    let (service, _, mailer) = build_service();

    let receipt = service
        .send_report(report_request())
        .await
        .expect("report sends");
    assert_eq!(receipt.id, "email-001");

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "asha@example.com");
    assert_eq!(
        sent[0].subject,
        "🎯 Spice Route Kitchens — Your AI Opportunity Audit Report (Score: 67/100)"
    );
    assert!(sent[0].html.contains("AI Demand Forecasting"));
    assert_eq!(sent[0].html, service.preview_report(&report_request()));
}

#[tokio::test]
async fn send_report_requires_an_email_address() {
    let (service, _, mailer) = build_service();
    let mut request = report_request();
    request.email = "not-an-email".to_string();

    let error = service.send_report(request).await.expect_err("bad email");
    assert!(matches!(
        error,
        AuditServiceError::Intake(IntakeError::InvalidEmail)
    ));
    assert_eq!(error.to_string(), "Valid email required");
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn send_report_surfaces_mailer_errors() {
    let service = AuditService::new(
        Arc::new(MemorySink::default()),
        Arc::new(UnconfiguredMailer),
        campaign(),
    );
    let error = service
        .send_report(report_request())
        .await
        .expect_err("mailer unconfigured");
    assert!(matches!(
        error,
        AuditServiceError::Mailer(MailerError::NotConfigured)
    ));
}

#[test]
fn compute_pairs_result_with_highlights() {
    let (service, _, _) = build_service();
    let (result, highlights) = service.compute(&report_request().audit);
    assert_eq!(result.overall_score, 67);
    assert_eq!(highlights.untapped_potential, 33);
    assert_eq!(
        highlights.opportunity.map(|preview| preview.label),
        Some("Good start")
    );
}
