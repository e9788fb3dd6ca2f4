//! Quiz intake: step validation, lead storage, and report delivery behind HTTP routes.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{IntakeError, QuizStep, QuizSubmission, ValidatedSubmission, MAX_INTENSITY};
pub use repository::{
    MailerError, OutboundEmail, ReportMailer, SinkError, SubmissionRecord, SubmissionSink,
};
pub use router::audit_router;
pub use service::{AuditOutcome, AuditService, AuditServiceError, ReportReceipt, ReportRequest};
