mod email;
mod highlights;
mod share;
pub mod views;

pub use email::{render_report_html, report_subject, ReportContext};
pub use share::ShareLinks;
pub use views::{
    AuditHighlights, ImpactStyle, IntensityBand, OpportunityPreview, PainIntensityView, ScoreZone,
};

use super::engine::{AuditRequest, AuditResult};

impl AuditResult {
    /// Gauge and metric summary shown beside the result.
    pub fn highlights(&self, request: &AuditRequest) -> AuditHighlights {
        highlights::generate_highlights(self, request)
    }
}
