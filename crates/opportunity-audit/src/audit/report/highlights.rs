use super::super::engine::{effective_intensity, AuditRequest, AuditResult};
use super::views::{
    score_color, AuditHighlights, OpportunityPreview, PainIntensityView, ScoreZone,
};

pub(crate) fn generate_highlights(result: &AuditResult, request: &AuditRequest) -> AuditHighlights {
    let score = result.overall_score.min(100);
    let zone = ScoreZone::for_score(score);

    AuditHighlights {
        score_zone: zone,
        score_zone_label: zone.label(),
        score_zone_range: zone.range(),
        score_color: score_color(score),
        untapped_potential: 100 - score,
        solutions_found: result.top_solutions.len() + result.quick_wins.len(),
        opportunity: OpportunityPreview::for_selection(request.pain_points.len()),
        pain_intensities: intensity_views(request),
    }
}

/// One entry per selected pain point, only when the quiz collected ratings.
fn intensity_views(request: &AuditRequest) -> Vec<PainIntensityView> {
    let Some(intensities) = request.pain_intensities.as_ref() else {
        return Vec::new();
    };

    request
        .pain_points
        .iter()
        .map(|id| PainIntensityView::new(id, effective_intensity(intensities, id)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::report::IntensityBand;

    fn request(pain_points: &[&str], ratings: Option<&[(&str, u8)]>) -> AuditRequest {
        AuditRequest {
            sector: "food-restaurant".to_string(),
            pain_points: pain_points.iter().map(|id| id.to_string()).collect(),
            business_size: "small".to_string(),
            tech_level: "intermediate".to_string(),
            budget: "growing".to_string(),
            pain_intensities: ratings.map(|ratings| {
                ratings
                    .iter()
                    .map(|(id, rating)| (id.to_string(), *rating))
                    .collect()
            }),
        }
    }

    #[test]
    fn highlights_summarize_result() {
        let request = request(&["inventory", "orders", "delivery"], None);
        let result = request.evaluate();
        // 65 + 5 - 9 = 61
        assert_eq!(result.overall_score, 61);

        let highlights = generate_highlights(&result, &request);
        assert_eq!(highlights.score_zone, ScoreZone::OnTrack);
        assert_eq!(highlights.score_zone_label, "On Track");
        assert_eq!(highlights.score_color, "#00d4ff");
        assert_eq!(highlights.untapped_potential, 39);
        assert_eq!(highlights.solutions_found, 4 + 3);
        let opportunity = highlights.opportunity.expect("selection preview present");
        assert_eq!(opportunity.label, "Strong potential");
        assert_eq!(opportunity.fill_percent, 36);
        assert!(highlights.pain_intensities.is_empty());
    }

    #[test]
    fn rated_pain_points_carry_their_band() {
        let request = request(
            &["inventory", "orders", "delivery"],
            Some(&[("inventory", 9), ("orders", 0), ("staff", 2)]),
        );
        let highlights = generate_highlights(&request.evaluate(), &request);

        let bands: Vec<(&str, u8, IntensityBand)> = highlights
            .pain_intensities
            .iter()
            .map(|view| (view.pain_point.as_str(), view.rating, view.band))
            .collect();
        assert_eq!(
            bands,
            vec![
                ("inventory", 9, IntensityBand::Critical),
                ("orders", 5, IntensityBand::Moderate),
                ("delivery", 5, IntensityBand::Moderate),
            ]
        );
        assert_eq!(highlights.pain_intensities[0].band_label, "Critical");
    }

    #[test]
    fn sentinel_result_maps_to_lowest_zone() {
        let request = request(&[], None);
        let highlights = generate_highlights(&AuditResult::unknown_sector(), &request);
        assert_eq!(highlights.score_zone, ScoreZone::GettingStarted);
        assert_eq!(highlights.untapped_potential, 100);
        assert_eq!(highlights.solutions_found, 0);
        assert!(highlights.opportunity.is_none());
    }
}
