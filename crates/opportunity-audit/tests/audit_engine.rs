use opportunity_audit::audit::engine::{
    compute, PainIntensities, MAX_SCORE, MAX_TOP_SOLUTIONS, MIN_SCORE,
};
use opportunity_audit::audit::{
    sectors, AuditRequest, BudgetRange, BusinessSize, ReadinessLevel, TechReadiness,
};
use proptest::prelude::*;

#[derive(Debug)]
struct Inputs {
    sector: &'static str,
    pain_points: Vec<&'static str>,
    size: BusinessSize,
    tech: TechReadiness,
    budget: BudgetRange,
    intensities: Option<PainIntensities>,
}

fn inputs() -> impl Strategy<Value = Inputs> {
    (
        0..sectors().len(),
        prop::collection::vec(any::<prop::sample::Index>(), 0..8),
        prop::sample::select(BusinessSize::ordered().to_vec()),
        prop::sample::select(TechReadiness::ordered().to_vec()),
        prop::sample::select(BudgetRange::ordered().to_vec()),
        prop::option::of(prop::collection::vec(0u8..=10, 8)),
    )
        .prop_map(|(sector_index, picks, size, tech, budget, ratings)| {
            let sector = &sectors()[sector_index];
            let pain_points: Vec<&'static str> = picks
                .iter()
                .map(|pick| sector.pain_points[pick.index(sector.pain_points.len())].id)
                .collect();
            let intensities = ratings.map(|ratings| {
                pain_points
                    .iter()
                    .zip(ratings)
                    .map(|(id, rating)| (id.to_string(), rating))
                    .collect()
            });
            Inputs {
                sector: sector.id,
                pain_points,
                size,
                tech,
                budget,
                intensities,
            }
        })
}

fn run(inputs: &Inputs, tech: TechReadiness) -> opportunity_audit::audit::AuditResult {
    compute(
        inputs.sector,
        &inputs.pain_points,
        inputs.size.id(),
        tech.id(),
        inputs.budget.id(),
        inputs.intensities.as_ref(),
    )
}

proptest! {
    #[test]
    fn known_sectors_stay_within_score_bounds(inputs in inputs()) {
        let result = run(&inputs, inputs.tech);
        prop_assert!(result.overall_score >= MIN_SCORE);
        prop_assert!(result.overall_score <= MAX_SCORE);
        prop_assert_eq!(
            result.ai_readiness_level,
            ReadinessLevel::for_score(result.overall_score).label()
        );
    }

    #[test]
    fn top_solutions_are_capped_and_ranked(inputs in inputs()) {
        let result = run(&inputs, inputs.tech);
        prop_assert!(result.top_solutions.len() <= MAX_TOP_SOLUTIONS);
        let ranks: Vec<u8> = result
            .top_solutions
            .iter()
            .map(|solution| solution.impact.rank())
            .collect();
        prop_assert!(ranks.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn priority_actions_hold_one_to_five_entries(inputs in inputs()) {
        let result = run(&inputs, inputs.tech);
        prop_assert!(!result.priority_actions.is_empty());
        prop_assert!(result.priority_actions.len() <= 5);
    }

    #[test]
    fn identical_inputs_give_identical_results(inputs in inputs()) {
        prop_assert_eq!(run(&inputs, inputs.tech), run(&inputs, inputs.tech));
    }

    #[test]
    fn more_tech_readiness_never_lowers_the_score(inputs in inputs()) {
        let scores: Vec<u8> = TechReadiness::ordered()
            .into_iter()
            .map(|tech| run(&inputs, tech).overall_score)
            .collect();
        prop_assert!(scores.windows(2).all(|pair| pair[0] <= pair[1]), "{:?}", scores);
    }
}

#[test]
fn every_sector_produces_recommendations_for_each_pain_point() {
    for sector in sectors() {
        for pain_point in sector.pain_points {
            let result = compute(sector.id, &[pain_point.id], "small", "basic", "growing", None);
            assert_eq!(result.sector_name, sector.name);
            assert!(
                !result.top_solutions.is_empty(),
                "{}:{} yields no solutions",
                sector.id,
                pain_point.id
            );
            assert_eq!(result.quick_wins.len(), sector.quick_wins.len());
        }
    }
}

#[test]
fn penalty_stops_growing_after_five_pain_points() {
    let sector = sectors()
        .iter()
        .find(|sector| sector.pain_points.len() >= 5)
        .expect("a sector with five pain points");
    let five: Vec<&str> = sector.pain_points.iter().take(5).map(|p| p.id).collect();
    let ten: Vec<&str> = five.iter().chain(five.iter()).copied().collect();

    let with_five = compute(sector.id, &five, "medium", "intermediate", "scaling", None);
    let with_ten = compute(sector.id, &ten, "medium", "intermediate", "scaling", None);
    assert_eq!(with_five.overall_score, with_ten.overall_score);
}

#[test]
fn unknown_sector_is_degenerate() {
    let result = compute("space-mining", &["inventory"], "large", "advanced", "enterprise", None);
    assert_eq!(result.overall_score, 0);
    assert_eq!(result.sector_name, "Unknown");
    assert!(result.top_solutions.is_empty());
    assert!(result.quick_wins.is_empty());
    assert!(result.priority_actions.is_empty());
}

#[test]
fn request_json_uses_snake_case_fields() {
    let request: AuditRequest = serde_json::from_str(
        r#"{
            "sector": "food-restaurant",
            "pain_points": ["inventory"],
            "business_size": "small",
            "tech_level": "intermediate",
            "budget": "growing",
            "pain_intensities": {"inventory": 9}
        }"#,
    )
    .expect("request parses");

    // 65 + 5 - 3 - 5
    assert_eq!(request.evaluate().overall_score, 62);
}
