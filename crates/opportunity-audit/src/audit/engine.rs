use super::domain::{BudgetRange, BusinessSize, TechReadiness};
use super::knowledge::{find_sector, Sector, Solution};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BTreeMap;

pub const MIN_SCORE: u8 = 15;
pub const MAX_SCORE: u8 = 95;
pub const MAX_TOP_SOLUTIONS: usize = 4;

pub const DEFAULT_BASE_SCORE: f64 = 40.0;
pub const DEFAULT_SIZE_MULTIPLIER: f64 = 1.0;
pub const DEFAULT_BUDGET_BONUS: f64 = 0.0;
pub const DEFAULT_INTENSITY: u8 = 5;
pub const FALLBACK_SAVINGS: &str = "₹50K–2L";

const PENALTY_PER_PAIN_POINT: f64 = 3.0;
const PAIN_POINT_PENALTY_CAP: f64 = 15.0;
const UNKNOWN_SECTOR_NAME: &str = "Unknown";
const NOT_AVAILABLE: &str = "N/A";

const COACHING_ACTION: &str = "Start with workflow automation to build AI confidence";
const SEQUENCING_ACTION: &str = "Focus on highest-ROI automation first, then expand systematically";
const CLOSING_ACTION: &str = "Schedule a free 15-min strategy call with our AI team";

/// Self-reported 0–10 severity keyed by pain-point id.
pub type PainIntensities = BTreeMap<String, u8>;

/// One completed quiz pass, in the shape the engine consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRequest {
    pub sector: String,
    #[serde(default)]
    pub pain_points: Vec<String>,
    #[serde(default)]
    pub business_size: String,
    #[serde(default)]
    pub tech_level: String,
    #[serde(default)]
    pub budget: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pain_intensities: Option<PainIntensities>,
}

impl AuditRequest {
    pub fn evaluate(&self) -> AuditResult {
        compute(
            &self.sector,
            &self.pain_points,
            &self.business_size,
            &self.tech_level,
            &self.budget,
            self.pain_intensities.as_ref(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditResult {
    pub overall_score: u8,
    pub sector_name: &'static str,
    pub top_solutions: Vec<Solution>,
    pub quick_wins: Vec<Solution>,
    pub estimated_monthly_savings: &'static str,
    pub ai_readiness_level: &'static str,
    pub priority_actions: Vec<String>,
}

impl AuditResult {
    /// Sentinel returned for a sector id the catalog does not know.
    pub fn unknown_sector() -> Self {
        Self {
            overall_score: 0,
            sector_name: UNKNOWN_SECTOR_NAME,
            top_solutions: Vec::new(),
            quick_wins: Vec::new(),
            estimated_monthly_savings: NOT_AVAILABLE,
            ai_readiness_level: NOT_AVAILABLE,
            priority_actions: Vec::new(),
        }
    }

    pub fn is_unknown_sector(&self) -> bool {
        self.overall_score == 0 && self.sector_name == UNKNOWN_SECTOR_NAME
    }

    pub fn solution_titles(&self) -> Vec<String> {
        self.top_solutions
            .iter()
            .map(|solution| solution.title.to_string())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessLevel {
    Champion,
    Ready,
    Curious,
    Explorer,
}

impl ReadinessLevel {
    pub const fn for_score(score: u8) -> Self {
        if score >= 80 {
            Self::Champion
        } else if score >= 60 {
            Self::Ready
        } else if score >= 40 {
            Self::Curious
        } else {
            Self::Explorer
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Champion => "AI Champion — You're ahead of the curve",
            Self::Ready => "AI Ready — Strong foundation to build on",
            Self::Curious => "AI Curious — Great time to start your AI journey",
            Self::Explorer => "AI Explorer — Massive untapped potential",
        }
    }
}

/// Savings column picked from how many pain points were selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SavingsTier {
    Low,
    Med,
    High,
}

impl SavingsTier {
    pub const fn from_selection_count(count: usize) -> Self {
        if count >= 4 {
            Self::High
        } else if count >= 2 {
            Self::Med
        } else {
            Self::Low
        }
    }
}

impl TechReadiness {
    pub const fn base_score(self) -> f64 {
        match self {
            Self::Beginner => 20.0,
            Self::Basic => 40.0,
            Self::Intermediate => 65.0,
            Self::Advanced => 85.0,
        }
    }
}

impl BusinessSize {
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Solo => 0.7,
            Self::Micro => 0.8,
            Self::Small => 1.0,
            Self::Medium => 1.1,
            Self::Large => 1.15,
        }
    }

    pub const fn savings_bracket(self, tier: SavingsTier) -> &'static str {
        match (self, tier) {
            (Self::Solo, SavingsTier::Low) => "₹10K–25K",
            (Self::Solo, SavingsTier::Med) => "₹25K–50K",
            (Self::Solo, SavingsTier::High) => "₹50K–1L",
            (Self::Micro, SavingsTier::Low) => "₹25K–50K",
            (Self::Micro, SavingsTier::Med) => "₹50K–1.5L",
            (Self::Micro, SavingsTier::High) => "₹1.5L–3L",
            (Self::Small, SavingsTier::Low) => "₹50K–1.5L",
            (Self::Small, SavingsTier::Med) => "₹1.5L–5L",
            (Self::Small, SavingsTier::High) => "₹5L–10L",
            (Self::Medium, SavingsTier::Low) => "₹1.5L–5L",
            (Self::Medium, SavingsTier::Med) => "₹5L–15L",
            (Self::Medium, SavingsTier::High) => "₹15L–30L",
            (Self::Large, SavingsTier::Low) => "₹5L–15L",
            (Self::Large, SavingsTier::Med) => "₹15L–50L",
            (Self::Large, SavingsTier::High) => "₹50L–1Cr+",
        }
    }
}

impl BudgetRange {
    pub const fn bonus(self) -> f64 {
        match self {
            Self::Bootstrap => 0.0,
            Self::Growing => 5.0,
            Self::Scaling => 10.0,
            Self::Enterprise => 15.0,
        }
    }
}

pub fn base_score(tech_level: &str) -> f64 {
    match TechReadiness::from_id(tech_level) {
        Some(level) => level.base_score(),
        None => DEFAULT_BASE_SCORE,
    }
}

pub fn size_multiplier(business_size: &str) -> f64 {
    match BusinessSize::from_id(business_size) {
        Some(size) => size.multiplier(),
        None => DEFAULT_SIZE_MULTIPLIER,
    }
}

pub fn budget_bonus(budget: &str) -> f64 {
    match BudgetRange::from_id(budget) {
        Some(range) => range.bonus(),
        None => DEFAULT_BUDGET_BONUS,
    }
}

pub fn pain_point_penalty(selected: usize) -> f64 {
    (selected as f64 * PENALTY_PER_PAIN_POINT).min(PAIN_POINT_PENALTY_CAP)
}

/// Rating used for a selected pain point: its entry in the map, or
/// [`DEFAULT_INTENSITY`] when the entry is missing or 0.
pub fn effective_intensity(intensities: &PainIntensities, pain_point: &str) -> u8 {
    intensities
        .get(pain_point)
        .copied()
        .filter(|rating| *rating != 0)
        .unwrap_or(DEFAULT_INTENSITY)
}

/// Adjustment from the average intensity of the selected pain points.
///
/// Without an intensity map the adjustment is zero. With one, each selected pain
/// point contributes its [`effective_intensity`], and the sum is divided by
/// `max(selected, 1)`.
pub fn pain_bonus<S: AsRef<str>>(selected: &[S], intensities: Option<&PainIntensities>) -> f64 {
    let Some(intensities) = intensities else {
        return 0.0;
    };

    let total: u32 = selected
        .iter()
        .map(|id| u32::from(effective_intensity(intensities, id.as_ref())))
        .sum();
    let average = f64::from(total) / selected.len().max(1) as f64;

    if average > 7.0 {
        -5.0
    } else if average > 4.0 {
        0.0
    } else {
        3.0
    }
}

pub fn savings_bracket(business_size: &str, selected: usize) -> &'static str {
    let tier = SavingsTier::from_selection_count(selected);
    match BusinessSize::from_id(business_size) {
        Some(size) => size.savings_bracket(tier),
        None => FALLBACK_SAVINGS,
    }
}

fn clamp_score(raw: f64) -> u8 {
    raw.round()
        .clamp(f64::from(MIN_SCORE), f64::from(MAX_SCORE)) as u8
}

fn priority_actions(
    top_solutions: &[Solution],
    sector: &Sector,
    tech_level: &str,
    selected: usize,
) -> Vec<String> {
    let mut actions = Vec::with_capacity(5);

    if let Some(first) = top_solutions.first() {
        actions.push(format!(
            "Implement {} first — {}",
            first.title, first.estimated_roi
        ));
    }

    if let Some(quick_win) = sector.quick_wins.first() {
        actions.push(format!(
            "Quick Win: {} ({})",
            quick_win.title, quick_win.time_to_implement
        ));
    }

    if TechReadiness::from_id(tech_level).is_some_and(TechReadiness::needs_coaching) {
        actions.push(COACHING_ACTION.to_string());
    }

    if selected >= 3 {
        actions.push(SEQUENCING_ACTION.to_string());
    }

    actions.push(CLOSING_ACTION.to_string());
    actions
}

/// Score a completed quiz pass against the static knowledge base.
///
/// Never fails: an unknown sector yields [`AuditResult::unknown_sector`], and
/// unrecognized pain points or tier ids fall back to their documented defaults.
pub fn compute<S: AsRef<str>>(
    sector_id: &str,
    pain_point_ids: &[S],
    business_size: &str,
    tech_level: &str,
    budget: &str,
    intensities: Option<&PainIntensities>,
) -> AuditResult {
    let Some(sector) = find_sector(sector_id) else {
        return AuditResult::unknown_sector();
    };

    let mut top_solutions: Vec<Solution> = pain_point_ids
        .iter()
        .flat_map(|id| sector.solutions_for(id.as_ref()).iter().copied())
        .collect();
    // Stable: equal impact keeps gather order.
    top_solutions.sort_by_key(|solution| Reverse(solution.impact.rank()));
    top_solutions.truncate(MAX_TOP_SOLUTIONS);

    let selected = pain_point_ids.len();
    let raw = base_score(tech_level) * size_multiplier(business_size) + budget_bonus(budget)
        - pain_point_penalty(selected)
        + pain_bonus(pain_point_ids, intensities);
    let overall_score = clamp_score(raw);

    let priority_actions = priority_actions(&top_solutions, sector, tech_level, selected);

    AuditResult {
        overall_score,
        sector_name: sector.name,
        top_solutions,
        quick_wins: sector.quick_wins.to_vec(),
        estimated_monthly_savings: savings_bracket(business_size, selected),
        ai_readiness_level: ReadinessLevel::for_score(overall_score).label(),
        priority_actions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intensities(entries: &[(&str, u8)]) -> PainIntensities {
        entries
            .iter()
            .map(|(id, value)| (id.to_string(), *value))
            .collect()
    }

    #[test]
    fn single_inventory_pain_point_scores_sixty_seven() {
        let result = compute(
            "food-restaurant",
            &["inventory"],
            "small",
            "intermediate",
            "growing",
            None,
        );

        assert_eq!(result.overall_score, 67);
        assert_eq!(result.sector_name, "Food & Restaurant");
        assert_eq!(
            result.ai_readiness_level,
            "AI Ready — Strong foundation to build on"
        );
        let titles: Vec<&str> = result.top_solutions.iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["AI Demand Forecasting", "Smart Auto-Reordering"]);
        assert_eq!(result.estimated_monthly_savings, "₹50K–1.5L");
    }

    #[test]
    fn large_enterprise_score_is_capped() {
        let result = compute(
            "food-restaurant",
            &[
                "inventory",
                "orders",
                "customer-retention",
                "staff",
                "delivery",
            ],
            "large",
            "advanced",
            "enterprise",
            None,
        );

        assert_eq!(result.overall_score, MAX_SCORE);
        assert_eq!(
            result.ai_readiness_level,
            "AI Champion — You're ahead of the curve"
        );
        assert_eq!(result.estimated_monthly_savings, "₹50L–1Cr+");
        assert_eq!(result.top_solutions.len(), MAX_TOP_SOLUTIONS);
    }

    #[test]
    fn low_inputs_are_floored() {
        let result = compute(
            "food-restaurant",
            &["inventory", "orders", "staff", "delivery", "marketing"],
            "solo",
            "beginner",
            "bootstrap",
            Some(&intensities(&[
                ("inventory", 10),
                ("orders", 10),
                ("staff", 10),
                ("delivery", 10),
                ("marketing", 10),
            ])),
        );

        // 20 * 0.7 + 0 - 15 - 5 = -6
        assert_eq!(result.overall_score, MIN_SCORE);
        assert_eq!(
            result.ai_readiness_level,
            "AI Explorer — Massive untapped potential"
        );
    }

    #[test]
    fn unknown_sector_returns_sentinel() {
        let result = compute("space-mining", &["inventory"], "small", "basic", "growing", None);

        assert_eq!(result, AuditResult::unknown_sector());
        assert!(result.is_unknown_sector());
        assert_eq!(result.estimated_monthly_savings, "N/A");
        assert_eq!(result.ai_readiness_level, "N/A");
    }

    #[test]
    fn unknown_tiers_fall_back_to_defaults() {
        assert_eq!(base_score("wizard"), DEFAULT_BASE_SCORE);
        assert_eq!(size_multiplier("galactic"), DEFAULT_SIZE_MULTIPLIER);
        assert_eq!(budget_bonus("infinite"), DEFAULT_BUDGET_BONUS);
        assert_eq!(savings_bracket("galactic", 5), FALLBACK_SAVINGS);

        // 40 * 1.0 + 0 - 3 + 0 = 37
        let result = compute("food-restaurant", &["orders"], "", "", "", None);
        assert_eq!(result.overall_score, 37);
    }

    #[test]
    fn penalty_caps_at_fifteen() {
        assert_eq!(pain_point_penalty(0), 0.0);
        assert_eq!(pain_point_penalty(4), 12.0);
        assert_eq!(pain_point_penalty(5), 15.0);
        assert_eq!(pain_point_penalty(10), 15.0);
    }

    #[test]
    fn pain_bonus_thresholds_follow_average_intensity() {
        let selected = ["inventory", "orders"];
        assert_eq!(pain_bonus(&selected, None), 0.0);
        assert_eq!(
            pain_bonus(&selected, Some(&intensities(&[("inventory", 9), ("orders", 9)]))),
            -5.0
        );
        // Exactly 7 is not above the high threshold.
        assert_eq!(
            pain_bonus(&selected, Some(&intensities(&[("inventory", 7), ("orders", 7)]))),
            0.0
        );
        assert_eq!(
            pain_bonus(&selected, Some(&intensities(&[("inventory", 4), ("orders", 4)]))),
            3.0
        );
        // Missing entries count as the default intensity.
        assert_eq!(
            pain_bonus(&selected, Some(&intensities(&[("inventory", 2)]))),
            3.0
        );
        assert_eq!(pain_bonus(&selected, Some(&PainIntensities::new())), 0.0);
    }

    #[test]
    fn zero_rating_counts_as_default_intensity() {
        let selected = ["inventory"];
        let zero = compute(
            "food-restaurant",
            &selected,
            "small",
            "intermediate",
            "growing",
            Some(&intensities(&[("inventory", 0)])),
        );
        let five = compute(
            "food-restaurant",
            &selected,
            "small",
            "intermediate",
            "growing",
            Some(&intensities(&[("inventory", 5)])),
        );

        assert_eq!(zero.overall_score, 67);
        assert_eq!(zero.overall_score, five.overall_score);
        // (5 + 2) / 2 stays in the low band.
        assert_eq!(
            pain_bonus(&["inventory", "orders"], Some(&intensities(&[("inventory", 0), ("orders", 2)]))),
            3.0
        );
    }

    #[test]
    fn empty_selection_with_intensity_map_averages_to_zero() {
        let none: [&str; 0] = [];
        assert_eq!(pain_bonus(&none, Some(&PainIntensities::new())), 3.0);
    }

    #[test]
    fn high_intensity_lowers_score() {
        let selected = ["inventory", "orders"];
        let baseline = compute("food-restaurant", &selected, "small", "intermediate", "growing", None);
        let intense = compute(
            "food-restaurant",
            &selected,
            "small",
            "intermediate",
            "growing",
            Some(&intensities(&[("inventory", 9), ("orders", 9)])),
        );

        assert_eq!(baseline.overall_score - intense.overall_score, 5);
    }

    #[test]
    fn duplicate_pain_points_gather_solutions_twice() {
        let result = compute(
            "food-restaurant",
            &["inventory", "inventory"],
            "small",
            "intermediate",
            "growing",
            None,
        );

        let titles: Vec<&str> = result.top_solutions.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec![
                "AI Demand Forecasting",
                "AI Demand Forecasting",
                "Smart Auto-Reordering",
                "Smart Auto-Reordering",
            ]
        );
    }

    #[test]
    fn equal_impact_keeps_selection_order() {
        let result = compute(
            "food-restaurant",
            &["orders", "inventory"],
            "small",
            "intermediate",
            "growing",
            None,
        );

        let titles: Vec<&str> = result.top_solutions.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec![
                "AI Order Processing Bot",
                "AI Demand Forecasting",
                "Smart Kitchen Display System",
                "Smart Auto-Reordering",
            ]
        );
    }

    #[test]
    fn unknown_pain_points_contribute_nothing_but_still_count() {
        let result = compute(
            "food-restaurant",
            &["time-travel", "teleportation"],
            "small",
            "intermediate",
            "growing",
            None,
        );

        assert!(result.top_solutions.is_empty());
        // 65 + 5 - 6
        assert_eq!(result.overall_score, 64);
        assert_eq!(result.priority_actions[0], "Quick Win: WhatsApp AI Chatbot (3–5 days)");
    }

    #[test]
    fn priority_actions_follow_fixed_order() {
        let result = compute(
            "food-restaurant",
            &["inventory", "orders", "delivery"],
            "micro",
            "basic",
            "bootstrap",
            None,
        );

        assert_eq!(
            result.priority_actions,
            vec![
                "Implement AI Demand Forecasting first — Save ₹50K–2L/month on wastage".to_string(),
                "Quick Win: WhatsApp AI Chatbot (3–5 days)".to_string(),
                COACHING_ACTION.to_string(),
                SEQUENCING_ACTION.to_string(),
                CLOSING_ACTION.to_string(),
            ]
        );
    }

    #[test]
    fn advanced_single_selection_skips_optional_actions() {
        let result = compute("food-restaurant", &["staff"], "small", "advanced", "scaling", None);

        assert_eq!(result.priority_actions.len(), 3);
        assert_eq!(result.priority_actions.last().map(String::as_str), Some(CLOSING_ACTION));
    }

    #[test]
    fn quick_wins_are_independent_of_selection() {
        let sector = find_sector("food-restaurant").expect("food sector present");
        let none: [&str; 0] = [];
        let empty = compute("food-restaurant", &none, "small", "basic", "growing", None);
        let full = compute(
            "food-restaurant",
            &["inventory", "orders", "staff"],
            "small",
            "basic",
            "growing",
            None,
        );

        assert_eq!(empty.quick_wins, sector.quick_wins.to_vec());
        assert_eq!(empty.quick_wins, full.quick_wins);
    }

    #[test]
    fn readiness_thresholds() {
        assert_eq!(ReadinessLevel::for_score(95), ReadinessLevel::Champion);
        assert_eq!(ReadinessLevel::for_score(80), ReadinessLevel::Champion);
        assert_eq!(ReadinessLevel::for_score(79), ReadinessLevel::Ready);
        assert_eq!(ReadinessLevel::for_score(60), ReadinessLevel::Ready);
        assert_eq!(ReadinessLevel::for_score(59), ReadinessLevel::Curious);
        assert_eq!(ReadinessLevel::for_score(40), ReadinessLevel::Curious);
        assert_eq!(ReadinessLevel::for_score(39), ReadinessLevel::Explorer);
    }

    #[test]
    fn savings_tiers_follow_selection_count() {
        assert_eq!(SavingsTier::from_selection_count(0), SavingsTier::Low);
        assert_eq!(SavingsTier::from_selection_count(1), SavingsTier::Low);
        assert_eq!(SavingsTier::from_selection_count(2), SavingsTier::Med);
        assert_eq!(SavingsTier::from_selection_count(3), SavingsTier::Med);
        assert_eq!(SavingsTier::from_selection_count(4), SavingsTier::High);
        assert_eq!(savings_bracket("medium", 3), "₹5L–15L");
    }

    #[test]
    fn request_evaluate_matches_compute() {
        let request = AuditRequest {
            sector: "food-restaurant".to_string(),
            pain_points: vec!["inventory".to_string(), "orders".to_string()],
            business_size: "medium".to_string(),
            tech_level: "basic".to_string(),
            budget: "scaling".to_string(),
            pain_intensities: Some(intensities(&[("inventory", 8)])),
        };

        let direct = compute(
            "food-restaurant",
            &["inventory", "orders"],
            "medium",
            "basic",
            "scaling",
            request.pain_intensities.as_ref(),
        );
        assert_eq!(request.evaluate(), direct);
    }
}
