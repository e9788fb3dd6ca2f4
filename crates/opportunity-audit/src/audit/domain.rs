use serde::{Deserialize, Serialize};

/// Ordinal classification used to rank recommended solutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactTier {
    High,
    Medium,
    Low,
}

impl ImpactTier {
    pub const fn ordered() -> [Self; 3] {
        [Self::High, Self::Medium, Self::Low]
    }

    /// Sort weight: high=3, medium=2, low=1.
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High Impact",
            Self::Medium => "Medium Impact",
            Self::Low => "Low Impact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessSize {
    Solo,
    Micro,
    Small,
    Medium,
    Large,
}

impl BusinessSize {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Solo,
            Self::Micro,
            Self::Small,
            Self::Medium,
            Self::Large,
        ]
    }

    pub fn from_id(value: &str) -> Option<Self> {
        Self::ordered().into_iter().find(|size| size.id() == value)
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::Solo => "solo",
            Self::Micro => "micro",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Solo => "Solo / Freelancer",
            Self::Micro => "Micro Business",
            Self::Small => "Small Business",
            Self::Medium => "Medium Enterprise",
            Self::Large => "Large Enterprise",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Solo => "Just me",
            Self::Micro => "2–10 people",
            Self::Small => "11–50 people",
            Self::Medium => "51–200 people",
            Self::Large => "200+ people",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechReadiness {
    Beginner,
    Basic,
    Intermediate,
    Advanced,
}

impl TechReadiness {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Beginner,
            Self::Basic,
            Self::Intermediate,
            Self::Advanced,
        ]
    }

    pub fn from_id(value: &str) -> Option<Self> {
        Self::ordered().into_iter().find(|level| level.id() == value)
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Basic => "basic",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Just Starting",
            Self::Basic => "Basic Digital",
            Self::Intermediate => "Tech Savvy",
            Self::Advanced => "Tech Forward",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Beginner => "Mostly manual processes",
            Self::Basic => "Using basic software & tools",
            Self::Intermediate => "Automated some workflows",
            Self::Advanced => "Already using some AI",
        }
    }

    /// Levels that still get the workflow-automation coaching action.
    pub const fn needs_coaching(self) -> bool {
        matches!(self, Self::Beginner | Self::Basic)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetRange {
    Bootstrap,
    Growing,
    Scaling,
    Enterprise,
}

impl BudgetRange {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Bootstrap,
            Self::Growing,
            Self::Scaling,
            Self::Enterprise,
        ]
    }

    pub fn from_id(value: &str) -> Option<Self> {
        Self::ordered().into_iter().find(|budget| budget.id() == value)
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::Bootstrap => "bootstrap",
            Self::Growing => "growing",
            Self::Scaling => "scaling",
            Self::Enterprise => "enterprise",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Bootstrap => "Bootstrap",
            Self::Growing => "Growing",
            Self::Scaling => "Scaling",
            Self::Enterprise => "Enterprise",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Bootstrap => "Under ₹50K/mo",
            Self::Growing => "₹50K – ₹2L/mo",
            Self::Scaling => "₹2L – ₹10L/mo",
            Self::Enterprise => "₹10L+/mo",
        }
    }
}

/// How the respondent relates to the business. Collected and stored, never scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tribe {
    Franchisor,
    Franchisee,
    Investor,
    Distributor,
}

impl Tribe {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Franchisor,
            Self::Franchisee,
            Self::Investor,
            Self::Distributor,
        ]
    }

    pub fn from_id(value: &str) -> Option<Self> {
        Self::ordered().into_iter().find(|tribe| tribe.id() == value)
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::Franchisor => "franchisor",
            Self::Franchisee => "franchisee",
            Self::Investor => "investor",
            Self::Distributor => "distributor",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Franchisor => "Franchisor",
            Self::Franchisee => "Franchisee",
            Self::Investor => "Investor",
            Self::Distributor => "Distributor",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Franchisor => "You own & license the brand",
            Self::Franchisee => "You operate a franchise unit",
            Self::Investor => "You fund or evaluate businesses",
            Self::Distributor => "You supply & deliver products",
        }
    }
}

/// Catalog entry shared by every fixed tier list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierOption {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

macro_rules! tier_options {
    ($name:ident, $tier:ty) => {
        pub fn $name() -> Vec<TierOption> {
            <$tier>::ordered()
                .into_iter()
                .map(|tier| TierOption {
                    id: tier.id(),
                    label: tier.label(),
                    description: tier.description(),
                })
                .collect()
        }
    };
}

tier_options!(business_size_options, BusinessSize);
tier_options!(tech_readiness_options, TechReadiness);
tier_options!(budget_options, BudgetRange);
tier_options!(tribe_options, Tribe);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_from_id() {
        for size in BusinessSize::ordered() {
            assert_eq!(BusinessSize::from_id(size.id()), Some(size));
        }
        for level in TechReadiness::ordered() {
            assert_eq!(TechReadiness::from_id(level.id()), Some(level));
        }
        for budget in BudgetRange::ordered() {
            assert_eq!(BudgetRange::from_id(budget.id()), Some(budget));
        }
        for tribe in Tribe::ordered() {
            assert_eq!(Tribe::from_id(tribe.id()), Some(tribe));
        }
    }

    #[test]
    fn unknown_ids_are_rejected_case_sensitively() {
        assert_eq!(BusinessSize::from_id("Small"), None);
        assert_eq!(TechReadiness::from_id("expert"), None);
        assert_eq!(BudgetRange::from_id(""), None);
    }

    #[test]
    fn impact_rank_orders_high_first() {
        let ranks: Vec<u8> = ImpactTier::ordered().into_iter().map(ImpactTier::rank).collect();
        assert_eq!(ranks, vec![3, 2, 1]);
    }

    #[test]
    fn tier_options_follow_declared_order() {
        let sizes = business_size_options();
        assert_eq!(sizes.first().map(|option| option.id), Some("solo"));
        assert_eq!(sizes.last().map(|option| option.label), Some("Large Enterprise"));
        assert_eq!(tribe_options().len(), 4);
    }
}
