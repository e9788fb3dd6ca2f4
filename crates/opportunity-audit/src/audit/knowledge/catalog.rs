use serde::Serialize;

use super::{find_sector, sectors, PainPoint, Sector, Solution};
use crate::audit::domain::{
    budget_options, business_size_options, tech_readiness_options, tribe_options, TierOption,
};

#[derive(Debug, Clone, Serialize)]
pub struct SectorSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub short_name: &'static str,
    pub pain_point_count: usize,
}

/// Everything the quiz needs to render its choice screens.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    pub sectors: Vec<SectorSummary>,
    pub business_sizes: Vec<TierOption>,
    pub tech_levels: Vec<TierOption>,
    pub budgets: Vec<TierOption>,
    pub tribes: Vec<TierOption>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectorDetail {
    pub id: &'static str,
    pub name: &'static str,
    pub short_name: &'static str,
    pub pain_points: &'static [PainPoint],
    pub quick_wins: &'static [Solution],
}

impl Sector {
    pub fn summary(&self) -> SectorSummary {
        SectorSummary {
            id: self.id,
            name: self.name,
            short_name: self.short_name,
            pain_point_count: self.pain_points.len(),
        }
    }

    pub fn detail(&self) -> SectorDetail {
        SectorDetail {
            id: self.id,
            name: self.name,
            short_name: self.short_name,
            pain_points: self.pain_points,
            quick_wins: self.quick_wins,
        }
    }
}

pub fn catalog() -> CatalogView {
    CatalogView {
        sectors: sectors().iter().map(Sector::summary).collect(),
        business_sizes: business_size_options(),
        tech_levels: tech_readiness_options(),
        budgets: budget_options(),
        tribes: tribe_options(),
    }
}

pub fn sector_detail(id: &str) -> Option<SectorDetail> {
    find_sector(id).map(Sector::detail)
}
