//! Read-only sector catalog: pain points, candidate solutions, and quick wins.

mod catalog;
mod sectors;

use super::domain::ImpactTier;
use serde::Serialize;

pub use catalog::{catalog, sector_detail, CatalogView, SectorDetail, SectorSummary};

/// Pre-authored recommendation attached to a pain point or a sector's quick wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Solution {
    pub title: &'static str,
    pub description: &'static str,
    pub impact: ImpactTier,
    pub time_to_implement: &'static str,
    pub estimated_roi: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PainPoint {
    pub id: &'static str,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

/// Candidate solutions for one pain point, in authored order.
#[derive(Debug, Clone, Copy)]
pub struct PainPointSolutions {
    pub pain_point: &'static str,
    pub solutions: &'static [Solution],
}

#[derive(Debug)]
pub struct Sector {
    pub id: &'static str,
    pub name: &'static str,
    pub short_name: &'static str,
    pub pain_points: &'static [PainPoint],
    pub solutions: &'static [PainPointSolutions],
    pub quick_wins: &'static [Solution],
}

impl Sector {
    pub fn pain_point(&self, id: &str) -> Option<&'static PainPoint> {
        self.pain_points.iter().find(|pain_point| pain_point.id == id)
    }

    /// Solutions authored for `pain_point_id`; empty for ids the sector does not know.
    pub fn solutions_for(&self, pain_point_id: &str) -> &'static [Solution] {
        self.solutions
            .iter()
            .find(|entry| entry.pain_point == pain_point_id)
            .map_or(&[], |entry| entry.solutions)
    }
}

static SECTORS: [Sector; 9] = [
    sectors::food_restaurant::SECTOR,
    sectors::hotel_travel_tourism::SECTOR,
    sectors::ecommerce_d2c::SECTOR,
    sectors::auto_ev::SECTOR,
    sectors::beauty_health_wellness::SECTOR,
    sectors::education_edtech::SECTOR,
    sectors::specialty_services::SECTOR,
    sectors::fashion_jewelry::SECTOR,
    sectors::dealer_distributor::SECTOR,
];

/// Every sector in catalog order.
pub fn sectors() -> &'static [Sector] {
    &SECTORS
}

pub fn find_sector(id: &str) -> Option<&'static Sector> {
    SECTORS.iter().find(|sector| sector.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_lists_nine_sectors_with_unique_ids() {
        let ids: HashSet<&str> = sectors().iter().map(|sector| sector.id).collect();
        assert_eq!(ids.len(), 9);
        assert_eq!(sectors()[0].id, "food-restaurant");
    }

    #[test]
    fn every_pain_point_has_authored_solutions() {
        for sector in sectors() {
            let mut seen = HashSet::new();
            for pain_point in sector.pain_points {
                assert!(
                    seen.insert(pain_point.id),
                    "{} repeats pain point {}",
                    sector.id,
                    pain_point.id
                );
                assert!(
                    !sector.solutions_for(pain_point.id).is_empty(),
                    "{} has no solutions for {}",
                    sector.id,
                    pain_point.id
                );
            }
            assert!(!sector.quick_wins.is_empty(), "{} has no quick wins", sector.id);
        }
    }

    #[test]
    fn solution_entries_reference_declared_pain_points() {
        for sector in sectors() {
            for entry in sector.solutions {
                assert!(
                    sector.pain_point(entry.pain_point).is_some(),
                    "{} maps solutions to unknown pain point {}",
                    sector.id,
                    entry.pain_point
                );
            }
        }
    }

    #[test]
    fn unknown_lookups_fall_back_to_empty() {
        let sector = find_sector("food-restaurant").expect("food sector present");
        assert!(sector.solutions_for("time-travel").is_empty());
        assert!(sector.pain_point("time-travel").is_none());
        assert!(find_sector("space-mining").is_none());
    }

    #[test]
    fn inventory_solutions_keep_authored_order() {
        let sector = find_sector("food-restaurant").expect("food sector present");
        let titles: Vec<&str> = sector
            .solutions_for("inventory")
            .iter()
            .map(|solution| solution.title)
            .collect();
        assert_eq!(titles, vec!["AI Demand Forecasting", "Smart Auto-Reordering"]);
    }
}
