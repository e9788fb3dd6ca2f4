//! AI opportunity audit: static sector knowledge, readiness scoring, quiz intake,
//! and report rendering.

pub mod domain;
pub mod engine;
pub mod intake;
pub mod knowledge;
pub mod report;

pub use domain::{BudgetRange, BusinessSize, ImpactTier, TechReadiness, Tribe};
pub use engine::{compute, AuditRequest, AuditResult, ReadinessLevel, SavingsTier};
pub use knowledge::{find_sector, sectors, PainPoint, Sector, Solution};
