use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::audit::domain::{BudgetRange, BusinessSize, TechReadiness, Tribe};
use crate::audit::engine::{AuditRequest, PainIntensities};
use crate::audit::knowledge::find_sector;

pub const MAX_INTENSITY: u8 = 10;
const MIN_NAME_LEN: usize = 2;
const MIN_PHONE_LEN: usize = 10;

/// Quiz screens in the order respondents walk through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizStep {
    Name,
    Tribe,
    Sector,
    BusinessSize,
    PainPoints,
    TechReadiness,
    Budget,
    Contact,
}

impl QuizStep {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Name,
            Self::Tribe,
            Self::Sector,
            Self::BusinessSize,
            Self::PainPoints,
            Self::TechReadiness,
            Self::Budget,
            Self::Contact,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Tribe => "Your Tribe",
            Self::Sector => "Business Sector",
            Self::BusinessSize => "Business Size",
            Self::PainPoints => "Pain Points",
            Self::TechReadiness => "Tech Readiness",
            Self::Budget => "Monthly Budget",
            Self::Contact => "Contact Details",
        }
    }

    /// Whether the answers collected so far let the respondent leave this step.
    pub fn check(self, submission: &QuizSubmission) -> Result<(), IntakeError> {
        match self {
            Self::Name => {
                if submission.name.trim().chars().count() < MIN_NAME_LEN {
                    return Err(IntakeError::NameTooShort);
                }
            }
            Self::Tribe => {
                Tribe::from_id(&submission.tribe)
                    .ok_or_else(|| IntakeError::UnknownTribe(submission.tribe.clone()))?;
            }
            Self::Sector => {
                find_sector(&submission.sector)
                    .ok_or_else(|| IntakeError::UnknownSector(submission.sector.clone()))?;
            }
            Self::BusinessSize => {
                BusinessSize::from_id(&submission.business_size).ok_or_else(|| {
                    IntakeError::UnknownBusinessSize(submission.business_size.clone())
                })?;
            }
            Self::PainPoints => check_pain_points(submission)?,
            Self::TechReadiness => {
                TechReadiness::from_id(&submission.tech_level)
                    .ok_or_else(|| IntakeError::UnknownTechLevel(submission.tech_level.clone()))?;
            }
            Self::Budget => {
                BudgetRange::from_id(&submission.budget)
                    .ok_or_else(|| IntakeError::UnknownBudget(submission.budget.clone()))?;
            }
            Self::Contact => {
                if submission.phone.trim().chars().count() < MIN_PHONE_LEN {
                    return Err(IntakeError::PhoneTooShort);
                }
                if submission.business_name.trim().is_empty() {
                    return Err(IntakeError::MissingBusinessName);
                }
            }
        }
        Ok(())
    }
}

fn check_pain_points(submission: &QuizSubmission) -> Result<(), IntakeError> {
    if submission.pain_points.is_empty() {
        return Err(IntakeError::NoPainPoints);
    }

    let sector = find_sector(&submission.sector)
        .ok_or_else(|| IntakeError::UnknownSector(submission.sector.clone()))?;
    let mut seen = HashSet::new();
    for id in &submission.pain_points {
        if sector.pain_point(id).is_none() {
            return Err(IntakeError::UnknownPainPoint {
                sector: sector.id,
                pain_point: id.clone(),
            });
        }
        if !seen.insert(id.as_str()) {
            return Err(IntakeError::DuplicatePainPoint(id.clone()));
        }
    }

    if let Some(intensities) = &submission.pain_intensities {
        for (pain_point, value) in intensities {
            if *value > MAX_INTENSITY && seen.contains(pain_point.as_str()) {
                return Err(IntakeError::IntensityOutOfRange {
                    pain_point: pain_point.clone(),
                    value: *value,
                });
            }
        }
    }

    Ok(())
}

/// Raw answers from one pass through the quiz.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizSubmission {
    pub name: String,
    pub phone: String,
    pub business_name: String,
    pub tribe: String,
    pub sector: String,
    pub business_size: String,
    pub pain_points: Vec<String>,
    pub tech_level: String,
    pub budget: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pain_intensities: Option<PainIntensities>,
}

impl QuizSubmission {
    /// Run every step check in quiz order and normalize the answers.
    pub fn validate(self) -> Result<ValidatedSubmission, IntakeError> {
        for step in QuizStep::ordered() {
            step.check(&self)?;
        }

        let QuizSubmission {
            name,
            phone,
            business_name,
            tribe,
            sector,
            business_size,
            pain_points,
            tech_level,
            budget,
            pain_intensities,
        } = self;

        // Deselected pain points lose their rating.
        let pain_intensities = pain_intensities.map(|ratings| {
            ratings
                .into_iter()
                .filter(|(id, _)| pain_points.contains(id))
                .collect::<PainIntensities>()
        });

        Ok(ValidatedSubmission(QuizSubmission {
            name: name.trim().to_string(),
            phone: phone.trim().to_string(),
            business_name: business_name.trim().to_string(),
            tribe,
            sector,
            business_size,
            pain_points,
            tech_level,
            budget,
            pain_intensities,
        }))
    }
}

/// A submission that passed every quiz step check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSubmission(QuizSubmission);

impl ValidatedSubmission {
    pub fn answers(&self) -> &QuizSubmission {
        &self.0
    }

    pub fn audit_request(&self) -> AuditRequest {
        AuditRequest {
            sector: self.0.sector.clone(),
            pain_points: self.0.pain_points.clone(),
            business_size: self.0.business_size.clone(),
            tech_level: self.0.tech_level.clone(),
            budget: self.0.budget.clone(),
            pain_intensities: self.0.pain_intensities.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("name must be at least {MIN_NAME_LEN} characters")]
    NameTooShort,
    #[error("unknown tribe '{0}'")]
    UnknownTribe(String),
    #[error("unknown sector '{0}'")]
    UnknownSector(String),
    #[error("unknown business size '{0}'")]
    UnknownBusinessSize(String),
    #[error("select at least one pain point")]
    NoPainPoints,
    #[error("pain point '{pain_point}' does not belong to sector '{sector}'")]
    UnknownPainPoint {
        sector: &'static str,
        pain_point: String,
    },
    #[error("pain point '{0}' was selected more than once")]
    DuplicatePainPoint(String),
    #[error("intensity {value} for '{pain_point}' is outside 0..={MAX_INTENSITY}")]
    IntensityOutOfRange { pain_point: String, value: u8 },
    #[error("unknown tech level '{0}'")]
    UnknownTechLevel(String),
    #[error("unknown budget '{0}'")]
    UnknownBudget(String),
    #[error("phone number must be at least {MIN_PHONE_LEN} characters")]
    PhoneTooShort,
    #[error("business name is required")]
    MissingBusinessName,
    #[error("Valid email required")]
    InvalidEmail,
}

impl IntakeError {
    /// Quiz step that owns the failing answer; `None` for report delivery errors.
    pub const fn step(&self) -> Option<QuizStep> {
        match self {
            Self::NameTooShort => Some(QuizStep::Name),
            Self::UnknownTribe(_) => Some(QuizStep::Tribe),
            Self::UnknownSector(_) => Some(QuizStep::Sector),
            Self::UnknownBusinessSize(_) => Some(QuizStep::BusinessSize),
            Self::NoPainPoints
            | Self::UnknownPainPoint { .. }
            | Self::DuplicatePainPoint(_)
            | Self::IntensityOutOfRange { .. } => Some(QuizStep::PainPoints),
            Self::UnknownTechLevel(_) => Some(QuizStep::TechReadiness),
            Self::UnknownBudget(_) => Some(QuizStep::Budget),
            Self::PhoneTooShort | Self::MissingBusinessName => Some(QuizStep::Contact),
            Self::InvalidEmail => None,
        }
    }
}
