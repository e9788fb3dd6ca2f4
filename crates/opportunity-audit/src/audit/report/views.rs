use super::super::domain::ImpactTier;
use serde::Serialize;

/// Gauge band shown next to the readiness score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreZone {
    GettingStarted,
    BuildingUp,
    OnTrack,
    AiReady,
    AiLeader,
}

impl ScoreZone {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::GettingStarted,
            Self::BuildingUp,
            Self::OnTrack,
            Self::AiReady,
            Self::AiLeader,
        ]
    }

    pub const fn for_score(score: u8) -> Self {
        if score <= 30 {
            Self::GettingStarted
        } else if score <= 50 {
            Self::BuildingUp
        } else if score <= 70 {
            Self::OnTrack
        } else if score <= 85 {
            Self::AiReady
        } else {
            Self::AiLeader
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::GettingStarted => "Getting Started",
            Self::BuildingUp => "Building Up",
            Self::OnTrack => "On Track",
            Self::AiReady => "AI Ready",
            Self::AiLeader => "AI Leader",
        }
    }

    pub const fn range(self) -> &'static str {
        match self {
            Self::GettingStarted => "0-30",
            Self::BuildingUp => "31-50",
            Self::OnTrack => "51-70",
            Self::AiReady => "71-85",
            Self::AiLeader => "86-100",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::GettingStarted => "#94a3b8",
            Self::BuildingUp => "#f59e0b",
            Self::OnTrack => "#2563eb",
            Self::AiReady => "#00d4ff",
            Self::AiLeader => "#10b981",
        }
    }
}

/// Headline colour used by the emailed score card.
pub const fn score_color(score: u8) -> &'static str {
    if score >= 86 {
        "#10b981"
    } else if score >= 71 {
        "#2563eb"
    } else if score >= 51 {
        "#00d4ff"
    } else if score >= 31 {
        "#f59e0b"
    } else {
        "#ef4444"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImpactStyle {
    pub background: &'static str,
    pub text: &'static str,
    pub dot: &'static str,
}

impl ImpactStyle {
    pub const fn for_tier(tier: ImpactTier) -> Self {
        match tier {
            ImpactTier::High => Self {
                background: "#ecfdf5",
                text: "#047857",
                dot: "#10b981",
            },
            ImpactTier::Medium => Self {
                background: "#fffbeb",
                text: "#b45309",
                dot: "#f59e0b",
            },
            ImpactTier::Low => Self {
                background: "#f3f4f6",
                text: "#374151",
                dot: "#9ca3af",
            },
        }
    }
}

/// Label for a single 0–10 pain intensity rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityBand {
    Low,
    Moderate,
    High,
    Critical,
}

impl IntensityBand {
    pub const fn for_rating(rating: u8) -> Self {
        if rating <= 3 {
            Self::Low
        } else if rating <= 6 {
            Self::Moderate
        } else if rating <= 8 {
            Self::High
        } else {
            Self::Critical
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

/// Severity of one selected pain point as the quiz slider shows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PainIntensityView {
    pub pain_point: String,
    pub rating: u8,
    pub band: IntensityBand,
    pub band_label: &'static str,
}

impl PainIntensityView {
    pub fn new(pain_point: &str, rating: u8) -> Self {
        let band = IntensityBand::for_rating(rating);
        Self {
            pain_point: pain_point.to_string(),
            rating,
            band,
            band_label: band.label(),
        }
    }
}

/// Teaser shown while pain points are still being picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OpportunityPreview {
    pub label: &'static str,
    pub fill_percent: u8,
}

impl OpportunityPreview {
    pub fn for_selection(count: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }

        let label = if count <= 2 {
            "Good start"
        } else if count <= 4 {
            "Strong potential"
        } else {
            "Huge opportunity"
        };
        let fill_percent = count.saturating_mul(12).min(100) as u8;

        Some(Self {
            label,
            fill_percent,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditHighlights {
    pub score_zone: ScoreZone,
    pub score_zone_label: &'static str,
    pub score_zone_range: &'static str,
    pub score_color: &'static str,
    pub untapped_potential: u8,
    pub solutions_found: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opportunity: Option<OpportunityPreview>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pain_intensities: Vec<PainIntensityView>,
}
