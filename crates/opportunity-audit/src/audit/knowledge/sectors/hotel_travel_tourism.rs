use crate::audit::domain::ImpactTier;
use crate::audit::knowledge::{PainPoint, PainPointSolutions, Sector, Solution};

pub(crate) const SECTOR: Sector = Sector {
    id: "hotel-travel-tourism",
    name: "Hotel, Travel & Tourism",
    short_name: "Hotel & Travel",
    pain_points: &[
        PainPoint {
            id: "bookings",
            label: "Booking & Reservation Management",
            description: Some("Double bookings, missed reservations & front desk chaos"),
        },
        PainPoint {
            id: "guest-experience",
            label: "Guest Experience & Satisfaction",
            description: Some("Guests expect personalized service but staff can't keep up"),
        },
        PainPoint {
            id: "revenue",
            label: "Revenue & Yield Optimization",
            description: Some("Empty rooms while competitors sell out at higher rates"),
        },
        PainPoint {
            id: "operations",
            label: "Operations & Housekeeping",
            description: Some("Housekeeping delays & maintenance surprises hurting reviews"),
        },
        PainPoint {
            id: "reviews",
            label: "Online Reputation & Reviews",
            description: Some("Bad reviews piling up with no time to respond"),
        },
        PainPoint {
            id: "marketing",
            label: "Marketing & Visibility",
            description: Some("Invisible online while competitors dominate search results"),
        },
        PainPoint {
            id: "ota-dependency",
            label: "OTA Commission Dependency",
            description: Some("MakeMyTrip & Booking.com taking 15-25% per reservation"),
        },
        PainPoint {
            id: "seasonal-demand",
            label: "Seasonal Demand Fluctuations",
            description: Some("Packed in peak season, ghost town in off-season"),
        },
    ],
    solutions: &[
        PainPointSolutions {
            pain_point: "bookings",
            solutions: &[
                Solution {
                    title: "AI Dynamic Pricing Engine",
                    description: "Auto-adjusts room rates based on demand, competition, seasonality & events. Maximizes RevPAR.",
                    impact: ImpactTier::High,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "15–25% revenue increase",
                },
                Solution {
                    title: "AI Booking Assistant",
                    description: "24/7 chatbot on website & WhatsApp that handles inquiries, bookings & upsells experiences.",
                    impact: ImpactTier::High,
                    time_to_implement: "1–2 weeks",
                    estimated_roi: "40% more direct bookings",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "guest-experience",
            solutions: &[
                Solution {
                    title: "AI Concierge System",
                    description: "Personalized guest recommendations for dining, activities & local experiences based on preferences.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "2 weeks",
                    estimated_roi: "30% increase in ancillary revenue",
                },
                Solution {
                    title: "AI Pre-Arrival Experience Builder",
                    description: "Sends personalized pre-arrival emails with room preferences, special requests & curated local guides.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "1–2 weeks",
                    estimated_roi: "25% higher guest satisfaction scores",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "revenue",
            solutions: &[
                Solution {
                    title: "Revenue Management AI",
                    description: "Analyzes booking patterns, competitor rates & market demand to optimize pricing strategy.",
                    impact: ImpactTier::High,
                    time_to_implement: "3–4 weeks",
                    estimated_roi: "20–30% RevPAR improvement",
                },
                Solution {
                    title: "AI Upsell & Cross-Sell Engine",
                    description: "Recommends room upgrades, spa packages & dining deals at optimal moments during guest journey.",
                    impact: ImpactTier::High,
                    time_to_implement: "2 weeks",
                    estimated_roi: "₹500–2000 additional revenue per booking",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "operations",
            solutions: &[
                Solution {
                    title: "Smart Housekeeping Scheduler",
                    description: "AI optimizes cleaning schedules based on checkout times, new bookings & staff availability.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "1–2 weeks",
                    estimated_roi: "25% faster room turnover",
                },
                Solution {
                    title: "AI Maintenance Predictor",
                    description: "Predicts AC, plumbing & equipment failures before they happen using sensor data patterns.",
                    impact: ImpactTier::High,
                    time_to_implement: "3–4 weeks",
                    estimated_roi: "50% reduction in emergency repair costs",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "reviews",
            solutions: &[
                Solution {
                    title: "AI Review Management",
                    description: "Auto-responds to reviews across platforms, analyzes sentiment trends, and flags issues.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "1 week",
                    estimated_roi: "0.5–1 star rating improvement",
                },
                Solution {
                    title: "AI Sentiment Dashboard",
                    description: "Real-time dashboard tracking guest sentiment across all review platforms with trend alerts.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "1–2 weeks",
                    estimated_roi: "Identify issues 3x faster than manual monitoring",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "marketing",
            solutions: &[
                Solution {
                    title: "AI Content & SEO Engine",
                    description: "Auto-generates SEO-optimized listings, social content & email campaigns for different seasons.",
                    impact: ImpactTier::High,
                    time_to_implement: "2 weeks",
                    estimated_roi: "3x organic traffic growth",
                },
                Solution {
                    title: "AI Remarketing Automation",
                    description: "Targets past guests with personalized offers based on stay history, preferences & upcoming events.",
                    impact: ImpactTier::High,
                    time_to_implement: "1–2 weeks",
                    estimated_roi: "35% increase in repeat bookings",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "ota-dependency",
            solutions: &[
                Solution {
                    title: "Direct Booking Engine AI",
                    description: "Smart booking engine with price-match guarantee, loyalty rewards & WhatsApp confirmation to reduce OTA reliance.",
                    impact: ImpactTier::High,
                    time_to_implement: "3–4 weeks",
                    estimated_roi: "Save 15–22% OTA commission per booking",
                },
                Solution {
                    title: "AI Channel Manager",
                    description: "Automatically distributes inventory & rates across OTAs, own website & offline channels for max revenue.",
                    impact: ImpactTier::High,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "20% more direct bookings in 90 days",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "seasonal-demand",
            solutions: &[
                Solution {
                    title: "AI Seasonal Demand Forecaster",
                    description: "Predicts demand spikes/dips months ahead using festivals, events, weather & historical data.",
                    impact: ImpactTier::High,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "Fill 25% more rooms in low season",
                },
                Solution {
                    title: "AI Off-Season Package Builder",
                    description: "Auto-creates attractive packages combining rooms, experiences & dining for low-demand periods.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "1–2 weeks",
                    estimated_roi: "15% higher occupancy in shoulder seasons",
                },
            ],
        },
    ],
    quick_wins: &[
        Solution {
            title: "AI Review Auto-Responder",
            description: "Automatically craft personalized responses to Google, TripAdvisor & OTA reviews.",
            impact: ImpactTier::High,
            time_to_implement: "2–3 days",
            estimated_roi: "Save 10+ hours/week on review management",
        },
        Solution {
            title: "WhatsApp Check-in/Checkout Bot",
            description: "Let guests check-in, request services & checkout via WhatsApp — no front desk queue.",
            impact: ImpactTier::High,
            time_to_implement: "3–5 days",
            estimated_roi: "60% reduction in front desk wait times",
        },
    ],
};
