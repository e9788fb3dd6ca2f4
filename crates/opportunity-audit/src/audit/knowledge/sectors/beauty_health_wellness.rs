use crate::audit::domain::ImpactTier;
use crate::audit::knowledge::{PainPoint, PainPointSolutions, Sector, Solution};

pub(crate) const SECTOR: Sector = Sector {
    id: "beauty-health-wellness",
    name: "Beauty, Health & Wellness",
    short_name: "Beauty & Wellness",
    pain_points: &[
        PainPoint {
            id: "appointments",
            label: "Appointment & No-Show Management",
            description: Some("Clients booking and not showing up, wasting prime slots"),
        },
        PainPoint {
            id: "client-retention",
            label: "Client Retention & Loyalty",
            description: Some("Clients try you once then switch to competitors"),
        },
        PainPoint {
            id: "staff-utilization",
            label: "Staff Utilization & Performance",
            description: Some("Some staff overbooked while others sit idle all day"),
        },
        PainPoint {
            id: "marketing",
            label: "Marketing & Social Media",
            description: Some("No time to post content despite needing social presence"),
        },
        PainPoint {
            id: "inventory",
            label: "Product Inventory & Reordering",
            description: Some("Running out of products mid-service or overstocking shelves"),
        },
        PainPoint {
            id: "patient-management",
            label: "Patient/Client Records",
            description: Some("Client history scattered across notebooks and spreadsheets"),
        },
        PainPoint {
            id: "upselling",
            label: "Upselling & Cross-Selling",
            description: Some("Missing easy upsell opportunities at the chair or bed"),
        },
        PainPoint {
            id: "multi-location",
            label: "Multi-Location Consistency",
            description: Some("Quality drops the moment you're not personally present"),
        },
    ],
    solutions: &[
        PainPointSolutions {
            pain_point: "appointments",
            solutions: &[
                Solution {
                    title: "AI Appointment Optimizer",
                    description: "Smart scheduling that minimizes gaps, handles cancellations & auto-fills slots from waitlist.",
                    impact: ImpactTier::High,
                    time_to_implement: "1–2 weeks",
                    estimated_roi: "30% increase in daily appointments",
                },
                Solution {
                    title: "No-Show Predictor & Auto-Filler",
                    description: "Predicts likely no-shows and auto-sends confirmations or fills slots from waitlist 24hrs ahead.",
                    impact: ImpactTier::High,
                    time_to_implement: "1–2 weeks",
                    estimated_roi: "Recover 80% of no-show revenue",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "client-retention",
            solutions: &[
                Solution {
                    title: "AI Client Engagement Engine",
                    description: "Automated personalized follow-ups, birthday offers & re-engagement campaigns based on visit patterns.",
                    impact: ImpactTier::High,
                    time_to_implement: "2 weeks",
                    estimated_roi: "40% increase in repeat visits",
                },
                Solution {
                    title: "AI Membership & Loyalty Builder",
                    description: "Creates smart loyalty programs with tiered rewards, referral bonuses & personalized offers.",
                    impact: ImpactTier::High,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "50% increase in membership sign-ups",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "staff-utilization",
            solutions: &[
                Solution {
                    title: "AI Staff Performance Tracker",
                    description: "Analyzes booking patterns per staff member, optimizes schedules & identifies training needs.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "20% better staff utilization",
                },
                Solution {
                    title: "AI Commission & Incentive Calculator",
                    description: "Auto-calculates commissions based on services, products sold & client ratings — motivates teams.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "1–2 weeks",
                    estimated_roi: "15% improvement in upselling",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "marketing",
            solutions: &[
                Solution {
                    title: "AI Social Content Creator",
                    description: "Auto-generates before/after posts, reels, stories & hashtag strategies for beauty/wellness brands.",
                    impact: ImpactTier::High,
                    time_to_implement: "1 week",
                    estimated_roi: "4x social media engagement",
                },
                Solution {
                    title: "AI Local SEO & Google Business Optimizer",
                    description: "Optimizes Google Business profile, auto-posts updates & manages local SEO for area visibility.",
                    impact: ImpactTier::High,
                    time_to_implement: "1 week",
                    estimated_roi: "2x walk-in traffic from Google searches",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "inventory",
            solutions: &[
                Solution {
                    title: "Smart Product Reordering",
                    description: "AI tracks product usage per service, predicts reorder points & auto-generates POs.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "2 weeks",
                    estimated_roi: "20% reduction in product wastage",
                },
                Solution {
                    title: "AI Retail Product Recommender",
                    description: "Suggests retail products to clients based on their treatments — auto-creates upsell opportunities.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "1–2 weeks",
                    estimated_roi: "25% increase in product sales per visit",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "patient-management",
            solutions: &[
                Solution {
                    title: "AI Health Records Assistant",
                    description: "Smart patient/client records with AI-powered insights, treatment suggestions & history analysis.",
                    impact: ImpactTier::High,
                    time_to_implement: "3–4 weeks",
                    estimated_roi: "50% faster consultation prep",
                },
                Solution {
                    title: "AI Skin/Hair Analysis Tool",
                    description: "Photo-based AI analysis that recommends treatments and tracks progress over visits.",
                    impact: ImpactTier::High,
                    time_to_implement: "3–4 weeks",
                    estimated_roi: "30% increase in treatment plan conversions",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "upselling",
            solutions: &[
                Solution {
                    title: "AI Service Bundle Recommender",
                    description: "Suggests optimal service combinations & add-ons based on client history, season & trends.",
                    impact: ImpactTier::High,
                    time_to_implement: "2 weeks",
                    estimated_roi: "20% increase in average ticket size",
                },
                Solution {
                    title: "AI Post-Visit Product Nudges",
                    description: "Auto-sends product recommendations via WhatsApp after visits based on services availed.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "1 week",
                    estimated_roi: "15% additional product revenue",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "multi-location",
            solutions: &[
                Solution {
                    title: "AI Multi-Branch Dashboard",
                    description: "Centralized performance tracking, inventory sync & staff management across all locations.",
                    impact: ImpactTier::High,
                    time_to_implement: "4–6 weeks",
                    estimated_roi: "Consistent quality across all branches",
                },
                Solution {
                    title: "AI Standard Operating Procedures",
                    description: "Auto-generates & monitors SOP compliance across locations with real-time deviation alerts.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "90% SOP compliance across all locations",
                },
            ],
        },
    ],
    quick_wins: &[
        Solution {
            title: "WhatsApp Booking Bot",
            description: "Let clients book, reschedule & get reminders via WhatsApp AI assistant.",
            impact: ImpactTier::High,
            time_to_implement: "3–5 days",
            estimated_roi: "70% reduction in booking calls",
        },
        Solution {
            title: "AI Review & Testimonial Collector",
            description: "Auto-sends review requests post-visit, collects testimonials & generates social proof content.",
            impact: ImpactTier::Medium,
            time_to_implement: "1–2 days",
            estimated_roi: "3x more Google reviews per month",
        },
    ],
};
