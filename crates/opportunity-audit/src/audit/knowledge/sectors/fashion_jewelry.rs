use crate::audit::domain::ImpactTier;
use crate::audit::knowledge::{PainPoint, PainPointSolutions, Sector, Solution};

pub(crate) const SECTOR: Sector = Sector {
    id: "fashion-jewelry",
    name: "Fashion & Jewelry",
    short_name: "Fashion & Jewelry",
    pain_points: &[
        PainPoint {
            id: "inventory",
            label: "Inventory & Trend Forecasting",
            description: Some("Last season's stock sitting unsold, wrong trends stocked"),
        },
        PainPoint {
            id: "customer-experience",
            label: "Customer Experience & Styling",
            description: Some("Customers browsing endlessly but leaving without buying"),
        },
        PainPoint {
            id: "online-presence",
            label: "Online Presence & Marketplace",
            description: Some("Listings buried on Amazon and Myntra with poor visibility"),
        },
        PainPoint {
            id: "design",
            label: "Design & Collections",
            description: Some("Design cycles too slow to keep up with fast trends"),
        },
        PainPoint {
            id: "pricing",
            label: "Pricing & Margin Strategy",
            description: Some("Gold prices fluctuating daily and margins getting squeezed"),
        },
        PainPoint {
            id: "marketing",
            label: "Brand Marketing & Influencers",
            description: Some("Paying influencers with no idea if it drives sales"),
        },
        PainPoint {
            id: "counterfeiting",
            label: "Counterfeiting & Authenticity",
            description: Some("Fake copies of your designs popping up everywhere"),
        },
        PainPoint {
            id: "festive-planning",
            label: "Festive & Wedding Season Planning",
            description: Some("Scrambling every Diwali and wedding season unprepared"),
        },
    ],
    solutions: &[
        PainPointSolutions {
            pain_point: "inventory",
            solutions: &[
                Solution {
                    title: "AI Trend Forecasting",
                    description: "Predicts upcoming fashion trends from social media, runway data & market signals.",
                    impact: ImpactTier::High,
                    time_to_implement: "3–4 weeks",
                    estimated_roi: "30% reduction in unsold inventory",
                },
                Solution {
                    title: "AI Stock Assortment Optimizer",
                    description: "Recommends optimal product mix per store location based on local demand, demographics & seasons.",
                    impact: ImpactTier::High,
                    time_to_implement: "3–4 weeks",
                    estimated_roi: "20% improvement in sell-through rates",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "customer-experience",
            solutions: &[
                Solution {
                    title: "AI Virtual Try-On",
                    description: "Let customers virtually try jewelry/accessories using AR & AI on your app/website.",
                    impact: ImpactTier::High,
                    time_to_implement: "4–6 weeks",
                    estimated_roi: "40% increase in online conversions",
                },
                Solution {
                    title: "AI Personal Stylist",
                    description: "Recommends products based on customer style preferences, body type & occasion.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "3–4 weeks",
                    estimated_roi: "25% increase in basket size",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "online-presence",
            solutions: &[
                Solution {
                    title: "AI Product Photography",
                    description: "Auto-generates professional product photos with AI backgrounds, models & styling.",
                    impact: ImpactTier::High,
                    time_to_implement: "1–2 weeks",
                    estimated_roi: "80% reduction in photography costs",
                },
                Solution {
                    title: "AI Marketplace Optimizer",
                    description: "Optimizes product listings across Amazon, Myntra, Nykaa with AI-tuned titles, images & keywords.",
                    impact: ImpactTier::High,
                    time_to_implement: "1–2 weeks",
                    estimated_roi: "30% increase in marketplace sales",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "design",
            solutions: &[
                Solution {
                    title: "AI Design Assistant",
                    description: "Generates design concepts, color palettes & pattern suggestions based on trend data.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "3–4 weeks",
                    estimated_roi: "5x faster design iteration",
                },
                Solution {
                    title: "AI Collection Planner",
                    description: "Plans collections aligned with upcoming trends, festivals & regional preferences across India.",
                    impact: ImpactTier::High,
                    time_to_implement: "3–4 weeks",
                    estimated_roi: "25% higher collection sell-through",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "pricing",
            solutions: &[
                Solution {
                    title: "AI Dynamic Pricing",
                    description: "Optimizes pricing based on material costs, competitor prices, demand & customer segments.",
                    impact: ImpactTier::High,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "15–20% margin improvement",
                },
                Solution {
                    title: "AI Gold/Material Price Tracker",
                    description: "Real-time material cost tracking with auto-adjusted retail pricing and margin protection alerts.",
                    impact: ImpactTier::High,
                    time_to_implement: "1–2 weeks",
                    estimated_roi: "Protect margins on 100% of inventory",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "marketing",
            solutions: &[
                Solution {
                    title: "AI Influencer Matching",
                    description: "Identifies perfect influencers for your brand based on audience match, engagement & ROI prediction.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "2 weeks",
                    estimated_roi: "3x better influencer campaign ROI",
                },
                Solution {
                    title: "AI Festive Campaign Manager",
                    description: "Auto-creates marketing campaigns for Diwali, Karva Chauth, wedding season & other festivals.",
                    impact: ImpactTier::High,
                    time_to_implement: "1–2 weeks",
                    estimated_roi: "40% increase in festive season sales",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "counterfeiting",
            solutions: &[
                Solution {
                    title: "AI Authenticity Verification",
                    description: "Blockchain + AI system for product authentication — customers scan QR to verify genuineness.",
                    impact: ImpactTier::High,
                    time_to_implement: "4–6 weeks",
                    estimated_roi: "Eliminate counterfeit concerns, build trust",
                },
                Solution {
                    title: "AI Online Counterfeit Detector",
                    description: "Scans marketplaces for counterfeit listings of your products & auto-files takedown requests.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "Protect brand value & prevent revenue leakage",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "festive-planning",
            solutions: &[
                Solution {
                    title: "AI Festive Demand Forecaster",
                    description: "Predicts product demand for Diwali, Akshaya Tritiya, wedding season with granular SKU-level forecasts.",
                    impact: ImpactTier::High,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "25% better inventory readiness for peak seasons",
                },
                Solution {
                    title: "AI Wedding Season Planner",
                    description: "Auto-creates curated wedding collections, personalized lookbooks & targeted campaign schedules.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "2 weeks",
                    estimated_roi: "35% higher wedding season conversion",
                },
            ],
        },
    ],
    quick_wins: &[
        Solution {
            title: "AI Catalog Generator",
            description: "Auto-create digital catalogs with professional product descriptions & SEO tags.",
            impact: ImpactTier::High,
            time_to_implement: "3–5 days",
            estimated_roi: "Save 20+ hours/month on catalog work",
        },
        Solution {
            title: "WhatsApp Catalog & Order Bot",
            description: "Share product catalog on WhatsApp, take orders & send invoices — all automated.",
            impact: ImpactTier::High,
            time_to_implement: "3–5 days",
            estimated_roi: "New sales channel with 50+ orders/week",
        },
    ],
};
