use crate::audit::domain::ImpactTier;
use crate::audit::knowledge::{PainPoint, PainPointSolutions, Sector, Solution};

pub(crate) const SECTOR: Sector = Sector {
    id: "dealer-distributor",
    name: "Dealer & Distributor",
    short_name: "Dealer & Dist.",
    pain_points: &[
        PainPoint {
            id: "order-management",
            label: "Order Processing & Management",
            description: Some("Orders coming in via calls, WhatsApp & email — total mess"),
        },
        PainPoint {
            id: "territory",
            label: "Territory & Beat Management",
            description: Some("Sales reps covering routes inefficiently, missing key retailers"),
        },
        PainPoint {
            id: "logistics",
            label: "Logistics & Last-Mile Delivery",
            description: Some("Delivery trucks running half-empty or missing delivery windows"),
        },
        PainPoint {
            id: "retailer-relations",
            label: "Retailer Relationship Management",
            description: Some("Retailers switching to competitors over small service gaps"),
        },
        PainPoint {
            id: "inventory",
            label: "Warehouse & Inventory",
            description: Some("Warehouse full of slow movers while fast movers go stockout"),
        },
        PainPoint {
            id: "collections",
            label: "Payments & Collections",
            description: Some("Crores stuck in overdue payments from retailers"),
        },
        PainPoint {
            id: "scheme-management",
            label: "Scheme & Discount Management",
            description: Some("Trade schemes leaking money without reaching target retailers"),
        },
        PainPoint {
            id: "market-intelligence",
            label: "Market & Competitor Intelligence",
            description: Some("Competitors launching offers and you find out too late"),
        },
    ],
    solutions: &[
        PainPointSolutions {
            pain_point: "order-management",
            solutions: &[
                Solution {
                    title: "AI Order Processing Hub",
                    description: "Automated order capture from WhatsApp, email & calls with smart validation & routing.",
                    impact: ImpactTier::High,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "50% faster order processing",
                },
                Solution {
                    title: "AI Demand Sensing Engine",
                    description: "Predicts retailer demand patterns & auto-suggests optimal order quantities to prevent stockouts.",
                    impact: ImpactTier::High,
                    time_to_implement: "3–4 weeks",
                    estimated_roi: "20% reduction in lost sales from stockouts",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "territory",
            solutions: &[
                Solution {
                    title: "AI Territory Intelligence",
                    description: "Optimizes sales territories based on potential, coverage & rep performance data.",
                    impact: ImpactTier::High,
                    time_to_implement: "3–4 weeks",
                    estimated_roi: "25% increase in territory revenue",
                },
                Solution {
                    title: "AI Beat Planning Optimizer",
                    description: "Creates optimal daily routes for sales reps covering max retailers with minimum travel time.",
                    impact: ImpactTier::High,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "30% more retailer visits per day",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "logistics",
            solutions: &[
                Solution {
                    title: "AI Route & Load Optimizer",
                    description: "Optimizes delivery routes, vehicle loading & scheduling for minimum cost.",
                    impact: ImpactTier::High,
                    time_to_implement: "3–4 weeks",
                    estimated_roi: "30% reduction in logistics costs",
                },
                Solution {
                    title: "AI Delivery Tracking & ETA",
                    description: "Real-time delivery tracking for retailers with accurate ETAs and auto-delay notifications.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "2 weeks",
                    estimated_roi: "50% fewer 'where is my delivery' calls",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "retailer-relations",
            solutions: &[
                Solution {
                    title: "AI Retailer Engagement Platform",
                    description: "Automated visit scheduling, order suggestions & personalized schemes for retailers.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "3–4 weeks",
                    estimated_roi: "35% improvement in retailer satisfaction",
                },
                Solution {
                    title: "AI Retailer Credit Scorer",
                    description: "Assesses retailer creditworthiness using payment history, order patterns & market data.",
                    impact: ImpactTier::High,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "40% reduction in bad debt",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "inventory",
            solutions: &[
                Solution {
                    title: "AI Warehouse Management",
                    description: "Real-time stock tracking, demand forecasting & automated reorder point management.",
                    impact: ImpactTier::High,
                    time_to_implement: "3–4 weeks",
                    estimated_roi: "25% reduction in carrying costs",
                },
                Solution {
                    title: "AI Expiry & Freshness Manager",
                    description: "Tracks product expiry dates, auto-prioritizes FIFO dispatch & alerts on slow-moving stock.",
                    impact: ImpactTier::High,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "80% reduction in expiry-related losses",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "collections",
            solutions: &[
                Solution {
                    title: "AI Collections Predictor",
                    description: "Predicts payment delays, auto-sends reminders & prioritizes collection efforts.",
                    impact: ImpactTier::High,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "40% improvement in collection efficiency",
                },
                Solution {
                    title: "AI Outstanding & Reconciliation Bot",
                    description: "Auto-reconciles payments, identifies discrepancies & generates outstanding reports per retailer.",
                    impact: ImpactTier::High,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "Save 20+ hours/week on accounting",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "scheme-management",
            solutions: &[
                Solution {
                    title: "AI Scheme Optimizer",
                    description: "Designs optimal trade schemes, discounts & incentive structures based on retailer segments & margins.",
                    impact: ImpactTier::High,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "20% better scheme ROI",
                },
                Solution {
                    title: "AI Scheme Compliance Tracker",
                    description: "Monitors scheme utilization, detects misuse & ensures schemes reach intended retailers.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "2 weeks",
                    estimated_roi: "30% reduction in scheme leakage",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "market-intelligence",
            solutions: &[
                Solution {
                    title: "AI Competitor Price Monitor",
                    description: "Tracks competitor pricing, new product launches & market promotions across your territory.",
                    impact: ImpactTier::High,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "Stay ahead of competitor moves in real-time",
                },
                Solution {
                    title: "AI Market Trend Analyzer",
                    description: "Identifies emerging product trends, shifting consumer preferences & new market opportunities.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "3–4 weeks",
                    estimated_roi: "First-mover advantage on new trends",
                },
            ],
        },
    ],
    quick_wins: &[
        Solution {
            title: "WhatsApp Order Bot",
            description: "Let retailers place orders via WhatsApp with AI validation and instant confirmation.",
            impact: ImpactTier::High,
            time_to_implement: "3–5 days",
            estimated_roi: "3x faster order intake from retailers",
        },
        Solution {
            title: "AI Payment Reminder System",
            description: "Automated WhatsApp payment reminders with outstanding amount, due dates & payment links.",
            impact: ImpactTier::High,
            time_to_implement: "2–3 days",
            estimated_roi: "30% faster collections on average",
        },
    ],
};
