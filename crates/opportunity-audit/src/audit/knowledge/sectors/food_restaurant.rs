use crate::audit::domain::ImpactTier;
use crate::audit::knowledge::{PainPoint, PainPointSolutions, Sector, Solution};

pub(crate) const SECTOR: Sector = Sector {
    id: "food-restaurant",
    name: "Food & Restaurant",
    short_name: "Food & QSR",
    pain_points: &[
        PainPoint {
            id: "inventory",
            label: "Inventory & Wastage",
            description: Some("Overstocking, spoilage & manual stock tracking eating profits"),
        },
        PainPoint {
            id: "orders",
            label: "Order Management",
            description: Some("Juggling dine-in, delivery & takeout orders manually"),
        },
        PainPoint {
            id: "customer-retention",
            label: "Customer Retention",
            description: Some("Customers visit once and never come back"),
        },
        PainPoint {
            id: "staff",
            label: "Staff Scheduling & Training",
            description: Some("Constant understaffing during rush, overstaffing when slow"),
        },
        PainPoint {
            id: "delivery",
            label: "Delivery Operations",
            description: Some("Late deliveries, wrong orders & angry customers"),
        },
        PainPoint {
            id: "marketing",
            label: "Marketing & Local Reach",
            description: Some("Struggling to get noticed by nearby hungry customers"),
        },
        PainPoint {
            id: "menu-engineering",
            label: "Menu Engineering & Pricing",
            description: Some("No clue which menu items actually make money"),
        },
        PainPoint {
            id: "hygiene-compliance",
            label: "Hygiene & Compliance",
            description: Some("FSSAI paperwork piling up, audit anxiety every quarter"),
        },
        PainPoint {
            id: "aggregator-dependency",
            label: "Aggregator Dependency",
            description: Some("Zomato & Swiggy eating 25%+ of every order"),
        },
    ],
    solutions: &[
        PainPointSolutions {
            pain_point: "inventory",
            solutions: &[
                Solution {
                    title: "AI Demand Forecasting",
                    description: "Predict daily demand per menu item using historical sales, weather, events & trends. Reduces food waste by 30–40%.",
                    impact: ImpactTier::High,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "Save ₹50K–2L/month on wastage",
                },
                Solution {
                    title: "Smart Auto-Reordering",
                    description: "AI monitors stock levels in real-time and auto-generates purchase orders before items run out.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "1–2 weeks",
                    estimated_roi: "15–20% reduction in stockouts",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "orders",
            solutions: &[
                Solution {
                    title: "AI Order Processing Bot",
                    description: "WhatsApp/Phone AI bot that takes orders, handles modifications, and routes to kitchen display. Works 24/7.",
                    impact: ImpactTier::High,
                    time_to_implement: "1–2 weeks",
                    estimated_roi: "Handle 3x more orders with same staff",
                },
                Solution {
                    title: "Smart Kitchen Display System",
                    description: "AI-prioritized order queue that optimizes cooking sequence for faster delivery times.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "1 week",
                    estimated_roi: "25% faster order completion",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "customer-retention",
            solutions: &[
                Solution {
                    title: "AI Loyalty & Personalization Engine",
                    description: "Automatically segments customers, sends personalized offers based on order history & preferences.",
                    impact: ImpactTier::High,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "20–35% increase in repeat orders",
                },
                Solution {
                    title: "Review & Feedback AI",
                    description: "Automatically responds to reviews, analyzes sentiment trends, and alerts on negative patterns.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "1 week",
                    estimated_roi: "0.5–1 star rating improvement",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "staff",
            solutions: &[
                Solution {
                    title: "AI Staff Scheduler",
                    description: "Predicts busy hours using historical data and auto-creates optimal shift schedules.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "1–2 weeks",
                    estimated_roi: "20% reduction in labor costs",
                },
                Solution {
                    title: "AI Performance & Training Tracker",
                    description: "Monitors staff performance metrics, identifies skill gaps, and recommends targeted training modules.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "15% improvement in service speed",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "delivery",
            solutions: &[
                Solution {
                    title: "AI Route Optimization",
                    description: "Optimizes delivery routes in real-time considering traffic, orders & driver locations.",
                    impact: ImpactTier::High,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "30% reduction in delivery time",
                },
                Solution {
                    title: "Smart Delivery ETA Predictor",
                    description: "Gives customers accurate delivery ETAs using AI that factors in kitchen load, traffic & distance.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "1–2 weeks",
                    estimated_roi: "40% fewer 'where is my order' calls",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "marketing",
            solutions: &[
                Solution {
                    title: "AI Social Media Manager",
                    description: "Auto-generates food photography posts, captions, stories & reels schedule based on trending content.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "1 week",
                    estimated_roi: "3x social media engagement",
                },
                Solution {
                    title: "Hyper-Local Ad Targeting",
                    description: "AI creates and optimizes ads targeting people within 5km radius based on time, weather & events.",
                    impact: ImpactTier::High,
                    time_to_implement: "1 week",
                    estimated_roi: "2–4x return on ad spend",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "menu-engineering",
            solutions: &[
                Solution {
                    title: "AI Menu Pricing Optimizer",
                    description: "Analyze competitor pricing, ingredient costs & customer preferences to set optimal prices for each item.",
                    impact: ImpactTier::High,
                    time_to_implement: "1–2 weeks",
                    estimated_roi: "8–15% margin improvement",
                },
                Solution {
                    title: "AI Menu Mix Analyzer",
                    description: "Identifies stars, puzzles, plow horses & dogs in your menu — suggests removals, promotions & repositioning.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "1 week",
                    estimated_roi: "12% increase in average order value",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "hygiene-compliance",
            solutions: &[
                Solution {
                    title: "AI FSSAI Compliance Tracker",
                    description: "Automated checklist management, temperature logging, expiry alerts & FSSAI documentation.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "2 weeks",
                    estimated_roi: "100% audit readiness, zero penalty risk",
                },
                Solution {
                    title: "Smart Kitchen Monitoring",
                    description: "IoT + AI temperature sensors, hygiene cameras & automated compliance reporting for food safety.",
                    impact: ImpactTier::High,
                    time_to_implement: "3–4 weeks",
                    estimated_roi: "Prevent costly health violations",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "aggregator-dependency",
            solutions: &[
                Solution {
                    title: "Direct Ordering Channel Builder",
                    description: "Build your own ordering website + WhatsApp bot to reduce Zomato/Swiggy commission dependency.",
                    impact: ImpactTier::High,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "Save 15–25% on commission per order",
                },
                Solution {
                    title: "AI Aggregator Performance Analyzer",
                    description: "Track performance across aggregators — optimize menu placement, pricing & promotions per platform.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "1–2 weeks",
                    estimated_roi: "20% better aggregator ROI",
                },
            ],
        },
    ],
    quick_wins: &[
        Solution {
            title: "WhatsApp AI Chatbot",
            description: "Set up a WhatsApp chatbot for instant order taking, menu sharing & reservation booking.",
            impact: ImpactTier::High,
            time_to_implement: "3–5 days",
            estimated_roi: "Handle 50+ queries/day automatically",
        },
        Solution {
            title: "Google Review Auto-Responder",
            description: "AI responds to every Google & Zomato review within minutes — personalized, on-brand, 24/7.",
            impact: ImpactTier::Medium,
            time_to_implement: "1–2 days",
            estimated_roi: "Improve rating by 0.3–0.5 stars in 30 days",
        },
        Solution {
            title: "Smart Reorder Alert System",
            description: "Automated stock alerts via WhatsApp when any ingredient drops below threshold — never run out of key items.",
            impact: ImpactTier::Medium,
            time_to_implement: "2–3 days",
            estimated_roi: "Zero stockout incidents per month",
        },
    ],
};
