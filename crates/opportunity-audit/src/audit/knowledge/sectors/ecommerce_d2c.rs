use crate::audit::domain::ImpactTier;
use crate::audit::knowledge::{PainPoint, PainPointSolutions, Sector, Solution};

pub(crate) const SECTOR: Sector = Sector {
    id: "ecommerce-d2c",
    name: "E-Commerce & D2C",
    short_name: "E-Com & D2C",
    pain_points: &[
        PainPoint {
            id: "conversion",
            label: "Low Conversion Rate",
            description: Some("Tons of traffic but barely anyone actually buys"),
        },
        PainPoint {
            id: "customer-support",
            label: "Customer Support Overload",
            description: Some("Support team drowning in repetitive order queries"),
        },
        PainPoint {
            id: "inventory",
            label: "Inventory & Supply Chain",
            description: Some("Dead stock piling up while bestsellers go out-of-stock"),
        },
        PainPoint {
            id: "marketing",
            label: "CAC & Marketing ROI",
            description: Some("Ad spend keeps climbing but returns keep shrinking"),
        },
        PainPoint {
            id: "returns",
            label: "Returns & Refund Management",
            description: Some("Returns eating into margins, especially wrong-size orders"),
        },
        PainPoint {
            id: "personalization",
            label: "Personalization at Scale",
            description: Some("Every customer gets the same generic shopping experience"),
        },
        PainPoint {
            id: "catalog-management",
            label: "Catalog & Content Management",
            description: Some("Writing product descriptions for hundreds of SKUs manually"),
        },
        PainPoint {
            id: "abandoned-carts",
            label: "Cart Abandonment",
            description: Some("70% of carts abandoned and no way to recover them"),
        },
    ],
    solutions: &[
        PainPointSolutions {
            pain_point: "conversion",
            solutions: &[
                Solution {
                    title: "AI-Powered Product Recommendations",
                    description: "Real-time personalized product suggestions based on browsing behavior, purchase history & trends.",
                    impact: ImpactTier::High,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "15–30% increase in AOV",
                },
                Solution {
                    title: "AI A/B Testing Engine",
                    description: "Continuously tests & optimizes product pages, CTAs, pricing display for maximum conversions.",
                    impact: ImpactTier::High,
                    time_to_implement: "2 weeks",
                    estimated_roi: "20–40% conversion improvement",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "customer-support",
            solutions: &[
                Solution {
                    title: "AI Customer Support Agent",
                    description: "Handles 80% of queries automatically — order tracking, returns, product info, complaints.",
                    impact: ImpactTier::High,
                    time_to_implement: "1–2 weeks",
                    estimated_roi: "Reduce support costs by 60%",
                },
                Solution {
                    title: "AI Voice Support Agent",
                    description: "Handles phone calls for order status, complaints & FAQs in Hindi & English with natural voice.",
                    impact: ImpactTier::High,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "Handle 500+ calls/day without extra staff",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "inventory",
            solutions: &[
                Solution {
                    title: "AI Demand Forecasting",
                    description: "Predicts demand by SKU, season, and trend to optimize stock levels across warehouses.",
                    impact: ImpactTier::High,
                    time_to_implement: "3–4 weeks",
                    estimated_roi: "30% reduction in dead stock",
                },
                Solution {
                    title: "AI Multi-Warehouse Optimizer",
                    description: "Distributes inventory across warehouses based on regional demand patterns for faster delivery.",
                    impact: ImpactTier::High,
                    time_to_implement: "3–4 weeks",
                    estimated_roi: "20% faster delivery, 15% lower logistics cost",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "marketing",
            solutions: &[
                Solution {
                    title: "AI Ad Creative Generator",
                    description: "Auto-generates ad copy, images & videos optimized for each platform and audience segment.",
                    impact: ImpactTier::High,
                    time_to_implement: "1–2 weeks",
                    estimated_roi: "2–3x ROAS improvement",
                },
                Solution {
                    title: "AI Customer Segmentation",
                    description: "Automatically segments customers by behavior, LTV & purchase patterns for targeted campaigns.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "2 weeks",
                    estimated_roi: "40% better email open rates",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "returns",
            solutions: &[
                Solution {
                    title: "AI Return Predictor",
                    description: "Predicts which orders are likely to be returned and takes proactive action to reduce returns.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "3 weeks",
                    estimated_roi: "20–30% reduction in returns",
                },
                Solution {
                    title: "AI Size & Fit Recommender",
                    description: "Uses purchase history & body measurements to recommend perfect sizes — biggest return reducer.",
                    impact: ImpactTier::High,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "35% reduction in size-related returns",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "personalization",
            solutions: &[
                Solution {
                    title: "AI Personalized Shopping Experience",
                    description: "Dynamic homepage, search results & email content tailored to each visitor's preferences.",
                    impact: ImpactTier::High,
                    time_to_implement: "3–4 weeks",
                    estimated_roi: "25% increase in customer LTV",
                },
                Solution {
                    title: "AI WhatsApp Commerce",
                    description: "Full shopping experience on WhatsApp — browse catalog, get recommendations, pay & track orders.",
                    impact: ImpactTier::High,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "New revenue channel with 3x engagement rate",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "catalog-management",
            solutions: &[
                Solution {
                    title: "AI Product Description Writer",
                    description: "Auto-generate SEO-optimized product titles, descriptions & tags for your entire catalog in minutes.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "1 week",
                    estimated_roi: "Save 50+ hours/month on content writing",
                },
                Solution {
                    title: "AI Image Enhancement & Background Removal",
                    description: "Auto-enhance product photos, remove backgrounds & generate lifestyle imagery at scale.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "1 week",
                    estimated_roi: "80% reduction in photography costs",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "abandoned-carts",
            solutions: &[
                Solution {
                    title: "Abandoned Cart Recovery AI",
                    description: "Sends personalized WhatsApp/email nudges with smart timing to recover abandoned carts.",
                    impact: ImpactTier::High,
                    time_to_implement: "1–2 weeks",
                    estimated_roi: "Recover 15–25% of abandoned carts",
                },
                Solution {
                    title: "AI Exit Intent Optimizer",
                    description: "Detects when visitors are about to leave & shows personalized offers to keep them on site.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "1 week",
                    estimated_roi: "10–15% reduction in bounce rate",
                },
            ],
        },
    ],
    quick_wins: &[
        Solution {
            title: "AI Chatbot for Instant Support",
            description: "Deploy a smart chatbot that handles product queries, order tracking & returns 24/7.",
            impact: ImpactTier::High,
            time_to_implement: "3–5 days",
            estimated_roi: "Resolve 70% queries without human intervention",
        },
        Solution {
            title: "Abandoned Cart WhatsApp Nudge",
            description: "Automated WhatsApp messages to cart abandoners with personalized product reminders & incentives.",
            impact: ImpactTier::High,
            time_to_implement: "2–3 days",
            estimated_roi: "Recover 15–25% of abandoned carts",
        },
        Solution {
            title: "AI Review & UGC Collector",
            description: "Auto-request reviews post-delivery, curate UGC content & generate social proof widgets.",
            impact: ImpactTier::Medium,
            time_to_implement: "2–3 days",
            estimated_roi: "3x more product reviews per month",
        },
    ],
};
