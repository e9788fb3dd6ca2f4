use crate::audit::domain::ImpactTier;
use crate::audit::knowledge::{PainPoint, PainPointSolutions, Sector, Solution};

pub(crate) const SECTOR: Sector = Sector {
    id: "auto-ev",
    name: "Auto & EV",
    short_name: "Auto & EV",
    pain_points: &[
        PainPoint {
            id: "sales",
            label: "Sales & Lead Conversion",
            description: Some("Leads going cold because follow-ups are too slow"),
        },
        PainPoint {
            id: "service",
            label: "Service & Maintenance",
            description: Some("Vehicles breaking down before scheduled service dates"),
        },
        PainPoint {
            id: "fleet",
            label: "Fleet Management",
            description: Some("No real-time visibility into fleet location or performance"),
        },
        PainPoint {
            id: "charging",
            label: "Charging Network Operations",
            description: Some("Chargers sitting idle or overloaded with no smart balancing"),
        },
        PainPoint {
            id: "customer-experience",
            label: "Customer Experience",
            description: Some("Buyers expect premium experience but processes feel outdated"),
        },
        PainPoint {
            id: "supply-chain",
            label: "Supply Chain & Parts",
            description: Some("Parts shortages delaying service and frustrating customers"),
        },
        PainPoint {
            id: "warranty-claims",
            label: "Warranty & Claims Management",
            description: Some("Warranty claims stuck in slow manual approval loops"),
        },
        PainPoint {
            id: "dealer-network",
            label: "Dealer Network Performance",
            description: Some("No visibility into which dealers are underperforming and why"),
        },
    ],
    solutions: &[
        PainPointSolutions {
            pain_point: "sales",
            solutions: &[
                Solution {
                    title: "AI Lead Scoring & Nurturing",
                    description: "Automatically scores leads, predicts purchase intent & triggers personalized follow-ups.",
                    impact: ImpactTier::High,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "30–50% improvement in lead conversion",
                },
                Solution {
                    title: "AI Sales Conversation Assistant",
                    description: "Real-time prompts for sales reps during calls — objection handling, pricing suggestions, competitor comparisons.",
                    impact: ImpactTier::High,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "25% higher close rates",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "service",
            solutions: &[
                Solution {
                    title: "Predictive Maintenance AI",
                    description: "Analyzes vehicle data to predict maintenance needs before breakdowns occur.",
                    impact: ImpactTier::High,
                    time_to_implement: "4–6 weeks",
                    estimated_roi: "40% reduction in unexpected breakdowns",
                },
                Solution {
                    title: "AI Service Workflow Optimizer",
                    description: "Optimizes workshop bay allocation, parts ordering & technician scheduling for maximum throughput.",
                    impact: ImpactTier::High,
                    time_to_implement: "3–4 weeks",
                    estimated_roi: "30% more vehicles serviced per day",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "fleet",
            solutions: &[
                Solution {
                    title: "AI Fleet Optimizer",
                    description: "Real-time fleet tracking, route optimization & driver behavior analysis.",
                    impact: ImpactTier::High,
                    time_to_implement: "3–4 weeks",
                    estimated_roi: "20–30% reduction in operational costs",
                },
                Solution {
                    title: "AI Driver Safety Scorer",
                    description: "Monitors driving patterns, flags risky behavior & gamifies safe driving with leaderboards.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "25% reduction in accident-related costs",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "charging",
            solutions: &[
                Solution {
                    title: "Smart Charging Network AI",
                    description: "Optimizes charging station placement, pricing & load balancing based on demand patterns.",
                    impact: ImpactTier::High,
                    time_to_implement: "4–6 weeks",
                    estimated_roi: "35% better utilization rates",
                },
                Solution {
                    title: "AI Energy Grid Optimizer",
                    description: "Balances charging loads with grid capacity, solar input & time-of-use pricing for minimal cost.",
                    impact: ImpactTier::High,
                    time_to_implement: "4–6 weeks",
                    estimated_roi: "20–30% reduction in energy costs",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "customer-experience",
            solutions: &[
                Solution {
                    title: "AI Virtual Showroom",
                    description: "Interactive AI assistant for virtual test drives, configuration & personalized recommendations.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "3–4 weeks",
                    estimated_roi: "2x showroom engagement",
                },
                Solution {
                    title: "AI After-Sales Engagement",
                    description: "Automated service reminders, insurance renewals, accessory recommendations based on vehicle & usage.",
                    impact: ImpactTier::High,
                    time_to_implement: "2 weeks",
                    estimated_roi: "40% increase in after-sales revenue",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "supply-chain",
            solutions: &[
                Solution {
                    title: "AI Supply Chain Predictor",
                    description: "Forecasts parts demand, optimizes inventory & identifies supply chain risks early.",
                    impact: ImpactTier::High,
                    time_to_implement: "4–6 weeks",
                    estimated_roi: "25% reduction in parts inventory cost",
                },
                Solution {
                    title: "AI Vendor Performance Tracker",
                    description: "Rates suppliers on delivery time, quality & pricing — auto-suggests better alternatives.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "15% improvement in procurement efficiency",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "warranty-claims",
            solutions: &[
                Solution {
                    title: "AI Warranty Claims Processor",
                    description: "Auto-validates warranty claims, detects fraudulent patterns & speeds up approval workflows.",
                    impact: ImpactTier::High,
                    time_to_implement: "3–4 weeks",
                    estimated_roi: "60% faster claim processing, 20% fraud reduction",
                },
                Solution {
                    title: "AI Warranty Analytics Dashboard",
                    description: "Identifies recurring defect patterns across models, regions & production batches for quality control.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "Detect quality issues 3x faster",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "dealer-network",
            solutions: &[
                Solution {
                    title: "AI Dealer Performance Scorer",
                    description: "Tracks dealer KPIs in real-time — sales targets, service quality, customer satisfaction & compliance.",
                    impact: ImpactTier::High,
                    time_to_implement: "3–4 weeks",
                    estimated_roi: "20% improvement in underperforming dealers",
                },
                Solution {
                    title: "AI Dealer Training & Enablement",
                    description: "Personalized training modules for each dealer based on performance gaps & product knowledge needs.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "30% faster new product launch readiness",
                },
            ],
        },
    ],
    quick_wins: &[
        Solution {
            title: "AI Service Booking Bot",
            description: "WhatsApp/web bot for instant service appointments, status updates & reminders.",
            impact: ImpactTier::High,
            time_to_implement: "3–5 days",
            estimated_roi: "50% reduction in booking calls",
        },
        Solution {
            title: "AI Test Drive Scheduler",
            description: "Automated test drive scheduling with location preference, vehicle selection & instant confirmation.",
            impact: ImpactTier::Medium,
            time_to_implement: "2–3 days",
            estimated_roi: "3x more test drives booked",
        },
    ],
};
