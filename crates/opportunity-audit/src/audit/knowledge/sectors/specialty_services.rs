use crate::audit::domain::ImpactTier;
use crate::audit::knowledge::{PainPoint, PainPointSolutions, Sector, Solution};

pub(crate) const SECTOR: Sector = Sector {
    id: "specialty-services",
    name: "Specialty Services",
    short_name: "Services",
    pain_points: &[
        PainPoint {
            id: "lead-gen",
            label: "Lead Generation & Qualification",
            description: Some("Spending hours on leads that never convert to clients"),
        },
        PainPoint {
            id: "client-onboarding",
            label: "Client Onboarding",
            description: Some("New client setup takes weeks of back-and-forth emails"),
        },
        PainPoint {
            id: "operations",
            label: "Operations & Workflow",
            description: Some("Team stuck doing repetitive tasks instead of real work"),
        },
        PainPoint {
            id: "compliance",
            label: "Compliance & Documentation",
            description: Some("Regulatory deadlines and audit prep causing constant stress"),
        },
        PainPoint {
            id: "customer-support",
            label: "Customer Support",
            description: Some("Same questions asked a hundred times draining your team"),
        },
        PainPoint {
            id: "scaling",
            label: "Scaling Without Hiring",
            description: Some("Want to grow revenue without proportionally growing headcount"),
        },
        PainPoint {
            id: "proposal-management",
            label: "Proposals & Estimates",
            description: Some("Writing custom proposals from scratch for every prospect"),
        },
        PainPoint {
            id: "talent-management",
            label: "Talent & Resource Management",
            description: Some("Wrong people on wrong projects, no capacity visibility"),
        },
    ],
    solutions: &[
        PainPointSolutions {
            pain_point: "lead-gen",
            solutions: &[
                Solution {
                    title: "AI Lead Gen & Qualification",
                    description: "Automated lead generation from multiple channels with AI scoring and prioritization.",
                    impact: ImpactTier::High,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "3x qualified leads per month",
                },
                Solution {
                    title: "AI Cold Outreach Engine",
                    description: "Personalized email & LinkedIn campaigns at scale with AI-crafted messages per prospect profile.",
                    impact: ImpactTier::High,
                    time_to_implement: "1–2 weeks",
                    estimated_roi: "5x higher response rates than manual outreach",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "client-onboarding",
            solutions: &[
                Solution {
                    title: "AI-Powered Client Onboarding",
                    description: "Automated document collection, KYC verification & personalized onboarding workflows.",
                    impact: ImpactTier::High,
                    time_to_implement: "3–4 weeks",
                    estimated_roi: "70% faster onboarding",
                },
                Solution {
                    title: "AI Contract & Proposal Generator",
                    description: "Auto-generates customized proposals, contracts & SLAs from templates based on client requirements.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "2 weeks",
                    estimated_roi: "80% faster proposal turnaround",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "operations",
            solutions: &[
                Solution {
                    title: "AI Workflow Automation",
                    description: "Identifies repetitive tasks and automates them — data entry, reporting, email handling.",
                    impact: ImpactTier::High,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "40% reduction in manual work",
                },
                Solution {
                    title: "AI Meeting Intelligence",
                    description: "Auto-records, transcribes & extracts action items from client meetings. Sends follow-up summaries.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "1 week",
                    estimated_roi: "Save 5+ hours/week on meeting admin",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "compliance",
            solutions: &[
                Solution {
                    title: "AI Compliance Monitor",
                    description: "Auto-tracks regulatory requirements, generates reports & alerts on compliance deadlines.",
                    impact: ImpactTier::High,
                    time_to_implement: "4–6 weeks",
                    estimated_roi: "90% reduction in compliance risks",
                },
                Solution {
                    title: "AI Audit Trail Generator",
                    description: "Maintains complete audit trails for every transaction, decision & client interaction automatically.",
                    impact: ImpactTier::High,
                    time_to_implement: "3–4 weeks",
                    estimated_roi: "100% audit readiness at all times",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "customer-support",
            solutions: &[
                Solution {
                    title: "AI Multi-Channel Support",
                    description: "Unified AI support across WhatsApp, email, phone & chat — handles 80% queries automatically.",
                    impact: ImpactTier::High,
                    time_to_implement: "2 weeks",
                    estimated_roi: "60% reduction in support costs",
                },
                Solution {
                    title: "AI Ticket Prioritizer & Router",
                    description: "Auto-categorizes support tickets by urgency, topic & expertise needed — routes to right person.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "1–2 weeks",
                    estimated_roi: "40% faster ticket resolution",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "scaling",
            solutions: &[
                Solution {
                    title: "AI Process Optimizer",
                    description: "Analyzes operational bottlenecks and suggests automation opportunities for scaling.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "3–4 weeks",
                    estimated_roi: "2x throughput without hiring",
                },
                Solution {
                    title: "AI Revenue Forecaster",
                    description: "Predicts monthly revenue, identifies at-risk accounts & suggests upsell opportunities.",
                    impact: ImpactTier::High,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "15% improvement in revenue predictability",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "proposal-management",
            solutions: &[
                Solution {
                    title: "AI Proposal Builder",
                    description: "Auto-generates professional proposals with pricing, scope & timelines from brief client conversations.",
                    impact: ImpactTier::High,
                    time_to_implement: "2 weeks",
                    estimated_roi: "5x faster proposal creation",
                },
                Solution {
                    title: "AI Estimate Accuracy Engine",
                    description: "Uses historical project data to provide accurate cost & time estimates for new projects.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "30% more accurate project estimates",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "talent-management",
            solutions: &[
                Solution {
                    title: "AI Resource Allocation Optimizer",
                    description: "Matches team members to projects based on skills, availability, workload & past performance.",
                    impact: ImpactTier::High,
                    time_to_implement: "3–4 weeks",
                    estimated_roi: "25% better resource utilization",
                },
                Solution {
                    title: "AI Skills Gap Analyzer",
                    description: "Identifies skill gaps in your team and recommends targeted training or hiring needs.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "2 weeks",
                    estimated_roi: "30% reduction in project delays from skill gaps",
                },
            ],
        },
    ],
    quick_wins: &[
        Solution {
            title: "AI Email & Document Processor",
            description: "Auto-categorize emails, extract key data from documents & route to right teams.",
            impact: ImpactTier::High,
            time_to_implement: "3–5 days",
            estimated_roi: "Save 15+ hours/week on admin",
        },
        Solution {
            title: "AI Invoice & Expense Processor",
            description: "Scan invoices, extract data, match to POs & auto-enter into accounting software.",
            impact: ImpactTier::High,
            time_to_implement: "2–3 days",
            estimated_roi: "90% reduction in manual data entry",
        },
    ],
};
