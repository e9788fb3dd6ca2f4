use crate::audit::domain::ImpactTier;
use crate::audit::knowledge::{PainPoint, PainPointSolutions, Sector, Solution};

pub(crate) const SECTOR: Sector = Sector {
    id: "education-edtech",
    name: "Education & EdTech",
    short_name: "Education",
    pain_points: &[
        PainPoint {
            id: "enrollment",
            label: "Student Enrollment & Admissions",
            description: Some("Inquiries pouring in but conversion to enrollment is low"),
        },
        PainPoint {
            id: "engagement",
            label: "Student Engagement & Retention",
            description: Some("Students losing interest and dropping out mid-course"),
        },
        PainPoint {
            id: "content",
            label: "Content Creation & Curriculum",
            description: Some("Teachers spending nights creating quizzes and study material"),
        },
        PainPoint {
            id: "assessment",
            label: "Assessment & Grading",
            description: Some("Grading hundreds of papers manually every single week"),
        },
        PainPoint {
            id: "operations",
            label: "Administrative Operations",
            description: Some("Admin staff buried in timetables, attendance and paperwork"),
        },
        PainPoint {
            id: "parent-comm",
            label: "Parent Communication",
            description: Some("Parents calling daily asking about progress and fees"),
        },
        PainPoint {
            id: "fee-collection",
            label: "Fee Collection & Defaults",
            description: Some("Chasing parents for overdue fees every single month"),
        },
        PainPoint {
            id: "placement-outcomes",
            label: "Placement & Outcome Tracking",
            description: Some("No clear data on whether graduates actually got placed"),
        },
    ],
    solutions: &[
        PainPointSolutions {
            pain_point: "enrollment",
            solutions: &[
                Solution {
                    title: "AI Lead Nurturing for Admissions",
                    description: "Automated inquiry handling, follow-ups & personalized course recommendations based on student profile.",
                    impact: ImpactTier::High,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "40% increase in enrollment conversion",
                },
                Solution {
                    title: "AI Enrollment Funnel Optimizer",
                    description: "Tracks every touchpoint from inquiry to enrollment, identifies drop-off points & auto-fixes them.",
                    impact: ImpactTier::High,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "25% more enrollments from same leads",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "engagement",
            solutions: &[
                Solution {
                    title: "AI Adaptive Learning Path",
                    description: "Personalized learning journeys that adapt difficulty, content & pace based on student performance.",
                    impact: ImpactTier::High,
                    time_to_implement: "4–6 weeks",
                    estimated_roi: "50% improvement in completion rates",
                },
                Solution {
                    title: "AI Student Risk Predictor",
                    description: "Identifies students at risk of dropping out based on attendance, grades & engagement patterns.",
                    impact: ImpactTier::High,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "30% reduction in student dropout rates",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "content",
            solutions: &[
                Solution {
                    title: "AI Course Content Generator",
                    description: "Auto-generates quizzes, summaries, practice problems & study materials from curriculum.",
                    impact: ImpactTier::High,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "80% faster content creation",
                },
                Solution {
                    title: "AI Video Lecture Enhancer",
                    description: "Auto-generates subtitles, chapter markers, searchable transcripts & key takeaway summaries from lectures.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "1–2 weeks",
                    estimated_roi: "40% improvement in student video engagement",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "assessment",
            solutions: &[
                Solution {
                    title: "AI Auto-Grading System",
                    description: "Instantly grades assignments, provides detailed feedback & identifies learning gaps.",
                    impact: ImpactTier::High,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "90% reduction in grading time",
                },
                Solution {
                    title: "AI Plagiarism & Quality Checker",
                    description: "Detects plagiarism, AI-generated content & assesses assignment quality with detailed feedback.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "1–2 weeks",
                    estimated_roi: "Ensure academic integrity at scale",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "operations",
            solutions: &[
                Solution {
                    title: "AI Admin Assistant",
                    description: "Automates timetabling, attendance tracking, fee reminders & report generation.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "3–4 weeks",
                    estimated_roi: "60% reduction in admin work",
                },
                Solution {
                    title: "AI Fee Collection Optimizer",
                    description: "Smart payment reminders, flexible payment plan suggestions & automated follow-ups for pending fees.",
                    impact: ImpactTier::High,
                    time_to_implement: "1–2 weeks",
                    estimated_roi: "30% improvement in on-time fee collection",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "parent-comm",
            solutions: &[
                Solution {
                    title: "AI Parent Communication Hub",
                    description: "Automated progress reports, attendance alerts & personalized parent updates via WhatsApp.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "1–2 weeks",
                    estimated_roi: "3x parent engagement improvement",
                },
                Solution {
                    title: "AI Parent-Teacher Meeting Scheduler",
                    description: "Auto-schedules PTMs based on availability, sends prep summaries & follow-up action items.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "1 week",
                    estimated_roi: "2x PTM attendance rates",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "fee-collection",
            solutions: &[
                Solution {
                    title: "AI Fee Default Predictor",
                    description: "Predicts students at risk of fee default based on payment history, engagement & financial signals.",
                    impact: ImpactTier::High,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "25% reduction in fee defaults",
                },
                Solution {
                    title: "AI Flexible Payment Plan Engine",
                    description: "Auto-creates personalized EMI plans, scholarship suggestions & financial aid matching for at-risk students.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "2 weeks",
                    estimated_roi: "15% improvement in enrollment retention",
                },
            ],
        },
        PainPointSolutions {
            pain_point: "placement-outcomes",
            solutions: &[
                Solution {
                    title: "AI Placement Matching Engine",
                    description: "Matches students to jobs/internships based on skills, grades, preferences & company requirements.",
                    impact: ImpactTier::High,
                    time_to_implement: "3–4 weeks",
                    estimated_roi: "40% higher placement rates",
                },
                Solution {
                    title: "AI Outcome Dashboard",
                    description: "Real-time tracking of graduate outcomes — placement rates, salary data, employer feedback for accreditation.",
                    impact: ImpactTier::Medium,
                    time_to_implement: "2–3 weeks",
                    estimated_roi: "Better accreditation scores & institutional ranking",
                },
            ],
        },
    ],
    quick_wins: &[
        Solution {
            title: "AI Inquiry Chatbot",
            description: "24/7 chatbot answering course queries, fee structures & admission process.",
            impact: ImpactTier::High,
            time_to_implement: "3–5 days",
            estimated_roi: "Handle 100+ inquiries/day automatically",
        },
        Solution {
            title: "AI Attendance Tracker",
            description: "Automated attendance via face recognition or QR codes with instant parent notifications.",
            impact: ImpactTier::Medium,
            time_to_implement: "3–5 days",
            estimated_roi: "Save 30+ minutes/day on manual attendance",
        },
    ],
};
