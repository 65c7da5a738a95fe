//! Frequently asked questions grouped by topic.

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FaqTopic {
    General,
    Integration,
    Security,
    Pilot,
}

impl FaqTopic {
    pub const ALL: [Self; 4] = [Self::General, Self::Integration, Self::Security, Self::Pilot];

    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::General => "About LumiqAI",
            Self::Integration => "Integration",
            Self::Security => "Security & compliance",
            Self::Pilot => "The pilot",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

pub const GENERAL_FAQ: &[FaqEntry] = &[
    FaqEntry {
        id: "what-is-lumiq",
        question: "What does LumiqAI do?",
        answer: "LumiqAI produces an explainable credit score from cash-flow, transaction and alternative data, so lenders can approve more good applicants without taking on more risk.",
    },
    FaqEntry {
        id: "replace-bureau",
        question: "Does LumiqAI replace bureau data?",
        answer: "No. The score runs alongside bureau data and your existing policy rules. It adds signal where bureau files are thin or stale.",
    },
    FaqEntry {
        id: "which-products",
        question: "Which lending products are supported?",
        answer: "Auto loans, credit cards and small-business lending are supported today, each with its own model and monitoring.",
    },
];

pub const INTEGRATION_FAQ: &[FaqEntry] = &[
    FaqEntry {
        id: "integration-effort",
        question: "How long does integration take?",
        answer: "A typical integration takes four weeks: one REST endpoint in your decision flow plus a historical data export for back-testing.",
    },
    FaqEntry {
        id: "decision-latency",
        question: "Will it slow down decisions?",
        answer: "Median scoring latency is under one second, well inside instant-decision budgets.",
    },
];

pub const SECURITY_FAQ: &[FaqEntry] = &[
    FaqEntry {
        id: "data-residency",
        question: "Where is applicant data processed?",
        answer: "All processing happens in EU data centres. Data never leaves the region agreed in the data processing agreement.",
    },
    FaqEntry {
        id: "explainability",
        question: "Can decisions be explained to regulators?",
        answer: "Every score ships with ranked reason codes suitable for adverse-action notices and model risk reviews.",
    },
    FaqEntry {
        id: "encryption",
        question: "How is data protected?",
        answer: "Data is encrypted in transit with TLS 1.3 and at rest with AES-256. Access is role-based and every read is audit logged.",
    },
];

pub const PILOT_FAQ: &[FaqEntry] = &[
    FaqEntry {
        id: "pilot-cost",
        question: "What does the pilot cost?",
        answer: "The 90-day pilot is run at no licence cost. You only commit once the back-test and live shadow results are in.",
    },
    FaqEntry {
        id: "pilot-shadow",
        question: "Does the pilot affect live customers?",
        answer: "No. During the pilot LumiqAI scores in shadow mode alongside your current process and never changes a live decision.",
    },
];
