//! Case-study narrative, quotes and outcome figures.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quote {
    pub author: &'static str,
    pub role: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub label: &'static str,
    pub before: &'static str,
    pub after: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaseStudy {
    pub title: &'static str,
    pub lender: &'static str,
    pub summary: &'static str,
    pub outcomes: &'static [Outcome],
    pub quotes: &'static [Quote],
}

pub const REGIONAL_AUTO_LENDER: CaseStudy = CaseStudy {
    title: "Scoring the applicants bureaus cannot see",
    lender: "A European auto lender with 40,000 monthly applications",
    summary: "A 90-day shadow pilot compared LumiqAI's score with the lender's bureau scorecard on every auto-loan application, then switched to live decisions for thin-file applicants.",
    outcomes: &[
        Outcome { label: "Approval rate", before: "41%", after: "52%" },
        Outcome { label: "90-day default rate", before: "3.9%", after: "3.2%" },
        Outcome { label: "Manual review queue", before: "2,300 / month", after: "820 / month" },
        Outcome { label: "Time to decision", before: "26 hours", after: "under 1 minute" },
    ],
    quotes: &[
        Quote {
            author: "Head of Retail Credit Risk",
            role: "Pilot sponsor",
            text: "The shadow period let us prove the lift on our own book before a single live decision changed.",
        },
        Quote {
            author: "Model Risk Lead",
            role: "Validation",
            text: "Reason codes came out of the box, which made the validation review the shortest we have run.",
        },
    ],
};
