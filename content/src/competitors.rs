//! Competitor comparison records.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Competitor {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub summary: &'static str,
    pub strengths: &'static [&'static str],
    pub gaps: &'static [&'static str],
    pub lumiq_edge: &'static str,
}

pub const COMPETITORS: &[Competitor] = &[
    Competitor {
        id: "bureau-scorecards",
        name: "Bureau scorecards",
        category: "Traditional credit scoring",
        summary: "Generic scores built on repayment history reported to credit bureaus.",
        strengths: &["Regulator familiarity", "Broad coverage of established borrowers"],
        gaps: &[
            "Blind to thin-file and new-to-country applicants",
            "Monthly refresh cycle misses recent behaviour",
            "One model for every product and region",
        ],
        lumiq_edge: "Scores thin-file applicants from cash-flow and alternative data, refreshed per decision.",
    },
    Competitor {
        id: "rules-engines",
        name: "Rule-based decision engines",
        category: "Policy automation",
        summary: "Hand-tuned cut-offs and knock-out rules maintained by risk teams.",
        strengths: &["Fully transparent decisions", "Easy to audit"],
        gaps: &[
            "Rules go stale as portfolios shift",
            "Every change is a manual release",
            "Cannot weigh hundreds of weak signals together",
        ],
        lumiq_edge: "Keeps your policy rules and adds a learned score with per-factor explanations.",
    },
    Competitor {
        id: "generic-ml",
        name: "Generic ML vendors",
        category: "Horizontal machine learning platforms",
        summary: "General-purpose modelling platforms adapted to credit after the fact.",
        strengths: &["Flexible modelling toolkits", "Strong data-science tooling"],
        gaps: &[
            "No lending-specific features or monitoring out of the box",
            "Explainability left to the customer",
            "Long integration projects",
        ],
        lumiq_edge: "Ships credit-specific features, adverse-action reasons and drift monitoring on day one.",
    },
    Competitor {
        id: "in-house",
        name: "In-house model teams",
        category: "Internal build",
        summary: "Models developed and maintained by the bank's own analytics teams.",
        strengths: &["Deep institutional knowledge", "Full control of the stack"],
        gaps: &[
            "Twelve to eighteen months to production",
            "Scarce specialist hiring",
            "Alternative data sourcing handled ad hoc",
        ],
        lumiq_edge: "Runs alongside internal teams as a challenger model inside a 90-day pilot.",
    },
];
