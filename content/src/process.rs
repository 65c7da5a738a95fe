//! "How it works" steps.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProcessStep {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub detail: &'static str,
}

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        id: "connect",
        title: "Connect",
        summary: "One REST call from your decision engine.",
        detail: "Send the application payload you already assemble today. Consented open-banking and alternative data sources are fetched by LumiqAI.",
    },
    ProcessStep {
        id: "enrich",
        title: "Enrich",
        summary: "Over 1,200 signals derived per applicant.",
        detail: "Cash-flow stability, income regularity, obligations and behavioural signals are derived and checked for quality before scoring.",
    },
    ProcessStep {
        id: "score",
        title: "Score",
        summary: "An explainable score in under a second.",
        detail: "Product-specific models return a probability of default with ranked reason codes for every decision.",
    },
    ProcessStep {
        id: "decide",
        title: "Decide",
        summary: "Your policy, your final call.",
        detail: "The score feeds your existing policy rules. Drift and fairness monitoring run continuously in the background.",
    },
];
