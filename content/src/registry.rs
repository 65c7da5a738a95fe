//! Read-only registry mapping content keys to their records.
//!
//! DESIGN
//! ======
//! The registry is built once by the app shell and injected into pages. Every
//! keyed lookup is a `match` over a closed enum, so a missing dataset is a
//! compile error rather than an empty section at runtime.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use crate::case_study::{CaseStudy, REGIONAL_AUTO_LENDER};
use crate::competitors::{COMPETITORS, Competitor};
use crate::faq::{FaqEntry, FaqTopic, GENERAL_FAQ, INTEGRATION_FAQ, PILOT_FAQ, SECURITY_FAQ};
use crate::funnel::{AUTO_FUNNEL, CARD_FUNNEL, FunnelDataset, FunnelVertical, SMB_FUNNEL};
use crate::metrics::{HERO_METRICS, IMPACT_METRICS, MetricDatum, MetricSet, PILOT_METRICS, SECURITY_METRICS};
use crate::process::{PROCESS_STEPS, ProcessStep};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MetricSets {
    pub hero: &'static [MetricDatum],
    pub impact: &'static [MetricDatum],
    pub pilot: &'static [MetricDatum],
    pub security: &'static [MetricDatum],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Funnels {
    pub auto: FunnelDataset,
    pub card: FunnelDataset,
    pub smb: FunnelDataset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqSets {
    pub general: &'static [FaqEntry],
    pub integration: &'static [FaqEntry],
    pub security: &'static [FaqEntry],
    pub pilot: &'static [FaqEntry],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentRegistry {
    pub metrics: MetricSets,
    pub funnels: Funnels,
    pub faqs: FaqSets,
    pub competitors: &'static [Competitor],
    pub case_study: CaseStudy,
    pub process: &'static [ProcessStep],
}

impl Default for ContentRegistry {
    fn default() -> Self {
        Self::lumiq()
    }
}

impl ContentRegistry {
    /// The authored site content.
    #[must_use]
    pub const fn lumiq() -> Self {
        Self {
            metrics: MetricSets {
                hero: HERO_METRICS,
                impact: IMPACT_METRICS,
                pilot: PILOT_METRICS,
                security: SECURITY_METRICS,
            },
            funnels: Funnels { auto: AUTO_FUNNEL, card: CARD_FUNNEL, smb: SMB_FUNNEL },
            faqs: FaqSets {
                general: GENERAL_FAQ,
                integration: INTEGRATION_FAQ,
                security: SECURITY_FAQ,
                pilot: PILOT_FAQ,
            },
            competitors: COMPETITORS,
            case_study: REGIONAL_AUTO_LENDER,
            process: PROCESS_STEPS,
        }
    }

    #[must_use]
    pub fn metrics(&self, set: MetricSet) -> &'static [MetricDatum] {
        match set {
            MetricSet::Hero => self.metrics.hero,
            MetricSet::Impact => self.metrics.impact,
            MetricSet::Pilot => self.metrics.pilot,
            MetricSet::Security => self.metrics.security,
        }
    }

    #[must_use]
    pub fn funnel(&self, vertical: FunnelVertical) -> &FunnelDataset {
        match vertical {
            FunnelVertical::Auto => &self.funnels.auto,
            FunnelVertical::Card => &self.funnels.card,
            FunnelVertical::Smb => &self.funnels.smb,
        }
    }

    #[must_use]
    pub fn faq(&self, topic: FaqTopic) -> &'static [FaqEntry] {
        match topic {
            FaqTopic::General => self.faqs.general,
            FaqTopic::Integration => self.faqs.integration,
            FaqTopic::Security => self.faqs.security,
            FaqTopic::Pilot => self.faqs.pilot,
        }
    }

    #[must_use]
    pub fn competitor(&self, id: &str) -> Option<&'static Competitor> {
        self.competitors.iter().find(|c| c.id == id)
    }
}
