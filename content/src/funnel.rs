//! Per-vertical lending funnels for the tabbed funnel visualization.
//!
//! DESIGN
//! ======
//! Stages store the share of monthly applications that reach them. Counts,
//! stage-to-stage losses and the recovery projection are all derived from
//! those shares, so the figures shown on screen cannot drift from each other.

#[cfg(test)]
#[path = "funnel_test.rs"]
mod funnel_test;

use std::fmt;
use std::str::FromStr;

/// Lending vertical selecting one funnel dataset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FunnelVertical {
    #[default]
    Auto,
    Card,
    Smb,
}

impl FunnelVertical {
    pub const ALL: [Self; 3] = [Self::Auto, Self::Card, Self::Smb];

    /// Stable lowercase key used in DOM ids and `<select>` values.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Card => "card",
            Self::Smb => "smb",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Auto => "Auto loans",
            Self::Card => "Credit cards",
            Self::Smb => "SMB lending",
        }
    }
}

impl fmt::Display for FunnelVertical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown funnel vertical: {0}")]
pub struct UnknownVertical(pub String);

impl FromStr for FunnelVertical {
    type Err = UnknownVertical;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.key() == raw.trim())
            .ok_or_else(|| UnknownVertical(raw.to_owned()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FunnelStage {
    pub name: &'static str,
    /// Percentage of monthly applications that reach this stage.
    pub share_pct: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FunnelDataset {
    pub vertical: FunnelVertical,
    pub monthly_applications: u32,
    pub stages: &'static [FunnelStage],
    /// Share of lost applicants LumiqAI's alternative-data scoring can bring back.
    pub recoverable_pct: f64,
    pub avg_ticket_eur: u32,
}

/// Applicants lost between two consecutive stages.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StageLoss {
    pub from: &'static str,
    pub to: &'static str,
    pub lost: u32,
    pub lost_pct: f64,
}

impl FunnelDataset {
    /// Applicant count reaching stage `index`, or `None` past the last stage.
    #[must_use]
    pub fn stage_count(&self, index: usize) -> Option<u32> {
        let stage = self.stages.get(index)?;
        Some(share_of(self.monthly_applications, stage.share_pct))
    }

    #[must_use]
    pub fn losses(&self) -> Vec<StageLoss> {
        self.stages
            .windows(2)
            .enumerate()
            .map(|(i, pair)| {
                let before = self.stage_count(i).unwrap_or(0);
                let after = self.stage_count(i + 1).unwrap_or(0);
                StageLoss {
                    from: pair[0].name,
                    to: pair[1].name,
                    lost: before.saturating_sub(after),
                    lost_pct: pair[0].share_pct - pair[1].share_pct,
                }
            })
            .collect()
    }

    /// Applications that never reach the final stage.
    #[must_use]
    pub fn total_lost(&self) -> u32 {
        let last = self.stages.len().saturating_sub(1);
        let converted = self.stage_count(last).unwrap_or(0);
        self.monthly_applications.saturating_sub(converted)
    }

    #[must_use]
    pub fn recovered_applicants(&self) -> u32 {
        share_of(self.total_lost(), self.recoverable_pct)
    }

    #[must_use]
    pub fn recovered_volume_eur(&self) -> u64 {
        u64::from(self.recovered_applicants()) * u64::from(self.avg_ticket_eur)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn share_of(total: u32, pct: f64) -> u32 {
    (f64::from(total) * pct.clamp(0.0, 100.0) / 100.0).round() as u32
}

pub const AUTO_FUNNEL: FunnelDataset = FunnelDataset {
    vertical: FunnelVertical::Auto,
    monthly_applications: 48_000,
    stages: &[
        FunnelStage { name: "Applications", share_pct: 100.0 },
        FunnelStage { name: "Pre-qualified", share_pct: 72.0 },
        FunnelStage { name: "Bureau scored", share_pct: 58.0 },
        FunnelStage { name: "Approved", share_pct: 41.0 },
        FunnelStage { name: "Funded", share_pct: 33.0 },
    ],
    recoverable_pct: 22.0,
    avg_ticket_eur: 18_500,
};

pub const CARD_FUNNEL: FunnelDataset = FunnelDataset {
    vertical: FunnelVertical::Card,
    monthly_applications: 120_000,
    stages: &[
        FunnelStage { name: "Applications", share_pct: 100.0 },
        FunnelStage { name: "Identity verified", share_pct: 81.0 },
        FunnelStage { name: "Scored", share_pct: 69.0 },
        FunnelStage { name: "Approved", share_pct: 38.0 },
        FunnelStage { name: "Activated", share_pct: 29.0 },
    ],
    recoverable_pct: 31.0,
    avg_ticket_eur: 2_400,
};

pub const SMB_FUNNEL: FunnelDataset = FunnelDataset {
    vertical: FunnelVertical::Smb,
    monthly_applications: 9_500,
    stages: &[
        FunnelStage { name: "Applications", share_pct: 100.0 },
        FunnelStage { name: "Documents complete", share_pct: 64.0 },
        FunnelStage { name: "Underwritten", share_pct: 47.0 },
        FunnelStage { name: "Approved", share_pct: 26.0 },
        FunnelStage { name: "Disbursed", share_pct: 21.0 },
    ],
    recoverable_pct: 35.0,
    avg_ticket_eur: 62_000,
};
