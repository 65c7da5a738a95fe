//! Headline figures rendered by count-up counters.

#[cfg(test)]
#[path = "metrics_test.rs"]
mod metrics_test;

/// Color token applied to a metric tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetricColor {
    Brand,
    Accent,
    Success,
    Neutral,
}

impl MetricColor {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Brand => "metric--brand",
            Self::Accent => "metric--accent",
            Self::Success => "metric--success",
            Self::Neutral => "metric--neutral",
        }
    }
}

/// One animated statistic. `target` is the value the counter settles on;
/// `decimals`, `prefix` and `suffix` only affect display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MetricDatum {
    pub label: &'static str,
    pub target: f64,
    pub decimals: u8,
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub color: MetricColor,
}

/// Named groups of metrics shown together on a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MetricSet {
    Hero,
    Impact,
    Pilot,
    Security,
}

impl MetricSet {
    pub const ALL: [Self; 4] = [Self::Hero, Self::Impact, Self::Pilot, Self::Security];
}

pub const HERO_METRICS: &[MetricDatum] = &[
    MetricDatum {
        label: "More approvals at equal risk",
        target: 27.0,
        decimals: 0,
        prefix: "+",
        suffix: "%",
        color: MetricColor::Brand,
    },
    MetricDatum {
        label: "Lower default rate",
        target: 18.0,
        decimals: 0,
        prefix: "-",
        suffix: "%",
        color: MetricColor::Success,
    },
    MetricDatum {
        label: "Median decision time",
        target: 0.8,
        decimals: 1,
        prefix: "",
        suffix: "s",
        color: MetricColor::Accent,
    },
    MetricDatum {
        label: "Alternative data signals",
        target: 1200.0,
        decimals: 0,
        prefix: "",
        suffix: "+",
        color: MetricColor::Neutral,
    },
];

pub const IMPACT_METRICS: &[MetricDatum] = &[
    MetricDatum {
        label: "Projected annual revenue uplift",
        target: 48.5,
        decimals: 1,
        prefix: "€",
        suffix: "M",
        color: MetricColor::Brand,
    },
    MetricDatum {
        label: "Thin-file applicants now scoreable",
        target: 2.3,
        decimals: 1,
        prefix: "",
        suffix: "M",
        color: MetricColor::Accent,
    },
    MetricDatum {
        label: "Manual reviews avoided",
        target: 64.0,
        decimals: 0,
        prefix: "",
        suffix: "%",
        color: MetricColor::Success,
    },
    MetricDatum {
        label: "Payback period",
        target: 6.0,
        decimals: 0,
        prefix: "",
        suffix: " months",
        color: MetricColor::Neutral,
    },
];

pub const PILOT_METRICS: &[MetricDatum] = &[
    MetricDatum {
        label: "Pilot length",
        target: 90.0,
        decimals: 0,
        prefix: "",
        suffix: " days",
        color: MetricColor::Brand,
    },
    MetricDatum {
        label: "Integration effort",
        target: 4.0,
        decimals: 0,
        prefix: "",
        suffix: " weeks",
        color: MetricColor::Accent,
    },
    MetricDatum {
        label: "Historical loans back-tested",
        target: 250_000.0,
        decimals: 0,
        prefix: "",
        suffix: "",
        color: MetricColor::Neutral,
    },
];

pub const SECURITY_METRICS: &[MetricDatum] = &[
    MetricDatum {
        label: "Uptime commitment",
        target: 99.95,
        decimals: 2,
        prefix: "",
        suffix: "%",
        color: MetricColor::Success,
    },
    MetricDatum {
        label: "AES key length",
        target: 256.0,
        decimals: 0,
        prefix: "",
        suffix: "-bit",
        color: MetricColor::Brand,
    },
    MetricDatum {
        label: "Audit log retention",
        target: 7.0,
        decimals: 0,
        prefix: "",
        suffix: " years",
        color: MetricColor::Neutral,
    },
];
