//! Site route table shared by the client router and the static host.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SiteRoute {
    Home,
    Landing,
    Solutions,
    Features,
    HowItWorks,
    Security,
    CaseStudy,
    Pilot,
    Contact,
}

impl SiteRoute {
    pub const ALL: [Self; 9] = [
        Self::Home,
        Self::Landing,
        Self::Solutions,
        Self::Features,
        Self::HowItWorks,
        Self::Security,
        Self::CaseStudy,
        Self::Pilot,
        Self::Contact,
    ];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Landing => "/landing",
            Self::Solutions => "/solutions",
            Self::Features => "/features",
            Self::HowItWorks => "/how-it-works",
            Self::Security => "/security",
            Self::CaseStudy => "/case-study",
            Self::Pilot => "/pilot",
            Self::Contact => "/contact",
        }
    }

    /// Path segment without the leading slash; empty for the home page.
    #[must_use]
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Home | Self::Landing => "LumiqAI × Santander",
            Self::Solutions => "Solutions",
            Self::Features => "Features",
            Self::HowItWorks => "How it works",
            Self::Security => "Security",
            Self::CaseStudy => "Case study",
            Self::Pilot => "Apply for the pilot",
            Self::Contact => "Contact",
        }
    }

    /// Whether the route appears in the header navigation.
    #[must_use]
    pub fn in_nav(self) -> bool {
        !matches!(self, Self::Home | Self::Landing)
    }

    /// Resolve a request path, ignoring a single trailing slash and any query.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let normalized = if path.len() > 1 { path.trim_end_matches('/') } else { path };
        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }
}
